use log::debug;
use serde::{Deserialize, Serialize};

/// A stroke needs at least this many points before it can be analyzed.
pub const MIN_ANALYSIS_POINTS: usize = 3;

/// One sampled point of a freehand stroke, in drawing-surface
/// coordinates with a millisecond timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrokeSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: i64,
}

/// Accumulates one freehand stroke and incrementally derives its
/// kinematics: one speed per new interval, one acceleration once two
/// speeds exist, one jerk once two accelerations exist. For n samples
/// the derived sequences have lengths n-1, n-2 and n-3.
///
/// `begin` wholesale reinitializes the recorder; `end` only
/// deactivates it, so the samples stay available for analysis until
/// the next stroke starts.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    active: bool,
    samples: Vec<StrokeSample>,
    speeds: Vec<f64>,
    accelerations: Vec<f64>,
    jerks: Vec<f64>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke, discarding whatever the previous one left
    /// behind.
    pub fn begin(&mut self, x: f64, y: f64, timestamp_ms: i64) {
        *self = Self {
            active: true,
            samples: vec![StrokeSample { x, y, timestamp_ms }],
            speeds: Vec::new(),
            accelerations: Vec::new(),
            jerks: Vec::new(),
        };
    }

    /// Append one sample to the active stroke. Ignored while no stroke
    /// is being recorded (pointer moves with the button up).
    pub fn extend(&mut self, x: f64, y: f64, timestamp_ms: i64) {
        if !self.active {
            return;
        }

        let previous = match self.samples.last() {
            Some(sample) => *sample,
            None => return,
        };

        let sample = StrokeSample { x, y, timestamp_ms };
        self.samples.push(sample);

        // dt <= 0 (duplicate or out-of-order event timestamps) falls
        // back to zero instead of producing a non-finite ratio.
        let dt = (timestamp_ms - previous.timestamp_ms) as f64;
        let distance = (x - previous.x).hypot(y - previous.y);
        let speed = if dt > 0.0 { distance / dt } else { 0.0 };
        self.speeds.push(speed);

        if self.speeds.len() >= 2 {
            let prev_speed = self.speeds[self.speeds.len() - 2];
            let acceleration = if dt > 0.0 {
                (speed - prev_speed) / dt
            } else {
                0.0
            };
            self.accelerations.push(acceleration);

            if self.accelerations.len() >= 2 {
                let prev_acceleration = self.accelerations[self.accelerations.len() - 2];
                let jerk = if dt > 0.0 {
                    (acceleration - prev_acceleration) / dt
                } else {
                    0.0
                };
                self.jerks.push(jerk);
            }
        }

        debug!(
            "stroke sample {} at ({x:.1}, {y:.1}), dt {dt}ms",
            self.samples.len()
        );
    }

    /// Stop recording. Samples are kept for analysis until the next
    /// `begin`.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn samples(&self) -> &[StrokeSample] {
        &self.samples
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn accelerations(&self) -> &[f64] {
        &self.accelerations
    }

    pub fn jerks(&self) -> &[f64] {
        &self.jerks
    }

    /// Whether the stroke has enough points to be analyzed.
    pub fn has_minimum_samples(&self) -> bool {
        self.samples.len() >= MIN_ANALYSIS_POINTS
    }
}
