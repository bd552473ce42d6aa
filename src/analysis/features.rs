//! Handwriting feature extraction.
//!
//! Reduces a recorded stroke's kinematics to five normalized [0,1]
//! indicators. Higher is steadier for `speed_consistency`,
//! `straightness` and `overall_stability`; higher is worse for
//! `acceleration_variability` and `jerk_level`.

use serde::Serialize;

use crate::stroke::{StrokeRecorder, StrokeSample};

/// Denominator guard for every ratio in this module.
pub const EPSILON: f64 = 0.001;

/// Empirical normalization scale for mean jerk. Not derived from
/// anything; must stay exactly 0.01 for output compatibility.
const JERK_SCALE: f64 = 0.01;

// Overall-stability blend
const STABILITY_WEIGHT_SPEED: f64 = 0.3;
const STABILITY_WEIGHT_STRAIGHTNESS: f64 = 0.3;
const STABILITY_WEIGHT_ACCELERATION: f64 = 0.2;
const STABILITY_WEIGHT_JERK: f64 = 0.2;

/// Five normalized indicators derived from one stroke. Never
/// persisted; recomputed on demand.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandwritingIndicators {
    pub speed_consistency: f64,
    pub straightness: f64,
    pub acceleration_variability: f64,
    pub jerk_level: f64,
    pub overall_stability: f64,
}

/// Compute all five indicators for the recorded stroke. Strokes with
/// fewer than two speed samples return the all-zero default.
pub fn extract_indicators(stroke: &StrokeRecorder) -> HandwritingIndicators {
    let speeds = stroke.speeds();
    if speeds.len() < 2 {
        return HandwritingIndicators::default();
    }

    let speed_consistency = (1.0 - std_dev(speeds) / (mean(speeds) + EPSILON)).clamp(0.0, 1.0);
    let straightness = straightness(stroke.samples());

    let accelerations = stroke.accelerations();
    let acceleration_variability = if accelerations.len() >= 2 {
        (std_dev(accelerations) / (mean(accelerations).abs() + EPSILON)).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let jerks = stroke.jerks();
    let jerk_level = if jerks.is_empty() {
        0.0
    } else {
        (mean(jerks).abs() / JERK_SCALE).clamp(0.0, 1.0)
    };

    let overall_stability = (STABILITY_WEIGHT_SPEED * speed_consistency
        + STABILITY_WEIGHT_STRAIGHTNESS * straightness
        + STABILITY_WEIGHT_ACCELERATION * (1.0 - acceleration_variability)
        + STABILITY_WEIGHT_JERK * (1.0 - jerk_level))
        .clamp(0.0, 1.0);

    HandwritingIndicators {
        speed_consistency,
        straightness,
        acceleration_variability,
        jerk_level,
        overall_stability,
    }
}

/// Deviation of the stroke from the straight chord between its first
/// and last point. The expected position of sample i is parametrized
/// linearly by index along the chord; the indicator is one minus the
/// average deviation relative to the chord length. Degenerate strokes
/// (under 3 points, or zero net displacement) score 0.
fn straightness(samples: &[StrokeSample]) -> f64 {
    if samples.len() < 3 {
        return 0.0;
    }

    let first = samples[0];
    let last = samples[samples.len() - 1];
    let chord_length = (last.x - first.x).hypot(last.y - first.y);
    if chord_length <= 0.0 {
        return 0.0;
    }

    let span = (samples.len() - 1) as f64;
    let interior = &samples[1..samples.len() - 1];
    let total_deviation: f64 = interior
        .iter()
        .enumerate()
        .map(|(idx, sample)| {
            let t = (idx + 1) as f64 / span;
            let expected_x = first.x + (last.x - first.x) * t;
            let expected_y = first.y + (last.y - first.y) * t;
            (sample.x - expected_x).hypot(sample.y - expected_y)
        })
        .sum();
    let avg_deviation = total_deviation / interior.len() as f64;

    (1.0 - avg_deviation / (chord_length + EPSILON)).clamp(0.0, 1.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
