//! Timing for the cosmetic result animations. None of this affects
//! the computed result, which is final before any animation starts.

use std::time::Duration;

/// Durations for the simulated progress ramp and the percentage
/// tween. Defaults match the original page: a 5 s progress bar
/// updated every 50 ms, a short settle pause, then a 1 s count-up at
/// roughly frame rate.
#[derive(Debug, Clone, Copy)]
pub struct AnimationTimings {
    pub progress_duration: Duration,
    pub progress_tick: Duration,
    pub settle_delay: Duration,
    pub tween_duration: Duration,
    pub tween_frame: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            progress_duration: Duration::from_millis(5000),
            progress_tick: Duration::from_millis(50),
            settle_delay: Duration::from_millis(200),
            tween_duration: Duration::from_millis(1000),
            tween_frame: Duration::from_millis(16),
        }
    }
}

impl AnimationTimings {
    /// Collapsed timings for development and tests.
    pub fn fast() -> Self {
        Self {
            progress_duration: Duration::from_millis(10),
            progress_tick: Duration::from_millis(1),
            settle_delay: Duration::from_millis(1),
            tween_duration: Duration::from_millis(5),
            tween_frame: Duration::from_millis(1),
        }
    }

    /// Progress added per tick so the ramp reaches 100 over the
    /// configured duration.
    pub fn progress_increment(&self) -> f64 {
        let ticks = self.progress_duration.as_millis() as f64
            / self.progress_tick.as_millis().max(1) as f64;
        100.0 / ticks.max(1.0)
    }
}

/// Easing for the displayed percentage count-up.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
