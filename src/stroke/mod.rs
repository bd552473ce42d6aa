pub mod recorder;

pub use recorder::{StrokeRecorder, StrokeSample, MIN_ANALYSIS_POINTS};
