pub mod analysis;
pub mod assessment;
pub mod history;
pub mod models;
pub mod stroke;

pub use analysis::{
    extract_indicators, kdsq_score_to_risk, HandwritingIndicators, RiskAssessment, ScoringConfig,
};
pub use assessment::{evaluate, AssessmentController, AssessmentEvent, ValidationError};
pub use history::HistoryStore;
pub use models::{QuestionnaireResponse, ResultRecord, RiskLevel};
pub use stroke::{StrokeRecorder, StrokeSample};
