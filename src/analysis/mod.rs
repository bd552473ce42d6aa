pub mod config;
pub mod features;
pub mod scoring;

pub use config::ScoringConfig;
pub use features::{extract_indicators, HandwritingIndicators};
pub use scoring::{
    combine_percentage, handwriting_risk_percentage, kdsq_score_to_risk, RiskAssessment,
};
