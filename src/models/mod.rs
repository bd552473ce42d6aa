pub mod questionnaire;
pub mod record;

pub use questionnaire::{QuestionnaireResponse, KDSQ_ITEM_COUNT, MAX_ITEM_ANSWER};
pub use record::{ResultRecord, RiskLevel};
