//! Assessment orchestration: input validation, the pure evaluation
//! pipeline, and the controller that persists results and drives the
//! cosmetic animations.

pub mod animation;
pub mod controller;

use std::fmt;

use crate::analysis::{
    combine_percentage, extract_indicators, handwriting_risk_percentage, kdsq_score_to_risk,
    RiskAssessment, ScoringConfig,
};
use crate::models::{QuestionnaireResponse, RiskLevel};
use crate::stroke::{StrokeRecorder, MIN_ANALYSIS_POINTS};

pub use controller::{AssessmentController, AssessmentEvent};

/// Why an assessment was rejected before any scoring ran. The Display
/// text is the prompt shown to the user pointing at the missing
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    QuestionnaireIncomplete { missing: Vec<usize> },
    StrokeTooShort { points: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::QuestionnaireIncomplete { missing } => {
                let items = missing
                    .iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Please answer the remaining questionnaire items: {items}")
            }
            ValidationError::StrokeTooShort { points } => write!(
                f,
                "Please draw on the canvas first; at least {MIN_ANALYSIS_POINTS} points are needed (got {points})"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check the preconditions: a complete questionnaire and a stroke
/// long enough to analyze. Nothing is computed or persisted when this
/// fails.
pub fn validate_inputs(
    questionnaire: &QuestionnaireResponse,
    stroke: &StrokeRecorder,
) -> Result<(), ValidationError> {
    let missing = questionnaire.missing_items();
    if !missing.is_empty() {
        return Err(ValidationError::QuestionnaireIncomplete { missing });
    }
    if !stroke.has_minimum_samples() {
        return Err(ValidationError::StrokeTooShort {
            points: stroke.samples().len(),
        });
    }
    Ok(())
}

/// Run the full scoring pipeline over validated inputs. Pure: no I/O,
/// no clock, completes instantly.
pub fn evaluate(
    questionnaire: &QuestionnaireResponse,
    stroke: &StrokeRecorder,
    config: &ScoringConfig,
) -> Result<RiskAssessment, ValidationError> {
    validate_inputs(questionnaire, stroke)?;

    let indicators = extract_indicators(stroke);
    let questionnaire_score = questionnaire.total_score();
    let questionnaire_risk = kdsq_score_to_risk(questionnaire_score);
    let handwriting_risk = handwriting_risk_percentage(stroke, &indicators, config);
    let percentage = combine_percentage(questionnaire_risk, handwriting_risk, config);

    Ok(RiskAssessment {
        questionnaire_score,
        questionnaire_risk,
        handwriting_risk,
        indicators,
        percentage,
        level: RiskLevel::from_percentage(percentage),
    })
}
