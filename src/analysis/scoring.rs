//! Risk scoring: questionnaire ramp, handwriting badness blend, and
//! the 95/5 combination into the final percentage.

use serde::Serialize;

use crate::analysis::config::ScoringConfig;
use crate::analysis::features::HandwritingIndicators;
use crate::models::RiskLevel;
use crate::stroke::StrokeRecorder;

/// KDSQ scores below this stay on the low ramp.
const KDSQ_CUTOFF: u32 = 6;
const LOW_RAMP_CEILING: f64 = 40.0;
const HIGH_RAMP_FLOOR: f64 = 50.0;
const HIGH_RAMP_SPAN: f64 = 50.0;
const OVER_CUTOFF_MAX: u32 = 24;

/// Full breakdown of one completed assessment, so the result screen
/// can show the sub-scores next to the final percentage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub questionnaire_score: u32,
    pub questionnaire_risk: u8,
    pub handwriting_risk: u8,
    pub indicators: HandwritingIndicators,
    pub percentage: u8,
    pub level: RiskLevel,
}

/// Map a raw KDSQ score (0..=30) to a risk percentage.
///
/// Two linear ramps: 0→40 over scores 0..6, then 50→100 over scores
/// 6..=30. The jump from ~40 to 50 at the cutoff is intentional and
/// must not be smoothed.
pub fn kdsq_score_to_risk(score: u32) -> u8 {
    if score < KDSQ_CUTOFF {
        (score as f64 / KDSQ_CUTOFF as f64 * LOW_RAMP_CEILING).round() as u8
    } else {
        let over = (score - KDSQ_CUTOFF).min(OVER_CUTOFF_MAX) as f64;
        let risk = HIGH_RAMP_FLOOR + (over / OVER_CUTOFF_MAX as f64 * HIGH_RAMP_SPAN).round();
        risk.min(100.0) as u8
    }
}

/// Handwriting risk percentage (0..=100). Each indicator is inverted
/// into a badness signal and blended with the configured weights.
/// Strokes too short to analyze contribute zero risk.
pub fn handwriting_risk_percentage(
    stroke: &StrokeRecorder,
    indicators: &HandwritingIndicators,
    config: &ScoringConfig,
) -> u8 {
    if !stroke.has_minimum_samples() {
        return 0;
    }

    let risk = config.weight_speed_consistency * (1.0 - indicators.speed_consistency)
        + config.weight_straightness * (1.0 - indicators.straightness)
        + config.weight_acceleration * indicators.acceleration_variability
        + config.weight_jerk * indicators.jerk_level
        + config.weight_stability * (1.0 - indicators.overall_stability);

    (risk.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Blend the two sub-scores into the final percentage. The
/// questionnaire dominates by design; the handwriting signal rarely
/// moves the Low/High bucket on its own.
pub fn combine_percentage(
    questionnaire_risk: u8,
    handwriting_risk: u8,
    config: &ScoringConfig,
) -> u8 {
    let blended = f64::from(questionnaire_risk) * config.weight_questionnaire
        + f64::from(handwriting_risk) * config.weight_handwriting;
    blended.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn kdsq_ramp_endpoints_and_cutoff() {
        assert_eq!(kdsq_score_to_risk(0), 0);
        assert_eq!(kdsq_score_to_risk(3), 20);
        assert_eq!(kdsq_score_to_risk(5), 33);
        assert_eq!(kdsq_score_to_risk(6), 50);
        assert_eq!(kdsq_score_to_risk(12), 63);
        assert_eq!(kdsq_score_to_risk(30), 100);
    }

    #[test]
    fn kdsq_ramp_is_monotone() {
        for score in 0..30u32 {
            assert!(
                kdsq_score_to_risk(score) <= kdsq_score_to_risk(score + 1),
                "risk decreased between {score} and {}",
                score + 1
            );
        }
    }

    #[test]
    fn short_stroke_scores_zero_handwriting_risk() {
        let mut stroke = StrokeRecorder::new();
        stroke.begin(0.0, 0.0, 0);
        stroke.extend(5.0, 5.0, 16);
        let indicators = crate::analysis::features::extract_indicators(&stroke);
        assert_eq!(handwriting_risk_percentage(&stroke, &indicators, &config()), 0);
    }

    #[test]
    fn steady_line_scores_zero_handwriting_risk() {
        let mut stroke = StrokeRecorder::new();
        stroke.begin(0.0, 0.0, 0);
        for i in 1..10 {
            stroke.extend(i as f64 * 12.0, 0.0, i * 20);
        }
        stroke.end();
        let indicators = crate::analysis::features::extract_indicators(&stroke);
        assert_eq!(handwriting_risk_percentage(&stroke, &indicators, &config()), 0);
    }

    #[test]
    fn combine_matches_documented_scenarios() {
        // Q=12 over the cutoff by 6: 50 + round(6/24*50) = 63, then
        // round(63*0.95) = 60 with no handwriting signal.
        assert_eq!(combine_percentage(63, 0, &config()), 60);
        // Q=3: round(3/6*40) = 20; with handwriting risk 40 the blend
        // is round(19 + 2) = 21.
        assert_eq!(combine_percentage(20, 40, &config()), 21);
    }

    #[test]
    fn combine_stays_in_percentage_range() {
        assert_eq!(combine_percentage(0, 0, &config()), 0);
        assert_eq!(combine_percentage(100, 100, &config()), 100);
    }
}
