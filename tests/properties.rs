//! Property tests for the numeric core: clamp invariants and ramp
//! monotonicity over arbitrary (finite) input strokes and scores.

use proptest::prelude::*;

use cogniscreen::{
    extract_indicators, kdsq_score_to_risk, HandwritingIndicators, QuestionnaireResponse,
    ScoringConfig, StrokeRecorder,
};

fn indicator_values(indicators: &HandwritingIndicators) -> [f64; 5] {
    [
        indicators.speed_consistency,
        indicators.straightness,
        indicators.acceleration_variability,
        indicators.jerk_level,
        indicators.overall_stability,
    ]
}

/// Strokes as (dx, dy, dt) deltas so timestamps stay ordered but may
/// collide (dt = 0 exercises the zero-denominator guards).
fn stroke_strategy() -> impl Strategy<Value = StrokeRecorder> {
    prop::collection::vec(
        (-500.0f64..500.0, -500.0f64..500.0, 0i64..200),
        0..40,
    )
    .prop_map(|deltas| {
        let mut recorder = StrokeRecorder::new();
        recorder.begin(300.0, 200.0, 0);
        let (mut x, mut y, mut t) = (300.0, 200.0, 0i64);
        for (dx, dy, dt) in deltas {
            x += dx;
            y += dy;
            t += dt;
            recorder.extend(x, y, t);
        }
        recorder.end();
        recorder
    })
}

proptest! {
    #[test]
    fn indicators_stay_in_unit_range(stroke in stroke_strategy()) {
        let indicators = extract_indicators(&stroke);
        for value in indicator_values(&indicators) {
            prop_assert!(value.is_finite());
            prop_assert!((0.0..=1.0).contains(&value), "indicator {value} out of range");
        }
    }

    #[test]
    fn handwriting_risk_is_a_valid_percentage(stroke in stroke_strategy()) {
        let indicators = extract_indicators(&stroke);
        let risk = cogniscreen::analysis::handwriting_risk_percentage(
            &stroke,
            &indicators,
            &ScoringConfig::default(),
        );
        prop_assert!(risk <= 100);
        if stroke.samples().len() < 3 {
            prop_assert_eq!(risk, 0);
        }
    }

    #[test]
    fn kdsq_ramp_is_monotone_nondecreasing(score in 0u32..30) {
        prop_assert!(kdsq_score_to_risk(score) <= kdsq_score_to_risk(score + 1));
    }

    #[test]
    fn final_percentage_is_bounded_for_any_answers(
        answers in prop::collection::vec(0u8..=2, 15),
        stroke in stroke_strategy(),
    ) {
        let mut questionnaire = QuestionnaireResponse::new();
        for (idx, answer) in answers.iter().enumerate() {
            questionnaire.set_answer(idx + 1, *answer).unwrap();
        }
        if stroke.samples().len() < 3 {
            return Ok(());
        }
        let assessment = cogniscreen::evaluate(
            &questionnaire,
            &stroke,
            &ScoringConfig::default(),
        ).unwrap();
        prop_assert!(assessment.percentage <= 100);
        prop_assert_eq!(
            assessment.level == cogniscreen::RiskLevel::High,
            assessment.percentage >= 50
        );
    }
}
