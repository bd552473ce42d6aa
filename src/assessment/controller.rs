use std::{sync::Arc, time::Instant};

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use serde::Serialize;
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
    time,
};

use crate::analysis::ScoringConfig;
use crate::assessment::animation::{ease_out_cubic, AnimationTimings};
use crate::assessment::evaluate;
use crate::history::HistoryStore;
use crate::models::{QuestionnaireResponse, ResultRecord};
use crate::stroke::StrokeRecorder;

/// Everything the presentation layer hears from an assessment run.
/// Progress and display values are cosmetic; the result they lead up
/// to was computed and persisted before the first event fired.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "event")]
pub enum AssessmentEvent {
    Progress { percent: f64 },
    DisplayValue { value: f64 },
    Completed { record: ResultRecord },
}

/// Runs assessments: validates inputs, scores them synchronously,
/// appends the result to the history, then plays the progress ramp
/// and percentage tween as events on the channel. Starting a new run
/// (or resetting) supersedes a still-playing animation.
pub struct AssessmentController {
    history: HistoryStore,
    config: ScoringConfig,
    events: mpsc::UnboundedSender<AssessmentEvent>,
    animator: Arc<Mutex<Option<JoinHandle<()>>>>,
    timings: AnimationTimings,
}

impl AssessmentController {
    pub fn new(history: HistoryStore, events: mpsc::UnboundedSender<AssessmentEvent>) -> Self {
        let fast_mode = std::env::var("COGNISCREEN_FAST")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self::with_timings(
            history,
            events,
            if fast_mode {
                AnimationTimings::fast()
            } else {
                AnimationTimings::default()
            },
        )
    }

    pub fn with_timings(
        history: HistoryStore,
        events: mpsc::UnboundedSender<AssessmentEvent>,
        timings: AnimationTimings,
    ) -> Self {
        Self {
            history,
            config: ScoringConfig::default(),
            events,
            animator: Arc::new(Mutex::new(None)),
            timings,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Validate, score, persist, then start the animations. Returns
    /// the persisted record as soon as it is written; the events play
    /// out afterwards.
    pub async fn run_assessment(
        &self,
        questionnaire: &QuestionnaireResponse,
        stroke: &StrokeRecorder,
    ) -> Result<ResultRecord> {
        let assessment = evaluate(questionnaire, stroke, &self.config)?;

        let record = ResultRecord::new(Utc::now(), assessment.percentage);
        self.history.save(&record)?;
        info!(
            "Assessment complete: questionnaire {} -> {}%, handwriting {}%, final {}% ({})",
            assessment.questionnaire_score,
            assessment.questionnaire_risk,
            assessment.handwriting_risk,
            record.percentage,
            record.level.as_str()
        );

        self.spawn_animator(record.clone()).await;
        Ok(record)
    }

    /// Abort any in-flight animation, as when the page is reset.
    pub async fn reset(&self) {
        let mut guard = self.animator.lock().await;
        if let Some(handle) = guard.take() {
            handle.abort();
        }
    }

    async fn spawn_animator(&self, record: ResultRecord) {
        let mut guard = self.animator.lock().await;
        if let Some(handle) = guard.take() {
            // A rerun supersedes the previous animation outright.
            handle.abort();
        }

        let events = self.events.clone();
        let timings = self.timings;
        let target = f64::from(record.percentage);

        *guard = Some(tokio::spawn(async move {
            if run_animation(events, timings, target, record).await.is_err() {
                warn!("Assessment event receiver dropped mid-animation");
            }
        }));
    }
}

struct ReceiverGone;

/// Drive the progress ramp, the settle pause, the percentage tween,
/// and the completion event. Bails out quietly once nobody listens.
async fn run_animation(
    events: mpsc::UnboundedSender<AssessmentEvent>,
    timings: AnimationTimings,
    target: f64,
    record: ResultRecord,
) -> Result<(), ReceiverGone> {
    let send = |event: AssessmentEvent| events.send(event).map_err(|_| ReceiverGone);

    let increment = timings.progress_increment();
    let mut interval = time::interval(timings.progress_tick);
    let mut progress = 0.0;
    while progress < 100.0 {
        interval.tick().await;
        progress += increment;
        send(AssessmentEvent::Progress {
            percent: progress.min(100.0),
        })?;
    }

    time::sleep(timings.settle_delay).await;

    let started = Instant::now();
    loop {
        let t = (started.elapsed().as_secs_f64() / timings.tween_duration.as_secs_f64()).min(1.0);
        send(AssessmentEvent::DisplayValue {
            value: target * ease_out_cubic(t),
        })?;
        if t >= 1.0 {
            break;
        }
        time::sleep(timings.tween_frame).await;
    }

    send(AssessmentEvent::Completed { record })
}
