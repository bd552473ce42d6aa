//! Demo binary: replays a recorded scenario (questionnaire answers
//! plus stroke samples) through the full assessment pipeline and
//! prints the events as they arrive.
//!
//! Usage: `cogniscreen <scenario.json> [--export <dir>]`
//!
//! The history lives under `COGNISCREEN_DATA_DIR` (default
//! `./cogniscreen-data`). Set `COGNISCREEN_FAST=1` to collapse the
//! cosmetic animation delays.

use std::{io::Write, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use log::info;
use serde::Deserialize;
use tokio::sync::mpsc;

use cogniscreen::{
    AssessmentController, AssessmentEvent, HistoryStore, QuestionnaireResponse, StrokeRecorder,
    StrokeSample,
};

#[derive(Debug, Deserialize)]
struct Scenario {
    answers: Vec<u8>,
    #[serde(default)]
    stroke: Vec<StrokeSample>,
}

fn load_scenario(path: &str) -> Result<Scenario> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file {path}"))?;
    serde_json::from_str(&contents).with_context(|| format!("malformed scenario file {path}"))
}

fn replay_stroke(samples: &[StrokeSample]) -> StrokeRecorder {
    let mut recorder = StrokeRecorder::new();
    let mut samples = samples.iter();
    if let Some(first) = samples.next() {
        recorder.begin(first.x, first.y, first.timestamp_ms);
        for sample in samples {
            recorder.extend(sample.x, sample.y, sample.timestamp_ms);
        }
        recorder.end();
    }
    recorder
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let scenario_path = args
        .next()
        .ok_or_else(|| anyhow!("usage: cogniscreen <scenario.json> [--export <dir>]"))?;
    let export_dir = match args.next().as_deref() {
        Some("--export") => Some(PathBuf::from(
            args.next()
                .ok_or_else(|| anyhow!("--export needs a directory"))?,
        )),
        Some(other) => return Err(anyhow!("unexpected argument {other}")),
        None => None,
    };

    let scenario = load_scenario(&scenario_path)?;

    let mut questionnaire = QuestionnaireResponse::new();
    for (idx, answer) in scenario.answers.iter().enumerate() {
        questionnaire.set_answer(idx + 1, *answer)?;
    }
    let stroke = replay_stroke(&scenario.stroke);

    let data_dir =
        std::env::var("COGNISCREEN_DATA_DIR").unwrap_or_else(|_| "./cogniscreen-data".into());
    let history = HistoryStore::new(data_dir)?;
    if history.seed_if_empty()? {
        info!("First run: seeded demo history");
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let controller = AssessmentController::new(history, event_tx);

    let record = controller.run_assessment(&questionnaire, &stroke).await?;
    info!("Result persisted at {}", record.timestamp.to_rfc3339());

    while let Some(event) = event_rx.recv().await {
        match event {
            AssessmentEvent::Progress { percent } => {
                print!("\ranalyzing... {percent:>5.1}%");
                let _ = std::io::stdout().flush();
            }
            AssessmentEvent::DisplayValue { value } => {
                print!("\rrisk: {:>3}%", value.round() as u8);
                let _ = std::io::stdout().flush();
            }
            AssessmentEvent::Completed { record } => {
                println!(
                    "\nresult: {}% ({})\n{}",
                    record.percentage,
                    record.level.as_str(),
                    record.level.description()
                );
                break;
            }
        }
    }

    let history = controller.history();
    println!("history now holds {} records", history.load().len());

    if let Some(dir) = export_dir {
        let exported = history.export_to(&dir)?;
        println!("exported history to {}", exported.display());
    }

    Ok(())
}
