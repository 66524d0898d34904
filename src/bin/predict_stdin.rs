//! Stdin-stream prediction front end.
//!
//! Single-shot: reads exactly one JSON patient record from standard input,
//! writes `{"strokeRisk": <float>}` to standard output and exits 0. Every
//! failure (artifact load, parse, normalization, scoring) is written as a
//! JSON error object to standard error, followed by exit status 1.
//!
//! An optional first argument selects the artifact file name, resolved
//! against the artifact directory (`STROKESENSE_MODEL_DIR`, default
//! `models/`).

use std::io::BufRead;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strokesense::adapters::LinearScorer;
use strokesense::application::PredictionService;
use strokesense::domain::Prediction;
use strokesense::StrokesenseError;

fn main() {
    // Logs go to stderr so stdout stays a single JSON line.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(prediction) => {
            println!(
                "{}",
                serde_json::json!({ "strokeRisk": prediction.stroke_risk })
            );
        }
        Err(e) => {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Prediction, StrokesenseError> {
    let model_name = std::env::args().nth(1);
    let model_path = strokesense::resolve_model_path(model_name.as_deref());

    let scorer = LinearScorer::load(&model_path)?;
    let service = PredictionService::new(Arc::new(scorer));

    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    if read == 0 || line.trim().is_empty() {
        return Err(StrokesenseError::MalformedInput(
            "No input data received from stdin.".to_string(),
        ));
    }

    let raw: serde_json::Value = serde_json::from_str(line.trim()).map_err(|e| {
        StrokesenseError::MalformedInput(format!("Invalid patient record JSON: {e}"))
    })?;

    service.predict_value(&raw)
}
