//! CLI-argument prediction front end.
//!
//! Single-shot: the patient record arrives as a JSON-encoded positional
//! argument and the artifact path as the second argument. The result goes
//! to standard output; errors go to standard error as a JSON object with
//! exit status 1, the same channel contract as the stdin front end.
//!
//! ```bash
//! predict_cli '{"gender":"Male","age":67,...}' models/stroke_model.json
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strokesense::adapters::LinearScorer;
use strokesense::application::PredictionService;
use strokesense::domain::Prediction;
use strokesense::StrokesenseError;

fn main() {
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
    let mut args = std::env::args().skip(1);
    let record_json = args.next().ok_or_else(|| {
        StrokesenseError::MalformedInput(
            "Usage: predict_cli <patient-json> <model-path>".to_string(),
        )
    })?;
    let model_path = args.next().ok_or_else(|| {
        StrokesenseError::MalformedInput(
            "Usage: predict_cli <patient-json> <model-path>".to_string(),
        )
    })?;

    let scorer = LinearScorer::load(Path::new(&model_path))?;
    let service = PredictionService::new(Arc::new(scorer));

    let raw: serde_json::Value = serde_json::from_str(&record_json).map_err(|e| {
        StrokesenseError::MalformedInput(format!("Invalid patient record JSON: {e}"))
    })?;

    service.predict_value(&raw)
}
