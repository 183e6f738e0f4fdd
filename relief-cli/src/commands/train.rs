#[cfg(test)]
#[path = "../../tests/unit/commands/train_test.rs"]
mod train_test;

use super::*;
use clap::{Arg, ArgMatches, Command};
use relief_cli::extensions::predict::train_predictor;
use relief_core::prediction::JsonFileStore;
use serde::Serialize;

const SAMPLES_ARG_NAME: &str = "samples";
const SEED_ARG_NAME: &str = "seed";

/// A summary of trained model.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrainingSummary<'a> {
    model_path: String,
    trained_at: &'a str,
    bias: f64,
    weights: Vec<(&'a str, f64)>,
}

pub fn get_train_app() -> Command {
    Command::new("train")
        .about("Trains delay model on synthetic samples and saves it")
        .arg(Arg::new(SAMPLES_ARG_NAME).help("Specifies amount of training samples").long(SAMPLES_ARG_NAME))
        .arg(Arg::new(SEED_ARG_NAME).help("Specifies random seed of training data").long(SEED_ARG_NAME))
        .arg(get_model_arg())
        .arg(get_config_arg())
        .arg(get_out_result_arg())
}

pub fn run_train(matches: &ArgMatches, config: &Config, out_writer_func: OutWriterFn) -> Result<(), String> {
    let mut training = config.get_training_config();

    if let Some(samples) = parse_int_value::<usize>(matches, SAMPLES_ARG_NAME, "samples")? {
        training.samples = samples;
    }

    if let Some(seed) = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")? {
        training.seed = seed;
    }

    let model_path = config.get_model_path();
    let store = JsonFileStore::new(model_path.clone());
    let predictor = train_predictor(&store, &training, get_environment(config))?;
    let model = predictor.model().ok_or("delay model is not trained")?;

    let summary = TrainingSummary {
        model_path: model_path.display().to_string(),
        trained_at: model.trained_at.as_str(),
        bias: model.bias,
        weights: model.named_weights().collect(),
    };

    write_json(out_writer_func(get_out_file(matches)?), &summary)
}
