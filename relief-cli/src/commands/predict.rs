#[cfg(test)]
#[path = "../../tests/unit/commands/predict_test.rs"]
mod predict_test;

use super::*;
use clap::{Arg, ArgMatches, Command};
use relief_cli::extensions::predict::{create_predictor, forecast_delays, predict_delays};
use relief_cli::get_errors_serialized;
use relief_pragmatic::now_time;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "INPUT";

pub fn get_predict_app() -> Command {
    Command::new("predict")
        .about("Estimates road delays from weather and traffic conditions")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type: raw delay features or road forecast requests")
                .required(true)
                .value_parser(["features", "forecast"])
                .index(1),
        )
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets input file to use").required(true).index(2))
        .arg(get_model_arg())
        .arg(get_config_arg())
        .arg(get_out_result_arg())
}

pub fn run_predict(matches: &ArgMatches, config: &Config, out_writer_func: OutWriterFn) -> Result<(), String> {
    let format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("input format is not set")?;
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("input path is not set")?;
    let input = BufReader::new(open_file(input_path, "input")?);

    let predictor = create_predictor(config, get_environment(config))?;
    let writer = out_writer_func(get_out_file(matches)?);

    match format.as_str() {
        "features" => {
            let delays = predict_delays(input, &predictor).map_err(|errors| get_errors_serialized(&errors))?;
            write_json(writer, &delays)
        }
        "forecast" => {
            let forecasts =
                forecast_delays(input, &predictor, now_time()).map_err(|errors| get_errors_serialized(&errors))?;
            write_json(writer, &forecasts)
        }
        _ => Err(format!("unknown format: '{format}'")),
    }
}
