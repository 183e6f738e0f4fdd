use clap::{Arg, ArgMatches};
use relief_cli::extensions::config::{Config, read_config};
use relief_cli::extensions::logging::{create_environment, init_logger};
use relief_core::utils::Environment;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

pub mod algorithms;
pub mod optimize;
pub mod predict;
pub mod train;

pub(crate) const CONFIG_ARG_NAME: &str = "config";
pub(crate) const OUT_RESULT_ARG_NAME: &str = "out-result";
pub(crate) const MODEL_ARG_NAME: &str = "model";

pub(crate) type OutWriterFn = fn(Option<File>) -> BufWriter<Box<dyn Write>>;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

pub(crate) fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

pub(crate) fn get_config_arg() -> Arg {
    Arg::new(CONFIG_ARG_NAME)
        .help("Specifies path to a json config file")
        .short('c')
        .long(CONFIG_ARG_NAME)
        .required(false)
}

pub(crate) fn get_out_result_arg() -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help("Specifies path to file for result output, standard output is used by default")
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
        .required(false)
}

pub(crate) fn get_model_arg() -> Arg {
    Arg::new(MODEL_ARG_NAME)
        .help("Specifies path to delay model file, overrides config value")
        .short('m')
        .long(MODEL_ARG_NAME)
        .required(false)
}

/// Reads config from file specified by config argument or returns default one.
pub(crate) fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    let model_path = matches.try_get_one::<String>(MODEL_ARG_NAME).ok().flatten();
    if let Some(path) = model_path {
        config.model.get_or_insert_with(Default::default).path = Some(path.clone());
    }

    Ok(config)
}

pub(crate) fn init_logging(config: &Config) {
    init_logger(&config.get_logging());
}

pub(crate) fn get_environment(config: &Config) -> Environment {
    create_environment(&config.get_logging())
}

pub(crate) fn get_out_file(matches: &ArgMatches) -> Result<Option<File>, String> {
    matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()
}

pub(crate) fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

pub(crate) fn write_json<T: serde::Serialize>(
    mut writer: BufWriter<Box<dyn Write>>,
    value: &T,
) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut writer, value).map_err(|err| format!("cannot write result: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write result: '{err}'"))
}
