//! A command line interface to relief route construction and road delay estimation.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use clap::{ArgMatches, Command};
use commands::algorithms::{get_algorithms_app, run_algorithms};
use commands::optimize::{get_optimize_app, run_optimize};
use commands::predict::{get_predict_app, run_predict};
use commands::train::{get_train_app, run_train};
use commands::{create_write_buffer, get_config, init_logging};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_subcommand(matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Relief Route Optimizer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to relief route construction and road delay estimation")
        .subcommand_required(true)
        .subcommand(get_optimize_app())
        .subcommand(get_predict_app())
        .subcommand(get_train_app())
        .subcommand(get_algorithms_app())
}

fn run_subcommand(arg_matches: ArgMatches) -> Result<(), String> {
    match arg_matches.subcommand() {
        Some(("optimize", matches)) => {
            let config = get_config(matches)?;
            init_logging(&config);
            run_optimize(matches, &config, create_write_buffer)
        }
        Some(("predict", matches)) => {
            let config = get_config(matches)?;
            init_logging(&config);
            run_predict(matches, &config, create_write_buffer)
        }
        Some(("train", matches)) => {
            let config = get_config(matches)?;
            init_logging(&config);
            run_train(matches, &config, create_write_buffer)
        }
        Some(("algorithms", matches)) => run_algorithms(matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    }
}
