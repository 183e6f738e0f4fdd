#[cfg(test)]
#[path = "../../tests/unit/commands/algorithms_test.rs"]
mod algorithms_test;

use super::*;
use clap::{ArgMatches, Command};
use relief_pragmatic::format::algorithms::{list_algorithms, serialize_algorithms};

pub fn get_algorithms_app() -> Command {
    Command::new("algorithms").about("Lists known route construction algorithms").arg(get_out_result_arg())
}

pub fn run_algorithms(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<(), String> {
    let writer = out_writer_func(get_out_file(matches)?);

    serialize_algorithms(writer, list_algorithms().as_slice())
        .map_err(|err| format!("cannot write algorithms: '{err}'"))
}
