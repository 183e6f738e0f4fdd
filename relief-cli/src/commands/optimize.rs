#[cfg(test)]
#[path = "../../tests/unit/commands/optimize_test.rs"]
mod optimize_test;

use super::*;
use clap::{Arg, ArgMatches, Command};
use relief_cli::extensions::optimize::optimize_route;
use relief_cli::get_errors_serialized;
use relief_pragmatic::format::solution::PragmaticSolution;

const REQUEST_ARG_NAME: &str = "REQUEST";
const CLOSURES_ARG_NAME: &str = "closures";
const ROUTE_INDEX_ARG_NAME: &str = "route-index";

pub fn get_optimize_app() -> Command {
    Command::new("optimize")
        .about("Builds a relief delivery route from json route request")
        .arg(Arg::new(REQUEST_ARG_NAME).help("Sets the route request file to use").required(true).index(1))
        .arg(
            Arg::new(CLOSURES_ARG_NAME)
                .help("Specifies path to a json list of road closures added to request closures")
                .long(CLOSURES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ROUTE_INDEX_ARG_NAME)
                .help("Specifies route sequence number used in route id")
                .long(ROUTE_INDEX_ARG_NAME)
                .default_value("1"),
        )
        .arg(get_config_arg())
        .arg(get_out_result_arg())
}

pub fn run_optimize(matches: &ArgMatches, config: &Config, out_writer_func: OutWriterFn) -> Result<(), String> {
    let request_path = matches.get_one::<String>(REQUEST_ARG_NAME).ok_or("route request path is not set")?;
    let request = BufReader::new(open_file(request_path, "route request")?);
    let closures = matches
        .get_one::<String>(CLOSURES_ARG_NAME)
        .map(|path| open_file(path, "closures").map(BufReader::new))
        .transpose()?;
    let sequence = parse_int_value::<usize>(matches, ROUTE_INDEX_ARG_NAME, "route index")?.unwrap_or(1);

    let time = config.get_closures_time()?;
    let route = optimize_route(request, closures, &config.get_reading_options(), time)
        .map_err(|errors| get_errors_serialized(&errors))?;

    log::info!(
        "route with {} waypoints is built, distance: {:.2} km, risk: {:.3}",
        route.waypoints.len(),
        route.total_distance_km,
        route.risk_score
    );

    let writer = out_writer_func(get_out_file(matches)?);
    route.write_pragmatic_json(sequence, writer)
}
