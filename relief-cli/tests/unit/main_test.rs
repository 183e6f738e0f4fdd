use super::*;

#[test]
fn can_require_subcommand() {
    assert!(get_app().try_get_matches_from(vec!["relief-cli"]).is_err());
}

#[test]
fn can_run_algorithms_subcommand() {
    let matches = get_app().try_get_matches_from(vec!["relief-cli", "algorithms"]).expect("cannot parse args");

    assert!(matches!(matches.subcommand(), Some(("algorithms", _))));
}

#[test]
fn can_reject_missing_config_file() {
    let args = vec!["relief-cli", "optimize", "tests/data/route.request.json", "--config", "tests/data/absent.json"];
    let matches = get_app().try_get_matches_from(args).expect("cannot parse args");

    let result = run_subcommand(matches);

    assert!(result.err().is_some_and(|err| err.starts_with("cannot open config file")));
}
