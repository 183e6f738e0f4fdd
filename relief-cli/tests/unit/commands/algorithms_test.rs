use super::*;
use relief_pragmatic::format::algorithms::AlgorithmInfo;
use tempfile::TempDir;

#[test]
fn can_write_algorithms() {
    let dir = TempDir::new().expect("cannot create temp dir");
    let out_path = dir.path().join("algorithms.json").to_string_lossy().to_string();
    let matches = get_algorithms_app().try_get_matches_from(vec!["algorithms", "-o", &out_path]).expect("cannot parse");

    run_algorithms(&matches, create_write_buffer).expect("cannot write algorithms");

    let algorithms: Vec<AlgorithmInfo> =
        serde_json::from_reader(BufReader::new(File::open(&out_path).expect("cannot open result")))
            .expect("cannot read algorithms");
    assert_eq!(algorithms.iter().filter(|algorithm| algorithm.default).count(), 1);
    assert_eq!(algorithms.len(), list_algorithms().len());
}
