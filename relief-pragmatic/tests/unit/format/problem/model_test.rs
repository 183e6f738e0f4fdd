use super::*;
use crate::helpers::{create_closure, create_route_request, to_json_string};

fn deserialize(json: &str) -> Result<RouteRequest, MultiFormatError> {
    deserialize_route_request(BufReader::new(json.as_bytes()))
}

#[test]
fn can_deserialize_minimal_request_with_default_flags() {
    let request = deserialize(r#"{"origin": {"lat": 1.0, "lng": 2.0}, "destinations": [{"lat": 3.0, "lng": 4.0}]}"#)
        .expect("cannot deserialize");

    assert_eq!(request.origin, Location::new(1., 2.));
    assert_eq!(request.destinations, vec![Location::new(3., 4.)]);
    assert!(request.avoid_closures);
    assert!(request.optimize_for_weather);
    assert!(request.closures.is_none());
    assert!(request.weather.is_none());
}

parameterized_test! {can_deserialize_flags, (json, expected), {
    let request = deserialize(json).expect("cannot deserialize");

    assert_eq!((request.avoid_closures, request.optimize_for_weather), expected);
}}

can_deserialize_flags! {
    case01_camel_case: (
        r#"{"origin":{"lat":0,"lng":0},"destinations":[],"avoidClosures":false,"optimizeForWeather":true}"#,
        (false, true)
    ),
    case02_snake_case: (
        r#"{"origin":{"lat":0,"lng":0},"destinations":[],"avoid_closures":true,"optimize_for_weather":false}"#,
        (true, false)
    ),
    case03_mixed: (r#"{"origin":{"lat":0,"lng":0},"destinations":[],"avoid_closures":false}"#, (false, true)),
}

#[test]
fn can_deserialize_closures_and_weather() {
    let json = r#"{
      "origin": {"lat": 0, "lng": 0},
      "destinations": [{"lat": 0, "lng": 1}],
      "closures": [{
        "id": 7, "severity": 5, "coordinates": [{"lat": 0, "lng": 1}],
        "startTime": "2024-01-01T00:00:00Z", "closureType": "flood", "description": "bridge is under water"
      }],
      "weather": {"visibility": 800, "windSpeed": 12.5}
    }"#;

    let request = deserialize(json).expect("cannot deserialize");

    let closures = request.closures.expect("no closures");
    assert_eq!(closures.len(), 1);
    assert_eq!(closures[0].id, 7);
    assert_eq!(closures[0].end_time, None);
    assert_eq!(closures[0].closure_type.as_deref(), Some("flood"));

    let weather = WeatherSnapshot::from(&request.weather.expect("no weather"));
    assert_eq!(weather, WeatherSnapshot { visibility: 800., wind_speed: 12.5, precipitation: 0., temperature: 20. });
}

#[test]
fn can_serialize_request_in_camel_case() {
    let mut request = create_route_request((0., 0.), &[(1., 1.)]);
    request.closures = Some(vec![create_closure(1, &[(1., 1.)], "2024-01-01T00:00:00Z", None)]);

    let json = to_json_string(&request);

    assert!(json.contains("\"avoidClosures\":false"));
    assert!(json.contains("\"startTime\""));
    assert!(!json.contains("endTime"));
    assert!(!json.contains("weather"));
    assert_eq!(deserialize(&json).expect("cannot deserialize"), request);
}

parameterized_test! {can_report_deserialization_error, (json, expected_code), {
    let result = match expected_code {
        "E0000" => deserialize(json).map(|_| ()),
        _ => deserialize_closures(BufReader::new(json.as_bytes())).map(|_| ()),
    };

    assert_eq!(
        result.err().map(|err| err.codes().iter().map(|code| code.to_string()).collect::<Vec<_>>()),
        Some(vec![expected_code.to_string()])
    );
}}

can_report_deserialization_error! {
    case01_broken_request: ("{ origin", "E0000"),
    case02_missing_origin: (r#"{"destinations": []}"#, "E0000"),
    case03_broken_closures: (r#"[{"id": 1}]"#, "E0001"),
}
