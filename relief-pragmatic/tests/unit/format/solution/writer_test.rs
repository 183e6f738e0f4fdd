use super::*;
use relief_core::models::common::GeoPoint;
use relief_core::models::solution::GREEDY_ALGORITHM_ID;

fn create_route() -> OptimizedRoute {
    OptimizedRoute {
        waypoints: vec![GeoPoint::new(12.34567, 1.), GeoPoint::new(0., 1.), GeoPoint::new(1., 0.)],
        total_distance_km: 268.4443079165027,
        estimated_duration_min: 536.8886158330052,
        total_penalty: -1.,
        closures_avoided_count: 1,
        weather_penalty_total: 0.123456,
        risk_score: 0.25,
        algorithm_id: GREEDY_ALGORITHM_ID.to_string(),
    }
}

#[test]
fn can_create_route_response() {
    let response = create_route_response(&create_route(), 3);

    assert_eq!(response.route_id, "route_3_12.346");
    assert_eq!(response.nodes, vec![Location::new(12.34567, 1.), Location::new(0., 1.), Location::new(1., 0.)]);
    assert_eq!(response.total_distance_km, 268.44);
    assert_eq!(response.estimated_duration_min, 536.89);
    assert_eq!(response.total_penalty, -1.);
    assert_eq!(response.closure_avoided_count, 1);
    assert_eq!(response.weather_penalty_total, 0.12);
    assert_eq!(response.risk_score, 0.25);
    assert_eq!(response.algorithm_id, "greedy_nearest_neighbor_with_penalties");
}

#[test]
fn can_create_stops_with_types() {
    let response = create_route_response(&create_route(), 1);

    assert_eq!(response.stops.len(), 3);
    assert_eq!(response.stops.iter().map(|stop| stop.stop_id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(response.stops[0].stop_type, StopType::Origin);
    assert!(response.stops[1..].iter().all(|stop| stop.stop_type == StopType::Pickup));
    assert_eq!(response.stops[2].coordinates, Location::new(1., 0.));
}

#[test]
fn can_create_response_for_trivial_route() {
    let route = OptimizedRoute::new_trivial(GeoPoint::new(-33.8688, 151.2093), 0.15);

    let response = create_route_response(&route, 1);

    assert_eq!(response.route_id, "route_1_-33.869");
    assert_eq!(response.stops.len(), 1);
    assert_eq!(response.total_distance_km, 0.);
}

#[test]
fn can_write_route_in_camel_case() {
    let mut buffer = Vec::new();

    create_route().write_pragmatic_json(2, BufWriter::new(&mut buffer)).expect("cannot write");

    let json = String::from_utf8(buffer).expect("not utf8");
    let value: serde_json::Value = serde_json::from_str(&json).expect("cannot parse");
    assert_eq!(value["routeId"], "route_2_12.346");
    assert_eq!(value["closureAvoidedCount"], 1);
    assert_eq!(value["stops"][0]["type"], "origin");
    assert_eq!(value["stops"][1]["type"], "pickup");
    assert_eq!(value["stops"][1]["stopId"], 2);
    assert_eq!(value["nodes"][1]["lng"], 1.);

    let response = deserialize_route_response(std::io::BufReader::new(json.as_bytes())).expect("cannot read");
    assert_eq!(response, create_route_response(&create_route(), 2));
}
