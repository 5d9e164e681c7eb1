use evotsp_challenge::{route_length, Challenge, Solution};

#[test]
fn test_generate_instance_is_deterministic() {
    let seed = [7u8; 32];
    let a = Challenge::generate_instance(&seed, 20, Some(3)).unwrap();
    let b = Challenge::generate_instance(&seed, 20, Some(3)).unwrap();
    assert_eq!(a.city_positions, b.city_positions);

    let c = Challenge::generate_instance(&[8u8; 32], 20, Some(3)).unwrap();
    assert_ne!(a.city_positions, c.city_positions);
}

#[test]
fn test_generate_instance_rejects_bad_input() {
    assert!(Challenge::generate_instance(&[0u8; 32], 2, None).is_err());
    assert!(Challenge::generate_instance(&[0u8; 32], 10, Some(10)).is_err());
}

#[test]
fn test_generate_instance_positions_are_distinct() {
    let challenge = Challenge::generate_instance(&[1u8; 32], 200, None).unwrap();
    assert_eq!(challenge.city_positions.len(), 200);
    let mut positions = challenge.city_positions.clone();
    positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
    positions.dedup();
    assert_eq!(positions.len(), 200);
}

#[test]
fn test_from_cities_accepts_degenerate_input() {
    let challenge = Challenge::from_cities(&[0u8; 32], vec![], None).unwrap();
    assert_eq!(challenge.num_cities, 0);

    let challenge = Challenge::from_cities(&[0u8; 32], vec![(0.0, 0.0), (1.0, 1.0)], Some(1)).unwrap();
    assert_eq!(challenge.num_cities, 2);

    assert!(Challenge::from_cities(&[0u8; 32], vec![(0.0, 0.0)], Some(1)).is_err());
}

#[test]
fn test_route_length_triangle() {
    let cities = vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];
    let expected = 20.0 + 200.0f64.sqrt();
    assert!((route_length(&[0, 1, 2], &cities) - expected).abs() < 1e-9);
    // A closed tour over 3 cities has the same length for every ordering.
    assert!((route_length(&[2, 0, 1], &cities) - expected).abs() < 1e-9);
}

#[test]
fn test_route_length_degenerate() {
    let cities = vec![(3.0, 4.0), (5.0, 6.0)];
    assert_eq!(route_length(&[], &cities), 0.0);
    assert_eq!(route_length(&[1], &cities), 0.0);
}

#[test]
fn test_route_length_is_pure() {
    let challenge = Challenge::generate_instance(&[42u8; 32], 30, None).unwrap();
    let route: Vec<usize> = (0..30).collect();
    let first = challenge.route_length(&route);
    let second = challenge.route_length(&route);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_verify_solution() {
    let challenge = Challenge::from_cities(
        &[0u8; 32],
        vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        Some(2),
    )
    .unwrap();

    let route = vec![2, 3, 0, 1];
    let good = Solution {
        distance: challenge.route_length(&route),
        route,
    };
    assert!(challenge.verify_solution(&good).is_ok());

    let too_short = Solution {
        route: vec![2, 3, 0],
        distance: 0.0,
    };
    assert!(challenge.verify_solution(&too_short).is_err());

    let duplicate = Solution {
        route: vec![2, 3, 3, 1],
        distance: 0.0,
    };
    assert!(challenge.verify_solution(&duplicate).is_err());

    let out_of_range = Solution {
        route: vec![2, 3, 0, 4],
        distance: 0.0,
    };
    assert!(challenge.verify_solution(&out_of_range).is_err());

    let wrong_start = Solution {
        route: vec![0, 1, 2, 3],
        distance: challenge.route_length(&[0, 1, 2, 3]),
    };
    assert!(challenge.verify_solution(&wrong_start).is_err());

    let wrong_distance = Solution {
        route: vec![2, 3, 0, 1],
        distance: good.distance + 1.0,
    };
    assert!(challenge.verify_solution(&wrong_distance).is_err());
}

#[test]
fn test_challenge_json_round_trip() {
    let challenge = Challenge::generate_instance(&[9u8; 32], 12, Some(0)).unwrap();
    let json = serde_json::to_string(&challenge).unwrap();
    let parsed: Challenge = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.num_cities, challenge.num_cities);
    assert_eq!(parsed.city_positions, challenge.city_positions);
    assert_eq!(parsed.start_city, challenge.start_city);
    assert!(parsed.validate().is_ok());
}
