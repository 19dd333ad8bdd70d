use mingas::gas::{ascent_stops, pressure_at_depth, required_gas};

#[test]
fn test_required_gas_never_negative() {
    let mut depth = 0.0;
    while depth <= 100.0 {
        let result = required_gas(depth, 30.0);
        assert!(
            result >= 0.0,
            "negative reserve at {}m: {}",
            depth,
            result
        );
        depth += 0.5;
    }
}

#[test]
fn test_required_gas_surface_is_dwell_only() {
    // both ascent legs collapse to zero at the surface
    assert_eq!(required_gas(0.0, 30.0), 60.0);
    assert_eq!(required_gas(0.0, 12.5), 25.0);
}

#[test]
fn test_required_gas_monotone_in_depth() {
    let mut previous = required_gas(0.0, 30.0);
    let mut depth = 1.0;
    while depth <= 80.0 {
        let current = required_gas(depth, 30.0);
        assert!(
            current >= previous,
            "reserve dropped between {}m ({}) and {}m ({})",
            depth - 1.0,
            previous,
            depth,
            current
        );
        previous = current;
        depth += 1.0;
    }
}

#[test]
fn test_required_gas_linear_in_amv() {
    use rand::Rng;

    // doubling is a power-of-two scale, so equality is exact in f32
    let mut rng = rand::rng();
    for _ in 0..100 {
        let depth = rng.random_range(0.0..80.0f32);
        let amv = rng.random_range(1.0..40.0f32);
        assert_eq!(required_gas(depth, 2.0 * amv), 2.0 * required_gas(depth, amv));
    }
}

#[test]
fn test_reference_scenario_40m_amv30() {
    // dwell 300, floor leg 514.8, ceiling leg 461.7
    let result = required_gas(40.0, 30.0);
    assert!(
        (result - 1276.5).abs() < 0.01,
        "expected ~1276.5 litres, got {}",
        result
    );
}

#[test]
fn test_stop_count_brackets_half_depth() {
    let mut depth = 0.0;
    while depth <= 80.0 {
        let (low, high) = ascent_stops(depth);
        assert!(low <= high);
        assert!(high - low <= 1.0);
        // stops never sit deeper than half the dive
        assert!(low * 3.0 <= depth / 2.0);
        depth += 1.0;
    }
}

#[test]
fn test_pressure_at_depth() {
    assert_eq!(pressure_at_depth(0.0), 1.0);
    assert_eq!(pressure_at_depth(10.0), 2.0);
    assert_eq!(pressure_at_depth(40.0), 5.0);
}
