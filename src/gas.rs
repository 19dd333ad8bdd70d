use libm::{floorf, fmodf};

/// Two divers breathe from the pooled reserve during an emergency.
pub const CONSUMERS: f32 = 2.0;
/// Minutes spent at depth sorting the problem out before the ascent starts.
pub const PROBLEM_TIME: f32 = 1.0;

/// Ambient pressure in atmospheres at `depth` meters of water.
pub fn pressure_at_depth(depth: f32) -> f32 {
    1.0 + depth / 10.0
}

/// Number of 3 m stops between half the dive depth and the surface.
///
/// Returns the floor and ceiling reading of the stop count. They differ
/// whenever half the depth is not a multiple of 3.
/// e.g. 40m: 40 / 2 = 20m -> 20 / 3 = 6 stops, 20 mod 3 = 2 -> 7 stops
pub fn ascent_stops(depth: f32) -> (f32, f32) {
    let stops = floorf(depth / 2.0 / 3.0);

    if fmodf(floorf(depth / 2.0), 3.0) > 0.0 {
        (stops, stops + 1.0)
    } else {
        (stops, stops)
    }
}

// gas burned between the dive depth and the stop midpoint, at 10 m/min,
// priced at the pressure of the average depth of that leg
fn ascent_gas(depth: f32, amv: f32, stops: f32) -> f32 {
    let midpoint = stops * 3.0;
    let average_depth = (midpoint + depth) / 2.0;
    let ascent_time = (depth - midpoint) / 10.0;

    CONSUMERS * amv * ascent_time * pressure_at_depth(average_depth)
}

/// Minimum gas reserve in litres for a dive to `depth` meters at a
/// breathing rate of `amv` litres per minute.
///
/// One minute is spent at depth, then the ascent is charged twice, once
/// with the stop count rounded down and once rounded up. Summing both
/// readings instead of picking one keeps the estimate on the
/// conservative side of the rounding.
pub fn required_gas(depth: f32, amv: f32) -> f32 {
    let problem_gas = CONSUMERS * amv * PROBLEM_TIME * pressure_at_depth(depth);
    let (stops_low, stops_high) = ascent_stops(depth);

    problem_gas + ascent_gas(depth, amv, stops_low) + ascent_gas(depth, amv, stops_high)
}

#[test]
fn test_required_gas_at_surface() {
    // no ascent, just the minute at 1 atm
    assert_eq!(required_gas(0.0, 30.0), 60.0);
    assert_eq!(required_gas(0.0, 18.0), 36.0);
}

#[test]
fn test_required_gas_at_40m() {
    // 2*30*1*(1+4) = 300
    // floor: 6 stops, midpoint 18m, avg 29m, 2.2min -> 2*30*2.2*3.9 = 514.8
    // ceil:  7 stops, midpoint 21m, avg 30.5m, 1.9min -> 2*30*1.9*4.05 = 461.7
    let result = required_gas(40.0, 30.0);
    assert!(
        (result - 1276.5).abs() < 0.01,
        "expected ~1276.5 litres, got {}",
        result
    );
}

#[test]
fn test_ascent_stops_split_at_40m() {
    assert_eq!(ascent_stops(40.0), (6.0, 7.0));
}

#[test]
fn test_ascent_stops_agree_on_multiples_of_six() {
    // half depth lands on a full stop, no rounding ambiguity
    assert_eq!(ascent_stops(36.0), (6.0, 6.0));
    assert_eq!(ascent_stops(0.0), (0.0, 0.0));
}

#[test]
fn test_zero_amv_is_degenerate_but_valid() {
    assert_eq!(required_gas(40.0, 0.0), 0.0);
}
