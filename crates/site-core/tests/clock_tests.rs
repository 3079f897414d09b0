use site_core::{shortest_path_step, velocity_scale, ClockState, SCROLL_VELOCITY_MAX};

#[test]
fn passive_drift_rates() {
    let mut clock = ClockState::new();
    clock.advance(1.0);
    let (hour, minute) = clock.raw_angles();
    assert!((minute - 15.0).abs() < 1e-4);
    assert!((hour - 1.25).abs() < 1e-4);
}

#[test]
fn deflection_winds_hands_backwards() {
    let mut clock = ClockState::new();
    // 100 px over 100 ms: scale = min(100/100 * 10, 2) = 2
    clock.deflect(100.0, 100.0);
    let (hour, minute) = clock.raw_angles();
    assert!((minute - (-80.0)).abs() < 1e-3); // 100 * 0.4 * 2
    assert!((hour - (-80.0 / 12.0)).abs() < 1e-3);
}

#[test]
fn velocity_scale_is_bounded() {
    // Ordinary scroll stays under the cap
    assert!((velocity_scale(0.5, 10.0) - 0.5).abs() < 1e-5);
    // Huge delta, tiny elapsed: capped
    assert_eq!(velocity_scale(1.0e6, 0.001), SCROLL_VELOCITY_MAX);
    // Degenerate elapsed times take the limit case
    assert_eq!(velocity_scale(10.0, 0.0), SCROLL_VELOCITY_MAX);
    assert_eq!(velocity_scale(0.0, 0.0), SCROLL_VELOCITY_MAX);
    assert_eq!(velocity_scale(10.0, -5.0), SCROLL_VELOCITY_MAX);
    // Direction does not matter
    assert_eq!(velocity_scale(-1.0e6, 0.001), SCROLL_VELOCITY_MAX);
}

#[test]
fn drift_suppressed_while_settling() {
    let mut clock = ClockState::new();
    clock.deflect(10.0, 10.0);
    let (_, minute_after_deflect) = clock.raw_angles();
    assert!(clock.settling());

    // Two ticks inside the settle window: no drift, including the tick that
    // exhausts the timer
    clock.advance(0.05);
    assert!(clock.settling());
    clock.advance(0.06);
    assert!(!clock.settling());
    let (_, minute) = clock.raw_angles();
    assert_eq!(minute, minute_after_deflect);

    // Next tick drifts by exactly its own dt, nothing carried over
    clock.advance(0.5);
    let (_, minute) = clock.raw_angles();
    assert!((minute - (minute_after_deflect + 7.5)).abs() < 1e-4);
}

#[test]
fn each_scroll_rearms_the_settle_timer() {
    let mut clock = ClockState::new();
    clock.deflect(10.0, 10.0);
    clock.advance(0.08);
    clock.deflect(10.0, 10.0); // re-armed before the first window ran out
    clock.advance(0.08);
    assert!(clock.settling());
}

#[test]
fn shortest_path_never_crosses_the_wrap() {
    // Forward across 360
    let stepped = shortest_path_step(350.0, 370.0);
    assert!((stepped - 370.0).abs() < 1e-4);
    // Backward across 0
    let stepped = shortest_path_step(10.0, 350.0);
    assert!((stepped - (-10.0)).abs() < 1e-4);
    // Negative accumulators behave the same
    let stepped = shortest_path_step(-10.0, 10.0);
    assert!((stepped - 10.0).abs() < 1e-4);
}

#[test]
fn shortest_path_step_bounded_by_half_turn() {
    let mut raw = 0.0f32;
    let mut visual = 0.0f32;
    for i in 0..500 {
        // Alternate coarse jumps in both directions, including wrap crossings
        raw += if i % 3 == 0 { 173.0 } else { -97.0 };
        let next = shortest_path_step(visual, raw);
        assert!(
            (next - visual).abs() <= 180.0 + 1e-3,
            "update {} moved {} degrees",
            i,
            (next - visual).abs()
        );
        visual = next;
        // And the rendered angle always lands on the raw angle mod 360
        let wrapped = (next - raw).rem_euclid(360.0);
        assert!(wrapped < 1e-2 || wrapped > 360.0 - 1e-2);
    }
}

#[test]
fn visual_angles_follow_raw_angles_continuously() {
    let mut clock = ClockState::new();
    let (mut last_hour, mut last_minute) = clock.visual_angles();
    for _ in 0..200 {
        clock.deflect(-120.0, 4.0); // fast upward scroll, capped scale
        clock.advance(0.016);
        let (hour, minute) = clock.visual_angles();
        assert!((hour - last_hour).abs() <= 180.0);
        assert!((minute - last_minute).abs() <= 180.0);
        last_hour = hour;
        last_minute = minute;
    }
}
