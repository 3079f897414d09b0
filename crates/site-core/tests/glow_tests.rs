use glam::Vec2;
use site_core::{glow_at, GlowSample};

const ORIGIN: Vec2 = Vec2::new(100.0, 50.0);
const SIZE: Vec2 = Vec2::new(400.0, 300.0);

#[test]
fn full_intensity_at_center() {
    let sample = glow_at(ORIGIN + SIZE * 0.5, ORIGIN, SIZE);
    assert!((sample.intensity - 1.0).abs() < 1e-5);
    assert!(sample.offset.length() < 1e-5);
}

#[test]
fn zero_at_and_beyond_the_corner_radius() {
    // A corner sits exactly at the corner-to-center radius
    let sample = glow_at(ORIGIN, ORIGIN, SIZE);
    assert!(sample.intensity.abs() < 1e-5);
    // Far outside the box stays pinned at zero, never negative
    let sample = glow_at(ORIGIN + Vec2::new(5000.0, 5000.0), ORIGIN, SIZE);
    assert_eq!(sample.intensity, 0.0);
}

#[test]
fn intensity_decreases_monotonically_with_distance() {
    let center = ORIGIN + SIZE * 0.5;
    let direction = Vec2::new(0.6, 0.8);
    let mut last = f32::INFINITY;
    for step in 0..60 {
        let pointer = center + direction * (step as f32 * 5.0);
        let sample = glow_at(pointer, ORIGIN, SIZE);
        assert!(sample.intensity <= last + 1e-6);
        assert!((0.0..=1.0).contains(&sample.intensity));
        last = sample.intensity;
    }
}

#[test]
fn offset_follows_the_pointer_at_one_fiftieth() {
    let center = ORIGIN + SIZE * 0.5;
    let sample = glow_at(center + Vec2::new(50.0, -25.0), ORIGIN, SIZE);
    assert!((sample.offset.x - 1.0).abs() < 1e-5);
    assert!((sample.offset.y + 0.5).abs() < 1e-5);
}

#[test]
fn empty_rect_produces_no_glow() {
    let sample = glow_at(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), Vec2::ZERO);
    assert_eq!(sample, GlowSample::default());
}
