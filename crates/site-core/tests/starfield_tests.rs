use glam::Vec2;
use site_core::{star_screen_position, Star, StarField, STAR_ORBIT_STEP_RAD};

#[test]
fn star_count_follows_surface_area() {
    // One star per 6000 px^2, floored
    assert_eq!(StarField::star_count(800.0, 600.0), 80);
    assert_eq!(StarField::star_count(1920.0, 1080.0), 345);
    assert_eq!(StarField::star_count(100.0, 59.0), 0); // just under one star's area
    assert_eq!(StarField::star_count(100.0, 60.0), 1);
}

#[test]
fn star_count_degenerate_surfaces() {
    assert_eq!(StarField::star_count(0.0, 0.0), 0);
    assert_eq!(StarField::star_count(0.0, 1080.0), 0);
    assert_eq!(StarField::star_count(-800.0, 600.0), 0);
    assert_eq!(StarField::star_count(f32::NAN, 600.0), 0);
    assert_eq!(StarField::star_count(f32::INFINITY, 600.0), 0);
}

#[test]
fn generation_matches_count_and_ranges() {
    let field = StarField::new(800.0, 600.0, 7);
    assert_eq!(field.len(), 80);
    for star in field.stars() {
        assert!(star.center.x >= 0.0 && star.center.x <= 800.0);
        assert!(star.center.y >= 0.0 && star.center.y <= 600.0);
        assert!(star.size >= 0.3 && star.size < 1.5);
        assert!(star.opacity >= 0.3 && star.opacity < 0.8);
        assert!(star.parallax_weight >= 0.1 && star.parallax_weight < 0.5);
        assert!(star.orbit_radius >= 0.5 && star.orbit_radius < 2.0);
        // glow wraps the core dot
        assert!(star.glow_radius >= star.size * 2.0 && star.glow_radius <= star.size * 4.0);
    }
}

#[test]
fn resize_replaces_the_whole_set() {
    let mut field = StarField::new(800.0, 600.0, 7);
    assert_eq!(field.len(), 80);
    field.resize(400.0, 300.0);
    assert_eq!(field.len(), 20);
    for star in field.stars() {
        assert!(star.center.x <= 400.0);
        assert!(star.center.y <= 300.0);
    }
    // Shrinking to a degenerate surface empties the field
    field.resize(0.0, 300.0);
    assert!(field.is_empty());
}

#[test]
fn same_seed_same_field() {
    let a = StarField::new(640.0, 480.0, 42);
    let b = StarField::new(640.0, 480.0, 42);
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.stars().iter().zip(b.stars()) {
        assert_eq!(sa.center, sb.center);
        assert_eq!(sa.orbit_phase, sb.orbit_phase);
    }
}

#[test]
fn advance_steps_every_phase_by_the_fixed_increment() {
    let mut field = StarField::new(640.0, 480.0, 42);
    let before: Vec<f32> = field.stars().iter().map(|s| s.orbit_phase).collect();
    field.advance();
    for (star, prev) in field.stars().iter().zip(before) {
        assert!((star.orbit_phase - prev - STAR_ORBIT_STEP_RAD).abs() < 1e-7);
    }
}

#[test]
fn screen_position_composes_orbit_and_weighted_parallax() {
    let star = Star {
        center: Vec2::new(100.0, 200.0),
        size: 1.0,
        opacity: 0.5,
        parallax_weight: 0.25,
        orbit_phase: 0.0,
        orbit_radius: 2.0,
        glow_radius: 3.0,
    };
    // Phase 0 puts the orbit vector on +x
    let p = star_screen_position(&star, Vec2::new(40.0, -8.0));
    assert!((p.x - (100.0 + 2.0 + 10.0)).abs() < 1e-5);
    assert!((p.y - (200.0 + 0.0 - 2.0)).abs() < 1e-5);

    // Zero parallax leaves just the orbit
    let p = star_screen_position(&star, Vec2::ZERO);
    assert!((p.x - 102.0).abs() < 1e-5);
    assert!((p.y - 200.0).abs() < 1e-5);
}
