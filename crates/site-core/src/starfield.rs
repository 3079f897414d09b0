//! Starfield state: a batch of slowly orbiting glow points displaced by a
//! shared scroll-parallax vector.
//!
//! The batch is sized by surface area and regenerated wholesale whenever the
//! surface changes; individual stars are never mutated or retired outside a
//! regeneration. Rendering is left to the frontend.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;

#[derive(Clone, Debug)]
pub struct Star {
    /// Fixed orbit center on the surface.
    pub center: Vec2,
    /// Core dot radius in px.
    pub size: f32,
    pub opacity: f32,
    /// How strongly the shared parallax vector displaces this star.
    pub parallax_weight: f32,
    /// Angular position along the personal orbit, radians.
    pub orbit_phase: f32,
    pub orbit_radius: f32,
    /// Outer soft-glow radius in px.
    pub glow_radius: f32,
}

pub struct StarField {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl StarField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        field.resize(width, height);
        field
    }

    /// Number of stars a surface of the given size carries.
    pub fn star_count(width: f32, height: f32) -> usize {
        let area = width * height;
        if !area.is_finite() || area <= 0.0 {
            return 0;
        }
        (area / STAR_AREA_PER_STAR).floor() as usize
    }

    /// Replace the whole star set for a new surface size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let count = Self::star_count(width, height);
        let rng = &mut self.rng;
        self.stars = (0..count)
            .map(|_| {
                let center = Vec2::new(
                    rng.gen::<f32>() * width,
                    rng.gen::<f32>() * height,
                );
                let size = STAR_SIZE_MIN + rng.gen::<f32>() * STAR_SIZE_SPAN;
                Star {
                    center,
                    size,
                    opacity: STAR_OPACITY_MIN + rng.gen::<f32>() * STAR_OPACITY_SPAN,
                    parallax_weight: STAR_PARALLAX_WEIGHT_MIN
                        + rng.gen::<f32>() * STAR_PARALLAX_WEIGHT_SPAN,
                    orbit_phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    orbit_radius: STAR_ORBIT_RADIUS_MIN
                        + rng.gen::<f32>() * STAR_ORBIT_RADIUS_SPAN,
                    glow_radius: size
                        * (STAR_GLOW_FACTOR_MIN + rng.gen::<f32>() * STAR_GLOW_FACTOR_SPAN),
                }
            })
            .collect();
        log::debug!(
            "starfield regenerated: {} stars for {:.0}x{:.0}",
            self.stars.len(),
            width,
            height
        );
    }

    /// Advance every orbit phase by one frame's fixed step.
    ///
    /// Not delta-time compensated: orbital speed rides the frame rate.
    pub fn advance(&mut self) {
        for star in &mut self.stars {
            star.orbit_phase += STAR_ORBIT_STEP_RAD;
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Screen position of a star under the shared parallax vector: orbit center
/// plus orbit vector plus the star's weighted share of the parallax.
#[inline]
pub fn star_screen_position(star: &Star, parallax: Vec2) -> Vec2 {
    let orbit = Vec2::new(star.orbit_phase.cos(), star.orbit_phase.sin()) * star.orbit_radius;
    star.center + orbit + parallax * star.parallax_weight
}
