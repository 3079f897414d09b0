//! Clock-hand angle tracking for the hero dial.
//!
//! Both hands accumulate raw angle without bound: the minute hand drifts at a
//! fixed rate while idle and is pushed backwards by scroll velocity, the hour
//! hand follows at 1/12 rate. Raw angles are turned into renderable angles
//! through shortest-path smoothing so the 360 -> 0 wrap never shows as a snap.

use crate::constants::*;

#[derive(Clone, Debug, Default)]
pub struct ClockState {
    minute_angle: f32,
    hour_angle: f32,
    visual_minute: f32,
    visual_hour: f32,
    settle_sec: f32,
}

impl ClockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Passive time-based drift for one tick.
    ///
    /// Suppressed entirely while the scroll-settle timer is pending; the tick
    /// that exhausts the timer still performs no drift, so no missed drift is
    /// ever paid back.
    pub fn advance(&mut self, dt_sec: f32) {
        if self.settle_sec > 0.0 {
            self.settle_sec = (self.settle_sec - dt_sec).max(0.0);
            return;
        }
        let minute_delta = dt_sec * MINUTE_DRIFT_DEG_PER_SEC;
        self.minute_angle += minute_delta;
        self.hour_angle += minute_delta * HOUR_RATIO;
    }

    /// Scroll deflection: scrolling down winds the hands backwards.
    ///
    /// Arms the settle timer so passive drift stays out of the same ticks.
    pub fn deflect(&mut self, scroll_delta_px: f32, elapsed_ms: f32) {
        let scale = velocity_scale(scroll_delta_px, elapsed_ms);
        let minute_delta = scroll_delta_px * SCROLL_DEFLECT_DEG_PER_PX * scale;
        self.minute_angle -= minute_delta;
        self.hour_angle -= minute_delta * HOUR_RATIO;
        self.settle_sec = SCROLL_SETTLE_SEC;
    }

    pub fn settling(&self) -> bool {
        self.settle_sec > 0.0
    }

    /// Raw accumulated angles, (hour, minute), degrees.
    pub fn raw_angles(&self) -> (f32, f32) {
        (self.hour_angle, self.minute_angle)
    }

    /// Angles to render this frame, (hour, minute), degrees.
    ///
    /// Each call folds the raw angles into the previous rendered angles via
    /// shortest-path smoothing and remembers the result for the next frame.
    pub fn visual_angles(&mut self) -> (f32, f32) {
        self.visual_hour = shortest_path_step(self.visual_hour, self.hour_angle);
        self.visual_minute = shortest_path_step(self.visual_minute, self.minute_angle);
        (self.visual_hour, self.visual_minute)
    }
}

/// Move `prev` towards `raw` by the signed shortest angular delta.
///
/// The delta between the two angles (mod 360) is wrapped into [-180, 180] and
/// added to `prev`, so the result never jumps across the wrap boundary.
#[inline]
pub fn shortest_path_step(prev: f32, raw: f32) -> f32 {
    let current = raw.rem_euclid(360.0);
    let last = prev.rem_euclid(360.0);
    let mut diff = current - last;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    prev + diff
}

/// Bounded scroll-velocity scale factor.
///
/// px-per-ms scaled by `SCROLL_VELOCITY_GAIN`, capped at `SCROLL_VELOCITY_MAX`
/// for any delta and any elapsed time; a non-positive elapsed time is treated
/// as the limit case and returns the cap outright.
#[inline]
pub fn velocity_scale(delta_px: f32, elapsed_ms: f32) -> f32 {
    if elapsed_ms <= 0.0 {
        return SCROLL_VELOCITY_MAX;
    }
    (delta_px.abs() / elapsed_ms * SCROLL_VELOCITY_GAIN).min(SCROLL_VELOCITY_MAX)
}
