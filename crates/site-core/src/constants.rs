// Shared visual tuning constants used by the web frontend.

// Starfield
pub const STAR_AREA_PER_STAR: f32 = 6000.0; // one star per this many px^2 of canvas
pub const STAR_ORBIT_STEP_RAD: f32 = 0.000_15; // per-frame phase advance, frame-rate coupled
pub const STAR_SIZE_MIN: f32 = 0.3;
pub const STAR_SIZE_SPAN: f32 = 1.2;
pub const STAR_GLOW_FACTOR_MIN: f32 = 2.0; // glow radius = size * [min, min+span)
pub const STAR_GLOW_FACTOR_SPAN: f32 = 2.0;
pub const STAR_OPACITY_MIN: f32 = 0.3;
pub const STAR_OPACITY_SPAN: f32 = 0.5;
pub const STAR_PARALLAX_WEIGHT_MIN: f32 = 0.1;
pub const STAR_PARALLAX_WEIGHT_SPAN: f32 = 0.4;
pub const STAR_ORBIT_RADIUS_MIN: f32 = 0.5;
pub const STAR_ORBIT_RADIUS_SPAN: f32 = 1.5;

// Scroll parallax
pub const PARALLAX_X_GAIN: f32 = 100.0; // px of drift per normalized viewport offset
pub const PARALLAX_Y_GAIN: f32 = 60.0;

// Clock dial
pub const MINUTE_DRIFT_DEG_PER_SEC: f32 = 15.0; // passive minute-hand rotation
pub const HOUR_RATIO: f32 = 1.0 / 12.0; // hour hand tracks the minute hand at 1/12 rate
pub const SCROLL_DEFLECT_DEG_PER_PX: f32 = 0.4;
pub const SCROLL_VELOCITY_GAIN: f32 = 10.0; // px/ms -> scale factor
pub const SCROLL_VELOCITY_MAX: f32 = 2.0; // hard cap on the velocity scale
pub const SCROLL_SETTLE_SEC: f32 = 0.1; // passive drift stays off this long after a scroll

// Proximity glow
pub const GLOW_OFFSET_DIVISOR: f32 = 50.0; // pointer offset -> element translation
pub const GLOW_SCALE_SPAN: f32 = 0.04; // nucleus scale grows to 1.04 at full intensity

// Hero copy highlight
pub const HIGHLIGHT_INTERVAL_SEC: f32 = 2.0;
