/// Number of stars generated for the background field
pub const STAR_COUNT: usize = 25_000;

/// Seed for all procedural generation; change it for a different sky
pub const WORLD_SEED: u64 = 42;

/// Scale height (radians) of the exponential acceptance falloff that
/// concentrates stars toward the galactic plane
pub const PLANE_SCALE_HEIGHT: f32 = 0.55;

/// Chance that an otherwise-accepted candidate is re-drawn, producing
/// patchy density variation across the sky
pub const DENSITY_SKIP_CHANCE: f32 = 0.15;

/// Distance band split: 10% near, 20% mid, 70% far
pub const NEAR_BAND_FRACTION: f32 = 0.10;
pub const MID_BAND_FRACTION: f32 = 0.20;

/// Radius ranges (world units) per distance band
pub const NEAR_RADIUS: (f32, f32) = (180.0, 400.0);
pub const MID_RADIUS: (f32, f32) = (400.0, 900.0);
pub const FAR_RADIUS: (f32, f32) = (900.0, 2200.0);

/// Brightness tier thresholds on a uniform draw: below the first is faint,
/// below the second is visible, the rest is bright
pub const FAINT_TIER_THRESHOLD: f32 = 0.85;
pub const VISIBLE_TIER_THRESHOLD: f32 = 0.97;

/// Magnitude (relative brightness weight) range per tier
pub const FAINT_MAGNITUDE: (f32, f32) = (0.05, 0.35);
pub const VISIBLE_MAGNITUDE: (f32, f32) = (0.35, 0.7);
pub const BRIGHT_MAGNITUDE: (f32, f32) = (0.7, 1.0);

/// Size multiplier range per tier, applied to the class base size
pub const FAINT_SIZE_SCALE: (f32, f32) = (0.5, 0.9);
pub const VISIBLE_SIZE_SCALE: (f32, f32) = (0.9, 1.5);
pub const BRIGHT_SIZE_SCALE: (f32, f32) = (1.5, 2.6);

/// Multiplicative per-channel color jitter (±5%)
pub const COLOR_JITTER: f32 = 0.05;

/// Twinkle oscillation amplitude at magnitude 1.0
pub const TWINKLE_DEPTH: f32 = 0.6;

/// Per-star twinkle rate range (radians per second)
pub const TWINKLE_RATE: (f32, f32) = (0.8, 4.5);

/// Lower clamp on the twinkle size multiplier
pub const TWINKLE_MIN: f32 = 0.3;

/// Fraction of the twinkle excursion applied to color channels
pub const TWINKLE_COLOR_FRACTION: f32 = 0.25;

/// World-space scale applied to star quad sizes in the shader
pub const STAR_SIZE_SCALE: f32 = 1.6;
