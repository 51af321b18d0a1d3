/// Resolution of the synthesized square nebula raster
pub const NEBULA_TEXTURE_SIZE: usize = 512;

/// Octaves of sine-based value noise summed per texel
pub const NEBULA_OCTAVES: usize = 4;

/// Spatial frequency of the first octave (cycles across the raster);
/// each further octave doubles frequency and halves amplitude
pub const NEBULA_BASE_FREQUENCY: f32 = 3.0;

/// Amplitude falloff between octaves
pub const NEBULA_PERSISTENCE: f32 = 0.5;

/// Weight of the turbulence term added on top of the octave sum
pub const NEBULA_TURBULENCE: f32 = 0.35;

/// Power-curve exponent that sharpens filament structure after
/// normalization
pub const NEBULA_FILAMENT_EXPONENT: f32 = 2.4;

/// Warm absorptive palette for dark nebulae (dense dust), with its
/// peak opacity
pub const DARK_NEBULA_COLOR: [f32; 3] = [0.45, 0.22, 0.12];
pub const DARK_NEBULA_OPACITY: f32 = 0.22;

/// Cool palette for reflection nebulae (scattered starlight), rendered
/// additively at very low opacity
pub const REFLECTION_NEBULA_COLOR: [f32; 3] = [0.25, 0.38, 0.72];
pub const REFLECTION_NEBULA_OPACITY: f32 = 0.09;

/// Per-instance rotation rate range (radians per second)
pub const NEBULA_ROTATION_RATE: (f32, f32) = (0.002, 0.015);

/// Sphere radius range for nebula instances
pub const NEBULA_RADIUS: (f32, f32) = (220.0, 480.0);

/// Distance range from the origin at which nebula spheres are placed
pub const NEBULA_DISTANCE: (f32, f32) = (700.0, 1500.0);

/// Number of nebula instances spawned, alternating dark and reflection
pub const NEBULA_COUNT: usize = 5;
