pub mod deep_sky;
pub mod nebula;
