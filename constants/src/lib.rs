pub mod nebula;
pub mod render_settings;
pub mod starfield;
pub mod stellar;
