//! Runtime diagnostics systems.

/// FPS overlay update for performance monitoring.
pub mod fps_tracking;
