//! Orbit camera for the starfield scene.
//!
//! Provides drag-to-rotate, scroll-to-zoom and pan controls around a fixed
//! target point, with smooth damped interpolation and distance limits.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
