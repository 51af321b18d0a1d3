use bevy::prelude::*;

/// Orbit camera tuning applied at startup.
#[derive(Clone, Copy)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub initial_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_sensitivity: f32,
    pub pan_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub damping: f32,
    pub exposure_ev100: f32,
}

pub const CAMERA_SETTINGS: CameraSettings = CameraSettings {
    fov_degrees: 60.0,
    near: 0.1,
    far: 5000.0,
    initial_distance: 120.0,
    min_distance: 20.0,
    max_distance: 1200.0,
    rotate_sensitivity: 0.0035,
    pan_sensitivity: 0.0016,
    zoom_sensitivity: 0.12,
    damping: 10.0,
    exposure_ev100: 9.0,
};

/// Number of faint distant-galaxy billboards scattered on the sky
pub const GALAXY_COUNT: usize = 14;

/// Radius band and brightness range for distant galaxies
pub const GALAXY_RADIUS: (f32, f32) = (1600.0, 2100.0);
pub const GALAXY_BRIGHTNESS: (f32, f32) = (0.04, 0.12);
pub const GALAXY_SIZE: (f32, f32) = (14.0, 40.0);

/// Hand-placed reference spheres that give the orbit some depth cues
pub const REFERENCE_SPHERES: &[(Vec3, f32)] = &[
    (Vec3::new(60.0, -8.0, -140.0), 3.0),
    (Vec3::new(-110.0, 24.0, 90.0), 5.0),
    (Vec3::new(30.0, 70.0, 210.0), 2.2),
    (Vec3::new(-45.0, -60.0, -260.0), 4.0),
];
