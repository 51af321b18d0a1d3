use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::MouseScrollUnit;
use bevy::math::EulerRot;
use bevy::render::camera::Exposure;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use constants::render_settings::CAMERA_SETTINGS;

/// Orbit rig state: the camera circles a fixed target at a clamped
/// distance. The transform eases toward the pose each frame, which gives
/// the drag and zoom their damping.
#[derive(Resource)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: -0.25,
            distance: CAMERA_SETTINGS.initial_distance,
            min_distance: CAMERA_SETTINGS.min_distance,
            max_distance: CAMERA_SETTINGS.max_distance,
            damping: CAMERA_SETTINGS.damping,
        }
    }
}

/// Spawn the scene camera with the configured projection, tone mapping and
/// exposure, plus the orbit rig resource driving it.
pub fn spawn_orbit_camera(commands: &mut Commands) {
    let rig = OrbitCamera::default();
    let rotation = Quat::from_euler(EulerRot::YXZ, rig.yaw, rig.pitch, 0.0);
    let translation = rig.target + rotation * Vec3::Z * rig.distance;

    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_SETTINGS.fov_degrees.to_radians(),
            near: CAMERA_SETTINGS.near,
            far: CAMERA_SETTINGS.far,
            ..default()
        }),
        Tonemapping::TonyMcMapface,
        Exposure {
            ev100: CAMERA_SETTINGS.exposure_ev100,
        },
        Transform::from_translation(translation).looking_at(rig.target, Vec3::Y),
    ));
    commands.insert_resource(rig);
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    // Left drag rotates around the target
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * CAMERA_SETTINGS.rotate_sensitivity;
        orbit.pitch -= mouse_delta.y * CAMERA_SETTINGS.rotate_sensitivity;
        orbit.pitch = orbit.pitch.clamp(-1.55, 1.55);
    }

    // Right or middle drag pans the target in the camera plane
    if (mouse_button.pressed(MouseButton::Right) || mouse_button.pressed(MouseButton::Middle))
        && mouse_delta != Vec2::ZERO
    {
        let view_rot = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
        let right = view_rot * Vec3::X;
        let up = view_rot * Vec3::Y;
        let pan_scale = orbit.distance * CAMERA_SETTINGS.pan_sensitivity;
        orbit.target += (-right * mouse_delta.x + up * mouse_delta.y) * pan_scale;
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for event in scroll_events.read() {
        scroll_accum += match event.unit {
            MouseScrollUnit::Line => event.y * 1.0,
            MouseScrollUnit::Pixel => event.y * 0.05,
        };
    }

    // Exponential dolly keeps zoom speed proportional to distance
    if scroll_accum.abs() > f32::EPSILON {
        let zoom = (-scroll_accum * CAMERA_SETTINGS.zoom_sensitivity).exp();
        orbit.distance = (orbit.distance * zoom).clamp(orbit.min_distance, orbit.max_distance);
    }

    let target_rot = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
    let target_pos = orbit.target + target_rot * Vec3::Z * orbit.distance;

    let lerp_speed = (orbit.damping * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_respects_distance_limits() {
        let rig = OrbitCamera::default();
        assert!(rig.distance >= rig.min_distance);
        assert!(rig.distance <= rig.max_distance);
    }
}
