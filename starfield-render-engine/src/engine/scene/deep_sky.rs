/// Deep-space decoration: faint distant galaxies and a few hand-placed
/// reference spheres that give the orbit some depth cues.
use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

use constants::render_settings::{
    GALAXY_BRIGHTNESS, GALAXY_COUNT, GALAXY_RADIUS, GALAXY_SIZE, REFERENCE_SPHERES,
};

#[derive(Component)]
pub struct DistantGalaxy;

#[derive(Component)]
pub struct ReferenceSphere;

pub fn spawn_deep_sky(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    seed: u64,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for _ in 0..GALAXY_COUNT {
        let latitude = rng.random_range(-1.0_f32..1.0).asin();
        let longitude = rng.random_range(0.0..TAU);
        let direction = Vec3::new(
            latitude.cos() * longitude.cos(),
            latitude.sin(),
            latitude.cos() * longitude.sin(),
        );
        let radius = rng.random_range(GALAXY_RADIUS.0..GALAXY_RADIUS.1);
        let brightness = rng.random_range(GALAXY_BRIGHTNESS.0..GALAXY_BRIGHTNESS.1);
        let size = rng.random_range(GALAXY_SIZE.0..GALAXY_SIZE.1);

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(size).mesh().uv(16, 10))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(
                    brightness * 1.1,
                    brightness,
                    brightness * 1.3,
                    (brightness * 3.0).min(1.0),
                ),
                unlit: true,
                alpha_mode: AlphaMode::Add,
                ..default()
            })),
            Transform::from_translation(direction * radius),
            DistantGalaxy,
        ));
    }

    for (position, radius) in REFERENCE_SPHERES {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(*radius).mesh().uv(24, 14))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.35, 0.36, 0.42),
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::from_translation(*position),
            ReferenceSphere,
        ));
    }

    info!(
        "spawned {} distant galaxies and {} reference spheres",
        GALAXY_COUNT,
        REFERENCE_SPHERES.len()
    );
}
