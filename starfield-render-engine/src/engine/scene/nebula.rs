/// Procedural nebula synthesis: layered sine noise baked into a texture on
/// a slowly rotating translucent sphere.
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

use constants::nebula::{
    DARK_NEBULA_COLOR, DARK_NEBULA_OPACITY, NEBULA_BASE_FREQUENCY, NEBULA_COUNT, NEBULA_DISTANCE,
    NEBULA_FILAMENT_EXPONENT, NEBULA_OCTAVES, NEBULA_PERSISTENCE, NEBULA_RADIUS,
    NEBULA_ROTATION_RATE, NEBULA_TEXTURE_SIZE, NEBULA_TURBULENCE, REFLECTION_NEBULA_COLOR,
    REFLECTION_NEBULA_OPACITY,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NebulaKind {
    /// Dense absorptive dust, warm palette, alpha-blended.
    Dark,
    /// Scattered starlight, cool palette, additive at very low opacity.
    Reflection,
}

#[derive(Component)]
pub struct Nebula {
    pub axis: Dir3,
    pub rotation_rate: f32,
}

/// Normalized intensity field for one nebula raster: four octaves of
/// sine-based noise plus a turbulence term, rescaled to [0,1] over the
/// raster, then sharpened with a power curve to bring out filaments.
pub fn synthesize_intensity_field(seed: u64) -> Vec<f32> {
    let size = NEBULA_TEXTURE_SIZE;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let phases: Vec<(f32, f32)> = (0..NEBULA_OCTAVES)
        .map(|_| (rng.random_range(0.0..TAU), rng.random_range(0.0..TAU)))
        .collect();

    let mut field = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let u = x as f32 / size as f32;
            let v = y as f32 / size as f32;

            let mut value = 0.0;
            let mut amplitude = 1.0;
            let mut frequency = NEBULA_BASE_FREQUENCY;
            for (phase_x, phase_y) in &phases {
                value += amplitude * sine_noise(u * frequency + phase_x, v * frequency + phase_y);
                amplitude *= NEBULA_PERSISTENCE;
                frequency *= 2.0;
            }
            value += NEBULA_TURBULENCE * turbulence(u, v, phases[0]);
            field.push(value);
        }
    }

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for value in &field {
        min = min.min(*value);
        max = max.max(*value);
    }
    let range = (max - min).max(f32::EPSILON);
    for value in &mut field {
        *value = ((*value - min) / range).powf(NEBULA_FILAMENT_EXPONENT);
    }
    field
}

fn sine_noise(x: f32, y: f32) -> f32 {
    (x * TAU).sin() * (y * TAU).sin()
        + 0.5 * ((x + y) * TAU).sin()
        + 0.3 * ((x * 1.7 - y * 2.3) * TAU).sin()
}

/// Stacked rectified sines; the inner sine warps the phase so the streaks
/// wander instead of forming straight bands.
fn turbulence(u: f32, v: f32, (phase_x, phase_y): (f32, f32)) -> f32 {
    let mut sum = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = NEBULA_BASE_FREQUENCY * 2.0;
    for _ in 0..NEBULA_OCTAVES {
        let warp = (v * frequency * 0.31 * TAU + phase_y).sin();
        sum += amplitude * (u * frequency * TAU + warp + phase_x).sin().abs();
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    sum
}

/// Bake one nebula raster into an RGBA8 image with the palette and opacity
/// of the given kind.
pub fn synthesize_nebula_texture(kind: NebulaKind, seed: u64) -> Image {
    let field = synthesize_intensity_field(seed);
    let (palette, opacity) = match kind {
        NebulaKind::Dark => (DARK_NEBULA_COLOR, DARK_NEBULA_OPACITY),
        NebulaKind::Reflection => (REFLECTION_NEBULA_COLOR, REFLECTION_NEBULA_OPACITY),
    };

    let mut data = Vec::with_capacity(field.len() * 4);
    for intensity in &field {
        data.push(to_byte(palette[0] * intensity));
        data.push(to_byte(palette[1] * intensity));
        data.push(to_byte(palette[2] * intensity));
        data.push(to_byte(intensity * opacity));
    }

    Image::new(
        Extent3d {
            width: NEBULA_TEXTURE_SIZE as u32,
            height: NEBULA_TEXTURE_SIZE as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Spawn the nebula instances: textured unlit spheres scattered around the
/// field, alternating dark and reflection kinds, each with its own slow
/// rotation axis.
pub fn spawn_nebulae(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    images: &mut ResMut<Assets<Image>>,
    seed: u64,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for index in 0..NEBULA_COUNT {
        let kind = if index % 2 == 0 {
            NebulaKind::Dark
        } else {
            NebulaKind::Reflection
        };
        let texture = images.add(synthesize_nebula_texture(
            kind,
            seed.wrapping_add(index as u64),
        ));

        let alpha_mode = match kind {
            NebulaKind::Dark => AlphaMode::Blend,
            NebulaKind::Reflection => AlphaMode::Add,
        };
        let material = materials.add(StandardMaterial {
            base_color_texture: Some(texture),
            unlit: true,
            alpha_mode,
            cull_mode: None,
            double_sided: true,
            ..default()
        });

        let radius = rng.random_range(NEBULA_RADIUS.0..NEBULA_RADIUS.1);
        let distance = rng.random_range(NEBULA_DISTANCE.0..NEBULA_DISTANCE.1);
        let direction = random_unit_vector(&mut rng);

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(48, 24))),
            MeshMaterial3d(material),
            Transform::from_translation(direction * distance),
            Nebula {
                axis: Dir3::new(random_unit_vector(&mut rng)).unwrap_or(Dir3::Y),
                rotation_rate: rng.random_range(NEBULA_ROTATION_RATE.0..NEBULA_ROTATION_RATE.1),
            },
        ));
    }

    info!("spawned {} nebulae", NEBULA_COUNT);
}

fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let z = rng.random_range(-1.0_f32..1.0);
    let theta = rng.random_range(0.0..TAU);
    let planar = (1.0 - z * z).sqrt();
    Vec3::new(planar * theta.cos(), z, planar * theta.sin())
}

/// Each nebula drifts around its own axis every frame.
pub fn rotate_nebulae(time: Res<Time>, mut query: Query<(&mut Transform, &Nebula)>) {
    for (mut transform, nebula) in &mut query {
        transform.rotate_axis(nebula.axis, nebula.rotation_rate * time.delta_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_covers_the_raster_and_stays_in_unit_range() {
        let field = synthesize_intensity_field(11);
        assert_eq!(field.len(), NEBULA_TEXTURE_SIZE * NEBULA_TEXTURE_SIZE);
        for value in &field {
            assert!(value.is_finite());
            assert!((0.0..=1.0).contains(value), "intensity {value} escaped");
        }
    }

    #[test]
    fn field_is_deterministic_per_seed() {
        assert_eq!(synthesize_intensity_field(5), synthesize_intensity_field(5));
    }

    #[test]
    fn texture_bytes_are_complete_and_alpha_bounded() {
        let image = synthesize_nebula_texture(NebulaKind::Reflection, 3);
        let data = image.data.as_ref().expect("image data present");
        assert_eq!(data.len(), NEBULA_TEXTURE_SIZE * NEBULA_TEXTURE_SIZE * 4);

        let alpha_ceiling = (REFLECTION_NEBULA_OPACITY * 255.0).ceil() as u8;
        for texel in data.chunks_exact(4) {
            assert!(texel[3] <= alpha_ceiling);
        }
    }

    #[test]
    fn dark_palette_is_warmer_than_reflection() {
        // Red dominates the dark-nebula palette; blue dominates reflection.
        assert!(DARK_NEBULA_COLOR[0] > DARK_NEBULA_COLOR[2]);
        assert!(REFLECTION_NEBULA_COLOR[2] > REFLECTION_NEBULA_COLOR[0]);
    }
}
