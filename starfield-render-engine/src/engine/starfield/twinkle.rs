use bevy::prelude::*;

use constants::starfield::{TWINKLE_COLOR_FRACTION, TWINKLE_DEPTH, TWINKLE_MIN};

use crate::engine::shaders::StarPointsMaterial;

use super::StarfieldAssets;
use super::catalog::StarCatalog;

/// Golden angle in radians, used to spread per-star phase offsets so that
/// neighbouring indices never twinkle in sync.
const PHASE_SPREAD: f32 = 2.399_963_2;

/// Scintillation multiplier for one star at a point in time. Pure function
/// of its inputs, so a frame can be reproduced exactly for a fixed time.
/// The sine excursion scales with the star's magnitude (bright stars
/// twinkle more) and the result never drops below `TWINKLE_MIN`.
pub fn twinkle_factor(elapsed: f32, index: usize, rate: f32, magnitude: f32) -> f32 {
    let phase = index as f32 * PHASE_SPREAD;
    let oscillation = (elapsed * rate + phase).sin();
    (1.0 + TWINKLE_DEPTH * magnitude * oscillation).max(TWINKLE_MIN)
}

/// Per-frame animation: rewrite each star's entry in the material's dynamic
/// storage buffer with a twinkled size and a gently perturbed color.
/// Mutating the material asset marks it for re-upload this frame.
pub fn animate_starfield(
    time: Res<Time>,
    catalog: Res<StarCatalog>,
    assets: Res<StarfieldAssets>,
    mut materials: ResMut<Assets<StarPointsMaterial>>,
) {
    let Some(material) = materials.get_mut(&assets.material) else {
        return;
    };

    let elapsed = time.elapsed_secs();
    for index in 0..catalog.len() {
        let factor = twinkle_factor(
            elapsed,
            index,
            catalog.twinkle_rates[index],
            catalog.magnitudes[index],
        );
        let color_factor = 1.0 + (factor - 1.0) * TWINKLE_COLOR_FRACTION;
        let [r, g, b] = catalog.colors[index];
        material.colors[index] = Vec4::new(
            (r * color_factor).clamp(0.0, 1.0),
            (g * color_factor).clamp(0.0, 1.0),
            (b * color_factor).clamp(0.0, 1.0),
            catalog.sizes[index] * factor,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn factor_is_deterministic() {
        let a = twinkle_factor(12.5, 341, 2.1, 0.8);
        let b = twinkle_factor(12.5, 341, 2.1, 0.8);
        assert_relative_eq!(a, b);
    }

    #[test]
    fn factor_stays_within_clamp_range() {
        for step in 0..10_000 {
            let elapsed = step as f32 * 0.013;
            let factor = twinkle_factor(elapsed, step, 3.7, 1.0);
            assert!(factor >= TWINKLE_MIN, "factor {factor} below clamp");
            assert!(
                factor <= 1.0 + TWINKLE_DEPTH,
                "factor {factor} above excursion bound"
            );
        }
    }

    #[test]
    fn dim_stars_barely_twinkle() {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for step in 0..1_000 {
            let factor = twinkle_factor(step as f32 * 0.07, 12, 1.9, 0.05);
            min = min.min(factor);
            max = max.max(factor);
        }
        // At magnitude 0.05 the excursion is 5% of the full depth.
        assert!(max - min <= 2.0 * TWINKLE_DEPTH * 0.05 + 1e-4);
    }

    #[test]
    fn adjacent_stars_are_out_of_phase() {
        let a = twinkle_factor(0.0, 100, 1.0, 1.0);
        let b = twinkle_factor(0.0, 101, 1.0, 1.0);
        assert!((a - b).abs() > 1e-3);
    }
}
