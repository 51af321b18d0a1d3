use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use constants::starfield::{
    BRIGHT_MAGNITUDE, BRIGHT_SIZE_SCALE, COLOR_JITTER, DENSITY_SKIP_CHANCE, FAINT_MAGNITUDE,
    FAINT_SIZE_SCALE, FAINT_TIER_THRESHOLD, FAR_RADIUS, MID_BAND_FRACTION, MID_RADIUS,
    NEAR_BAND_FRACTION, NEAR_RADIUS, PLANE_SCALE_HEIGHT, TWINKLE_RATE, VISIBLE_MAGNITUDE,
    VISIBLE_SIZE_SCALE, VISIBLE_TIER_THRESHOLD,
};
use constants::stellar::{STELLAR_CLASSES, StellarClass};

/// Parallel per-star buffers generated once at startup. Entries at the same
/// index describe the same star; the render material and the twinkle system
/// both address stars by this index.
#[derive(Resource, Debug, Clone)]
pub struct StarCatalog {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
    pub magnitudes: Vec<f32>,
    pub twinkle_rates: Vec<f32>,
}

impl StarCatalog {
    /// Generate exactly `count` stars from a seed. Candidates rejected by the
    /// galactic-plane falloff or the density-variation skip are re-drawn, so
    /// the buffers always come out at the requested length.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut catalog = Self::with_capacity(count);

        while catalog.len() < count {
            let Some(direction) = sample_sky_direction(&mut rng) else {
                continue;
            };
            let radius = sample_band_radius(&mut rng);
            let class = pick_stellar_class(rng.random::<f32>());
            let (magnitude, size_scale) = sample_brightness_tier(&mut rng);

            catalog.positions.push(direction * radius);
            catalog.colors.push(jitter_color(&mut rng, class.color));
            catalog.sizes.push(class.base_size * size_scale);
            catalog.magnitudes.push(magnitude);
            catalog
                .twinkle_rates
                .push(rng.random_range(TWINKLE_RATE.0..TWINKLE_RATE.1));
        }

        catalog
    }

    fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
            sizes: Vec::with_capacity(count),
            magnitudes: Vec::with_capacity(count),
            twinkle_rates: Vec::with_capacity(count),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Sample a unit direction on the sky sphere, biased toward the galactic
/// plane by an exponential acceptance falloff in latitude. Returns `None`
/// when the candidate is rejected so the caller re-draws.
fn sample_sky_direction<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec3> {
    use std::f32::consts::{FRAC_PI_2, TAU};

    let latitude = rng.random_range(-FRAC_PI_2..FRAC_PI_2);
    let acceptance = (-latitude.abs() / PLANE_SCALE_HEIGHT).exp();
    if rng.random::<f32>() > acceptance {
        return None;
    }
    if rng.random::<f32>() < DENSITY_SKIP_CHANCE {
        return None;
    }

    let longitude = rng.random_range(0.0..TAU);
    Some(Vec3::new(
        latitude.cos() * longitude.cos(),
        latitude.sin(),
        latitude.cos() * longitude.sin(),
    ))
}

/// Pick a distance band (10% near / 20% mid / 70% far) and sample a radius
/// inside it. The three bands give the field its parallax depth.
fn sample_band_radius<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let band = rng.random::<f32>();
    let (min, max) = if band < NEAR_BAND_FRACTION {
        NEAR_RADIUS
    } else if band < NEAR_BAND_FRACTION + MID_BAND_FRACTION {
        MID_RADIUS
    } else {
        FAR_RADIUS
    };
    rng.random_range(min..max)
}

/// Cumulative-weight sampling over the stellar class table.
pub fn pick_stellar_class(roll: f32) -> &'static StellarClass {
    let mut cumulative = 0.0;
    for class in STELLAR_CLASSES {
        cumulative += class.weight;
        if roll < cumulative {
            return class;
        }
    }
    // Weights sum to 1.0; a roll at the very top lands on the last entry.
    &STELLAR_CLASSES[STELLAR_CLASSES.len() - 1]
}

/// Second draw selects a visibility tier biased heavily toward faint stars,
/// yielding a magnitude and a size multiplier for the class base size.
fn sample_brightness_tier<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    let roll = rng.random::<f32>();
    let (magnitude, size_scale) = if roll < FAINT_TIER_THRESHOLD {
        (FAINT_MAGNITUDE, FAINT_SIZE_SCALE)
    } else if roll < VISIBLE_TIER_THRESHOLD {
        (VISIBLE_MAGNITUDE, VISIBLE_SIZE_SCALE)
    } else {
        (BRIGHT_MAGNITUDE, BRIGHT_SIZE_SCALE)
    };
    (
        rng.random_range(magnitude.0..magnitude.1),
        rng.random_range(size_scale.0..size_scale.1),
    )
}

fn jitter_color<R: Rng + ?Sized>(rng: &mut R, color: [f32; 3]) -> [f32; 3] {
    color.map(|channel| {
        let jitter = rng.random_range(1.0 - COLOR_JITTER..1.0 + COLOR_JITTER);
        (channel * jitter).clamp(0.0, 1.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn buffers_have_requested_length() {
        let catalog = StarCatalog::generate(2_000, 42);
        assert_eq!(catalog.len(), 2_000);
        assert_eq!(catalog.positions.len(), 2_000);
        assert_eq!(catalog.colors.len(), 2_000);
        assert_eq!(catalog.sizes.len(), 2_000);
        assert_eq!(catalog.magnitudes.len(), 2_000);
        assert_eq!(catalog.twinkle_rates.len(), 2_000);
    }

    #[test]
    fn zero_count_yields_empty_buffers() {
        let catalog = StarCatalog::generate(0, 42);
        assert!(catalog.is_empty());
    }

    #[test]
    fn colors_stay_in_unit_range() {
        let catalog = StarCatalog::generate(5_000, 7);
        for color in &catalog.colors {
            for channel in color {
                assert!((0.0..=1.0).contains(channel), "channel {channel} escaped");
            }
        }
    }

    #[test]
    fn positions_stay_within_radius_bounds() {
        let catalog = StarCatalog::generate(5_000, 7);
        for position in &catalog.positions {
            let radius = position.length();
            assert!(
                radius >= NEAR_RADIUS.0 && radius <= FAR_RADIUS.1,
                "radius {radius} outside [{}, {}]",
                NEAR_RADIUS.0,
                FAR_RADIUS.1
            );
        }
    }

    #[test]
    fn class_weights_sum_to_one() {
        let total: f32 = STELLAR_CLASSES.iter().map(|class| class.weight).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn class_sampling_converges_to_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let trials = 200_000;
        let mut counts = vec![0usize; STELLAR_CLASSES.len()];
        for _ in 0..trials {
            let class = pick_stellar_class(rng.random::<f32>());
            let index = STELLAR_CLASSES
                .iter()
                .position(|entry| std::ptr::eq(entry, class))
                .unwrap();
            counts[index] += 1;
        }
        for (count, class) in counts.iter().zip(STELLAR_CLASSES) {
            let observed = *count as f32 / trials as f32;
            assert!(
                (observed - class.weight).abs() < 0.01,
                "{}: observed {observed}, expected {}",
                class.name,
                class.weight
            );
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = StarCatalog::generate(500, 1234);
        let b = StarCatalog::generate(500, 1234);
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.colors, b.colors);
        assert_eq!(a.sizes, b.sizes);
    }

    #[test]
    fn sizes_and_magnitudes_are_positive() {
        let catalog = StarCatalog::generate(3_000, 3);
        assert!(catalog.sizes.iter().all(|size| *size > 0.0));
        assert!(
            catalog
                .magnitudes
                .iter()
                .all(|magnitude| (0.0..=1.0).contains(magnitude))
        );
    }
}
