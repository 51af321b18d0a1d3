use constants::starfield::{FAR_RADIUS, NEAR_RADIUS};
use starfield_render_engine::engine::starfield::catalog::StarCatalog;

#[test]
fn full_size_catalog_is_well_formed() {
    let count = constants::starfield::STAR_COUNT;
    let catalog = StarCatalog::generate(count, constants::starfield::WORLD_SEED);

    assert_eq!(catalog.len(), count);
    assert_eq!(catalog.colors.len(), count);
    assert_eq!(catalog.sizes.len(), count);
    assert_eq!(catalog.magnitudes.len(), count);
    assert_eq!(catalog.twinkle_rates.len(), count);

    for (position, color) in catalog.positions.iter().zip(&catalog.colors) {
        let radius = position.length();
        assert!(radius >= NEAR_RADIUS.0 && radius <= FAR_RADIUS.1);
        assert!(color.iter().all(|channel| (0.0..=1.0).contains(channel)));
    }
}

#[test]
fn distance_bands_hold_their_proportions() {
    let catalog = StarCatalog::generate(50_000, 8);
    let mut near = 0usize;
    let mut mid = 0usize;
    let mut far = 0usize;
    for position in &catalog.positions {
        let radius = position.length();
        if radius < NEAR_RADIUS.1 {
            near += 1;
        } else if radius < constants::starfield::MID_RADIUS.1 {
            mid += 1;
        } else {
            far += 1;
        }
    }
    let total = catalog.len() as f32;
    assert!((near as f32 / total - 0.10).abs() < 0.02);
    assert!((mid as f32 / total - 0.20).abs() < 0.02);
    assert!((far as f32 / total - 0.70).abs() < 0.02);
}

#[test]
fn plane_bias_concentrates_stars_at_low_latitudes() {
    let catalog = StarCatalog::generate(20_000, 15);
    let low_latitude = catalog
        .positions
        .iter()
        .filter(|position| {
            let latitude = (position.y / position.length()).asin().abs();
            latitude < 0.5
        })
        .count();
    // With a uniform sphere about 48% of stars would sit below 0.5 rad;
    // the exponential plane falloff pushes well past that.
    assert!(low_latitude as f32 / catalog.len() as f32 > 0.55);
}
