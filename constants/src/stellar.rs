/// Stellar classification palette used for star coloring.
///
/// Colors are linear RGB in [0,1], weights are relative abundances and sum
/// to 1.0 across the table. Abundances roughly follow the solar-neighborhood
/// distribution: dim M dwarfs dominate, hot O/B stars are rare.
pub struct StellarClass {
    pub name: &'static str,
    pub color: [f32; 3],
    pub weight: f32,
    pub base_size: f32,
}

pub const STELLAR_CLASSES: &[StellarClass] = &[
    StellarClass {
        name: "M dwarf",
        color: [1.0, 0.68, 0.52],
        weight: 0.45,
        base_size: 0.8,
    },
    StellarClass {
        name: "K dwarf",
        color: [1.0, 0.79, 0.62],
        weight: 0.20,
        base_size: 0.9,
    },
    StellarClass {
        name: "G dwarf",
        color: [1.0, 0.93, 0.83],
        weight: 0.12,
        base_size: 1.0,
    },
    StellarClass {
        name: "F dwarf",
        color: [1.0, 0.98, 0.95],
        weight: 0.08,
        base_size: 1.1,
    },
    StellarClass {
        name: "A star",
        color: [0.93, 0.95, 1.0],
        weight: 0.06,
        base_size: 1.25,
    },
    StellarClass {
        name: "B star",
        color: [0.78, 0.85, 1.0],
        weight: 0.03,
        base_size: 1.45,
    },
    StellarClass {
        name: "O star",
        color: [0.66, 0.76, 1.0],
        weight: 0.01,
        base_size: 1.7,
    },
    StellarClass {
        name: "red giant",
        color: [1.0, 0.55, 0.38],
        weight: 0.05,
        base_size: 1.6,
    },
];
