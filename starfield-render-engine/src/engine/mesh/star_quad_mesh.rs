use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};

/// Create the star index mesh for GPU-side vertex expansion in the star
/// points shader. Generates triangle-based geometry that expands to
/// screen-aligned quads per star.
pub fn create_star_quad_mesh(star_count: usize) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );

    // 6 vertices per star (2 triangles forming a screen-aligned quad).
    // The vertex shader derives star index and quad corner from the index
    // carried in the position attribute.
    let vertex_count = star_count * 6;
    let indices: Vec<[f32; 3]> = (0..vertex_count).map(|i| [i as f32, 0.0, 0.0]).collect();

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, indices);
    mesh
}
