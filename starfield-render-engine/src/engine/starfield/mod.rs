pub mod catalog;
pub mod twinkle;

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use constants::starfield::STAR_SIZE_SCALE;

use crate::engine::mesh::star_quad_mesh::create_star_quad_mesh;
use crate::engine::shaders::StarPointsMaterial;
use catalog::StarCatalog;

/// Marker for the star points entity.
#[derive(Component)]
pub struct Starfield;

/// Handles to the starfield's GPU-side assets.
#[derive(Resource, Default)]
pub struct StarfieldAssets {
    pub material: Handle<StarPointsMaterial>,
}

/// Build the star quad mesh and storage-buffer material from a generated
/// catalog and spawn the points entity. The quads live on a sky sphere far
/// larger than the camera's orbit, so frustum culling is disabled the same
/// way it is for any point cloud that surrounds the viewer.
pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StarPointsMaterial>>,
    catalog: &StarCatalog,
) {
    let mesh = create_star_quad_mesh(catalog.len());

    let positions = catalog
        .positions
        .iter()
        .zip(&catalog.sizes)
        .map(|(position, size)| position.extend(*size))
        .collect();

    // Start every star at its base size; the twinkle system rewrites this
    // buffer every frame.
    let colors = catalog
        .colors
        .iter()
        .zip(&catalog.sizes)
        .map(|(color, size)| Vec4::new(color[0], color[1], color[2], *size))
        .collect();

    let material = StarPointsMaterial {
        positions,
        colors,
        params: Vec4::new(catalog.len() as f32, STAR_SIZE_SCALE, 0.0, 0.0),
    };
    let material_handle = materials.add(material);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material_handle.clone()),
        Transform::IDENTITY,
        NoFrustumCulling,
        Starfield,
    ));

    commands.insert_resource(StarfieldAssets {
        material: material_handle,
    });
}
