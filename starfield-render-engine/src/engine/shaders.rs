/// Star points shader material with per-star storage buffers
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

/// Per-star data bound on the material. `positions` is written once at
/// generation time; `colors` is rewritten every frame by the twinkle system
/// and re-uploaded when the asset is marked modified.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct StarPointsMaterial {
    /// xyz = world position, w = base quad size
    #[storage(0, read_only)]
    pub positions: Vec<Vec4>,

    /// rgb = twinkled color, w = current quad size
    #[storage(1, read_only)]
    pub colors: Vec<Vec4>,

    /// x = star count, y = global size scale
    #[uniform(2)]
    pub params: Vec4,
}

impl Material for StarPointsMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/star_points.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/star_points.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}
