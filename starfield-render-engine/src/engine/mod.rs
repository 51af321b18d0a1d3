pub mod camera;
pub mod core;
pub mod mesh;
pub mod scene;
pub mod shaders;
pub mod starfield;
pub mod systems;
