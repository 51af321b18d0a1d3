use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use starfield_render_engine::engine::{
    camera::orbit_camera::{camera_controller, spawn_orbit_camera},
    core::window_config::create_window_config,
    scene::{
        deep_sky::spawn_deep_sky,
        nebula::{rotate_nebulae, spawn_nebulae},
    },
    shaders::StarPointsMaterial,
    starfield::{
        catalog::StarCatalog,
        spawn_starfield,
        twinkle::animate_starfield,
    },
    systems::fps_tracking::{fps_text_update_system, spawn_fps_text},
};

use constants::starfield::{STAR_COUNT, WORLD_SEED};

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<StarPointsMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                camera_controller,
                animate_starfield,
                rotate_nebulae,
                fps_text_update_system,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Build the whole scene up front: star catalog and points entity, nebulae,
/// deep-sky decoration, lighting, camera and the FPS overlay.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut star_materials: ResMut<Assets<StarPointsMaterial>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let catalog = StarCatalog::generate(STAR_COUNT, WORLD_SEED);
    info!("generated star catalog: {} stars", catalog.len());

    spawn_starfield(&mut commands, &mut meshes, &mut star_materials, &catalog);
    spawn_nebulae(
        &mut commands,
        &mut meshes,
        &mut standard_materials,
        &mut images,
        WORLD_SEED.wrapping_add(1),
    );
    spawn_deep_sky(
        &mut commands,
        &mut meshes,
        &mut standard_materials,
        WORLD_SEED.wrapping_add(2),
    );
    spawn_lighting(&mut commands);
    spawn_orbit_camera(&mut commands);
    spawn_fps_text(&mut commands);

    commands.insert_resource(catalog);
}

/// A single dim directional light so the lit reference spheres read as
/// solid; everything else in the scene is unlit.
fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 400.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}
