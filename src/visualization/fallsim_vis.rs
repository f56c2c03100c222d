use bevy::prelude::*;
use bevy::math::primitives::Cuboid;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use log::info;

use crate::configuration::config::WindowConfig;
use crate::simulation::integrator::euler_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::ticker::{IntervalClock, TickClock};

/// Component tagging the entity carrying the body's mesh
#[derive(Component)]
struct BodyMesh;

/// Fixed-rate scheduler gating each frame; wrapping keeps the clock a plain
/// library type while Bevy owns it as a resource
#[derive(Resource)]
struct FrameTicker(IntervalClock);

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 5.0;

/// Side length of the ground reference slab
const GROUND_EXTENT: f32 = 20.0;

/// Entrypoint: run the viewer until the window closes or escape is pressed
pub fn run_vis(scenario: Scenario, window: WindowConfig) {
    info!(
        "run_vis: starting viewer, dt = {} s, body at {:?}",
        scenario.parameters.time_step, scenario.system.body.x
    );

    let ticker = FrameTicker(IntervalClock::new(scenario.parameters.time_step));

    App::new()
        .insert_resource(scenario)
        .insert_resource(ticker)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window.title.clone(),
                resolution: (window.width as f32, window.height as f32).into(),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, ((tick_system, sync_transform_system).chain(), exit_on_escape))
        .run();
}

/// Startup system: spawn camera, the body's triangle, and the ground slab
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Camera looking at the origin
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.2, 0.3, 0.3)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // The body's mesh: a fixed 3-vertex triangle, uploaded once and placed
    // each frame via the model transform. The physics core never touches
    // the vertex data.
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(triangle_mesh()),
            material: materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 0.5, 0.2),
                unlit: true,
                ..Default::default()
            }),
            transform: body_transform(&scenario),
            ..Default::default()
        },
        BodyMesh,
    ));

    // Thin slab marking the ground plane, for visual reference
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(GROUND_EXTENT, 0.02, GROUND_EXTENT).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.35, 0.35),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, scenario.parameters.ground_level, 0.0),
        ..Default::default()
    });
}

/// The static triangle the body renders as: 3 vertices, 9 position floats
fn triangle_mesh() -> Mesh {
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]],
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; 3])
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, vec![[0.0, 0.0]; 3])
}

/// Per-frame tick: block until the fixed interval elapses, then advance
/// physics by one step. Blocking here keeps render cadence 1:1 with
/// physics cadence.
fn tick_system(mut scenario: ResMut<Scenario>, mut ticker: ResMut<FrameTicker>) {
    ticker.0.wait();

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    euler_step(system, forces, parameters);
}

/// Copy the body's model transform into the render entity
///
/// The transform is taken from the core as a value; the renderer never
/// shares a mutable buffer with the physics state.
fn sync_transform_system(scenario: Res<Scenario>, mut query: Query<&mut Transform, With<BodyMesh>>) {
    for mut transform in &mut query {
        *transform = body_transform(&scenario);
    }
}

/// Convert the core's column-major 4x4 model matrix into a Bevy transform
fn body_transform(scenario: &Scenario) -> Transform {
    let m: [[f32; 4]; 4] = scenario.system.body.model_transform().into();
    Transform::from_matrix(Mat4::from_cols_array_2d(&m))
}

/// Request app exit when escape is pressed; a tick already in flight still
/// finishes its physics step and render submission.
fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("escape pressed, exiting");
        exit.send(AppExit::Success);
    }
}
