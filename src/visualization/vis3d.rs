//! 3D viewer
//!
//! One sphere per body on the XZ plane, an angled camera looking at the
//! origin, and the containment boundary drawn as a ring. `R` re-reads the
//! scenario file and rebuilds everything from scratch.

use bevy::math::primitives::Sphere;
use bevy::prelude::*;

use std::path::PathBuf;

use log::{error, info};

use crate::configuration::config::load_scenario;
use crate::simulation::integrator::step;
use crate::simulation::scenario::Scenario;

/// Component tagging each sphere with its body index into `Scenario::system`
#[derive(Component)]
struct BodyIndex3(pub usize);

/// Path of the YAML file this scenario came from, for the reload key
#[derive(Resource)]
struct SourcePath3(PathBuf);

/// Camera offset from the origin, in world units before scaling
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 6.0, 8.0);

pub fn run_3d(scenario: Scenario, source: PathBuf) {
    info!(
        "run_3d: starting 3D viewer with {} bodies",
        scenario.system.bodies().len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(SourcePath3(source))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (
                reload_3d,
                physics_step_3d,
                sync_transforms_3d,
                draw_boundary_3d,
            ),
        )
        .run();
}

/// Startup system: spawn camera, light, and one sphere per body
fn setup_3d(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let scale = scenario.scale;

    // Angled view onto the simulation plane, not directly above
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.02, 0.02, 0.05)),
            ..Default::default()
        },
        transform: Transform::from_translation(CAMERA_OFFSET * scale)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // Basic point light above the plane
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 10000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 8.0 * scale, 0.0),
        ..Default::default()
    });

    spawn_bodies_3d(&mut commands, &scenario, &mut meshes, &mut materials);
}

fn spawn_bodies_3d(
    commands: &mut Commands,
    scenario: &Scenario,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let scale = scenario.scale;

    for (i, (body, style)) in scenario
        .system
        .bodies()
        .iter()
        .zip(scenario.styles.iter())
        .enumerate()
    {
        // Minimum visual radius so tiny bodies are still visible
        let radius_screen = style.radius.max(0.02) * scale;

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius_screen).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(style.color[0], style.color[1], style.color[2]),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    (body.x.x as f32) * scale,
                    (body.x.y as f32) * scale,
                    (body.x.z as f32) * scale,
                ),
                ..Default::default()
            },
            BodyIndex3(i),
        ));
    }
}

/// Per-frame physics integration
fn physics_step_3d(mut scenario: ResMut<Scenario>) {
    let Scenario {
        system,
        parameters,
        forces,
        jitter,
        ..
    } = &mut *scenario;

    let dt = parameters.h0;
    step(system, forces, parameters, jitter, dt);
}

fn sync_transforms_3d(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex3, &mut Transform)>,
) {
    let scale = scenario.scale;
    for (BodyIndex3(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies().get(*i) {
            transform.translation = Vec3::new(
                (b.x.x as f32) * scale,
                (b.x.y as f32) * scale,
                (b.x.z as f32) * scale,
            );
        }
    }
}

fn draw_boundary_3d(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    gizmos.circle(
        Vec3::ZERO,
        Dir3::Y,
        scenario.parameters.boundary_radius as f32 * scenario.scale,
        Color::srgb(0.25, 0.25, 0.3),
    );
}

/// Re-read the scenario file and rebuild the whole bundle on `R`.
fn reload_3d(
    keys: Res<ButtonInput<KeyCode>>,
    source: Res<SourcePath3>,
    mut scenario: ResMut<Scenario>,
    mut commands: Commands,
    existing: Query<Entity, With<BodyIndex3>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }

    let cfg = match load_scenario(&source.0) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("reload failed: {e}");
            return;
        }
    };
    match Scenario::build(&cfg) {
        Ok(rebuilt) => {
            for entity in &existing {
                commands.entity(entity).despawn();
            }
            *scenario = rebuilt;
            spawn_bodies_3d(&mut commands, &scenario, &mut meshes, &mut materials);
            info!("reloaded scenario from {}", source.0.display());
        }
        Err(e) => error!("scenario rebuild failed: {e}"),
    }
}
