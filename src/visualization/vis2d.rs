//! Top-down 2D viewer
//!
//! Renders the XZ simulation plane onto screen XY, one circle per body
//! using its configured style. `R` re-reads the scenario file and rebuilds
//! everything from scratch.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use std::path::PathBuf;

use log::{error, info};

use crate::configuration::config::load_scenario;
use crate::simulation::integrator::step;
use crate::simulation::scenario::Scenario;

/// Component tagging each circle with its body index into `Scenario::system`
#[derive(Component)]
struct BodyIndex(pub usize);

/// Path of the YAML file this scenario came from, for the reload key
#[derive(Resource)]
struct SourcePath(PathBuf);

pub fn run_2d(scenario: Scenario, source: PathBuf) {
    info!(
        "run_2d: starting 2D viewer with {} bodies",
        scenario.system.bodies().len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(SourcePath(source))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                reload_system,
                physics_step_system,
                sync_transforms_system,
                draw_boundary_system,
            ),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera looking straight down the simulation plane
    commands.spawn(Camera2dBundle::default());
    spawn_bodies(&mut commands, &scenario, &mut meshes, &mut materials);
}

fn spawn_bodies(
    commands: &mut Commands,
    scenario: &Scenario,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
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
        let color = Color::srgb(style.color[0], style.color[1], style.color[2]);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(color)),
                // sim XZ plane -> screen XY
                transform: Transform::from_xyz(
                    body.x.x as f32 * scale,
                    body.x.z as f32 * scale,
                    0.0,
                ),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
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

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = scenario.scale;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies().get(*i) {
            transform.translation.x = (b.x.x as f32) * scale;
            transform.translation.y = (b.x.z as f32) * scale;
        }
    }
}

fn draw_boundary_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    gizmos.circle_2d(
        Vec2::ZERO,
        scenario.parameters.boundary_radius as f32 * scenario.scale,
        Color::srgb(0.25, 0.25, 0.3),
    );
}

/// Re-read the scenario file and rebuild the whole bundle on `R`.
fn reload_system(
    keys: Res<ButtonInput<KeyCode>>,
    source: Res<SourcePath>,
    mut scenario: ResMut<Scenario>,
    mut commands: Commands,
    existing: Query<Entity, With<BodyIndex>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
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
            spawn_bodies(&mut commands, &scenario, &mut meshes, &mut materials);
            info!("reloaded scenario from {}", source.0.display());
        }
        Err(e) => error!("scenario rebuild failed: {e}"),
    }
}
