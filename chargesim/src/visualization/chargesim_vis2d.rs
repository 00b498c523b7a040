use std::collections::{HashMap, HashSet};
use std::time::Duration;

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::ParticleId;
use crate::simulation::vector::Vec2 as SimVec2;

/// Links a render entity to the particle it draws
#[derive(Component)]
struct ParticleSprite(ParticleId);

/// Render entity per live particle
#[derive(Resource, Default)]
struct SpriteIndex(HashMap<ParticleId, Entity>);

const PAN_SPEED: f32 = 400.0; // world units per second

/// Steps the simulation on Bevy's fixed clock, once per `dt` of wall time
/// Rendering may run faster or slower, the physics rate stays `1 / dt`
pub struct PhysicsPlugin {
    pub dt: f64,
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_secs_f64(self.dt)))
            .add_systems(FixedUpdate, physics_step_system);
    }
}

pub fn run_2d(scenario: Scenario) {
    let dt = scenario.dt;

    let window = Window {
        title: scenario.window.title.clone(),
        resolution: (scenario.window.width, scenario.window.height).into(),
        ..default()
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<SpriteIndex>()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(PhysicsPlugin { dt })
        .add_systems(Startup, setup_camera_system)
        // Input reads per-frame button state, so it stays in Update and the
        // spawned particles join the next fixed step
        .add_systems(
            Update,
            (
                spawn_input_system,
                clear_input_system,
                pan_camera_system,
                sync_sprites_system,
            )
                .chain(),
        )
        .run();
}

fn setup_camera_system(mut commands: Commands, scenario: Res<Scenario>) {
    commands.spawn(Camera2dBundle::default());
    info!(
        "viewer started with {} particles, dt = {}",
        scenario.simulation.len(),
        scenario.dt
    );
}

/// Left click spawns with the configured charge, right click with it negated
fn spawn_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut scenario: ResMut<Scenario>,
) {
    let sign = if buttons.just_pressed(MouseButton::Left) {
        1.0
    } else if buttons.just_pressed(MouseButton::Right) {
        -1.0
    } else {
        return;
    };

    let Ok(window) = windows.get_single() else { return };
    let Some(cursor) = window.cursor_position() else { return };
    let Ok((camera, camera_transform)) = cameras.get_single() else { return };
    let Some(world) = camera.viewport_to_world_2d(camera_transform, cursor) else { return };

    let spawn = scenario.spawn;
    let position = SimVec2::new(world.x as f64, world.y as f64);
    if let Err(err) = scenario
        .simulation
        .spawn(position, sign * spawn.charge, spawn.mass, spawn.radius)
    {
        warn!("click spawn rejected: {err}");
    }
}

fn clear_input_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::KeyC) {
        scenario.simulation.clear();
    }
}

fn pan_camera_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }
    if dir == Vec2::ZERO {
        return;
    }

    let offset = dir.normalize() * PAN_SPEED * time.delta_seconds();
    for mut transform in &mut cameras {
        transform.translation += offset.extend(0.0);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // dt is fixed, frame timing does not feed into the physics
    let dt = scenario.dt;
    scenario.simulation.step(dt);
}

/// Keep one filled circle per live particle in sync with the simulation
fn sync_sprites_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut index: ResMut<SpriteIndex>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(&ParticleSprite, &mut Transform)>,
) {
    let particles = scenario.simulation.particles();

    // Despawn sprites of pruned or cleared particles
    let live: HashSet<ParticleId> = particles.iter().map(|p| p.id()).collect();
    index.0.retain(|id, entity| {
        if live.contains(id) {
            return true;
        }
        commands.entity(*entity).despawn();
        false
    });

    // Spawn sprites for new particles
    for p in particles {
        if index.0.contains_key(&p.id()) {
            continue;
        }
        let entity = commands
            .spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(meshes.add(Circle::new(p.radius() as f32))),
                    material: materials.add(ColorMaterial::from(charge_color(p.charge()))),
                    transform: Transform::from_xyz(p.position().x() as f32, p.position().y() as f32, 0.0),
                    ..default()
                },
                ParticleSprite(p.id()),
            ))
            .id();
        index.0.insert(p.id(), entity);
    }

    let positions: HashMap<ParticleId, SimVec2> = particles.iter().map(|p| (p.id(), p.position())).collect();
    for (ParticleSprite(id), mut transform) in &mut query {
        if let Some(pos) = positions.get(id).filter(|pos| pos.is_finite()) {
            transform.translation.x = pos.x() as f32;
            transform.translation.y = pos.y() as f32;
        }
    }
}

/// Red for positive charge, blue for negative, white for neutral
fn charge_color(charge: f64) -> Color {
    if charge > 0.0 {
        Color::srgb(1.0, 0.0, 0.0)
    } else if charge < 0.0 {
        Color::srgb(0.0, 0.0, 1.0)
    } else {
        Color::WHITE
    }
}
