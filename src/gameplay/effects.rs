use bevy::prelude::Mesh2d;
use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;
use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsSet;
use crate::gameplay::scoring::BallRemoved;

const PARTICLE_Z: f32 = 5.0;
const PARTICLE_RADIUS: f32 = 4.0;

/// Shared mesh/material handles for removal bursts. Only inserted when
/// effects are enabled; every consumer treats its absence as "skip".
#[derive(Resource)]
pub struct BurstAssets {
    mesh: Handle<Mesh>,
    materials: Vec<Handle<ColorMaterial>>,
}

#[derive(Component)]
struct BurstParticle {
    velocity: Vec2,
    age: f32,
    lifetime: f32,
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_burst_assets).add_systems(
            Update,
            (
                spawn_bursts.in_set(PostPhysicsSet),
                update_burst_particles,
            ),
        );
    }
}

fn setup_burst_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    if !cfg.effects.enabled {
        return;
    }
    let mesh = meshes.add(Mesh::from(Circle {
        radius: PARTICLE_RADIUS,
    }));
    // Ember gradient for the fire-style burst.
    let materials = vec![
        materials.add(Color::srgb(1.0, 0.85, 0.25)),
        materials.add(Color::srgb(1.0, 0.55, 0.10)),
        materials.add(Color::srgb(0.95, 0.25, 0.05)),
    ];
    commands.insert_resource(BurstAssets { mesh, materials });
}

/// Spawn a radial particle burst where each removed ball last was.
/// Best-effort: with no `BurstAssets` resource the event is dropped
/// silently; removal itself already happened in the scoring system.
fn spawn_bursts(
    mut commands: Commands,
    mut removed: EventReader<BallRemoved>,
    assets: Option<Res<BurstAssets>>,
    cfg: Res<GameConfig>,
) {
    let Some(assets) = assets else {
        removed.clear();
        return;
    };
    let fx = &cfg.effects;
    let mut rng = rand::thread_rng();
    for ev in removed.read() {
        for i in 0..fx.particle_count {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(0.3..1.0) * fx.particle_speed;
            let material = assets.materials[i % assets.materials.len()].clone();
            commands.spawn((
                BurstParticle {
                    velocity: Vec2::from_angle(angle) * speed,
                    age: 0.0,
                    lifetime: rng.gen_range(0.5..1.0) * fx.particle_lifetime,
                },
                Mesh2d::from(assets.mesh.clone()),
                MeshMaterial2d(material),
                Transform::from_xyz(ev.position.x, ev.position.y, PARTICLE_Z),
            ));
        }
    }
}

fn update_burst_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut BurstParticle, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut tf) in q.iter_mut() {
        particle.age += dt;
        if particle.age >= particle.lifetime {
            commands.entity(entity).despawn();
            continue;
        }
        tf.translation += (particle.velocity * dt).extend(0.0);
        // Shrink out over the lifetime.
        let remaining = 1.0 - particle.age / particle.lifetime;
        tf.scale = Vec3::splat(remaining.max(0.0));
    }
}
