use bevy::prelude::Mesh2d;
use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;
use bevy_rapier2d::prelude::{ActiveEvents, Collider, Restitution, RigidBody, Sensor};

use crate::core::board::{BoardLayout, SlotKind};
use crate::core::components::{BodyKind, SlotGlow};
use crate::core::config::GameConfig;

// Z layering: board furniture under balls (0.0), glow under its slot base.
const SLOT_GLOW_Z: f32 = -0.2;
const SLOT_BASE_Z: f32 = -0.1;

// Quarter turn per ten seconds, forever.
const SLOT_GLOW_SPIN_RATE: f32 = std::f32::consts::FRAC_PI_2 / 10.0;

const WALL_THICKNESS: f32 = 20.0;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_board)
            .add_systems(Update, spin_slot_glows);
    }
}

fn spawn_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
    layout: Res<BoardLayout>,
) {
    spawn_arena_walls(&mut commands, &cfg);

    let bouncer_material = materials.add(Color::srgb(0.55, 0.75, 0.95));
    for bouncer in &layout.bouncers {
        let mesh = meshes.add(Mesh::from(Circle {
            radius: bouncer.radius,
        }));
        commands.spawn((
            BodyKind::Bouncer,
            Mesh2d::from(mesh),
            MeshMaterial2d(bouncer_material.clone()),
            Transform::from_xyz(bouncer.pos.x, bouncer.pos.y, 0.0),
            RigidBody::Fixed,
            Collider::ball(bouncer.radius),
            Restitution::coefficient(cfg.bouncer.restitution),
        ));
    }

    for slot in &layout.slots {
        let (kind, base_color, glow_color) = match slot.kind {
            SlotKind::Good => (
                BodyKind::GoodSlot,
                Color::srgb(0.10, 0.75, 0.30),
                Color::srgba(0.30, 1.0, 0.45, 0.35),
            ),
            SlotKind::Bad => (
                BodyKind::BadSlot,
                Color::srgb(0.85, 0.15, 0.15),
                Color::srgba(1.0, 0.35, 0.30, 0.35),
            ),
        };
        let half: Vec2 = slot.half_extents.into();
        let base_mesh = meshes.add(Mesh::from(Rectangle::new(half.x * 2.0, half.y * 2.0)));
        commands.spawn((
            kind,
            Mesh2d::from(base_mesh),
            MeshMaterial2d(materials.add(base_color)),
            Transform::from_xyz(slot.pos.x, slot.pos.y, SLOT_BASE_Z),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
        ));
        // Decorative spinning glow, a sibling so the base's collider
        // transform never rotates with it.
        let glow_side = half.max_element() * 2.4;
        let glow_mesh = meshes.add(Mesh::from(Rectangle::new(glow_side, glow_side)));
        commands.spawn((
            SlotGlow,
            Mesh2d::from(glow_mesh),
            MeshMaterial2d(materials.add(glow_color)),
            Transform::from_xyz(slot.pos.x, slot.pos.y, SLOT_GLOW_Z),
        ));
    }

    info!(
        "board ready: {} bouncers, {} slots",
        layout.bouncers.len(),
        layout.slots.len()
    );
}

/// Static colliders boxing in the window, standing in for the original
/// scene-edge loop. Untagged: contacts with walls never score.
fn spawn_arena_walls(commands: &mut Commands, cfg: &GameConfig) {
    let half_w = cfg.window.width * 0.5;
    let half_h = cfg.window.height * 0.5;
    let walls = [
        // floor / ceiling
        (
            Vec2::new(0.0, -half_h - WALL_THICKNESS),
            Vec2::new(half_w + WALL_THICKNESS * 2.0, WALL_THICKNESS),
        ),
        (
            Vec2::new(0.0, half_h + WALL_THICKNESS),
            Vec2::new(half_w + WALL_THICKNESS * 2.0, WALL_THICKNESS),
        ),
        // left / right
        (
            Vec2::new(-half_w - WALL_THICKNESS, 0.0),
            Vec2::new(WALL_THICKNESS, half_h + WALL_THICKNESS * 2.0),
        ),
        (
            Vec2::new(half_w + WALL_THICKNESS, 0.0),
            Vec2::new(WALL_THICKNESS, half_h + WALL_THICKNESS * 2.0),
        ),
    ];
    for (pos, half_extents) in walls {
        commands.spawn((
            Transform::from_xyz(pos.x, pos.y, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
        ));
    }
}

fn spin_slot_glows(time: Res<Time>, mut q: Query<&mut Transform, With<SlotGlow>>) {
    let angle = SLOT_GLOW_SPIN_RATE * time.delta_secs();
    for mut tf in q.iter_mut() {
        tf.rotate_z(angle);
    }
}
