// This file is part of Pegfall.
// Copyright (C) 2026 Pegfall contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::Mesh2d;
use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;
use bevy_rapier2d::prelude::{ActiveEvents, Collider, Restitution, RigidBody};
use rand::Rng;

use crate::core::components::{Ball, BallRadius, BodyKind, ObstacleBox};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::rendering::materials::ObstaclePalette;

const BALL_COLOR: Color = Color::srgb(0.9, 0.1, 0.12);

/// Set when a UI element already handled this frame's tap; checked by the
/// world-spawn system before dropping a body at the pointer.
#[derive(Resource, Default, Debug)]
pub struct TapConsumed(pub bool);

/// Runs first each frame to reset [`TapConsumed`].
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct TapClearSet;

/// World-spawn stage; UI tap handlers must run between the two sets.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct TapSpawnSet;

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TapConsumed>()
            .configure_sets(
                Update,
                (TapClearSet, TapSpawnSet).chain().in_set(PrePhysicsSet),
            )
            .add_systems(
                Update,
                (
                    clear_tap_consumed.in_set(TapClearSet),
                    spawn_on_tap.in_set(TapSpawnSet),
                ),
            );
    }
}

fn clear_tap_consumed(mut tap: ResMut<TapConsumed>) {
    tap.0 = false;
}

fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        return cursor_world_pos(camera_q, touch.position());
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(camera_q, cursor)
}

/// Tap handling: edit mode places a static obstacle box at the pointer,
/// play mode drops a ball there. UI taps were consumed upstream.
#[allow(clippy::too_many_arguments)]
fn spawn_on_tap(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    tap_consumed: Res<TapConsumed>,
    session: Res<crate::gameplay::session::Session>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    palette: Option<Res<ObstaclePalette>>,
    cfg: Res<GameConfig>,
) {
    if tap_consumed.0 {
        return;
    }
    let pressed =
        buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some();
    if !pressed {
        return;
    }
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else {
        return;
    };

    if session.editing {
        spawn_obstacle_box(
            &mut commands,
            &mut meshes,
            &mut materials,
            palette.as_deref(),
            &cfg,
            world_pos,
        );
    } else {
        spawn_ball(&mut commands, &mut meshes, &mut materials, &cfg, world_pos);
    }
}

fn spawn_ball(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
    cfg: &GameConfig,
    pos: Vec2,
) {
    let radius = cfg.ball.radius;
    let mesh = meshes.add(Mesh::from(Circle { radius }));
    commands.spawn((
        BodyKind::Ball,
        Ball,
        BallRadius(radius),
        Mesh2d::from(mesh),
        MeshMaterial2d(materials.add(BALL_COLOR)),
        Transform::from_xyz(pos.x, pos.y, 0.0),
        RigidBody::Dynamic,
        Collider::ball(radius),
        Restitution::coefficient(cfg.ball.restitution),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

fn spawn_obstacle_box(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
    palette: Option<&ObstaclePalette>,
    cfg: &GameConfig,
    pos: Vec2,
) {
    let mut rng = rand::thread_rng();
    let oc = &cfg.obstacle;
    let width = if oc.width_min < oc.width_max {
        rng.gen_range(oc.width_min..oc.width_max)
    } else {
        oc.width_min
    };
    let rotation = if oc.max_rotation > 0.0 {
        rng.gen_range(0.0..oc.max_rotation)
    } else {
        0.0
    };
    let material = match palette {
        Some(p) if !p.0.is_empty() => p.0[rng.gen_range(0..p.0.len())].clone(),
        _ => materials.add(Color::srgb(
            rng.gen::<f32>() * 0.9 + 0.1,
            rng.gen::<f32>() * 0.9 + 0.1,
            rng.gen::<f32>() * 0.9 + 0.1,
        )),
    };
    let mesh = meshes.add(Mesh::from(Rectangle::new(width, oc.height)));
    commands.spawn((
        BodyKind::Obstacle,
        ObstacleBox,
        Mesh2d::from(mesh),
        MeshMaterial2d(material),
        Transform::from_xyz(pos.x, pos.y, 0.0).with_rotation(Quat::from_rotation_z(rotation)),
        RigidBody::Fixed,
        Collider::cuboid(width * 0.5, oc.height * 0.5),
    ));
}
