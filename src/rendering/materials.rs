use bevy::prelude::*;

use crate::rendering::palette::OBSTACLE_COLORS;

/// Shared material handles for obstacle boxes, created once at startup so
/// each placed box reuses a palette entry instead of allocating a material.
#[derive(Resource)]
pub struct ObstaclePalette(pub Vec<Handle<ColorMaterial>>);

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_obstacle_palette);
    }
}

fn setup_obstacle_palette(mut materials: ResMut<Assets<ColorMaterial>>, mut commands: Commands) {
    let mut handles = Vec::with_capacity(OBSTACLE_COLORS.len());
    for c in OBSTACLE_COLORS.iter().copied() {
        handles.push(materials.add(c));
    }
    commands.insert_resource(ObstaclePalette(handles));
}
