use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier2d::render::{DebugRenderContext, RapierDebugRenderPlugin};

use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & gravity

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Startup, configure_gravity);
        #[cfg(feature = "debug")]
        {
            app.add_plugins(RapierDebugRenderPlugin::default().disabled())
                .add_systems(Startup, apply_debug_render_flag);
        }
    }
}

// RapierConfiguration lives on the context entity the plugin spawns in
// PreStartup, hence the query instead of a resource.
fn configure_gravity(mut q: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    for mut rapier_cfg in q.iter_mut() {
        rapier_cfg.gravity = Vect::new(0.0, cfg.gravity.y);
    }
}

#[cfg(feature = "debug")]
fn apply_debug_render_flag(cfg: Res<GameConfig>, ctx: Option<ResMut<DebugRenderContext>>) {
    if let Some(mut c) = ctx {
        c.enabled = cfg.rapier_debug;
    }
}
