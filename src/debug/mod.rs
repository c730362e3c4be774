//! Debug module: feature gated periodic state logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod state;

#[cfg(feature = "debug")]
pub use state::DebugState;

#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<state::DebugState>().add_systems(
            Update,
            logging::debug_logging_system.after(PostPhysicsSet),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
