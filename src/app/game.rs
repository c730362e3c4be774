// This file is part of Pegfall.
// Copyright (C) 2026 Pegfall contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::{PostPhysicsSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::board::BoardPlugin;
use crate::gameplay::effects::EffectsPlugin;
use crate::gameplay::hud::HudPlugin;
use crate::gameplay::scoring::ScoringPlugin;
use crate::interaction::input::pointer::PointerInputPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::materials::MaterialsPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsSet.after(PrePhysicsSet)),
        )
        .add_systems(Startup, log_config_warnings)
        .add_plugins((
            CameraPlugin,
            MaterialsPlugin,
            PhysicsSetupPlugin,
            BoardPlugin,
            PointerInputPlugin,
            ScoringPlugin,
            EffectsPlugin,
            HudPlugin,
            DebugPlugin,
            AutoClosePlugin,
        ));
    }
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for warning in cfg.validate() {
        warn!("config: {warning}");
    }
}
