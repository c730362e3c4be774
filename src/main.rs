// This file is part of Pegfall.
// Copyright (C) 2026 Pegfall contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use clap::Parser;

use pegfall::core::board::BoardLayout;
use pegfall::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(name = "pegfall", about = "Pachinko-style physics toy")]
struct Cli {
    /// Base config file; a sibling `.local.ron` layer overrides it when present.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
    /// Board layout file (bouncer / slot placements).
    #[arg(long, default_value = "assets/boards/classic.ron")]
    board: String,
}

fn main() {
    let cli = Cli::parse();

    // Config layers: defaults <- base file <- local override file.
    let mut layers = vec![std::path::PathBuf::from(&cli.config)];
    layers.extend(GameConfig::local_layer(&cli.config));
    let (cfg, used, errors) = GameConfig::load_layered(&layers);
    let (board, board_err) = BoardLayout::load_or_classic(&cli.board);

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(board)
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .add_systems(Startup, move |_: Commands| {
            // Deferred until tracing is installed by DefaultPlugins.
            for layer in &used {
                info!("config layer applied: {layer}");
            }
            for e in &errors {
                warn!("config: {e}");
            }
            if let Some(e) = &board_err {
                warn!("board: {e}; using built-in classic board");
            }
        })
        .run();
}
