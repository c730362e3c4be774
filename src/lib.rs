// This file is part of Pegfall.
// Copyright (C) 2026 Pegfall contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::core::board::{BoardLayout, SlotKind};
pub use crate::core::components::{Ball, BallRadius, BodyKind};
pub use crate::core::config::{GameConfig, WindowConfig};
pub use app::game::GamePlugin;
pub use gameplay::session::Session;
