//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (pointer input / body spawning before Rapier)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysics (contact classification, scoring, removal effects)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // input handled before the physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsSet; // contact events consumed after physics
