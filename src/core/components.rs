use bevy::prelude::*;

/// Classification of every scoring-relevant simulation body, attached at
/// creation and matched exhaustively by the scoring dispatcher.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Transient dynamic body spawned by a non-edit tap.
    Ball,
    /// Static sensor awarding +1 and consuming the ball.
    GoodSlot,
    /// Static sensor awarding -1 and consuming the ball.
    BadSlot,
    /// Static circular obstacle; physical only, never scores.
    Bouncer,
    /// Static box placed in edit mode; physical only, never scores.
    Obstacle,
}

/// Marker component identifying a ball entity (holds physics body & collider).
#[derive(Component)]
pub struct Ball;

/// Logical radius used both for the collider and rendering scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Decorative slot glow sibling; spun slowly by the board plugin.
#[derive(Component)]
pub struct SlotGlow;

/// Marker for edit-mode obstacle boxes.
#[derive(Component)]
pub struct ObstacleBox;
