use bevy::prelude::*;

/// Colors cycled through for edit-mode obstacle boxes.
pub const OBSTACLE_COLORS: [Color; 6] = [
    Color::srgb(1.0, 0.15, 0.20),  // Vivid warm red
    Color::srgb(0.10, 0.60, 1.0),  // Electric blue
    Color::srgb(1.0, 1.0, 0.25),   // Bright lemon yellow
    Color::srgb(0.15, 0.95, 0.55), // Bright spring green
    Color::srgb(0.85, 0.35, 1.0),  // Violet
    Color::srgb(1.0, 0.55, 0.10),  // Amber
];
