use bevy::prelude::*;

/// Per-session mutable state. Owned by the app world as a single resource;
/// the scoring dispatcher mutates `score`, the edit toggle flips `editing`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub score: i32,
    pub editing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            editing: false,
        }
    }
}
