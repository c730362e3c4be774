use bevy::prelude::*;

#[derive(Resource)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}
