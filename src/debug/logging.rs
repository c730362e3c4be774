use bevy::prelude::*;

use super::state::DebugState;
use crate::core::components::{Ball, ObstacleBox};
use crate::gameplay::session::Session;

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    session: Res<Session>,
    q_balls: Query<(), With<Ball>>,
    q_boxes: Query<(), With<ObstacleBox>>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "SIM frame={} t={:.3}s balls={} obstacles={} score={} editing={}",
            state.frame_counter,
            time.elapsed_secs(),
            q_balls.iter().count(),
            q_boxes.iter().count(),
            session.score,
            session.editing
        );
    }
}
