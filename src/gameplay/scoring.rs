// This file is part of Pegfall.
// Copyright (C) 2026 Pegfall contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;
use std::collections::HashSet;

use crate::core::components::BodyKind;
use crate::core::system::system_order::PostPhysicsSet;
use crate::gameplay::session::Session;

/// Emitted after a ball is consumed by a slot; drives the burst effect.
#[derive(Event, Debug, Clone, Copy)]
pub struct BallRemoved {
    pub position: Vec2,
    pub delta: i32,
}

/// Which side of a Rapier contact pair carried the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSide {
    A,
    B,
}

/// A contact that changes the score and consumes the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContact {
    pub ball_side: ContactSide,
    pub delta: i32,
}

/// Score delta awarded by the body a ball touched. `None` means the ball
/// survives the contact (bouncers, obstacles, other balls).
fn slot_delta(kind: BodyKind) -> Option<i32> {
    match kind {
        BodyKind::GoodSlot => Some(1),
        BodyKind::BadSlot => Some(-1),
        BodyKind::Ball | BodyKind::Bouncer | BodyKind::Obstacle => None,
    }
}

/// Classify one contact pair. Side A is checked for the ball first, then
/// side B; bodies without a `BodyKind` (arena walls, decorations) never
/// match. Either/or dispatch only: two balls never both carry slot tags.
pub fn resolve_contact(a: Option<BodyKind>, b: Option<BodyKind>) -> Option<ScoringContact> {
    if a == Some(BodyKind::Ball) {
        slot_delta(b?).map(|delta| ScoringContact {
            ball_side: ContactSide::A,
            delta,
        })
    } else if b == Some(BodyKind::Ball) {
        slot_delta(a?).map(|delta| ScoringContact {
            ball_side: ContactSide::B,
            delta,
        })
    } else {
        None
    }
}

pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BallRemoved>()
            .init_resource::<Session>()
            .add_systems(Update, handle_scoring_contacts.in_set(PostPhysicsSet));
    }
}

/// Drain this step's contact events, apply score deltas and remove scored
/// balls. Removal is idempotent within a step: a ball contacting two slots
/// in the same frame scores exactly once.
pub fn handle_scoring_contacts(
    mut commands: Commands,
    mut contacts: EventReader<CollisionEvent>,
    mut session: ResMut<Session>,
    mut removed: EventWriter<BallRemoved>,
    kinds: Query<&BodyKind>,
    transforms: Query<&GlobalTransform>,
    mut consumed: Local<HashSet<Entity>>,
) {
    consumed.clear();
    for ev in contacts.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        let kind_a = kinds.get(*e1).ok().copied();
        let kind_b = kinds.get(*e2).ok().copied();
        let Some(scoring) = resolve_contact(kind_a, kind_b) else {
            continue;
        };
        let ball = match scoring.ball_side {
            ContactSide::A => *e1,
            ContactSide::B => *e2,
        };
        if !consumed.insert(ball) {
            // Second slot contact for the same ball this step; already gone.
            continue;
        }
        session.score += scoring.delta;
        let position = transforms
            .get(ball)
            .map(|tf| tf.translation().truncate())
            .unwrap_or_default();
        removed.write(BallRemoved {
            position,
            delta: scoring.delta,
        });
        commands.entity(ball).despawn();
        debug!(
            "ball {ball:?} scored {delta:+} (score now {score})",
            delta = scoring.delta,
            score = session.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BodyKind::*;

    #[test]
    fn ball_into_good_slot_scores_plus_one() {
        let s = resolve_contact(Some(Ball), Some(GoodSlot)).expect("scoring contact");
        assert_eq!(s.delta, 1);
        assert_eq!(s.ball_side, ContactSide::A);
    }

    #[test]
    fn ball_into_bad_slot_scores_minus_one() {
        let s = resolve_contact(Some(Ball), Some(BadSlot)).expect("scoring contact");
        assert_eq!(s.delta, -1);
        assert_eq!(s.ball_side, ContactSide::A);
    }

    #[test]
    fn ball_side_b_detected() {
        let s = resolve_contact(Some(GoodSlot), Some(Ball)).expect("scoring contact");
        assert_eq!(s.delta, 1);
        assert_eq!(s.ball_side, ContactSide::B);
    }

    #[test]
    fn ball_against_bouncer_or_obstacle_survives() {
        assert_eq!(resolve_contact(Some(Ball), Some(Bouncer)), None);
        assert_eq!(resolve_contact(Some(Ball), Some(Obstacle)), None);
        assert_eq!(resolve_contact(Some(Bouncer), Some(Ball)), None);
        assert_eq!(resolve_contact(Some(Obstacle), Some(Ball)), None);
    }

    #[test]
    fn ball_against_untagged_body_survives() {
        assert_eq!(resolve_contact(Some(Ball), None), None);
        assert_eq!(resolve_contact(None, Some(Ball)), None);
    }

    #[test]
    fn ball_against_ball_is_ignored() {
        // Side A matches first; side B is then a ball, not a slot.
        assert_eq!(resolve_contact(Some(Ball), Some(Ball)), None);
    }

    #[test]
    fn no_ball_means_no_action() {
        assert_eq!(resolve_contact(Some(GoodSlot), Some(BadSlot)), None);
        assert_eq!(resolve_contact(Some(Bouncer), Some(GoodSlot)), None);
        assert_eq!(resolve_contact(None, None), None);
        assert_eq!(resolve_contact(None, Some(BadSlot)), None);
    }
}
