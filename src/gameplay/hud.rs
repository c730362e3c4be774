use bevy::prelude::*;
use bevy::ui::{AlignItems, JustifyContent, Node};

use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::session::Session;
use crate::interaction::input::pointer::{TapClearSet, TapConsumed, TapSpawnSet};

#[derive(Component)]
struct ScoreLabel;

#[derive(Component)]
struct EditToggleButton;

#[derive(Component)]
struct EditToggleLabel;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            (
                // Between tap-clear and world spawn so a button press
                // consumes the tap before anything drops underneath it.
                handle_edit_toggle
                    .in_set(PrePhysicsSet)
                    .after(TapClearSet)
                    .before(TapSpawnSet),
                refresh_hud_text.run_if(resource_changed::<Session>),
            ),
        );
    }
}

fn spawn_hud(mut commands: Commands) {
    // Score, top-right.
    commands.spawn((
        ScoreLabel,
        Text::new("Score: 0"),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(24.0),
            right: Val::Px(44.0),
            ..default()
        },
    ));

    // Edit toggle, top-left.
    commands
        .spawn((
            EditToggleButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(24.0),
                left: Val::Px(44.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.6)),
        ))
        .with_children(|p| {
            p.spawn((
                EditToggleLabel,
                Text::new("Edit"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Flip edit mode on button press and consume the tap so nothing spawns
/// under the button this frame.
fn handle_edit_toggle(
    mut session: ResMut<Session>,
    mut tap_consumed: ResMut<TapConsumed>,
    mut q_btn: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<EditToggleButton>),
    >,
) {
    for (interaction, mut bg) in q_btn.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                session.editing = !session.editing;
                tap_consumed.0 = true;
                *bg = BackgroundColor(Color::srgba(0.15, 0.15, 0.25, 0.8));
                info!(
                    "edit mode {}",
                    if session.editing { "on" } else { "off" }
                );
            }
            Interaction::Hovered => {
                *bg = BackgroundColor(Color::srgba(0.08, 0.08, 0.12, 0.7));
            }
            Interaction::None => {
                *bg = BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.6));
            }
        }
    }
}

/// Re-render labels only when the session actually changed, so repeated
/// frames without a delta never touch the text.
fn refresh_hud_text(
    session: Res<Session>,
    mut q_score: Query<&mut Text, (With<ScoreLabel>, Without<EditToggleLabel>)>,
    mut q_edit: Query<&mut Text, (With<EditToggleLabel>, Without<ScoreLabel>)>,
) {
    if let Ok(mut text) = q_score.single_mut() {
        let rendered = format!("Score: {}", session.score);
        if text.as_str() != rendered {
            *text = Text::new(rendered);
        }
    }
    if let Ok(mut text) = q_edit.single_mut() {
        let label = if session.editing { "Done" } else { "Edit" };
        if text.as_str() != label {
            *text = Text::new(label);
        }
    }
}
