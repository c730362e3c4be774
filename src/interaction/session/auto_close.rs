use crate::core::config::GameConfig;
use bevy::prelude::*;

/// Countdown armed from `window.autoClose`; absent when the session is
/// unlimited.
#[derive(Resource, Deref, DerefMut)]
struct SessionDeadline(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_deadline)
            .add_systems(Update, expire_session);
    }
}

fn arm_session_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!("session limited to {secs}s by window.autoClose");
        commands.insert_resource(SessionDeadline(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn expire_session(
    time: Res<Time>,
    mut deadline: Option<ResMut<SessionDeadline>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(deadline) = deadline.as_mut() {
        deadline.tick(time.delta());
        if deadline.just_finished() {
            info!("session deadline reached; exiting");
            ev_exit.write(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session_app(auto_close: f32) -> App {
        let mut app = App::new();
        let mut cfg = GameConfig::default();
        cfg.window.auto_close = auto_close;
        app.insert_resource(cfg);
        app.init_resource::<Time>();
        app.add_event::<AppExit>();
        app.add_systems(Startup, arm_session_deadline)
            .add_systems(Update, expire_session);
        app
    }

    #[test]
    fn unlimited_session_never_arms_a_deadline() {
        let mut app = session_app(0.0);
        app.update();
        assert!(app.world().get_resource::<SessionDeadline>().is_none());
        assert!(app.world().resource::<Events<AppExit>>().is_empty());
    }

    #[test]
    fn deadline_requests_exit_once_elapsed() {
        let mut app = session_app(0.5);
        app.update();
        assert!(
            app.world().get_resource::<SessionDeadline>().is_some(),
            "positive autoClose must arm the deadline"
        );
        assert!(app.world().resource::<Events<AppExit>>().is_empty());

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(600));
        app.update();
        assert!(
            !app.world().resource::<Events<AppExit>>().is_empty(),
            "expected an AppExit after the deadline elapsed"
        );
    }
}
