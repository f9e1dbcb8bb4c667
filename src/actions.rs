//! Mode-independent button actions.

use crate::feedback::Cue;
use crate::input::InputFrame;
use crate::mode::ControlMode;
use crate::state::{Context, ControlState, Session};
use crate::types::{Buttons, Vec3};

/// What the power button did this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum PowerChange {
    Unchanged,
    TurnedOn,
    TurnedOff,
}

/// Handle the power toggle.
///
/// Turning on only sets `power_on`; turning off applies [`power_off`].
pub fn toggle_power(ctx: &mut Context<'_>, frame: &InputFrame) -> PowerChange {
    if !frame.edge(Buttons::POWER) {
        return PowerChange::Unchanged;
    }

    if ctx.state.power_on {
        power_off(ctx.state, ctx.session);
        info!("power off");
        PowerChange::TurnedOff
    } else {
        ctx.state.power_on = true;
        info!("power on");
        PowerChange::TurnedOn
    }
}

/// Return every motion field to neutral and switch power off.
///
/// Idempotent. Gait, speed, balance and the walk options survive so the
/// robot comes back the way the operator left it.
pub fn power_off(state: &mut ControlState, session: &mut Session) {
    state.body_position = Vec3::ZERO;
    state.body_rotation = Vec3::ZERO;
    state.travel = Vec3::ZERO;
    state.selected_leg = None;
    state.power_on = false;

    session.body_height_offset = 0;
    session.body_height_shift = 0;
    session.resume_leg = None;
    session.mode = ControlMode::Walk;
}

/// Balance, stand/sit, body height and speed. Only runs while powered.
pub fn apply_common(ctx: &mut Context<'_>, frame: &InputFrame) {
    let config = ctx.config;

    if frame.edge(Buttons::BALANCE) {
        ctx.state.balance_mode = !ctx.state.balance_mode;
        ctx.cues.notify(if ctx.state.balance_mode {
            Cue::BalanceOn
        } else {
            Cue::BalanceOff
        });
    }

    let session = &mut *ctx.session;
    if frame.edge(Buttons::STAND_SIT) {
        session.body_height_offset = if session.body_height_offset > 0 {
            0
        } else {
            config.stand_height
        };
    }
    if frame.level(Buttons::PAD_UP) {
        session.body_height_offset = session.body_height_offset.saturating_add(config.height_step);
    }
    if frame.level(Buttons::PAD_DOWN) {
        session.body_height_offset = session.body_height_offset.saturating_sub(config.height_step);
    }

    // Speed control is a step delay: "left" slows the gait down.
    let speed = ctx.state.speed_control;
    if frame.level(Buttons::PAD_RIGHT) {
        ctx.state.speed_control = ctx.state.speed_control.saturating_sub(config.speed_step);
    }
    if frame.level(Buttons::PAD_LEFT) {
        ctx.state.speed_control = ctx
            .state
            .speed_control
            .saturating_add(config.speed_step)
            .min(config.speed_max);
    }
    if ctx.state.speed_control != speed {
        ctx.cues.notify(Cue::SpeedStep);
        trace!("speed control {}", ctx.state.speed_control);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::DEFAULT_CONFIG;
    use crate::testing::{IdlePlayer, RecordingCues};

    struct Fixture {
        state: ControlState,
        session: Session,
        cues: RecordingCues,
        player: IdlePlayer,
    }

    impl Fixture {
        fn powered() -> Self {
            let mut state = ControlState::new(&DEFAULT_CONFIG);
            state.power_on = true;
            Self {
                state,
                session: Session::new(),
                cues: RecordingCues::default(),
                player: IdlePlayer::default(),
            }
        }

        fn ctx(&mut self) -> Context<'_> {
            Context {
                state: &mut self.state,
                session: &mut self.session,
                config: &DEFAULT_CONFIG,
                cues: &mut self.cues,
                player: &mut self.player,
            }
        }
    }

    fn frame(pressed: Buttons, held: Buttons) -> InputFrame {
        InputFrame {
            held: held | pressed,
            pressed,
            ..InputFrame::neutral()
        }
    }

    #[test]
    fn test_power_on_touches_nothing_else() {
        let mut fx = Fixture::powered();
        fx.state.power_on = false;
        fx.state.gait_type = 3;
        let before = fx.state;

        let change = toggle_power(&mut fx.ctx(), &frame(Buttons::POWER, Buttons::NONE));
        assert_eq!(change, PowerChange::TurnedOn);
        assert_eq!(
            fx.state,
            ControlState {
                power_on: true,
                ..before
            }
        );
    }

    #[test]
    fn test_power_off_resets_motion() {
        let mut fx = Fixture::powered();
        fx.state.body_position = Vec3::new(5, 40, -3);
        fx.state.body_rotation = Vec3::new(1, 2, 3);
        fx.state.travel = Vec3::new(-50, 7, 20);
        fx.state.selected_leg = Some(4);
        fx.session.mode = ControlMode::SingleLeg;
        fx.session.body_height_offset = 35;
        fx.session.body_height_shift = 12;

        let change = toggle_power(&mut fx.ctx(), &frame(Buttons::POWER, Buttons::NONE));
        assert_eq!(change, PowerChange::TurnedOff);
        assert!(!fx.state.power_on);
        assert_eq!(fx.state.body_position, Vec3::ZERO);
        assert_eq!(fx.state.body_rotation, Vec3::ZERO);
        assert_eq!(fx.state.travel, Vec3::ZERO);
        assert_eq!(fx.state.selected_leg_raw(), 255);
        assert_eq!(fx.session.body_height_offset, 0);
        assert_eq!(fx.session.body_height_shift, 0);
        assert_eq!(fx.session.mode, ControlMode::Walk);
    }

    #[test]
    fn test_power_off_is_idempotent() {
        let mut fx = Fixture::powered();
        fx.state.travel = Vec3::new(9, 9, 9);
        fx.session.body_height_offset = 20;

        power_off(&mut fx.state, &mut fx.session);
        let (state, session) = (fx.state, fx.session);
        power_off(&mut fx.state, &mut fx.session);
        assert_eq!(fx.state, state);
        assert_eq!(fx.session, session);
    }

    #[test]
    fn test_balance_toggle_cues() {
        let mut fx = Fixture::powered();
        apply_common(&mut fx.ctx(), &frame(Buttons::BALANCE, Buttons::NONE));
        assert!(fx.state.balance_mode);
        apply_common(&mut fx.ctx(), &frame(Buttons::BALANCE, Buttons::NONE));
        assert!(!fx.state.balance_mode);
        assert_eq!(fx.cues.cues, std::vec![Cue::BalanceOn, Cue::BalanceOff]);
    }

    #[test]
    fn test_stand_sit_toggle() {
        let mut fx = Fixture::powered();
        apply_common(&mut fx.ctx(), &frame(Buttons::STAND_SIT, Buttons::NONE));
        assert_eq!(fx.session.body_height_offset, 35);
        apply_common(&mut fx.ctx(), &frame(Buttons::STAND_SIT, Buttons::NONE));
        assert_eq!(fx.session.body_height_offset, 0);

        fx.session.body_height_offset = -20;
        apply_common(&mut fx.ctx(), &frame(Buttons::STAND_SIT, Buttons::NONE));
        assert_eq!(fx.session.body_height_offset, 35);
    }

    #[test]
    fn test_height_pads_repeat_while_held() {
        let mut fx = Fixture::powered();
        for _ in 0..3 {
            apply_common(&mut fx.ctx(), &frame(Buttons::NONE, Buttons::PAD_UP));
        }
        assert_eq!(fx.session.body_height_offset, 30);

        apply_common(&mut fx.ctx(), &frame(Buttons::NONE, Buttons::PAD_DOWN));
        assert_eq!(fx.session.body_height_offset, 20);
    }

    #[test]
    fn test_speed_stays_in_range() {
        let mut fx = Fixture::powered();
        for _ in 0..100 {
            apply_common(&mut fx.ctx(), &frame(Buttons::PAD_LEFT, Buttons::PAD_LEFT));
            assert!(fx.state.speed_control <= 2000);
        }
        assert_eq!(fx.state.speed_control, 2000);

        for _ in 0..100 {
            apply_common(&mut fx.ctx(), &frame(Buttons::NONE, Buttons::PAD_RIGHT));
        }
        assert_eq!(fx.state.speed_control, 0);
    }

    #[test]
    fn test_speed_cue_only_on_change() {
        let mut fx = Fixture::powered();
        fx.state.speed_control = 0;
        apply_common(&mut fx.ctx(), &frame(Buttons::NONE, Buttons::PAD_RIGHT));
        assert!(fx.cues.cues.is_empty());

        apply_common(&mut fx.ctx(), &frame(Buttons::NONE, Buttons::PAD_LEFT));
        assert_eq!(fx.state.speed_control, 50);
        assert_eq!(fx.cues.cues, std::vec![Cue::SpeedStep]);
    }
}
