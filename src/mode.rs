//! Control mode state machine.
//!
//! The transition table lives in [`ControlMode::on_trigger`], a pure
//! function of the current mode, the trigger and the guard inputs. The
//! cycle-level driver [`apply_transitions`] evaluates the triggers in a
//! fixed order against one input frame and applies the side effects of
//! entering and leaving modes (leg selection, sequence index).

use crate::feedback::Cue;
use crate::input::InputFrame;
use crate::state::{Context, MANDIBLE_INDEX};
use crate::types::Buttons;

/// Control mode. [`ControlMode::Walk`] is the initial mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Sticks drive the travel vector.
    #[default]
    Walk,
    /// Sticks shift the body.
    Translate,
    /// Sticks rotate the body.
    Rotate,
    /// Sticks move one leg or the mandible/tail.
    SingleLeg,
    /// Select and start prerecorded sequences.
    #[cfg(feature = "gp-player")]
    GpPlayer,
}

/// Button-derived request to change mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    Translate,
    Rotate,
    SingleLeg,
    #[cfg(feature = "gp-player")]
    GpPlayer,
}

/// Conditions some transitions depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guards {
    /// Travel vector is within the deadzone.
    pub stationary: bool,
    /// A leg selection is waiting to be resumed.
    pub leg_remembered: bool,
}

impl ControlMode {
    /// Mode to switch to for `trigger`, or `None` if the request is ignored.
    #[must_use]
    pub fn on_trigger(self, trigger: Trigger, guards: Guards) -> Option<ControlMode> {
        let leave = if guards.leg_remembered {
            ControlMode::SingleLeg
        } else {
            ControlMode::Walk
        };

        match (trigger, self) {
            // Shift stays disabled during fine leg positioning.
            (Trigger::Translate, ControlMode::SingleLeg) => None,
            (Trigger::Translate, ControlMode::Translate) => Some(leave),
            (Trigger::Translate, _) => Some(ControlMode::Translate),

            (Trigger::Rotate, ControlMode::Rotate) => Some(leave),
            (Trigger::Rotate, _) => Some(ControlMode::Rotate),

            (Trigger::SingleLeg, _) if !guards.stationary => None,
            (Trigger::SingleLeg, ControlMode::SingleLeg) => Some(ControlMode::Walk),
            (Trigger::SingleLeg, _) => Some(ControlMode::SingleLeg),

            #[cfg(feature = "gp-player")]
            (Trigger::GpPlayer, ControlMode::GpPlayer) => Some(ControlMode::Walk),
            #[cfg(feature = "gp-player")]
            (Trigger::GpPlayer, _) => Some(ControlMode::GpPlayer),
        }
    }
}

/// Triggers in evaluation order with the button that fires each.
#[cfg(feature = "gp-player")]
const TRIGGERS: &[(Buttons, Trigger)] = &[
    (Buttons::SHIFT, Trigger::Translate),
    (Buttons::ROTATE, Trigger::Rotate),
    (Buttons::SINGLE_LEG, Trigger::SingleLeg),
    (Buttons::GP_PLAYER, Trigger::GpPlayer),
];

#[cfg(not(feature = "gp-player"))]
const TRIGGERS: &[(Buttons, Trigger)] = &[
    (Buttons::SHIFT, Trigger::Translate),
    (Buttons::ROTATE, Trigger::Rotate),
    (Buttons::SINGLE_LEG, Trigger::SingleLeg),
];

/// Evaluate every mode trigger pressed in `frame`.
///
/// Later triggers see the mode left by earlier ones.
pub fn apply_transitions(ctx: &mut Context<'_>, frame: &InputFrame) {
    for &(button, trigger) in TRIGGERS {
        if !frame.edge(button) {
            continue;
        }

        let guards = Guards {
            stationary: ctx.state.is_stationary(ctx.config.travel_dead_zone),
            leg_remembered: ctx.session.resume_leg.is_some(),
        };
        let from = ctx.session.mode;

        match from.on_trigger(trigger, guards) {
            Some(to) => {
                enter(ctx, from, to);
                ctx.cues.notify(Cue::ModeChange);
                debug!("mode {:?} -> {:?}", from, to);
            }
            None => trace!("{:?} ignored in {:?}", trigger, from),
        }
    }
}

fn enter(ctx: &mut Context<'_>, from: ControlMode, to: ControlMode) {
    if from == ControlMode::SingleLeg && to != ControlMode::Walk {
        // Interrupted, not finished: keep the selection for the way back.
        ctx.session.resume_leg = ctx.state.selected_leg.take();
    }

    match to {
        ControlMode::Walk => {
            ctx.state.selected_leg = None;
            ctx.session.resume_leg = None;
        }
        ControlMode::SingleLeg => {
            let leg = ctx.session.resume_leg.take().unwrap_or(MANDIBLE_INDEX);
            ctx.state.selected_leg = Some(leg);
        }
        #[cfg(feature = "gp-player")]
        ControlMode::GpPlayer => ctx.session.gp_sequence = 0,
        ControlMode::Translate | ControlMode::Rotate => {}
    }

    ctx.session.mode = to;
}
