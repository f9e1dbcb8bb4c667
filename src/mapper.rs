//! Per-mode input mapping.
//!
//! All arithmetic is integer and truncates toward zero, matching what the
//! gait engine was tuned against. `d(axis)` below is the axis deflection
//! from center, in [-128, 127].

use crate::feedback::Cue;
use crate::input::InputFrame;
use crate::mode::ControlMode;
use crate::state::{Context, MANDIBLE_INDEX};
use crate::types::{Axis, Buttons};

/// Map the sticks and mode buttons of `frame` for the current mode.
pub fn map_inputs(ctx: &mut Context<'_>, frame: &InputFrame) {
    // Only Translate and Rotate drive the height shift.
    ctx.session.body_height_shift = 0;

    match ctx.session.mode {
        ControlMode::Walk => walk(ctx, frame),
        ControlMode::Translate => translate(ctx, frame),
        ControlMode::Rotate => rotate(ctx, frame),
        ControlMode::SingleLeg => single_leg(ctx, frame),
        #[cfg(feature = "gp-player")]
        ControlMode::GpPlayer => gp_player(ctx, frame),
    }
}

/// Walking pace for the gait engine: the larger the biggest deflection,
/// the shorter the delay. Right stick Y is not considered.
#[must_use]
pub fn input_time_delay(frame: &InputFrame) -> u8 {
    let largest = frame
        .deflection(Axis::LeftX)
        .unsigned_abs()
        .max(frame.deflection(Axis::LeftY).unsigned_abs())
        .max(frame.deflection(Axis::RightX).unsigned_abs());
    // Deflection magnitude never exceeds 128.
    (128 - largest) as u8
}

fn walk(ctx: &mut Context<'_>, frame: &InputFrame) {
    let config = ctx.config;

    if frame.edge(Buttons::SELECT) && ctx.state.is_stationary(config.travel_dead_zone) {
        let next = ctx.state.gait_type + 1;
        if next < config.num_gaits {
            ctx.state.gait_type = next;
            ctx.cues.notify(Cue::GaitNext);
        } else {
            ctx.state.gait_type = 0;
            ctx.cues.notify(Cue::GaitWrap);
        }
        debug!("gait {}", ctx.state.gait_type);
    }

    let session = &mut *ctx.session;
    if frame.edge(Buttons::R1) {
        session.double_height = !session.double_height;
        ctx.state.leg_lift_height = if session.double_height {
            config.double_leg_lift_height
        } else {
            config.leg_lift_height
        };
        ctx.cues.notify(Cue::Toggle);
    }
    if frame.edge(Buttons::R2) {
        session.double_travel = !session.double_travel;
        ctx.cues.notify(Cue::Toggle);
    }
    if frame.edge(Buttons::R3) {
        session.walk_method = !session.walk_method;
        ctx.cues.notify(Cue::Toggle);
    }

    let travel = &mut ctx.state.travel;
    if session.walk_method {
        travel.z = frame.deflection(Axis::RightY);
    } else {
        travel.x = -frame.deflection(Axis::LeftX);
        travel.z = frame.deflection(Axis::LeftY);
    }
    if !session.double_travel {
        travel.x /= 2;
        travel.z /= 2;
    }
    travel.y = -frame.deflection(Axis::RightX) / 4;
}

fn translate(ctx: &mut Context<'_>, frame: &InputFrame) {
    let lx = frame.deflection(Axis::LeftX);
    let ly = frame.deflection(Axis::LeftY);
    let rx = frame.deflection(Axis::RightX);
    let ry = frame.deflection(Axis::RightY);

    let state = &mut *ctx.state;
    state.body_position.x = lx / 2;
    state.body_position.z = -ly / 3;
    state.body_rotation.y = rx * 2;
    ctx.session.body_height_shift = -ry / 2;

    state.mandible_position.x = ry * 2;
    state.mandible_position.z = -lx * 2;
    state.tail_position.x = ly * 2;
    state.tail_position.y = rx * 2;
}

fn rotate(ctx: &mut Context<'_>, frame: &InputFrame) {
    let lx = frame.deflection(Axis::LeftX);

    let state = &mut *ctx.state;
    state.body_rotation.x = frame.deflection(Axis::LeftY);
    state.body_rotation.y = frame.deflection(Axis::RightX) * 2;
    state.body_rotation.z = lx;
    ctx.session.body_height_shift = -frame.deflection(Axis::RightY) / 2;

    state.mandible_position.z = -lx * 2;
}

fn single_leg(ctx: &mut Context<'_>, frame: &InputFrame) {
    if frame.edge(Buttons::SELECT) {
        ctx.state.selected_leg = Some(match ctx.state.selected_leg {
            Some(leg) if leg < MANDIBLE_INDEX => leg + 1,
            _ => 0,
        });
        ctx.cues.notify(Cue::LegSelect);
        debug!("selected leg {}", ctx.state.selected_leg_raw());
    }

    if ctx.state.selected_leg == Some(MANDIBLE_INDEX) {
        mandible(ctx, frame);
    } else {
        let offset = &mut ctx.state.single_leg_offset;
        offset.x = frame.deflection(Axis::LeftX) / 2;
        offset.y = frame.deflection(Axis::RightY) / 10;
        offset.z = frame.deflection(Axis::LeftY) / 2;
    }

    if frame.edge(Buttons::R2) {
        ctx.state.single_leg_hold = !ctx.state.single_leg_hold;
        ctx.cues.notify(Cue::Toggle);
    }
}

/// Mandible slot: R1 closes, L1 (the shift key) opens, sticks aim.
fn mandible(ctx: &mut Context<'_>, frame: &InputFrame) {
    let config = ctx.config;
    let step = config.mandible_closure_step;
    let closure = &mut ctx.state.mandible_closure;

    if frame.level(Buttons::R1) {
        closure.x = config.mandible_left.clamp(closure.x.saturating_add(step));
        closure.y = config.mandible_right.clamp(closure.y.saturating_add(step));
    }
    if frame.level(Buttons::SHIFT) {
        closure.x = config.mandible_left.clamp(closure.x.saturating_sub(step));
        closure.y = config.mandible_right.clamp(closure.y.saturating_sub(step));
    }

    let ry = frame.deflection(Axis::RightY);
    let rx = frame.deflection(Axis::RightX);
    let state = &mut *ctx.state;
    state.mandible_position.x = -ry * 2;
    state.tail_position.x = -ry * 2;
    state.mandible_position.y = rx * 2;
    state.tail_position.y = rx * 2;
    state.mandible_position.z = frame.deflection(Axis::LeftX) * 2;
}

#[cfg(feature = "gp-player")]
fn gp_player(ctx: &mut Context<'_>, frame: &InputFrame) {
    let session = &mut *ctx.session;

    if frame.edge(Buttons::SELECT) && !ctx.player.is_sequence_active() {
        if session.gp_sequence + 1 < ctx.config.gp_sequence_count {
            session.gp_sequence += 1;
            ctx.cues.notify(Cue::SequenceNext);
        } else {
            session.gp_sequence = 0;
            ctx.cues.notify(Cue::SequenceWrap);
        }
    }

    if frame.edge(Buttons::R2) {
        debug!("start sequence {}", session.gp_sequence);
        ctx.player.start_sequence(session.gp_sequence);
    }
}
