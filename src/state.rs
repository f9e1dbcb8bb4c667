//! Shared control state and session-local controller state.

use crate::config::ControllerConfig;
use crate::feedback::{CueSink, SequencePlayer};
use crate::mode::ControlMode;
use crate::types::{Vec2, Vec3};

/// Leg index addressing the mandible/tail actuators instead of a leg.
pub const MANDIBLE_INDEX: u8 = 6;

/// Raw leg index meaning "no leg selected".
pub const NO_LEG: u8 = 255;

/// Control state consumed by the gait and inverse-kinematics engines.
///
/// Only the control core writes it; consumers read whole-cycle snapshots.
/// Units and scaling of every field are the ones the gait engine expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// Master enable. While off, motion fields hold neutral.
    pub power_on: bool,
    pub balance_mode: bool,
    /// Selected leg (0-5) or the mandible slot ([`MANDIBLE_INDEX`]).
    pub selected_leg: Option<u8>,
    pub gait_type: u8,
    /// Gait step delay in ms; larger is slower. Kept in [0, speed_max].
    pub speed_control: u16,
    pub leg_lift_height: u8,
    pub body_position: Vec3,
    pub body_rotation: Vec3,
    /// x/z strafe and walk, y rotation in place.
    pub travel: Vec3,
    pub single_leg_offset: Vec3,
    pub single_leg_hold: bool,
    pub mandible_position: Vec3,
    pub mandible_closure: Vec2,
    pub tail_position: Vec2,
    /// Gait pacing derived from the largest stick deflection.
    pub input_time_delay: u8,
}

impl ControlState {
    /// Startup state: powered off, everything centered, no leg selected.
    #[must_use]
    pub const fn new(config: &ControllerConfig) -> Self {
        Self {
            power_on: false,
            balance_mode: false,
            selected_leg: None,
            gait_type: 0,
            speed_control: config.initial_speed,
            leg_lift_height: config.leg_lift_height,
            body_position: Vec3::ZERO,
            body_rotation: Vec3::ZERO,
            travel: Vec3::ZERO,
            single_leg_offset: Vec3::ZERO,
            single_leg_hold: false,
            mandible_position: Vec3::ZERO,
            mandible_closure: Vec2::ZERO,
            tail_position: Vec2::ZERO,
            input_time_delay: 0,
        }
    }

    /// Selected leg as the byte the gait engine expects, [`NO_LEG`] for none.
    #[inline]
    #[must_use]
    pub fn selected_leg_raw(&self) -> u8 {
        self.selected_leg.unwrap_or(NO_LEG)
    }

    /// Whether the travel vector is within the deadzone on every axis.
    ///
    /// Rotation in place counts double.
    #[must_use]
    pub fn is_stationary(&self, dead_zone: i16) -> bool {
        self.travel.x.abs() < dead_zone
            && self.travel.z.abs() < dead_zone
            && self.travel.y.saturating_mul(2).saturating_abs() < dead_zone
    }
}

/// Controller state that never leaves the control core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    pub mode: ControlMode,
    pub double_height: bool,
    pub double_travel: bool,
    /// false: left stick walks/strafes, right stick rotates.
    /// true: right stick walks and rotates, left stick idle.
    pub walk_method: bool,
    pub gp_sequence: u8,
    pub body_height_offset: i16,
    pub body_height_shift: i16,
    /// Leg selection parked while SingleLeg is interrupted by Rotate/Translate.
    pub resume_leg: Option<u8>,
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: ControlMode::Walk,
            double_height: false,
            double_travel: false,
            walk_method: false,
            gp_sequence: 0,
            body_height_offset: 0,
            body_height_shift: 0,
            resume_leg: None,
        }
    }

    /// Body height as published in `body_position.y`, never below ground.
    #[inline]
    #[must_use]
    pub fn body_height(&self) -> i16 {
        self.body_height_offset
            .saturating_add(self.body_height_shift)
            .max(0)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one handling step may read or mutate.
///
/// Built fresh for every cycle from the controller's own fields and the
/// collaborators passed in.
pub struct Context<'a> {
    pub state: &'a mut ControlState,
    pub session: &'a mut Session,
    pub config: &'a ControllerConfig,
    pub cues: &'a mut dyn CueSink,
    pub player: &'a mut dyn SequencePlayer,
}
