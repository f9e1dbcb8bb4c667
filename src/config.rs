//! Tuning constants for the control core.
//!
//! Customize at compile time by creating your own const, starting from
//! [`DEFAULT_CONFIG`] with struct update syntax.

/// Inclusive range a single mandible closure axis is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClosureRange {
    pub min: i16,
    pub max: i16,
}

impl ClosureRange {
    #[inline]
    #[must_use]
    pub fn clamp(self, value: i16) -> i16 {
        value.clamp(self.min, self.max)
    }
}

/// Controller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Travel magnitude below which the walker counts as standing still.
    pub travel_dead_zone: i16,
    /// Consecutive invalid reads tolerated before forcing power off.
    pub max_error_count: u8,
    /// Number of gaits the gait engine offers.
    pub num_gaits: u8,
    /// Number of prerecorded GP sequences.
    pub gp_sequence_count: u8,
    /// Body height offset used by the stand/sit toggle.
    pub stand_height: i16,
    /// Body height change per cycle while a height pad is held.
    pub height_step: i16,
    /// Speed control change per cycle while a speed pad is held.
    pub speed_step: u16,
    /// Upper bound of speed control (lower bound is 0).
    pub speed_max: u16,
    /// Speed control at startup.
    pub initial_speed: u16,
    /// Leg lift height with double height off / on.
    pub leg_lift_height: u8,
    pub double_leg_lift_height: u8,
    /// Mandible closure change per cycle while R1/L1 are held.
    pub mandible_closure_step: i16,
    /// Left mandible (closure x) travel.
    pub mandible_left: ClosureRange,
    /// Right mandible (closure y) travel.
    pub mandible_right: ClosureRange,
}

/// Default tuning for a Phoenix-style hexapod with mandibles and tail.
pub const DEFAULT_CONFIG: ControllerConfig = ControllerConfig {
    travel_dead_zone: 4,
    max_error_count: 5,
    num_gaits: 6,
    gp_sequence_count: 6,
    stand_height: 35,
    height_step: 10,
    speed_step: 50,
    speed_max: 2000,
    initial_speed: 100,
    leg_lift_height: 50,
    double_leg_lift_height: 100,
    mandible_closure_step: 100,
    mandible_left: ClosureRange { min: -500, max: 500 },
    mandible_right: ClosureRange { min: -500, max: 500 },
};

impl Default for ControllerConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}
