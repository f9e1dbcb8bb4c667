//! Input source trait, per-cycle input frame and edge detection.

use core::future::Future;

use crate::types::{deflection, AnalogStick, Axis, Buttons};

/// Error type for input reads.
///
/// Any error marks the cycle as invalid; the watchdog counts it and the
/// rest of the cycle is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Bus/communication I/O error.
    Io,
    /// Controller answered but is not in analog mode.
    NotAnalog,
    /// Malformed or corrupted packet.
    Corrupt,
    /// No controller answered.
    Disconnected,
}

/// One cycle's worth of controller input.
///
/// `held` carries button levels, `pressed` the rising edges observed this
/// cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputFrame {
    pub held: Buttons,
    pub pressed: Buttons,
    pub left_stick: AnalogStick,
    pub right_stick: AnalogStick,
}

impl InputFrame {
    /// Sticks centered, nothing held.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            held: Buttons::NONE,
            pressed: Buttons::NONE,
            left_stick: AnalogStick::NEUTRAL,
            right_stick: AnalogStick::NEUTRAL,
        }
    }

    /// Raw byte of one axis.
    #[inline]
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> u8 {
        match axis {
            Axis::LeftX => self.left_stick.x,
            Axis::LeftY => self.left_stick.y,
            Axis::RightX => self.right_stick.x,
            Axis::RightY => self.right_stick.y,
        }
    }

    /// Signed deflection of one axis from center.
    #[inline]
    #[must_use]
    pub const fn deflection(&self, axis: Axis) -> i16 {
        deflection(self.axis(axis))
    }

    /// Whether the button is currently held down.
    #[inline]
    #[must_use]
    pub const fn level(&self, button: Buttons) -> bool {
        self.held.contains(button)
    }

    /// Whether the button went down this cycle.
    #[inline]
    #[must_use]
    pub const fn edge(&self, button: Buttons) -> bool {
        self.pressed.contains(button)
    }
}

/// Derives rising edges from successive button level snapshots.
///
/// Input sources that only see levels (a polled PS2 pad, for instance) feed
/// every read through a tracker to produce the `pressed` set.
#[derive(Clone, Copy, Default, Debug)]
pub struct ButtonTracker {
    previous: Buttons,
}

impl ButtonTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: Buttons::NONE,
        }
    }

    /// Build a frame from the current levels and sticks.
    pub fn frame(
        &mut self,
        held: Buttons,
        left_stick: AnalogStick,
        right_stick: AnalogStick,
    ) -> InputFrame {
        let pressed = held & !self.previous;
        self.previous = held;
        InputFrame {
            held,
            pressed,
            left_stick,
            right_stick,
        }
    }

    /// Forget the last levels, e.g. after the controller reconnects.
    pub fn reset(&mut self) {
        self.previous = Buttons::NONE;
    }
}

/// Async trait for controller input sources.
///
/// This trait abstracts the controller transport so the control core can be
/// driven by a PS2 pad, a radio link or a scripted test sequence.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait InputSource {
    /// Read the controller once for the next control cycle.
    ///
    /// An `Err` marks the read as untrustworthy.
    fn read_cycle(&mut self) -> impl Future<Output = Result<InputFrame, InputError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_reports_rising_edge_once() {
        let mut tracker = ButtonTracker::new();
        let sticks = AnalogStick::NEUTRAL;

        let first = tracker.frame(Buttons::SELECT, sticks, sticks);
        assert!(first.edge(Buttons::SELECT));
        assert!(first.level(Buttons::SELECT));

        let held = tracker.frame(Buttons::SELECT, sticks, sticks);
        assert!(!held.edge(Buttons::SELECT));
        assert!(held.level(Buttons::SELECT));

        let released = tracker.frame(Buttons::NONE, sticks, sticks);
        assert!(!released.level(Buttons::SELECT));

        let again = tracker.frame(Buttons::SELECT, sticks, sticks);
        assert!(again.edge(Buttons::SELECT));
    }

    #[test]
    fn test_tracker_reset_rearms_edges() {
        let mut tracker = ButtonTracker::new();
        let sticks = AnalogStick::NEUTRAL;
        let _ = tracker.frame(Buttons::R2, sticks, sticks);
        tracker.reset();
        assert!(tracker.frame(Buttons::R2, sticks, sticks).edge(Buttons::R2));
    }

    #[test]
    fn test_frame_axis_lookup() {
        let frame = InputFrame {
            left_stick: AnalogStick::new(10, 20),
            right_stick: AnalogStick::new(30, 255),
            ..InputFrame::neutral()
        };
        assert_eq!(frame.axis(Axis::LeftX), 10);
        assert_eq!(frame.axis(Axis::LeftY), 20);
        assert_eq!(frame.axis(Axis::RightX), 30);
        assert_eq!(frame.deflection(Axis::RightY), 127);
    }
}
