//! Core value types: Buttons, AnalogStick, Axis, Vec2, Vec3.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Controller button set represented as a bitfield.
///
/// Buttons are named after the role they play on the walker. The comment on
/// each constant names the key it sits on with a PS2 pad.
///
/// # Example
///
/// ```
/// use hexapod_control::Buttons;
///
/// let buttons = Buttons::R1 | Buttons::R2;
/// assert!(buttons.contains(Buttons::R1));
/// assert!(buttons.contains(Buttons::R2));
/// assert!(!buttons.contains(Buttons::R3));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u16);

impl Buttons {
    pub const POWER: Self = Self(1 << 0); // Start
    pub const SHIFT: Self = Self(1 << 1); // L1, translate toggle
    pub const ROTATE: Self = Self(1 << 2); // L2
    pub const SINGLE_LEG: Self = Self(1 << 3); // Circle
    pub const GP_PLAYER: Self = Self(1 << 4); // Cross
    pub const BALANCE: Self = Self(1 << 5); // Square
    pub const STAND_SIT: Self = Self(1 << 6); // Triangle
    pub const PAD_UP: Self = Self(1 << 7);
    pub const PAD_DOWN: Self = Self(1 << 8);
    pub const PAD_LEFT: Self = Self(1 << 9);
    pub const PAD_RIGHT: Self = Self(1 << 10);
    pub const SELECT: Self = Self(1 << 11);
    pub const R1: Self = Self(1 << 12);
    pub const R2: Self = Self(1 << 13);
    pub const R3: Self = Self(1 << 14);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are set.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check if no buttons are set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Buttons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Buttons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// One analog axis of the two sticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    LeftX,
    LeftY,
    RightX,
    RightY,
}

/// Analog stick with X/Y axes as raw bytes.
///
/// Range: [0, 255], centered at [`AnalogStick::CENTER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogStick {
    pub x: u8,
    pub y: u8,
}

impl AnalogStick {
    /// Byte value reported by a centered axis.
    pub const CENTER: u8 = 128;

    pub const NEUTRAL: Self = Self {
        x: Self::CENTER,
        y: Self::CENTER,
    };

    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl Default for AnalogStick {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Signed offset of a raw axis byte from center, in [-128, 127].
#[inline]
#[must_use]
pub const fn deflection(raw: u8) -> i16 {
    raw as i16 - AnalogStick::CENTER as i16
}

/// Three-component integer vector used for positions, rotations and travel.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vec3 {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    #[must_use]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// Two-component integer vector (mandible closure, tail position).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vec2 {
    pub x: i16,
    pub y: i16,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_bitwise_or() {
        let buttons = Buttons::POWER | Buttons::SELECT;
        assert!(buttons.contains(Buttons::POWER));
        assert!(buttons.contains(Buttons::SELECT));
        assert!(!buttons.contains(Buttons::R1));
    }

    #[test]
    fn test_buttons_set_clear() {
        let mut buttons = Buttons::NONE;
        buttons.set(Buttons::BALANCE, true);
        assert!(buttons.contains(Buttons::BALANCE));
        buttons.set(Buttons::BALANCE, false);
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_buttons_are_distinct_bits() {
        let all = [
            Buttons::POWER,
            Buttons::SHIFT,
            Buttons::ROTATE,
            Buttons::SINGLE_LEG,
            Buttons::GP_PLAYER,
            Buttons::BALANCE,
            Buttons::STAND_SIT,
            Buttons::PAD_UP,
            Buttons::PAD_DOWN,
            Buttons::PAD_LEFT,
            Buttons::PAD_RIGHT,
            Buttons::SELECT,
            Buttons::R1,
            Buttons::R2,
            Buttons::R3,
        ];
        let combined = all.iter().fold(Buttons::NONE, |acc, &b| acc | b);
        assert_eq!(combined.raw().count_ones() as usize, all.len());
    }

    #[test]
    fn test_deflection() {
        assert_eq!(deflection(128), 0);
        assert_eq!(deflection(0), -128);
        assert_eq!(deflection(255), 127);
        assert_eq!(deflection(228), 100);
    }

    #[test]
    fn test_analog_stick_neutral() {
        let stick = AnalogStick::default();
        assert_eq!(stick, AnalogStick::new(128, 128));
    }
}
