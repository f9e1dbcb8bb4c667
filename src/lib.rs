//! Control-mode state machine and controller input mapping for a hexapod
//! walker with mandibles and a tail.
//!
//! Each control cycle turns one controller read (two analog sticks and the
//! button set) into the [`ControlState`] that the gait and inverse
//! kinematics engines consume.
//!
//! # Overview
//!
//! - [`types`]: Value types ([`Buttons`], [`AnalogStick`], [`Vec3`])
//! - [`input`]: Input frames, edge detection and the [`InputSource`] trait
//! - [`watchdog`]: Lost-controller detection ([`ConnectionWatchdog`])
//! - [`mode`]: Mode state machine ([`ControlMode`])
//! - [`actions`]: Power, balance, body height and speed buttons
//! - [`mapper`]: Per-mode stick mapping and gait pacing
//! - [`feedback`]: Audible cues and the GP sequence player interface
//! - [`output`]: Publishing snapshots ([`StateSink`], [`SignalSink`])
//! - [`controller`]: The cycle pipeline ([`ControlCore`]) and its async
//!   driver ([`HexapodController`])
//!
//! # Cycle
//!
//! read → watchdog → power toggle → common actions → mode transitions →
//! per-mode mapping → derived fields. An invalid read stops after the
//! watchdog; five in a row while powered, followed by a sixth, power the
//! robot off.
//!
//! # Example
//!
//! ```rust
//! use hexapod_control::{
//!     Buttons, ControlCore, ControlMode, InputFrame, NullCues, NullPlayer, DEFAULT_CONFIG,
//! };
//!
//! let mut core = ControlCore::new(DEFAULT_CONFIG);
//! let press = |buttons| InputFrame {
//!     held: buttons,
//!     pressed: buttons,
//!     ..InputFrame::neutral()
//! };
//!
//! core.step(Ok(press(Buttons::POWER)), &mut NullCues, &mut NullPlayer).unwrap();
//! core.step(Ok(press(Buttons::ROTATE)), &mut NullCues, &mut NullPlayer).unwrap();
//! assert!(core.state().power_on);
//! assert_eq!(core.mode(), ControlMode::Rotate);
//! ```
//!
//! # Features
//!
//! - **`gp-player`** (default): GP sequence player mode
//! - **`defmt`**: defmt formatting and logging (embedded targets)
//! - **`log`**: Logging through the `log` facade
//! - **`std`**: Enable standard library support (for host testing)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod actions;
pub mod config;
pub mod controller;
pub mod feedback;
pub mod input;
pub mod mapper;
pub mod mode;
pub mod output;
pub mod state;
pub mod types;
pub mod watchdog;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use config::{ClosureRange, ControllerConfig, DEFAULT_CONFIG};
pub use controller::{ControlCore, ControlError, HexapodController};
pub use feedback::{Cue, CueSink, NullCues, NullPlayer, SequencePlayer, Tone};
pub use input::{ButtonTracker, InputError, InputFrame, InputSource};
pub use mode::ControlMode;
pub use output::{OutputError, SignalSink, StateSink};
pub use state::{ControlState, Session, MANDIBLE_INDEX, NO_LEG};
pub use types::{AnalogStick, Axis, Buttons, Vec2, Vec3};
pub use watchdog::ConnectionWatchdog;
