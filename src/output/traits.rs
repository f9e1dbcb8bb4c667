use core::future::Future;

use crate::state::ControlState;

/// Error type for publishing control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// Communication I/O error.
    Io,
    /// Consumer not ready to accept snapshots.
    NotReady,
    /// Snapshot dropped.
    Dropped,
}

/// Async trait for control state consumers.
///
/// Receives one snapshot per processed cycle, never a partially updated
/// state. Implementations hand it to the gait engine, a telemetry link or
/// a test recorder.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait StateSink {
    /// Publish the state at the end of a cycle.
    fn publish(&mut self, state: &ControlState) -> impl Future<Output = Result<(), OutputError>>;
}
