use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

use super::traits::{OutputError, StateSink};
use crate::state::ControlState;

/// Publishes snapshots through an embassy [`Signal`].
///
/// The signal keeps only the latest snapshot, so a gait task that runs
/// slower than the control loop always picks up the most recent whole
/// cycle and never a half-written one.
pub struct SignalSink<'a, M: RawMutex> {
    signal: &'a Signal<M, ControlState>,
}

impl<'a, M: RawMutex> SignalSink<'a, M> {
    #[must_use]
    pub fn new(signal: &'a Signal<M, ControlState>) -> Self {
        Self { signal }
    }
}

impl<M: RawMutex> StateSink for SignalSink<'_, M> {
    async fn publish(&mut self, state: &ControlState) -> Result<(), OutputError> {
        self.signal.signal(*state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    #[test]
    fn test_signal_keeps_latest_snapshot() {
        let signal: Signal<CriticalSectionRawMutex, ControlState> = Signal::new();
        let mut sink = SignalSink::new(&signal);

        let mut first = ControlState::new(&DEFAULT_CONFIG);
        first.gait_type = 1;
        let mut second = first;
        second.gait_type = 2;

        block_on(sink.publish(&first)).unwrap();
        block_on(sink.publish(&second)).unwrap();

        assert_eq!(signal.try_take(), Some(second));
        assert_eq!(signal.try_take(), None);
    }
}
