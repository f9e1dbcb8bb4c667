//! Connection watchdog for lost controller input.

/// What the controller should do with the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Verdict {
    /// Read was valid, run the cycle.
    Proceed,
    /// Read was invalid, skip the cycle.
    Skip,
    /// Too many invalid reads while powered, power off now.
    Shutdown,
}

/// Counts consecutive invalid reads.
///
/// The count saturates at `max_errors`; the first invalid read that finds
/// it saturated while the robot is powered asks for a shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionWatchdog {
    error_count: u8,
    max_errors: u8,
}

impl ConnectionWatchdog {
    #[must_use]
    pub const fn new(max_errors: u8) -> Self {
        Self {
            error_count: 0,
            max_errors,
        }
    }

    /// Feed one read result.
    pub fn observe(&mut self, valid: bool, power_on: bool) -> Verdict {
        if valid {
            self.error_count = 0;
            return Verdict::Proceed;
        }

        if self.error_count < self.max_errors {
            self.error_count += 1;
            Verdict::Skip
        } else if power_on {
            Verdict::Shutdown
        } else {
            Verdict::Skip
        }
    }

    /// Consecutive invalid reads seen so far, capped at the ceiling.
    #[inline]
    #[must_use]
    pub const fn error_count(&self) -> u8 {
        self.error_count
    }
}
