//! Control cycle pipeline and the async driver around it.

use crate::actions::{self, PowerChange};
use crate::config::ControllerConfig;
use crate::feedback::{CueSink, NullCues, NullPlayer, SequencePlayer};
use crate::input::{InputError, InputFrame, InputSource};
use crate::mapper;
use crate::mode::{self, ControlMode};
use crate::output::{OutputError, StateSink};
use crate::state::{Context, ControlState, Session};
use crate::watchdog::{ConnectionWatchdog, Verdict};

/// The control core: state, session and watchdog, advanced one cycle at a
/// time by [`ControlCore::step`].
///
/// A step never suspends, so a consumer that reads the state between steps
/// always sees a whole cycle.
#[derive(Debug, Clone)]
pub struct ControlCore {
    config: ControllerConfig,
    state: ControlState,
    session: Session,
    watchdog: ConnectionWatchdog,
}

impl ControlCore {
    #[must_use]
    pub const fn new(config: ControllerConfig) -> Self {
        Self {
            state: ControlState::new(&config),
            session: Session::new(),
            watchdog: ConnectionWatchdog::new(config.max_error_count),
            config,
        }
    }

    /// Run one control cycle on the result of one controller read.
    ///
    /// Order: watchdog, power toggle, common actions, mode transitions,
    /// per-mode mapping, derived fields. An invalid read skips everything
    /// after the watchdog and is handed back as the error.
    pub fn step(
        &mut self,
        read: Result<InputFrame, InputError>,
        cues: &mut dyn CueSink,
        player: &mut dyn SequencePlayer,
    ) -> Result<(), InputError> {
        match self.watchdog.observe(read.is_ok(), self.state.power_on) {
            Verdict::Proceed => {}
            Verdict::Skip => trace!("invalid read {}", self.watchdog.error_count()),
            Verdict::Shutdown => {
                warn!("controller lost, forcing power off");
                actions::power_off(&mut self.state, &mut self.session);
            }
        }
        let frame = read?;

        let mut ctx = Context {
            state: &mut self.state,
            session: &mut self.session,
            config: &self.config,
            cues,
            player,
        };

        // The power-on frame only arms the robot.
        if actions::toggle_power(&mut ctx, &frame) == PowerChange::TurnedOn {
            return Ok(());
        }

        if ctx.state.power_on {
            actions::apply_common(&mut ctx, &frame);
            mode::apply_transitions(&mut ctx, &frame);
            mapper::map_inputs(&mut ctx, &frame);
            ctx.state.input_time_delay = mapper::input_time_delay(&frame);
        }
        ctx.state.body_position.y = ctx.session.body_height();

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.session.mode
    }

    /// Consecutive invalid reads so far.
    #[inline]
    #[must_use]
    pub fn error_count(&self) -> u8 {
        self.watchdog.error_count()
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}

/// Drives a [`ControlCore`] from an input source and publishes every cycle.
///
/// # Error Handling
///
/// Input errors are absorbed by the watchdog; the state is still published
/// so a forced power off reaches the consumer in the same cycle.
pub struct HexapodController<I, O, C = NullCues, P = NullPlayer> {
    core: ControlCore,
    input: I,
    output: O,
    cues: C,
    player: P,
}

impl<I: InputSource, O: StateSink> HexapodController<I, O> {
    /// Create a controller without speaker or sequence player.
    pub fn new(config: ControllerConfig, input: I, output: O) -> Self {
        Self::with_peripherals(config, input, output, NullCues, NullPlayer)
    }
}

impl<I, O, C, P> HexapodController<I, O, C, P>
where
    I: InputSource,
    O: StateSink,
    C: CueSink,
    P: SequencePlayer,
{
    /// Create a controller with a cue sink and a sequence player.
    pub fn with_peripherals(
        config: ControllerConfig,
        input: I,
        output: O,
        cues: C,
        player: P,
    ) -> Self {
        Self {
            core: ControlCore::new(config),
            input,
            output,
            cues,
            player,
        }
    }

    /// Run the control loop indefinitely.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            let _ = self.process_one().await;
        }
    }

    /// Read the controller, run one cycle and publish the result.
    ///
    /// Returns the result of the operation for testing purposes.
    pub async fn process_one(&mut self) -> Result<(), ControlError> {
        let read = self.input.read_cycle().await;
        let stepped = self.core.step(read, &mut self.cues, &mut self.player);

        self.output
            .publish(self.core.state())
            .await
            .map_err(ControlError::Output)?;

        stepped.map_err(ControlError::Input)
    }

    /// Get a reference to the control core.
    pub fn core(&self) -> &ControlCore {
        &self.core
    }

    /// Get a reference to the input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Get a mutable reference to the input source.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Get a reference to the state sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the cue sink.
    pub fn cues(&self) -> &C {
        &self.cues
    }

    /// Get a reference to the sequence player.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Decompose the controller into its input and output components.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

/// Error type for controller cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// The read was invalid and the cycle was skipped.
    Input(InputError),
    /// The state could not be published.
    Output(OutputError),
}

impl From<InputError> for ControlError {
    fn from(err: InputError) -> Self {
        ControlError::Input(err)
    }
}

impl From<OutputError> for ControlError {
    fn from(err: OutputError) -> Self {
        ControlError::Output(err)
    }
}
