//! Audible cues and the sequence player interface.
//!
//! Both collaborators are fire-and-forget from the control core's point of
//! view: cues are never acknowledged and a sequence start is a request.

/// A single beep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Duration in milliseconds.
    pub duration_ms: u16,
    /// Frequency in hertz.
    pub frequency_hz: u16,
}

const fn tone(duration_ms: u16, frequency_hz: u16) -> Tone {
    Tone {
        duration_ms,
        frequency_hz,
    }
}

const CONFIRM: &[Tone] = &[tone(50, 2000)];
const WRAP: &[Tone] = &[tone(50, 2000), tone(50, 2250)];
const BALANCE_ON: &[Tone] = &[tone(250, 1500)];
const BALANCE_OFF: &[Tone] = &[tone(100, 2000), tone(50, 4000)];
const SEQUENCE_NEXT: &[Tone] = &[tone(50, 1500)];

/// Events the operator gets an audible confirmation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// A mode transition happened.
    ModeChange,
    BalanceOn,
    BalanceOff,
    /// Gait advanced to the next one.
    GaitNext,
    /// Gait wrapped back to the first one.
    GaitWrap,
    /// A walk option (double height, double travel, walk method) or the
    /// single leg hold flipped.
    Toggle,
    /// Next leg selected in single leg mode.
    LegSelect,
    /// Speed control changed by one step.
    SpeedStep,
    /// Next GP sequence selected.
    SequenceNext,
    /// GP sequence selection wrapped to the first one.
    SequenceWrap,
}

impl Cue {
    /// Tones to play for this cue, in order.
    #[must_use]
    pub const fn tones(self) -> &'static [Tone] {
        match self {
            Cue::BalanceOn => BALANCE_ON,
            Cue::BalanceOff => BALANCE_OFF,
            Cue::GaitWrap | Cue::SequenceWrap => WRAP,
            Cue::SequenceNext => SEQUENCE_NEXT,
            Cue::ModeChange | Cue::GaitNext | Cue::Toggle | Cue::LegSelect | Cue::SpeedStep => {
                CONFIRM
            }
        }
    }
}

/// Receiver for audible cues.
pub trait CueSink {
    /// Play a cue. Must not block the control cycle.
    fn notify(&mut self, cue: Cue);
}

/// Servo driver side of the GP sequence player.
pub trait SequencePlayer {
    /// Whether a sequence is currently playing.
    fn is_sequence_active(&self) -> bool;

    /// Request playback of the sequence at `index`.
    fn start_sequence(&mut self, index: u8);
}

/// Cue sink that discards all cues.
///
/// Use this for robots without a speaker.
pub struct NullCues;

impl CueSink for NullCues {
    fn notify(&mut self, _cue: Cue) {}
}

/// Sequence player for builds without GP sequences.
///
/// Never active and ignores start requests.
pub struct NullPlayer;

impl SequencePlayer for NullPlayer {
    fn is_sequence_active(&self) -> bool {
        false
    }

    fn start_sequence(&mut self, _index: u8) {}
}
