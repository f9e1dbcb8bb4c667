//! Recording test doubles shared by the unit tests.

extern crate std;

use std::vec::Vec;

use crate::feedback::{Cue, CueSink, SequencePlayer};

/// Cue sink that remembers every cue in order.
#[derive(Default)]
pub struct RecordingCues {
    pub cues: Vec<Cue>,
}

impl CueSink for RecordingCues {
    fn notify(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

/// Sequence player whose activity is set by the test.
#[derive(Default)]
pub struct IdlePlayer {
    pub active: bool,
    pub started: Vec<u8>,
}

impl SequencePlayer for IdlePlayer {
    fn is_sequence_active(&self) -> bool {
        self.active
    }

    fn start_sequence(&mut self, index: u8) {
        self.started.push(index);
    }
}
