//! The Warden - arbiter of time and events

use serde::{Deserialize, Serialize};

use crate::core::types::Watch;
use crate::dice::RandomSource;

/// Holds elapsed time and the last event-die result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warden {
    /// Last event-die result; 0 until the first roll
    pub event_die: u8,
    /// Watches elapsed since the expedition set out
    pub time: Watch,
    /// Event dice rolled over the whole run
    pub event_rolls: u64,
}

impl Warden {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the event die and record the result
    pub fn roll_event_die(&mut self, rng: &mut impl RandomSource) -> u8 {
        self.event_die = rng.roll_event_die();
        self.event_rolls += 1;
        self.event_die
    }

    /// Last recorded roll, if any
    pub fn last_event(&self) -> Option<u8> {
        (self.event_die > 0).then_some(self.event_die)
    }
}
