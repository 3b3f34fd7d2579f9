//! Watch calendar
//!
//! A day is split into a fixed number of watches. The calendar answers
//! which day a watch count falls in and whether it closes a day.

use serde::{Deserialize, Serialize};

use super::types::Watch;

/// Watches in a standard expedition day (4 hours each)
pub const WATCHES_PER_DAY: u64 = 6;

/// Maps an elapsed-watch count onto days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    watches_per_day: u64,
}

impl Calendar {
    /// `watches_per_day` must be non-zero; `ExpeditionConfig::validate` enforces it
    pub fn new(watches_per_day: u64) -> Self {
        Self {
            watches_per_day: watches_per_day.max(1),
        }
    }

    pub fn watches_per_day(&self) -> u64 {
        self.watches_per_day
    }

    pub fn hours_per_watch(&self) -> u64 {
        24 / self.watches_per_day
    }

    /// Zero-based day that a watch count falls in
    pub fn day_of(&self, time: Watch) -> u64 {
        time / self.watches_per_day
    }

    /// 1-based position of the last completed watch within its day
    pub fn watch_of_day(&self, time: Watch) -> u64 {
        match time % self.watches_per_day {
            0 if time > 0 => self.watches_per_day,
            n => n,
        }
    }

    pub fn is_day_boundary(&self, time: Watch) -> bool {
        time > 0 && time % self.watches_per_day == 0
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(WATCHES_PER_DAY)
    }
}
