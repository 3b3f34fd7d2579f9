//! Time keeping and end-of-day exhaustion
//!
//! Every watch advances the Warden's clock by one. When the clock lands on
//! a day boundary, crew members who were not rested take the exhaustion
//! penalty, and everyone's rested flag is cleared for the new day.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::crew::CrewMember;
use super::warden::Warden;
use crate::core::calendar::Calendar;
use crate::core::config::{ExpeditionConfig, EXHAUSTION_PENALTY};
use crate::core::types::Watch;

/// What happened when a watch closed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhaustionReport {
    /// Watch count after advancing
    pub watch: Watch,
    pub day_ended: bool,
    /// Roster indices of members who took the penalty
    pub penalized: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeKeeper {
    calendar: Calendar,
    exhaustion_penalty: u32,
}

impl TimeKeeper {
    pub fn new(watches_per_day: u64, exhaustion_penalty: u32) -> Self {
        Self {
            calendar: Calendar::new(watches_per_day),
            exhaustion_penalty,
        }
    }

    pub fn from_config(config: &ExpeditionConfig) -> Self {
        Self::new(config.watches_per_day, config.exhaustion_penalty)
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Close the current watch
    pub fn advance(&self, warden: &mut Warden, party: &mut [CrewMember]) -> ExhaustionReport {
        warden.time += 1;
        let mut report = ExhaustionReport {
            watch: warden.time,
            ..Default::default()
        };

        if !self.calendar.is_day_boundary(warden.time) {
            return report;
        }

        report.day_ended = true;
        info!(
            day = self.calendar.day_of(warden.time),
            watch = warden.time,
            "end of day, checking exhaustion"
        );

        for (index, member) in party.iter_mut().enumerate() {
            if !member.rested {
                member.stress = member.stress.saturating_add(self.exhaustion_penalty);
                report.penalized.push(index);
                info!(crew = %member.name, stress = member.stress, "exhaustion penalty");
            }
            member.rested = false;
        }

        report
    }
}

impl Default for TimeKeeper {
    fn default() -> Self {
        Self::from_config(&ExpeditionConfig::default())
    }
}

/// Close a watch using the standard six-watch day and penalty
pub fn advance_time(warden: &mut Warden, party: &mut [CrewMember]) -> ExhaustionReport {
    TimeKeeper::new(crate::core::calendar::WATCHES_PER_DAY, EXHAUSTION_PENALTY)
        .advance(warden, party)
}
