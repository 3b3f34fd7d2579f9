//! Narrative events reported by the engine
//!
//! Resolution returns these in the order they happened. The `Display`
//! text is a convenience for drivers; only the variants and their order
//! carry meaning.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::Action;
use crate::core::types::{HexId, Watch};

/// Result band of a Collect check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectOutcome {
    /// Natural 20: an artifact is uncovered
    Artifact,
    /// 15-19
    Goods,
    /// 10-14
    Scrap,
    /// 2-9
    Nothing,
    /// Natural 1: the collector is lost
    CriticalFailure,
}

impl CollectOutcome {
    pub fn from_roll(roll: u8) -> Self {
        match roll {
            20.. => Self::Artifact,
            15..=19 => Self::Goods,
            10..=14 => Self::Scrap,
            2..=9 => Self::Nothing,
            _ => Self::CriticalFailure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpeditionEvent {
    /// A lost crew member's order was not carried out
    ActionSkipped { crew: String, action: Action },
    Trekked { from: HexId, to: HexId },
    /// `danger` marks the extra roll taken on entering a dangerous hex
    EventDieRolled { roll: u8, danger: bool },
    DangerEntered { hex: HexId },
    Guarding { crew: String },
    Encamped { hex: HexId },
    CannotEncamp { hex: HexId },
    Rested { crew: String, relieved: bool },
    Explored { hex: HexId },
    HiddenItemsFound { hex: HexId },
    NoNewDiscoveries { hex: HexId },
    Collected {
        crew: String,
        roll: u8,
        outcome: CollectOutcome,
    },
    CrewLost { crew: String },
    CrewFound { crew: String, by: String },
    WatchEnded { watch: Watch },
    DayEnded { day: u64 },
    Exhausted { crew: String, stress: u32 },
}

impl fmt::Display for ExpeditionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActionSkipped { crew, action } => {
                write!(f, "{} is lost and cannot {}.", crew, action.name().to_lowercase())
            }
            Self::Trekked { from, to } => write!(f, "Crew treks from {} to {}.", from, to),
            Self::EventDieRolled { roll, danger: false } => write!(f, "Event die rolled: {}", roll),
            Self::EventDieRolled { roll, danger: true } => {
                write!(f, "Danger event die rolled: {}", roll)
            }
            Self::DangerEntered { hex } => {
                write!(f, "The new hex ({}) is dangerous! Rolling for events...", hex)
            }
            Self::Guarding { crew } => write!(
                f,
                "{} is guarding and will have advance warning of any danger.",
                crew
            ),
            Self::Encamped { hex } => write!(f, "The crew finds a safe place to rest on {}.", hex),
            Self::CannotEncamp { hex } => write!(
                f,
                "No safe place to rest on {}. The crew cannot reduce stress.",
                hex
            ),
            Self::Rested { crew, relieved: true } => write!(f, "{} rests. Stress reduced!", crew),
            Self::Rested { crew, relieved: false } => {
                write!(f, "{} rests, but without safe rest stress remains.", crew)
            }
            Self::Explored { hex } => write!(f, "The crew discovers the major features of {}.", hex),
            Self::HiddenItemsFound { hex } => write!(f, "Hidden items are found on {}!", hex),
            Self::NoNewDiscoveries { hex } => write!(f, "No new discoveries on {}.", hex),
            Self::Collected { crew, roll, outcome } => {
                let text = match outcome {
                    CollectOutcome::Artifact => "Critical success! An artifact is discovered.",
                    CollectOutcome::Goods => "Success! Useful goods are found.",
                    CollectOutcome::Scrap => "Partial success. Some scrap is found.",
                    CollectOutcome::Nothing => "Failure. Nothing of value is found.",
                    CollectOutcome::CriticalFailure => "Critical failure!",
                };
                write!(f, "{} collects (rolled {}). {}", crew, roll, text)
            }
            Self::CrewLost { crew } => write!(
                f,
                "{} is lost until another crew member explores.",
                crew
            ),
            Self::CrewFound { crew, by } => write!(f, "{} finds {}.", by, crew),
            Self::WatchEnded { watch } => write!(f, "Time passes. Watch {} is over.", watch),
            Self::DayEnded { day } => {
                write!(f, "End of day {}. Checking for exhaustion penalties...", day)
            }
            Self::Exhausted { crew, stress } => {
                write!(f, "{} suffers exhaustion penalties (stress {}).", crew, stress)
            }
        }
    }
}
