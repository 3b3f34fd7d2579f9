//! Actions a crew member can declare for a watch

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ExpeditionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the party to the next hex
    Trek,
    /// Keep watch for danger
    Guard,
    /// Make camp; clears the whole party's stress on safe ground
    Encamp,
    /// Shed stress, if already rested
    Rest,
    /// Survey the current hex
    Explore,
    /// Search the current hex for resources
    Collect,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Trek,
        Action::Guard,
        Action::Encamp,
        Action::Rest,
        Action::Explore,
        Action::Collect,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Trek => "Trek",
            Action::Guard => "Guard",
            Action::Encamp => "Encamp",
            Action::Rest => "Rest",
            Action::Explore => "Explore",
            Action::Collect => "Collect",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ExpeditionError;

    /// Case-insensitive; surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Action::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ExpeditionError::UnrecognizedAction(trimmed.to_string()))
    }
}
