//! Crew members and party setup

use serde::{Deserialize, Serialize};

/// Whether a crew member can take actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrewStatus {
    #[default]
    Active,
    /// Lost after a critical Collect failure; found again when another
    /// crew member explores
    Lost,
}

/// A single member of the expedition party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub stress: u32,
    pub rested: bool,
    pub status: CrewStatus,
}

impl CrewMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stress: 0,
            rested: true,
            status: CrewStatus::Active,
        }
    }

    pub fn with_stress(mut self, stress: u32) -> Self {
        self.stress = stress;
        self
    }

    pub fn with_rested(mut self, rested: bool) -> Self {
        self.rested = rested;
        self
    }

    pub fn is_lost(&self) -> bool {
        self.status == CrewStatus::Lost
    }

    /// Clear stress and mark rested
    pub fn recover(&mut self) {
        self.stress = 0;
        self.rested = true;
    }
}

/// Build a party in roster order; duplicate names are kept as given
pub fn initialize_crew<S: AsRef<str>>(names: &[S]) -> Vec<CrewMember> {
    names.iter().map(|n| CrewMember::new(n.as_ref())).collect()
}
