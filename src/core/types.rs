//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Stable identifier for a hex on the expedition map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexId(pub u32);

impl HexId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hex {}", self.0)
    }
}

/// Watch counter (simulation time unit)
pub type Watch = u64;
