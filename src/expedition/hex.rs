//! Expedition map - an ordered ring of hexes
//!
//! The party always stands on exactly one hex. Trekking moves the cursor to
//! the next hex, wrapping from the last back to the first.

use serde::{Deserialize, Serialize};

use crate::core::error::{ExpeditionError, Result};
use crate::core::types::HexId;

/// A single hex on the expedition map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hex {
    pub id: HexId,
    /// Set by the first Explore, never cleared
    pub is_explored: bool,
    pub is_dangerous: bool,
    /// Set by a critical Collect, never cleared
    pub has_artifact: bool,
    pub hidden_items: bool,
    pub is_safe_to_rest: bool,
}

impl Hex {
    pub fn new(id: u32) -> Self {
        Self {
            id: HexId(id),
            is_explored: false,
            is_dangerous: false,
            has_artifact: false,
            hidden_items: false,
            is_safe_to_rest: false,
        }
    }

    pub fn dangerous(mut self) -> Self {
        self.is_dangerous = true;
        self
    }

    pub fn with_hidden_items(mut self) -> Self {
        self.hidden_items = true;
        self
    }

    pub fn safe_to_rest(mut self) -> Self {
        self.is_safe_to_rest = true;
        self
    }

    /// Mark explored; returns true only on the first call
    pub fn mark_explored(&mut self) -> bool {
        let first = !self.is_explored;
        self.is_explored = true;
        first
    }
}

/// The expedition map and the party's position on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexMap {
    hexes: Vec<Hex>,
    current: usize,
}

impl HexMap {
    /// Create a map with the party on the first hex
    ///
    /// An empty map is allowed, but every operation that needs the current
    /// hex fails on it with `InvalidState`.
    pub fn new(hexes: Vec<Hex>) -> Self {
        Self { hexes, current: 0 }
    }

    /// Create a map with the party on `start`
    pub fn starting_at(hexes: Vec<Hex>, start: usize) -> Result<Self> {
        if start >= hexes.len() {
            return Err(ExpeditionError::InvalidState(format!(
                "start index {} outside map of {} hexes",
                start,
                hexes.len()
            )));
        }
        Ok(Self {
            hexes,
            current: start,
        })
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    pub fn get(&self, index: usize) -> Option<&Hex> {
        self.hexes.get(index)
    }

    /// Index of the hex the party stands on
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_hex(&self) -> Result<&Hex> {
        self.hexes.get(self.current).ok_or_else(empty_map)
    }

    pub fn current_hex_mut(&mut self) -> Result<&mut Hex> {
        self.hexes.get_mut(self.current).ok_or_else(empty_map)
    }

    /// Move to the next hex, wrapping past the last one
    ///
    /// Returns the new current index.
    pub fn advance(&mut self) -> Result<usize> {
        if self.hexes.is_empty() {
            return Err(empty_map());
        }
        self.current = (self.current + 1) % self.hexes.len();
        Ok(self.current)
    }
}

fn empty_map() -> ExpeditionError {
    ExpeditionError::InvalidState("expedition map has no hexes".into())
}
