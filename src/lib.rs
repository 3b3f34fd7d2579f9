//! Hexwatch - turn-based expedition engine

pub mod core;
pub mod dice;
pub mod expedition;
