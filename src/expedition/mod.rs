//! Expedition engine - turn resolution and world state
//!
//! A party of crew members crosses a ring of hexes, one action each per
//! watch, while the Warden rolls for events and keeps time.

pub mod action;
pub mod crew;
pub mod events;
pub mod hex;
pub mod resolver;
pub mod simulation;
pub mod timekeeper;
pub mod warden;

pub use action::Action;
pub use crew::{initialize_crew, CrewMember, CrewStatus};
pub use events::{CollectOutcome, ExpeditionEvent};
pub use hex::{Hex, HexMap};
pub use resolver::resolve_action;
pub use simulation::{Expedition, WatchReport};
pub use timekeeper::{advance_time, ExhaustionReport, TimeKeeper};
pub use warden::Warden;
