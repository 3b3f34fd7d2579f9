//! Dice for event and skill rolls
//!
//! Everything random in the engine goes through [`RandomSource`], passed in
//! explicitly by the caller. Production runs use [`SeededDice`]; tests
//! replay fixed values with [`ScriptedDice`].

pub mod scripted;
pub mod seeded;

pub use scripted::ScriptedDice;
pub use seeded::SeededDice;

/// Faces on the event die
pub const EVENT_DIE_SIDES: u8 = 10;

/// Faces on the check die
pub const CHECK_DIE_SIDES: u8 = 20;

/// Uniform, independent dice draws
pub trait RandomSource {
    /// Roll the event die, in `1..=10`
    fn roll_event_die(&mut self) -> u8;

    /// Roll a skill check, in `1..=20`
    fn roll_check(&mut self) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll_event_die(&mut self) -> u8 {
        (**self).roll_event_die()
    }

    fn roll_check(&mut self) -> u8 {
        (**self).roll_check()
    }
}
