use super::{RandomSource, CHECK_DIE_SIDES, EVENT_DIE_SIDES};

/// Dice that replay fixed sequences
///
/// Each sequence cycles once exhausted. Values are clamped into the die's
/// range, and an empty sequence always yields 1. Draws are counted so tests
/// can assert how many rolls an action consumed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    events: Vec<u8>,
    checks: Vec<u8>,
    event_draws: usize,
    check_draws: usize,
}

impl ScriptedDice {
    pub fn new(events: Vec<u8>, checks: Vec<u8>) -> Self {
        Self {
            events: events.into_iter().map(|v| v.clamp(1, EVENT_DIE_SIDES)).collect(),
            checks: checks.into_iter().map(|v| v.clamp(1, CHECK_DIE_SIDES)).collect(),
            event_draws: 0,
            check_draws: 0,
        }
    }

    /// Dice whose checks always come up `value`
    pub fn checks(value: u8) -> Self {
        Self::new(Vec::new(), vec![value])
    }

    /// Dice whose event die always comes up `value`
    pub fn events(value: u8) -> Self {
        Self::new(vec![value], Vec::new())
    }

    pub fn event_draws(&self) -> usize {
        self.event_draws
    }

    pub fn check_draws(&self) -> usize {
        self.check_draws
    }

    fn next(values: &[u8], draws: usize) -> u8 {
        if values.is_empty() {
            1
        } else {
            values[draws % values.len()]
        }
    }
}

impl RandomSource for ScriptedDice {
    fn roll_event_die(&mut self) -> u8 {
        let value = Self::next(&self.events, self.event_draws);
        self.event_draws += 1;
        value
    }

    fn roll_check(&mut self) -> u8 {
        let value = Self::next(&self.checks, self.check_draws);
        self.check_draws += 1;
        value
    }
}
