//! Main expedition loop
//!
//! Each watch resolves every crew member's order strictly in roster order,
//! then closes the watch with the time keeper. Watches never overlap: watch
//! k is fully resolved before watch k+1 begins.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::action::Action;
use super::crew::CrewMember;
use super::events::ExpeditionEvent;
use super::hex::HexMap;
use super::resolver::resolve_action;
use super::timekeeper::{ExhaustionReport, TimeKeeper};
use super::warden::Warden;
use crate::core::config::ExpeditionConfig;
use crate::core::error::{ExpeditionError, Result};
use crate::core::types::Watch;
use crate::dice::RandomSource;

/// Everything that happened during one watch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchReport {
    /// Watch number, starting at 1
    pub watch: Watch,
    /// Warden's event die at the close of the watch
    pub event_die: Option<u8>,
    pub events: Vec<ExpeditionEvent>,
    pub exhaustion: ExhaustionReport,
}

/// A running expedition
#[derive(Debug, Clone)]
pub struct Expedition<R: RandomSource> {
    pub party: Vec<CrewMember>,
    pub map: HexMap,
    pub warden: Warden,
    time_keeper: TimeKeeper,
    dice: R,
}

impl<R: RandomSource> Expedition<R> {
    pub fn new(party: Vec<CrewMember>, map: HexMap, dice: R) -> Self {
        Self {
            party,
            map,
            warden: Warden::new(),
            time_keeper: TimeKeeper::default(),
            dice,
        }
    }

    pub fn with_config(
        party: Vec<CrewMember>,
        map: HexMap,
        dice: R,
        config: &ExpeditionConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            time_keeper: TimeKeeper::from_config(config),
            ..Self::new(party, map, dice)
        })
    }

    pub fn dice(&self) -> &R {
        &self.dice
    }

    /// Resolve one watch
    ///
    /// `orders[i]` is the action declared by roster member `i`, `None` for
    /// no action. The order list must cover the whole roster. If an action
    /// fails the watch is abandoned: the error is returned and the clock
    /// does not advance.
    pub fn run_watch(&mut self, orders: &[Option<Action>]) -> Result<WatchReport> {
        if orders.len() != self.party.len() {
            return Err(ExpeditionError::InvalidState(format!(
                "{} orders given for a party of {}",
                orders.len(),
                self.party.len()
            )));
        }

        let watch = self.warden.time + 1;
        debug!(watch, "watch begins");

        let mut events = Vec::new();
        for (actor, order) in orders.iter().enumerate() {
            let Some(action) = *order else {
                continue;
            };
            let resolved = resolve_action(
                action,
                actor,
                &mut self.party,
                &mut self.map,
                &mut self.warden,
                &mut self.dice,
            )
            .map_err(|e| {
                warn!(watch, actor, %action, error = %e, "watch abandoned");
                e
            })?;
            events.extend(resolved);
        }

        let exhaustion = self.time_keeper.advance(&mut self.warden, &mut self.party);
        events.push(ExpeditionEvent::WatchEnded {
            watch: exhaustion.watch,
        });
        if exhaustion.day_ended {
            events.push(ExpeditionEvent::DayEnded {
                day: self.time_keeper.calendar().day_of(exhaustion.watch),
            });
            for &index in &exhaustion.penalized {
                let member = &self.party[index];
                events.push(ExpeditionEvent::Exhausted {
                    crew: member.name.clone(),
                    stress: member.stress,
                });
            }
        }

        Ok(WatchReport {
            watch: exhaustion.watch,
            event_die: self.warden.last_event(),
            events,
            exhaustion,
        })
    }

    /// Run `watches` consecutive watches
    ///
    /// `declare(watch, index, member)` supplies each member's order for the
    /// upcoming watch. Stops at the first failing watch.
    pub fn run<F>(&mut self, watches: u64, mut declare: F) -> Result<Vec<WatchReport>>
    where
        F: FnMut(Watch, usize, &CrewMember) -> Option<Action>,
    {
        let mut reports = Vec::new();
        for _ in 0..watches {
            let upcoming = self.warden.time + 1;
            let orders: Vec<Option<Action>> = self
                .party
                .iter()
                .enumerate()
                .map(|(index, member)| declare(upcoming, index, member))
                .collect();
            reports.push(self.run_watch(&orders)?);
        }
        Ok(reports)
    }
}
