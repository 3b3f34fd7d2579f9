//! Action resolution
//!
//! Maps a declared action onto its effect on the party, the map and the
//! Warden. Each call receives exclusive access to that shared state for its
//! duration; callers resolve crew members one at a time in roster order.
//!
//! All validation happens before any state changes or dice are drawn, so a
//! failed call leaves everything as it was.

use tracing::debug;

use super::action::Action;
use super::crew::{CrewMember, CrewStatus};
use super::events::{CollectOutcome, ExpeditionEvent};
use super::hex::HexMap;
use super::warden::Warden;
use crate::core::error::{ExpeditionError, Result};
use crate::dice::RandomSource;

/// Resolve `action` for the crew member at roster index `actor`
///
/// Lost crew members cannot act: their action is skipped without drawing
/// dice and reported as `ActionSkipped`.
pub fn resolve_action<R: RandomSource>(
    action: Action,
    actor: usize,
    party: &mut [CrewMember],
    map: &mut HexMap,
    warden: &mut Warden,
    rng: &mut R,
) -> Result<Vec<ExpeditionEvent>> {
    let member = party.get(actor).ok_or_else(|| {
        ExpeditionError::InvalidState(format!(
            "no crew member at index {} (party of {})",
            actor,
            party.len()
        ))
    })?;

    if member.is_lost() {
        debug!(crew = %member.name, %action, "lost crew member skips action");
        return Ok(vec![ExpeditionEvent::ActionSkipped {
            crew: member.name.clone(),
            action,
        }]);
    }

    debug!(crew = %member.name, %action, "resolving action");

    match action {
        Action::Trek => trek(map, warden, rng),
        Action::Guard => Ok(guard(&party[actor])),
        Action::Encamp => encamp(party, map),
        Action::Rest => Ok(rest(&mut party[actor])),
        Action::Explore => explore(actor, party, map),
        Action::Collect => collect(&mut party[actor], map, rng),
    }
}

/// Move to the next hex and roll for events, twice on dangerous ground
fn trek<R: RandomSource>(
    map: &mut HexMap,
    warden: &mut Warden,
    rng: &mut R,
) -> Result<Vec<ExpeditionEvent>> {
    let from = map.current_hex()?.id;
    map.advance()?;
    let destination = map.current_hex()?;
    let to = destination.id;
    let dangerous = destination.is_dangerous;

    let mut events = vec![ExpeditionEvent::Trekked { from, to }];

    let roll = warden.roll_event_die(rng);
    events.push(ExpeditionEvent::EventDieRolled {
        roll,
        danger: false,
    });

    if dangerous {
        events.push(ExpeditionEvent::DangerEntered { hex: to });
        let roll = warden.roll_event_die(rng);
        events.push(ExpeditionEvent::EventDieRolled { roll, danger: true });
    }

    debug!(%from, %to, dangerous, "trek complete");
    Ok(events)
}

fn guard(member: &CrewMember) -> Vec<ExpeditionEvent> {
    vec![ExpeditionEvent::Guarding {
        crew: member.name.clone(),
    }]
}

/// Clear the whole party's stress if the current hex is safe
fn encamp(party: &mut [CrewMember], map: &HexMap) -> Result<Vec<ExpeditionEvent>> {
    let hex = map.current_hex()?;

    if !hex.is_safe_to_rest {
        return Ok(vec![ExpeditionEvent::CannotEncamp { hex: hex.id }]);
    }

    for member in party.iter_mut() {
        member.recover();
    }
    Ok(vec![ExpeditionEvent::Encamped { hex: hex.id }])
}

/// Shed stress; only works for a member already rested
fn rest(member: &mut CrewMember) -> Vec<ExpeditionEvent> {
    let relieved = member.rested;
    if relieved {
        member.stress = 0;
    }
    vec![ExpeditionEvent::Rested {
        crew: member.name.clone(),
        relieved,
    }]
}

/// Survey the current hex, and find any lost crew members
fn explore(
    actor: usize,
    party: &mut [CrewMember],
    map: &mut HexMap,
) -> Result<Vec<ExpeditionEvent>> {
    let hex = map.current_hex_mut()?;
    let mut events = Vec::new();

    if hex.mark_explored() {
        events.push(ExpeditionEvent::Explored { hex: hex.id });
        if hex.hidden_items {
            events.push(ExpeditionEvent::HiddenItemsFound { hex: hex.id });
        }
    } else {
        events.push(ExpeditionEvent::NoNewDiscoveries { hex: hex.id });
    }

    let explorer = party[actor].name.clone();
    for (index, member) in party.iter_mut().enumerate() {
        if index != actor && member.is_lost() {
            member.status = CrewStatus::Active;
            events.push(ExpeditionEvent::CrewFound {
                crew: member.name.clone(),
                by: explorer.clone(),
            });
        }
    }

    Ok(events)
}

/// Roll a check to gather resources from the current hex
fn collect<R: RandomSource>(
    member: &mut CrewMember,
    map: &mut HexMap,
    rng: &mut R,
) -> Result<Vec<ExpeditionEvent>> {
    let hex = map.current_hex_mut()?;
    let roll = rng.roll_check();
    let outcome = CollectOutcome::from_roll(roll);

    let mut events = vec![ExpeditionEvent::Collected {
        crew: member.name.clone(),
        roll,
        outcome,
    }];

    match outcome {
        CollectOutcome::Artifact => hex.has_artifact = true,
        CollectOutcome::CriticalFailure => {
            member.status = CrewStatus::Lost;
            events.push(ExpeditionEvent::CrewLost {
                crew: member.name.clone(),
            });
        }
        CollectOutcome::Goods | CollectOutcome::Scrap | CollectOutcome::Nothing => {}
    }

    Ok(events)
}
