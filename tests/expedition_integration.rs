//! Integration tests for full expedition runs

use hexwatch::core::ExpeditionConfig;
use hexwatch::dice::{ScriptedDice, SeededDice};
use hexwatch::expedition::{
    initialize_crew, Action, CrewMember, Expedition, ExpeditionEvent, Hex, HexMap,
};

fn demo_map() -> HexMap {
    HexMap::new(vec![
        Hex::new(1).safe_to_rest().with_hidden_items(),
        Hex::new(2).dangerous(),
        Hex::new(3).safe_to_rest(),
    ])
}

/// Trek / Guard / Rest for a full day
#[test]
fn test_first_day_trek_guard_rest() {
    let party = vec![
        CrewMember::new("Alice").with_rested(false),
        CrewMember::new("Bob").with_rested(false),
        CrewMember::new("Charlie").with_rested(true),
    ];
    let mut exp = Expedition::new(party, demo_map(), ScriptedDice::events(5));
    let orders = [Some(Action::Trek), Some(Action::Guard), Some(Action::Rest)];

    let reports = exp.run(6, |_, index, _| orders[index]).unwrap();

    assert_eq!(exp.warden.time, 6);
    assert_eq!(exp.map.current_index(), 0);
    assert_eq!(exp.party[0].stress, 10);
    assert_eq!(exp.party[1].stress, 10);
    assert_eq!(exp.party[2].stress, 0);
    assert!(exp.party.iter().all(|m| !m.rested));
    assert_eq!(reports[5].exhaustion.penalized, vec![0, 1]);

    // Six treks pass the dangerous hex twice
    assert_eq!(exp.dice().event_draws(), 8);
    let danger_rolls = reports
        .iter()
        .flat_map(|r| &r.events)
        .filter(|e| matches!(e, ExpeditionEvent::EventDieRolled { danger: true, .. }))
        .count();
    assert_eq!(danger_rolls, 2);
}

/// Default crew start rested, so the first day costs nothing
#[test]
fn test_fresh_crew_survives_first_day() {
    let party = initialize_crew(&["Alice", "Bob", "Charlie"]);
    let mut exp = Expedition::new(party, demo_map(), SeededDice::new(42));
    let orders = [Some(Action::Trek), Some(Action::Guard), Some(Action::Rest)];

    exp.run(6, |_, index, _| orders[index]).unwrap();
    assert!(exp.party.iter().all(|m| m.stress == 0));

    // Nobody re-earned rest, so day two penalizes everyone
    exp.run(6, |_, index, _| orders[index]).unwrap();
    assert!(exp.party.iter().all(|m| m.stress == 10));
}

/// Encamping each day keeps the party fresh
#[test]
fn test_daily_encamp_prevents_exhaustion() {
    let party = initialize_crew(&["Alice", "Bob"]);
    let mut exp = Expedition::new(party, demo_map(), SeededDice::new(3));

    exp.run(18, |watch, index, _| match (watch % 6, index) {
        (0, 0) => Some(Action::Encamp),
        (_, 1) => Some(Action::Guard),
        _ => None,
    })
    .unwrap();

    assert_eq!(exp.warden.time, 18);
    assert!(exp.party.iter().all(|m| m.stress == 0));
}

/// A lost collector sits out until someone explores
#[test]
fn test_lost_and_found() {
    let party = initialize_crew(&["Alice", "Bob"]);
    let mut exp = Expedition::new(party, demo_map(), ScriptedDice::checks(1));

    let first = exp.run_watch(&[Some(Action::Collect), None]).unwrap();
    assert!(exp.party[0].is_lost());
    assert!(first
        .events
        .contains(&ExpeditionEvent::CrewLost { crew: "Alice".into() }));

    let second = exp.run_watch(&[Some(Action::Collect), None]).unwrap();
    assert!(matches!(
        second.events[0],
        ExpeditionEvent::ActionSkipped { action: Action::Collect, .. }
    ));
    assert_eq!(exp.dice().check_draws(), 1);

    let third = exp
        .run_watch(&[Some(Action::Collect), Some(Action::Explore)])
        .unwrap();
    assert!(!exp.party[0].is_lost());
    assert!(third.events.contains(&ExpeditionEvent::CrewFound {
        crew: "Alice".into(),
        by: "Bob".into()
    }));

    // Found again, Alice acts next watch
    exp.run_watch(&[Some(Action::Collect), None]).unwrap();
    assert_eq!(exp.dice().check_draws(), 2);
}

/// Same seed, same expedition
#[test]
fn test_seeded_runs_replay() {
    let run = |seed| {
        let party = initialize_crew(&["Alice", "Bob", "Charlie"]);
        let mut exp = Expedition::new(party, demo_map(), SeededDice::new(seed));
        let orders = [Some(Action::Trek), Some(Action::Collect), Some(Action::Explore)];
        exp.run(12, |_, index, _| orders[index]).unwrap()
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn test_config_from_toml_drives_run() {
    let config = ExpeditionConfig::from_toml_str(
        r#"
        watches_per_day = 2
        exhaustion_penalty = 3
        "#,
    )
    .unwrap();
    let party = vec![CrewMember::new("Alice").with_rested(false)];
    let mut exp =
        Expedition::with_config(party, demo_map(), ScriptedDice::default(), &config).unwrap();

    let reports = exp.run(4, |_, _, _| None).unwrap();

    assert!(reports[1].exhaustion.day_ended);
    assert!(reports[3].exhaustion.day_ended);
    assert_eq!(exp.party[0].stress, 6);
}
