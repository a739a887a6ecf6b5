//! Drives `RockState` the way a dashboard does: pick a table row, hand its
//! rating to a setter, read the pair back, react to notifications.

use std::cell::RefCell;
use std::rc::Rc;

use rock_core::calculations::{rmr_contributions, InputField, SupportAdvice, SupportStrategy};
use rock_core::equations::RockClass;
use rock_core::settings::{EngineSettings, InitPolicy};
use rock_core::state::RockState;
use rock_core::tables::{Q_JN, Q_SRF, RMR_CONDITION, RMR_STRENGTH};
use rock_core::units::Meters;
use rock_core::ClassificationResult;

#[test]
fn selecting_table_rows_updates_results() {
    let mut state = RockState::new();

    // "25 - 50 MPa" rates 4
    let strength = RMR_STRENGTH.find("25 - 50 mpa").unwrap().value;
    state.set_strength(strength);
    // "Slickensided / Gouge < 5mm" rates 10
    let condition = RMR_CONDITION.find("10").unwrap().value;
    state.set_condition(condition);
    state.set_rqd(60.0);

    // 4 + 13 + 20 + 10 + 15 + 0 = 62
    let results = *state.results();
    assert_eq!(results.rmr_score, 62.0);
    assert_eq!(results.rqd_points, 13);
    assert_eq!(results.gsi, 57.0);

    let advice = SupportAdvice::from_results(&results, Meters(5.0));
    assert_eq!(advice.rock_class.class, RockClass::II);
}

#[test]
fn resolving_choices_through_input_fields() {
    let mut state = RockState::new();

    let jn = InputField::Jn.resolve("Three joint sets").unwrap();
    let srf = InputField::Srf.resolve("5").unwrap();
    state.set(InputField::Jn, jn);
    state.set(InputField::Srf, srf);

    assert_eq!(state.inputs().jn, 9.0);
    assert!(Q_JN.contains_value(state.inputs().jn));
    assert!(Q_SRF.contains_value(state.inputs().srf));
    // (95/9) × 3 × (1/5) = 6.333..
    assert_eq!(state.results().q_value, 6.333);

    let advice = SupportAdvice::from_results(state.results(), Meters(12.0));
    assert_eq!(advice.support, SupportStrategy::SpotBoltingShotcrete);
    assert!((advice.bolt_length.0 - 3.8).abs() < 1e-9);
}

#[test]
fn every_change_notifies_once() {
    let mut state = RockState::new();
    let notifications = Rc::new(RefCell::new(Vec::<ClassificationResult>::new()));

    let sink = Rc::clone(&notifications);
    let first = state.subscribe(move |_, results| sink.borrow_mut().push(*results));
    let counter = Rc::new(RefCell::new(0usize));
    let tally = Rc::clone(&counter);
    state.subscribe(move |_, _| *tally.borrow_mut() += 1);

    for field in InputField::ALL {
        let current = state.inputs().get(field);
        state.set(field, current);
    }

    assert_eq!(*counter.borrow(), 11);
    assert_eq!(notifications.borrow().len(), 11);
    assert!(notifications.borrow().iter().all(|r| r == state.results()));

    state.unsubscribe(first);
    state.set_water(0.0);
    assert_eq!(notifications.borrow().len(), 11);
    assert_eq!(*counter.borrow(), 12);
}

#[test]
fn literal_defaults_replaced_on_first_change() {
    let settings = EngineSettings::default().with_init(InitPolicy::LiteralDefaults);
    let mut state = RockState::with_settings(settings);

    assert_eq!(state.results().rmr_score, 80.0);
    assert_eq!(state.results().q_value, 10.0);

    let recomputed = state.recalc(state.inputs());
    assert_ne!(recomputed, *state.results());

    state.set_jw(1.0);
    assert_eq!(*state.results(), recomputed);
}

#[test]
fn out_of_range_inputs_are_accepted() {
    let mut state = RockState::new();
    state.set_orientation(-60.0);
    state.set_strength(0.0);
    state.set_water(0.0);

    // 0 + 20 + 20 + 30 + 0 - 60 = 10; a further drop clamps at zero
    assert_eq!(state.results().rmr_score, 10.0);
    state.set_condition(0.0);
    assert_eq!(state.results().rmr_score, 0.0);
    assert_eq!(state.results().gsi, 0.0);

    // Zero denominators are floored, never NaN
    state.set_jn(0.0);
    state.set_ja(0.0);
    state.set_srf(0.0);
    assert!(state.results().q_value.is_finite());
    // (95/0.1) × (3/0.1) × (1/0.1) = 285000
    assert_eq!(state.results().q_value, 285_000.0);
}

#[test]
fn contribution_chart_tracks_state() {
    let mut state = RockState::new();
    state.set_rqd(30.0);
    state.set_spacing(5.0);

    let bars = rmr_contributions(state.inputs(), state.results());
    let names: Vec<&str> = bars.iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["Strength", "RQD", "Spacing", "Condition", "Water"]);

    let weak: Vec<&str> = bars.iter().filter(|b| b.is_weak()).map(|b| b.name).collect();
    assert_eq!(weak, vec!["RQD", "Spacing"]);
}
