//! # Application State
//!
//! `RockState` is the single source of truth for the current input vector
//! and the result vector computed from it. It is an ordinary value: the
//! owner of the UI loop creates one and passes it by reference to whatever
//! needs it.
//!
//! ## Structure
//!
//! ```text
//! RockState
//! ├── inputs: ClassificationInput    (eleven fields)
//! ├── results: ClassificationResult  (recomputed on every change)
//! ├── settings: EngineSettings       (rounding, init policy)
//! └── listeners: subscribers notified after every change
//! ```
//!
//! Every setter builds a complete replacement input vector, runs the full
//! `recalc`, then swaps both vectors in at once. Readers therefore only ever
//! see a consistent pair. Subscribers run synchronously before the setter
//! returns.
//!
//! ## Example
//!
//! ```rust
//! use rock_core::state::RockState;
//!
//! let mut state = RockState::new();
//! let results = state.set_rqd(80.0);
//! assert_eq!(results.rqd_points, 17);
//! assert_eq!(state.results().rmr_score, 97.0);
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use crate::calculations::{recalc_with, ClassificationInput, ClassificationResult, InputField};
use crate::settings::{EngineSettings, InitPolicy};

/// Callback invoked with the new pair after every input change
pub type Listener = Box<dyn FnMut(&ClassificationInput, &ClassificationResult)>;

/// Handle returned by [`RockState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A consistent copy of the live input/result pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub inputs: ClassificationInput,
    pub results: ClassificationResult,
}

/// Holder of the live input and result vectors.
pub struct RockState {
    inputs: ClassificationInput,
    results: ClassificationResult,
    settings: EngineSettings,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl RockState {
    /// State with default inputs and default settings
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    /// State with default inputs and explicit settings.
    ///
    /// With [`InitPolicy::LiteralDefaults`] the initial results are the
    /// literal vector rather than the ones `recalc` would give; the first
    /// setter call replaces them.
    pub fn with_settings(settings: EngineSettings) -> Self {
        let inputs = ClassificationInput::default();
        let results = match settings.init {
            InitPolicy::Recompute => recalc_with(&inputs, settings.rounding),
            InitPolicy::LiteralDefaults => ClassificationResult::LITERAL_DEFAULTS,
        };
        debug!(?settings, "initialized rock state");
        RockState {
            inputs,
            results,
            settings,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current input vector
    pub fn inputs(&self) -> &ClassificationInput {
        &self.inputs
    }

    /// Current result vector
    pub fn results(&self) -> &ClassificationResult {
        &self.results
    }

    /// Settings the state was created with
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Copy of the live pair
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            inputs: self.inputs,
            results: self.results,
        }
    }

    /// Full recomputation for an arbitrary input vector, using this state's
    /// rounding mode. Does not touch the live pair.
    pub fn recalc(&self, inputs: &ClassificationInput) -> ClassificationResult {
        recalc_with(inputs, self.settings.rounding)
    }

    /// Replace one input field, recompute everything, notify subscribers.
    ///
    /// Returns the new result vector.
    pub fn set(&mut self, field: InputField, value: f64) -> ClassificationResult {
        let inputs = self.inputs.with(field, value);
        let results = self.recalc(&inputs);

        self.inputs = inputs;
        self.results = results;
        debug!(field = %field, value, "input updated");

        self.notify();
        results
    }

    pub fn set_strength(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Strength, value)
    }

    pub fn set_rqd(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Rqd, value)
    }

    pub fn set_spacing(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Spacing, value)
    }

    pub fn set_condition(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Condition, value)
    }

    pub fn set_water(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Water, value)
    }

    pub fn set_orientation(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Orientation, value)
    }

    pub fn set_jn(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Jn, value)
    }

    pub fn set_jr(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Jr, value)
    }

    pub fn set_ja(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Ja, value)
    }

    pub fn set_jw(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Jw, value)
    }

    pub fn set_srf(&mut self, value: f64) -> ClassificationResult {
        self.set(InputField::Srf, value)
    }

    /// Register a callback run after every input change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ClassificationInput, &ClassificationResult) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of registered callbacks
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let inputs = self.inputs;
        let results = self.results;
        for (id, listener) in self.listeners.iter_mut() {
            trace!(subscription = id.0, "notifying subscriber");
            listener(&inputs, &results);
        }
    }
}

impl Default for RockState {
    fn default() -> Self {
        RockState::new()
    }
}

impl std::fmt::Debug for RockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RockState")
            .field("inputs", &self.inputs)
            .field("results", &self.results)
            .field("settings", &self.settings)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::settings::RoundingMode;

    #[test]
    fn test_initial_state_recomputed() {
        let state = RockState::new();
        assert_eq!(*state.inputs(), ClassificationInput::default());
        assert_eq!(state.results().rmr_score, 100.0);
        assert_eq!(state.results().q_value, 142.5);
        assert_eq!(state.results().gsi, 95.0);
    }

    #[test]
    fn test_initial_state_literal_defaults() {
        let settings = EngineSettings::default().with_init(InitPolicy::LiteralDefaults);
        let mut state = RockState::with_settings(settings);
        assert_eq!(*state.results(), ClassificationResult::LITERAL_DEFAULTS);

        // Setting a field to its current value still recomputes
        state.set_strength(15.0);
        assert_eq!(state.results().rmr_score, 100.0);
        assert_eq!(state.results().q_value, 142.5);
    }

    #[test]
    fn test_each_setter_targets_its_field() {
        let mut state = RockState::new();
        state.set_strength(7.0);
        state.set_rqd(55.0);
        state.set_spacing(8.0);
        state.set_condition(20.0);
        state.set_water(7.0);
        state.set_orientation(-5.0);
        state.set_jn(9.0);
        state.set_jr(1.5);
        state.set_ja(3.0);
        state.set_jw(0.66);
        state.set_srf(2.5);

        let expected = ClassificationInput {
            strength: 7.0,
            rqd: 55.0,
            spacing: 8.0,
            condition: 20.0,
            water: 7.0,
            orientation: -5.0,
            jn: 9.0,
            jr: 1.5,
            ja: 3.0,
            jw: 0.66,
            srf: 2.5,
        };
        assert_eq!(*state.inputs(), expected);
        // 7 + 13 + 8 + 20 + 7 - 5 = 50
        assert_eq!(state.results().rmr_score, 50.0);
        assert_eq!(state.results().gsi, 45.0);
        // (55/9) × (1.5/3) × (0.66/2.5) = 0.8066..
        assert_eq!(state.results().q_value, 0.807);
    }

    #[test]
    fn test_setter_idempotent() {
        let mut state = RockState::new();
        let first = state.set_jn(4.0);
        let second = state.set_jn(4.0);
        assert_eq!(first, second);
        assert_eq!(*state.results(), second);
    }

    #[test]
    fn test_setter_returns_live_results() {
        let mut state = RockState::new();
        let returned = state.set_orientation(-12.0);
        assert_eq!(returned, *state.results());
        assert_eq!(returned.rmr_score, 88.0);
    }

    #[test]
    fn test_subscribers_notified_with_new_pair() {
        let mut state = RockState::new();
        let seen: Rc<RefCell<Vec<(f64, f64)>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        state.subscribe(move |inputs, results| {
            sink.borrow_mut().push((inputs.rqd, results.rmr_score));
        });

        state.set_rqd(70.0);
        state.set_rqd(20.0);

        // 15 + 13 + 20 + 30 + 15 = 93, then 15 + 3 + 20 + 30 + 15 = 83
        assert_eq!(*seen.borrow(), vec![(70.0, 93.0), (20.0, 83.0)]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut state = RockState::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = state.subscribe(move |_, _| *counter.borrow_mut() += 1);

        state.set_water(10.0);
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set_water(7.0);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn test_state_recalc_uses_rounding_setting() {
        let state = RockState::with_settings(EngineSettings::default().with_rounding(RoundingMode::HalfToEven));
        // (1/16) = 0.0625 exactly, a tie at three decimals
        let inputs = ClassificationInput {
            rqd: 1.0,
            jn: 16.0,
            jr: 1.0,
            ..ClassificationInput::default()
        };
        assert_eq!(state.recalc(&inputs).q_value, 0.062);
        // Live pair untouched
        assert_eq!(state.inputs().rqd, 95.0);
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = RockState::new();
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["inputs"]["jn"], 2.0);
        assert_eq!(json["results"]["qValue"], 142.5);
    }
}
