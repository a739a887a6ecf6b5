//! Dashboard state and the actions that change it.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use rock_core::calculations::{
    FieldGroup, InputField, DEFAULT_SPAN, MAX_SPAN, RQD_PERCENT_MAX, RQD_PERCENT_MIN, SPAN_STEP,
};
use rock_core::settings::EngineSettings;
use rock_core::state::RockState;
use rock_core::units::Meters;
use tracing::{debug, info};

/// RQD change per arrow key press, percent
const RQD_STEP: f64 = 1.0;
/// RQD change with Shift held, percent
const RQD_LARGE_STEP: f64 = 10.0;

/// Represents actions that can be dispatched to the App.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    SelectNext,
    SelectPrev,
    Increase,
    Decrease,
    IncreaseLarge,
    DecreaseLarge,
    SwitchTab,
    SpanUp,
    SpanDown,
}

/// Input panel tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Rmr,
    QSystem,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Rmr, Tab::QSystem];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Rmr => "RMR89",
            Tab::QSystem => "Q-System",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Rmr => 0,
            Tab::QSystem => 1,
        }
    }

    fn group(&self) -> FieldGroup {
        match self {
            Tab::Rmr => FieldGroup::Rmr,
            Tab::QSystem => FieldGroup::QSystem,
        }
    }

    /// Rows shown on this tab, in input-vector order
    pub fn fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|field| field.group() == self.group())
            .collect()
    }
}

pub struct App {
    pub state: RockState,
    pub tab: Tab,
    /// Selected row on the active tab
    pub selected: usize,
    /// Excavation span; display only, never part of the input vector
    pub span: Meters,
    pub running: bool,
    /// Table row each table-backed field currently points at
    cursors: HashMap<InputField, usize>,
    recalcs: Rc<Cell<u64>>,
}

impl App {
    pub fn new(settings: EngineSettings, span: Meters) -> Self {
        let mut state = RockState::with_settings(settings);

        let recalcs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&recalcs);
        state.subscribe(move |_, _| counter.set(counter.get() + 1));

        // f64::clamp passes NaN through
        let span = if span.0.is_finite() {
            Meters(span.0.clamp(0.0, MAX_SPAN.0))
        } else {
            DEFAULT_SPAN
        };

        let cursors = InputField::ALL
            .into_iter()
            .filter_map(|field| {
                let table = field.table()?;
                let row = table.position_of(state.inputs().get(field)).unwrap_or(0);
                Some((field, row))
            })
            .collect();

        Self {
            state,
            tab: Tab::Rmr,
            selected: 0,
            span,
            running: true,
            cursors,
            recalcs,
        }
    }

    /// Number of input changes since start-up
    pub fn recalcs(&self) -> u64 {
        self.recalcs.get()
    }

    pub fn selected_field(&self) -> InputField {
        let fields = self.tab.fields();
        fields[self.selected.min(fields.len() - 1)]
    }

    /// Table row currently chosen for a table-backed field
    pub fn cursor(&self, field: InputField) -> Option<usize> {
        self.cursors.get(&field).copied()
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("dashboard closed");
                self.running = false;
            }
            Action::Tick => {}
            Action::SelectNext => {
                let rows = self.tab.fields().len();
                self.selected = (self.selected + 1) % rows;
            }
            Action::SelectPrev => {
                let rows = self.tab.fields().len();
                self.selected = if self.selected == 0 { rows - 1 } else { self.selected - 1 };
            }
            Action::Increase => self.step_selected(true, false),
            Action::Decrease => self.step_selected(false, false),
            Action::IncreaseLarge => self.step_selected(true, true),
            Action::DecreaseLarge => self.step_selected(false, true),
            Action::SwitchTab => {
                self.tab = match self.tab {
                    Tab::Rmr => Tab::QSystem,
                    Tab::QSystem => Tab::Rmr,
                };
                self.selected = 0;
            }
            Action::SpanUp => self.span = Meters((self.span + SPAN_STEP).0.min(MAX_SPAN.0)),
            Action::SpanDown => self.span = Meters((self.span - SPAN_STEP).0.max(0.0)),
        }
    }

    /// Move the selected field to its next or previous choice.
    fn step_selected(&mut self, forward: bool, large: bool) {
        let field = self.selected_field();
        let current = self.state.inputs().get(field);

        let next = match field.table() {
            Some(table) => {
                let last = table.entries.len() - 1;
                let row = self.cursor(field).unwrap_or(0);
                let row = if forward { (row + 1).min(last) } else { row.saturating_sub(1) };
                self.cursors.insert(field, row);
                table.entries[row].value
            }
            None => {
                let step = if large { RQD_LARGE_STEP } else { RQD_STEP };
                let value = if forward { current + step } else { current - step };
                value.clamp(RQD_PERCENT_MIN, RQD_PERCENT_MAX)
            }
        };

        if next != current {
            debug!(field = %field, from = current, to = next, "dashboard input change");
            self.state.set(field, next);
        }
    }
}
