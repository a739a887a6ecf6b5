use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Action;

/// Handles terminal events and maps them to application `Action`s.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }

    /// Blocks until a key event is received or a timeout occurs.
    pub fn next(&self) -> Result<Action> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(action_for(key));
                }
            }
        }
        Ok(Action::Tick)
    }
}

/// Maps a `KeyEvent` to a corresponding `Action`.
pub fn action_for(key: KeyEvent) -> Action {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrev,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Right if shift => Action::IncreaseLarge,
        KeyCode::Left if shift => Action::DecreaseLarge,
        KeyCode::Right | KeyCode::Char('l') => Action::Increase,
        KeyCode::Left | KeyCode::Char('h') => Action::Decrease,
        KeyCode::Char('L') => Action::IncreaseLarge,
        KeyCode::Char('H') => Action::DecreaseLarge,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchTab,
        KeyCode::Char(']') => Action::SpanUp,
        KeyCode::Char('[') => Action::SpanDown,
        _ => Action::Tick,
    }
}
