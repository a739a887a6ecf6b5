use std::io::{self, stdout, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use crate::app::App;
use crate::event::EventHandler;
use crate::view;

/// Represents the Terminal UI, responsible for drawing and managing the terminal state.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Creates a new `Tui` instance and initializes the terminal.
    pub fn new() -> Result<Self> {
        let terminal = Self::init_terminal()?;
        Ok(Self { terminal })
    }

    /// Initializes the terminal for TUI rendering.
    ///
    /// A failed step undoes the steps before it, so an error never leaves
    /// the shell in raw mode.
    fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        setup_step(execute!(stdout(), EnterAlternateScreen), disable_raw_mode)?;
        let terminal = setup_step(Terminal::new(CrosstermBackend::new(stdout())), || {
            Self::restore_terminal().map_err(io::Error::other)
        })?;
        Ok(terminal)
    }

    /// Draws the dashboard.
    pub fn draw(&mut self, app: &App) -> Result<()> {
        self.terminal.draw(|frame| view::render(app, frame))?;
        Ok(())
    }

    /// Restores the terminal to its original state.
    ///
    /// Raw mode is disabled even when leaving the alternate screen fails.
    pub fn restore_terminal() -> Result<()> {
        let left = execute!(stdout(), LeaveAlternateScreen);
        disable_raw_mode()?;
        left?;
        Ok(())
    }
}

/// Pass a setup step's result through, running `rollback` first on failure.
fn setup_step<T>(step: io::Result<T>, rollback: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    step.inspect_err(|_| {
        if let Err(error) = rollback() {
            warn!(%error, "terminal rollback failed");
        }
    })
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Err(error) = Tui::restore_terminal() {
            eprintln!("error: failed to restore terminal: {error:#}");
        }
        default_hook(info);
    }));
}

/// Run the dashboard until the user quits.
///
/// The terminal is restored when drawing or event polling fails, and when
/// the loop panics.
pub fn run(app: &mut App) -> Result<()> {
    let mut tui = Tui::new()?;
    install_panic_hook();
    let events = EventHandler::new();
    info!("dashboard started");

    let outcome = event_loop(app, &mut tui, &events);
    Tui::restore_terminal()?;
    outcome
}

fn event_loop(app: &mut App, tui: &mut Tui, events: &EventHandler) -> Result<()> {
    while app.running {
        tui.draw(app)?;
        let action = events.next()?;
        app.dispatch(action);
    }
    Ok(())
}
