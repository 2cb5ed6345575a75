//! TUI runner - main loop that owns the terminal
//!
//! Draws the UI, waits for events, and dispatches keys to the App. Every
//! key event is handled to completion (including the synchronous
//! persistence write inside the manager) before the next draw.

use std::time::Duration;

use eyre::Result;
use tracing::debug;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;

/// Redraw cadence when no input arrives (~30 FPS)
const TICK_RATE: Duration = Duration::from_millis(33);

/// TUI runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
}

impl TuiRunner {
    /// Create a new runner around an application
    pub fn new(terminal: Tui, app: App) -> Self {
        debug!("TuiRunner::new");
        Self {
            app,
            terminal,
            event_handler: EventHandler::new(TICK_RATE),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        debug!("TuiRunner::run: entering main loop");
        loop {
            self.terminal.draw(|frame| views::render(&self.app, frame))?;

            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Resize(_, _) | Event::Tick => {}
            }

            if self.app.should_quit {
                debug!("TuiRunner::run: should_quit set, exiting");
                break;
            }
        }

        Ok(())
    }
}
