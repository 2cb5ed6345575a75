//! Terminal user interface
//!
//! Renders the task list, the pending-input field, and the completion
//! counter, and routes key presses into the TaskManager:
//! - Input mode edits the pending text; Enter adds the task
//! - Normal mode navigates the list; Space toggles, `d` deletes

mod app;
mod events;
mod runner;
mod views;

pub use app::{App, InteractionMode};
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use views::{EMPTY_MESSAGE, PLACEHOLDER, TITLE, stats_line};

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use eyre::Result;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::manager::TaskManager;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI over a loaded task manager
pub async fn run(manager: TaskManager) -> Result<()> {
    let terminal = init()?;

    // Guard ensures the terminal is restored even on early return/error
    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = restore();
        }
    }
    let _guard = TerminalGuard;

    let mut runner = TuiRunner::new(terminal, App::new(manager));
    runner.run().await
}
