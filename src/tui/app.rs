//! TUI application - event handling and state transitions
//!
//! The App owns the TaskManager and the UI-only state (interaction mode,
//! list selection, transient error). It does no rendering - that's the
//! views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::domain::TaskId;
use crate::manager::TaskManager;

/// How key events are currently interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Navigating the task list
    #[default]
    Normal,
    /// Editing the pending-input field
    Input,
}

/// TUI application
pub struct App {
    /// Task list state manager
    manager: TaskManager,
    /// Current interaction mode
    pub mode: InteractionMode,
    /// Index of the selected task row
    pub selected: usize,
    /// Transient error shown in the footer, cleared on the next key press
    pub error_message: Option<String>,
    /// Set when the user asked to exit
    pub should_quit: bool,
}

impl App {
    /// Create an application around a loaded manager
    pub fn new(manager: TaskManager) -> Self {
        debug!(tasks = manager.total_count(), "App::new");
        Self {
            manager,
            mode: InteractionMode::default(),
            selected: 0,
            error_message: None,
            should_quit: false,
        }
    }

    /// The underlying task list manager
    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    /// Id of the currently selected task, if the list is non-empty
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.manager.tasks().get(self.selected).map(|t| t.id)
    }

    /// Handle a key event. Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, mode = ?self.mode, "App::handle_key");
        self.error_message = None;

        // Ctrl+C always quits, regardless of mode
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return true;
        }

        match self.mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::Input => self.handle_input_key(key),
        }

        self.should_quit
    }

    /// Handle key in normal (list navigation) mode
    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("App::handle_normal_key: quit requested");
                self.should_quit = true;
            }

            KeyCode::Char('a') | KeyCode::Char('i') => {
                debug!("App::handle_normal_key: entering input mode");
                self.mode = InteractionMode::Input;
            }

            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.manager.total_count().saturating_sub(1);
                self.selected = (self.selected + 1).min(max);
            }
            KeyCode::Char('g') => {
                self.selected = 0;
            }
            KeyCode::Char('G') => {
                self.selected = self.manager.total_count().saturating_sub(1);
            }

            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_task_id() {
                    debug!(id, "App::handle_normal_key: toggle");
                    if let Err(e) = self.manager.toggle_task(id) {
                        warn!(error = %e, "Failed to save after toggle");
                        self.error_message = Some(format!("Failed to save: {}", e));
                    }
                }
            }

            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task_id() {
                    debug!(id, "App::handle_normal_key: delete");
                    if let Err(e) = self.manager.delete_task(id) {
                        warn!(error = %e, "Failed to save after delete");
                        self.error_message = Some(format!("Failed to save: {}", e));
                    }
                    // Keep the selection on a valid row
                    self.selected = self.selected.min(self.manager.total_count().saturating_sub(1));
                }
            }

            _ => {}
        }
    }

    /// Handle key in input (pending text editing) mode
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Leave input mode; the composed text stays pending
                self.mode = InteractionMode::Normal;
            }
            KeyCode::Enter => match self.manager.add_task() {
                Ok(added) => {
                    debug!(added, "App::handle_input_key: add task");
                }
                Err(e) => {
                    warn!(error = %e, "Failed to save after add");
                    self.error_message = Some(format!("Failed to save: {}", e));
                }
            },
            KeyCode::Backspace => {
                let mut text = self.manager.pending_input().to_string();
                text.pop();
                self.manager.set_pending_input(text);
            }
            KeyCode::Char(c)
                if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
            {
                let mut text = self.manager.pending_input().to_string();
                text.push(c);
                self.manager.set_pending_input(text);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonStore;
    use tempfile::TempDir;

    fn app_in(temp: &TempDir) -> App {
        let store = JsonStore::new(temp.path().join("tasks.json"));
        App::new(TaskManager::load(Box::new(store)).unwrap())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn add_task(app: &mut App, text: &str) {
        app.handle_key(KeyEvent::from(KeyCode::Char('a')));
        type_text(app, text);
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        app.handle_key(KeyEvent::from(KeyCode::Esc));
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(key));
    }

    #[test]
    fn test_q_quits_from_normal_mode() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        assert!(app.handle_key(KeyEvent::from(KeyCode::Char('q'))));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_updates_pending_input() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        app.handle_key(KeyEvent::from(KeyCode::Char('a')));
        assert_eq!(app.mode, InteractionMode::Input);

        type_text(&mut app, "Buy milk");
        assert_eq!(app.manager().pending_input(), "Buy milk");

        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.manager().pending_input(), "Buy mil");
    }

    #[test]
    fn test_enter_commits_task_and_clears_input() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        app.handle_key(KeyEvent::from(KeyCode::Char('a')));
        type_text(&mut app, "Buy milk");
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.manager().total_count(), 1);
        assert_eq!(app.manager().tasks()[0].text, "Buy milk");
        assert_eq!(app.manager().pending_input(), "");
        // Input stays focused so several tasks can be added in a row
        assert_eq!(app.mode, InteractionMode::Input);
    }

    #[test]
    fn test_whitespace_only_enter_adds_nothing() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        app.handle_key(KeyEvent::from(KeyCode::Char('a')));
        type_text(&mut app, "   ");
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.manager().total_count(), 0);
    }

    #[test]
    fn test_esc_leaves_input_mode_keeping_text() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        app.handle_key(KeyEvent::from(KeyCode::Char('i')));
        type_text(&mut app, "draft");
        app.handle_key(KeyEvent::from(KeyCode::Esc));

        assert_eq!(app.mode, InteractionMode::Normal);
        assert_eq!(app.manager().pending_input(), "draft");
    }

    #[test]
    fn test_space_toggles_selected_task() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);
        add_task(&mut app, "A");
        add_task(&mut app, "B");

        app.handle_key(KeyEvent::from(KeyCode::Char(' ')));
        assert!(app.manager().tasks()[0].completed);
        assert!(!app.manager().tasks()[1].completed);

        // Toggle back
        app.handle_key(KeyEvent::from(KeyCode::Char(' ')));
        assert!(!app.manager().tasks()[0].completed);
    }

    #[test]
    fn test_navigation_moves_selection() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);
        add_task(&mut app, "A");
        add_task(&mut app, "B");
        add_task(&mut app, "C");

        app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        assert_eq!(app.selected, 2);

        // Clamped at the end
        app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        assert_eq!(app.selected, 2);

        app.handle_key(KeyEvent::from(KeyCode::Char('g')));
        assert_eq!(app.selected, 0);

        app.handle_key(KeyEvent::from(KeyCode::Char('G')));
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_delete_removes_selected_and_clamps_selection() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);
        add_task(&mut app, "A");
        add_task(&mut app, "B");

        app.handle_key(KeyEvent::from(KeyCode::Char('G')));
        app.handle_key(KeyEvent::from(KeyCode::Char('d')));

        assert_eq!(app.manager().total_count(), 1);
        assert_eq!(app.manager().tasks()[0].text, "A");
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut app = app_in(&temp);

        app.handle_key(KeyEvent::from(KeyCode::Char('d')));
        assert_eq!(app.manager().total_count(), 0);
        assert!(!app.should_quit);
    }
}
