//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module draws the UI
//! from the App, but never modifies task state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::domain::Task;

use super::app::{App, InteractionMode};

/// Application title (the original's heading)
pub const TITLE: &str = "TODO";

/// Placeholder shown while the input field is empty
pub const PLACEHOLDER: &str = "Add a new task...";

/// Shown instead of the list when there are no tasks
pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one above!";

/// UI colors
mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const DIM: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
}

/// Counter text, or None when the list is empty (the counter is hidden then)
pub fn stats_line(completed: usize, total: usize) -> Option<String> {
    if total > 0 {
        Some(format!("{} / {} completed", completed, total))
    } else {
        None
    }
}

/// Checkbox glyph for a task row
fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Main render function
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Counter
            Constraint::Min(0),    // Task list / empty message
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_stats(app, frame, chunks[2]);
    render_tasks(app, frame, chunks[3]);
    render_footer(app, frame, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(Span::styled(
        format!(" {}", TITLE),
        Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title), area);
}

/// Render the pending-input field with its placeholder
fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.mode == InteractionMode::Input;
    let pending = app.manager().pending_input();

    let content = if pending.is_empty() && !editing {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(colors::DIM)))
    } else {
        let mut spans = vec![Span::raw(pending.to_string())];
        if editing {
            spans.push(Span::styled("▏", Style::default().fg(colors::HEADER)));
        }
        Line::from(spans)
    };

    let border_style = if editing {
        Style::default().fg(colors::HEADER)
    } else {
        Style::default().fg(colors::DIM)
    };

    let input = Paragraph::new(content).block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(input, area);
}

/// Render the "{completed} / {total} completed" counter (hidden when empty)
fn render_stats(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(text) = stats_line(app.manager().completed_count(), app.manager().total_count()) {
        let stats = Paragraph::new(Line::from(Span::styled(
            format!(" {}", text),
            Style::default().fg(colors::DIM),
        )));
        frame.render_widget(stats, area);
    }
}

/// Render the task list, or the empty-state message when there are no tasks
fn render_tasks(app: &App, frame: &mut Frame, area: Rect) {
    let tasks = app.manager().tasks();

    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            format!(" {}", EMPTY_MESSAGE),
            Style::default().fg(colors::DIM).add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks.iter().map(task_row).collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected.min(tasks.len() - 1)));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One task row: checkbox + text, completed rows dimmed and struck through
fn task_row(task: &Task) -> ListItem<'_> {
    let style = if task.completed {
        Style::default().fg(colors::DIM).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::raw(format!(" {} ", checkbox(task.completed))),
        Span::styled(task.text.clone(), style),
    ]))
}

/// Render context-sensitive keybind hints, or the transient error
fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(ref error) = app.error_message {
        let line = Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(colors::ERROR),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints: &[(&str, &str)] = match app.mode {
        InteractionMode::Input => &[("Enter", "Add"), ("Esc", "done")],
        InteractionMode::Normal => &[
            ("a", "new"),
            ("Space", "toggle"),
            ("d", "Delete"),
            ("j/k", "move"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" [{}]", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(colors::DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_line_format() {
        assert_eq!(stats_line(0, 1), Some("0 / 1 completed".to_string()));
        assert_eq!(stats_line(1, 2), Some("1 / 2 completed".to_string()));
        assert_eq!(stats_line(3, 3), Some("3 / 3 completed".to_string()));
    }

    #[test]
    fn test_stats_line_hidden_when_empty() {
        assert_eq!(stats_line(0, 0), None);
    }

    #[test]
    fn test_checkbox_glyphs() {
        assert_eq!(checkbox(false), "[ ]");
        assert_eq!(checkbox(true), "[x]");
    }

    #[test]
    fn test_literal_labels() {
        // These strings are part of the externally observable contract
        assert_eq!(TITLE, "TODO");
        assert_eq!(PLACEHOLDER, "Add a new task...");
        assert_eq!(EMPTY_MESSAGE, "No tasks yet. Add one above!");
    }
}
