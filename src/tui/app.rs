// TUI application state
//
// Holds the two independent components - the typewriter session and the
// comment board - plus the form inputs, focus, and display state. The two
// components share nothing; they only meet in the layout.

use super::theme::Theme;
use crate::board::{Comment, CommentBoard};
use crate::logging::LogBuffer;
use crate::typewriter::Typewriter;
use std::time::{Duration, Instant};

/// Which part of the screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Browsing the comment list
    #[default]
    List,
    /// Editing the email input
    Email,
    /// Editing the comment input
    Comment,
}

impl Focus {
    /// Tab order: List -> Email -> Comment -> List
    pub fn next(self) -> Self {
        match self {
            Focus::List => Focus::Email,
            Focus::Email => Focus::Comment,
            Focus::Comment => Focus::List,
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// Comment board controller (validation, persistence, form note)
    pub board: CommentBoard,

    /// Cached comment list, refreshed after every mutation
    pub comments: Vec<Comment>,

    /// Typewriter session for the hero banner
    typewriter: Typewriter,

    /// Currently displayed animated text
    pub type_text: String,

    /// Form inputs
    pub email_input: String,
    pub comment_input: String,

    /// Current focus zone
    pub focus: Focus,

    /// Scroll offset for the comment list
    pub scroll_offset: usize,

    /// Whether the logs panel is visible
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: Theme,
}

impl App {
    pub fn new(board: CommentBoard, log_buffer: LogBuffer) -> Self {
        // Initial render: comments load once up front
        let comments = board.load();
        Self {
            board,
            comments,
            typewriter: Typewriter::standard(),
            type_text: String::new(),
            email_input: String::new(),
            comment_input: String::new(),
            focus: Focus::default(),
            scroll_offset: 0,
            show_logs: false,
            should_quit: false,
            start_time: Instant::now(),
            log_buffer,
            theme: Theme::default(),
        }
    }

    /// Advance the hero animation one character; returns the delay until
    /// the next tick so the event loop can re-arm its timer
    pub fn tick_typewriter(&mut self) -> Duration {
        let tick = self.typewriter.tick();
        self.type_text = tick.text;
        tick.delay
    }

    /// Re-read the stored comments into the cache
    pub fn refresh_comments(&mut self) {
        self.comments = self.board.load();
        if self.scroll_offset >= self.comments.len() {
            self.scroll_offset = 0;
        }
    }

    /// Submit the form; on success the inputs reset (and only then)
    pub fn submit_form(&mut self) {
        let posted = self.board.submit(&self.email_input, &self.comment_input);
        if posted {
            self.email_input.clear();
            self.comment_input.clear();
            self.focus = Focus::Email;
            self.refresh_comments();
            tracing::info!("Comment posted");
        }
    }

    /// Delete all comments and re-render the (now empty) list
    pub fn clear_comments(&mut self) {
        self.board.clear_all();
        self.refresh_comments();
        tracing::info!("Comments cleared");
    }

    /// Move to the next focus zone
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// The form input currently being edited, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Email => Some(&mut self.email_input),
            Focus::Comment => Some(&mut self.comment_input),
            Focus::List => None,
        }
    }

    /// Scroll the comment list up one entry
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll the comment list down one entry
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.comments.len() {
            self.scroll_offset += 1;
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::store::CommentStore;
    use crate::typewriter;

    fn test_app(tag: &str) -> App {
        let path = std::env::temp_dir().join(format!(
            "dnboard-app-test-{}-{}.json",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let board = CommentBoard::new(CommentStore::new(path));
        App::new(board, LogBuffer::new())
    }

    #[test]
    fn test_focus_cycles_through_zones() {
        let mut app = test_app("focus");
        assert_eq!(app.focus, Focus::List);
        app.focus_next();
        assert_eq!(app.focus, Focus::Email);
        app.focus_next();
        assert_eq!(app.focus, Focus::Comment);
        app.focus_next();
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_submit_resets_inputs_only_on_success() {
        let mut app = test_app("submit");

        // Validation failure keeps the typed values
        app.email_input = "a@b.com".to_string();
        app.submit_form();
        assert_eq!(app.email_input, "a@b.com");
        assert!(app.comments.is_empty());

        // Success clears the form and refreshes the cache
        app.comment_input = "hello".to_string();
        app.submit_form();
        assert!(app.email_input.is_empty());
        assert!(app.comment_input.is_empty());
        assert_eq!(app.comments.len(), 1);

        app.clear_comments();
        assert!(app.comments.is_empty());
    }

    #[test]
    fn test_typewriter_tick_updates_display() {
        let mut app = test_app("typewriter");
        let delay = app.tick_typewriter();
        assert_eq!(app.type_text, "A");
        assert_eq!(delay, typewriter::TYPE_DELAY);
    }
}
