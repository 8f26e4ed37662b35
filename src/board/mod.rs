// Comment board - submission, storage and rendering of local comments
//
// The board is a small controller over the persisted comment blob: it
// validates submissions, prepends new comments (newest first), clears the
// whole list, and tracks the one-line form note shown after each action.
// All operations run to completion inside a single event handler, so a
// load-mutate-save sequence never interleaves with another writer.

pub mod markup;
pub mod store;

#[cfg(test)]
mod tests;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use store::CommentStore;

/// Shown under the form when a submission is missing a field
pub const NOTE_MISSING_FIELDS: &str = "Please provide both email and a comment.";

/// Shown under the form after a successful submission
pub const NOTE_POSTED: &str = "Thanks — your comment was posted.";

/// A single persisted comment
///
/// `time` is epoch milliseconds, assigned at submission. Neither field is
/// validated beyond non-empty-after-trim; escaping happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub email: String,
    pub text: String,
    pub time: i64,
}

/// Visual style of the form note - the two indicator states are part of
/// the UI contract, the concrete colors are the theme's business
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Success,
    Warning,
}

/// The single inline feedback message; a new note replaces any prior one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormNote {
    pub kind: NoteKind,
    pub text: String,
}

/// Controller for the comment board
pub struct CommentBoard {
    store: CommentStore,
    note: Option<FormNote>,
}

impl CommentBoard {
    pub fn new(store: CommentStore) -> Self {
        Self { store, note: None }
    }

    /// Stored comments, newest first; an unreadable blob reads as empty
    pub fn load(&self) -> Vec<Comment> {
        self.store.load()
    }

    pub fn store(&self) -> &CommentStore {
        &self.store
    }

    /// Current form note, if any action has run
    pub fn note(&self) -> Option<&FormNote> {
        self.note.as_ref()
    }

    /// Submit a new comment
    ///
    /// Both fields are trimmed; if either is empty the stored list is left
    /// untouched and the warning note is set. On success the comment is
    /// prepended, persisted, and the success note is set. Returns whether
    /// the comment was posted so the caller resets its inputs only then.
    pub fn submit(&mut self, email: &str, text: &str) -> bool {
        let email = email.trim();
        let text = text.trim();

        if email.is_empty() || text.is_empty() {
            self.note = Some(FormNote {
                kind: NoteKind::Warning,
                text: NOTE_MISSING_FIELDS.to_string(),
            });
            return false;
        }

        let mut comments = self.store.load();
        comments.insert(
            0,
            Comment {
                email: email.to_string(),
                text: text.to_string(),
                time: Utc::now().timestamp_millis(),
            },
        );
        if comments.len() > 1000 {
            // No cap is enforced; this is an operator hint, not a limit
            tracing::debug!("Comment blob holds {} entries", comments.len());
        }

        if let Err(e) = self.store.save(&comments) {
            tracing::error!("Failed to persist comment: {:#}", e);
        }

        self.note = Some(FormNote {
            kind: NoteKind::Success,
            text: NOTE_POSTED.to_string(),
        });
        true
    }

    /// Delete every stored comment; a second clear on an empty store is
    /// still a no-op
    pub fn clear_all(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::error!("Failed to clear comments: {:#}", e);
        }
    }
}
