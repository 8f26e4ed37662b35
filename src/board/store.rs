// Comment store - the persisted comment blob
//
// Comments live in a single JSON file (an array of comment objects), the
// same blob shape the site keeps under its fixed local-storage key. The
// store owns read/write/clear of that one file and nothing else.
//
// Read failures of any kind - missing file, unreadable file, corrupt JSON,
// wrong shape - collapse to an empty list. That is the store's public
// contract, not an oversight: a broken blob must never surface as an error
// to the board or the user.

use super::Comment;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed blob name inside the data directory, matching the site's
/// local-storage key `dn_comments`
pub const COMMENTS_FILE: &str = "dn_comments.json";

/// File-backed store for the comment list
pub struct CommentStore {
    path: PathBuf,
}

impl CommentStore {
    /// Store backed by an explicit blob path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store backed by the standard blob inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(COMMENTS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored comment list, newest first
    ///
    /// Any failure yields an empty list; the cause is only logged.
    pub fn load(&self) -> Vec<Comment> {
        match self.try_load() {
            Ok(comments) => comments,
            Err(e) => {
                tracing::debug!("Comment blob unreadable, treating as empty: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Fallible decode, kept internal so callers only ever see the
    /// collapsed empty-list form
    fn try_load(&self) -> Result<Vec<Comment>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).context("Failed to read comment blob")?;
        serde_json::from_str(&raw).context("Failed to parse comment blob")
    }

    /// Persist the full comment list, replacing the previous blob
    pub fn save(&self, comments: &[Comment]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create data directory")?;
        }
        let json = serde_json::to_string(comments).context("Failed to serialize comments")?;
        fs::write(&self.path, json).context("Failed to write comment blob")?;
        Ok(())
    }

    /// Delete the whole blob; clearing an already-empty store is a no-op
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove comment blob"),
        }
    }
}
