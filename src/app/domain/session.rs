use std::path::{Path, PathBuf};

use super::history::History;
use crate::app::services::text_ops::extract_filename;

pub const APP_NAME: &str = "NoteTaker";

/// The document being edited: its text, where it lives on disk, and its
/// undo/redo history.
///
/// A session never touches the filesystem. Callers do the I/O and report
/// the result through [`Session::replace_with_file`] and
/// [`Session::mark_saved`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    text: String,
    file_path: Option<PathBuf>,
    history: History,
    dirty: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply text typed by the user.
    ///
    /// The text before the edit becomes the next undo snapshot. Returns
    /// `false` without recording anything when `new_text` matches the
    /// current text, which is what an echo of a programmatic replacement
    /// looks like.
    pub fn edit(&mut self, new_text: String) -> bool {
        if new_text == self.text {
            return false;
        }
        let previous = std::mem::replace(&mut self.text, new_text);
        self.history.record_edit(previous);
        self.dirty = true;
        true
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.text) {
            Some(previous) => {
                self.text = previous;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.text) {
            Some(next) => {
                self.text = next;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Start over with an empty, untitled document.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace the whole session with a file that was just read.
    pub fn replace_with_file(&mut self, path: PathBuf, contents: String) {
        self.text = contents;
        self.file_path = Some(path);
        self.history.clear();
        self.dirty = false;
    }

    /// Record that the current text was written to `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.file_path = Some(path);
        self.dirty = false;
    }

    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .map(extract_filename)
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn title(&self) -> String {
        let prefix = if self.dirty { "*" } else { "" };
        format!("{}{} - {}", prefix, self.display_name(), APP_NAME)
    }
}
