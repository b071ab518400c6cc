use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::domain::{Action, Session};
use crate::app::services::note_file::{read_note, write_note};

/// The dialogs the controller needs. Implemented with native FLTK dialogs
/// in the UI and with canned answers in tests.
pub trait FilePrompt {
    /// Ask for a file to open. `None` means the user cancelled.
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Ask where to save. `None` means the user cancelled.
    fn pick_save_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Show an error to the user.
    fn report_error(&mut self, message: &str);
}

/// What the UI has to refresh after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    /// The session text was replaced and must be pushed into the editor.
    TextReplaced,
    /// Only the file name or saved state changed.
    FileChanged,
    ThemeChanged(bool),
}

/// Owns the editing session and the theme flag, and runs every [`Action`].
pub struct NoteController {
    session: Session,
    dark_mode: bool,
    last_directory: Option<PathBuf>,
}

impl NoteController {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            session: Session::new(),
            dark_mode,
            last_directory: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn dispatch(&mut self, action: Action, prompt: &mut impl FilePrompt) -> Outcome {
        debug!(?action, "dispatch");
        match action {
            Action::New => {
                self.session.reset();
                Outcome::TextReplaced
            }
            Action::Open => self.open(prompt),
            Action::Save => match self.session.file_path().map(Path::to_path_buf) {
                Some(path) => self.save_to(path, prompt),
                None => self.save_as(prompt),
            },
            Action::SaveAs => self.save_as(prompt),
            Action::Undo => {
                if self.session.undo() {
                    Outcome::TextReplaced
                } else {
                    Outcome::Unchanged
                }
            }
            Action::Redo => {
                if self.session.redo() {
                    Outcome::TextReplaced
                } else {
                    Outcome::Unchanged
                }
            }
            Action::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                Outcome::ThemeChanged(self.dark_mode)
            }
        }
    }

    /// Feed text typed by the user into the session. Returns `true` when a
    /// new undo snapshot was recorded.
    pub fn record_user_edit(&mut self, text: String) -> bool {
        self.session.edit(text)
    }

    fn open(&mut self, prompt: &mut impl FilePrompt) -> Outcome {
        let Some(path) = prompt.pick_open_path(self.last_directory.as_deref()) else {
            return Outcome::Unchanged;
        };

        match read_note(&path) {
            Ok(content) => {
                info!(path = %path.display(), "opened note");
                self.remember_directory(&path);
                self.session.replace_with_file(path, content);
                Outcome::TextReplaced
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "open failed");
                prompt.report_error(&format!("Error opening file: {}", e));
                Outcome::Unchanged
            }
        }
    }

    fn save_as(&mut self, prompt: &mut impl FilePrompt) -> Outcome {
        match prompt.pick_save_path(self.last_directory.as_deref()) {
            Some(path) => self.save_to(path, prompt),
            None => Outcome::Unchanged,
        }
    }

    fn save_to(&mut self, path: PathBuf, prompt: &mut impl FilePrompt) -> Outcome {
        match write_note(&path, self.session.text()) {
            Ok(()) => {
                info!(path = %path.display(), "saved note");
                self.remember_directory(&path);
                self.session.mark_saved(path);
                Outcome::FileChanged
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                prompt.report_error(&format!("Error saving file: {}", e));
                Outcome::Unchanged
            }
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}
