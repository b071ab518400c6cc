use std::path::{Path, PathBuf};

use fltk::dialog::{self, FileDialogType, NativeFileChooser, NativeFileChooserOptions};
use tracing::debug;

use crate::app::controllers::notes::FilePrompt;

/// FLTK format: "Description\tPattern", one filter per line.
const NOTE_FILTER: &str = "Text Files\t*.txt\nMarkdown Files\t*.{md,markdown}\nAll Files\t*";

/// Native open/save dialogs and modal alerts.
#[derive(Debug, Default)]
pub struct NativeFilePrompt;

impl FilePrompt for NativeFilePrompt {
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
        nfc.set_title("Open");
        run_chooser(nfc, start_dir)
    }

    fn pick_save_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
        nfc.set_title("Save As");
        nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
        run_chooser(nfc, start_dir)
    }

    fn report_error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}

fn run_chooser(mut nfc: NativeFileChooser, start_dir: Option<&Path>) -> Option<PathBuf> {
    nfc.set_filter(NOTE_FILTER);
    if let Some(dir) = start_dir {
        if let Err(e) = nfc.set_directory(&dir) {
            debug!(dir = %dir.display(), error = ?e, "could not preselect directory");
        }
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
