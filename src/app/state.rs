use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    dialog,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use tracing::{debug, warn};

use super::controllers::notes::{NoteController, Outcome};
use super::domain::{Action, AppSettings, FontSpec, Message, ThemeMode};
use super::infrastructure::platform::detect_system_dark_mode;
use crate::ui::dialogs::font_chooser::show_font_chooser;
use crate::ui::file_dialogs::NativeFilePrompt;
use crate::ui::fonts::to_fltk_font;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::build_menu;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Binds the note controller to the FLTK widgets.
pub struct AppState {
    pub controller: NoteController,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub window: Window,
    pub menu: MenuBar,
    pub settings: AppSettings,
    /// Set while the application itself replaces the buffer text, so the
    /// modify callback does not report it as a user edit.
    replacing_text: Rc<Cell<bool>>,
    prompt: NativeFilePrompt,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings) -> Self {
        let dark_mode = match settings.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => detect_system_dark_mode(),
        };

        let MainWidgets {
            wind: window,
            mut menu,
            text_editor: editor,
            mut buffer,
        } = widgets;
        build_menu(&mut menu, &sender, dark_mode);

        let replacing_text = Rc::new(Cell::new(false));
        let replacing = replacing_text.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if replacing.get() {
                return;
            }
            if inserted > 0 || deleted > 0 {
                sender.send(Message::BufferModified);
            }
        });

        let mut state = Self {
            controller: NoteController::new(dark_mode),
            editor,
            buffer,
            window,
            menu,
            settings,
            replacing_text,
            prompt: NativeFilePrompt,
        };
        state.apply_dark_mode(dark_mode);
        let font = state.settings.font.clone();
        state.apply_font(&font);
        state.update_window_title();
        state
    }

    /// Handle one message from the channel. Returns `true` when the
    /// application should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileNew
            | Message::FileOpen
            | Message::FileSave
            | Message::FileSaveAs
            | Message::EditUndo
            | Message::EditRedo
            | Message::ToggleDarkMode => {
                if let Some(action) = msg.action() {
                    self.dispatch(action);
                }
            }
            Message::BufferModified => self.on_buffer_modified(),
            Message::ChooseFont => self.choose_font(),
            Message::FileQuit | Message::WindowClose => return self.file_quit(),
        }
        false
    }

    pub fn dispatch(&mut self, action: Action) {
        match self.controller.dispatch(action, &mut self.prompt) {
            Outcome::Unchanged => {}
            Outcome::TextReplaced => {
                self.show_session_text();
                self.update_window_title();
            }
            Outcome::FileChanged => self.update_window_title(),
            Outcome::ThemeChanged(is_dark) => {
                self.apply_dark_mode(is_dark);
                self.settings.theme_mode = ThemeMode::from_dark(is_dark);
                if let Err(e) = self.settings.save() {
                    warn!("Failed to save settings: {}", e);
                }
            }
        }
    }

    fn on_buffer_modified(&mut self) {
        let text = self.buffer.text();
        if self.controller.record_user_edit(text) {
            debug!(
                undo_depth = self.controller.session().history().undo_entries().len(),
                "recorded edit"
            );
            self.update_window_title();
        }
    }

    /// Push the session text into the editor without it counting as an edit.
    fn show_session_text(&mut self) {
        let cursor = self.editor.insert_position();
        self.replacing_text.set(true);
        self.buffer.set_text(self.controller.session().text());
        self.replacing_text.set(false);
        self.editor.set_insert_position(cursor.min(self.buffer.length()));
        self.editor.show_insert_position();
    }

    pub fn update_window_title(&mut self) {
        let title = self.controller.session().title();
        self.window.set_label(&title);
    }

    fn apply_dark_mode(&mut self, is_dark: bool) {
        apply_theme(&mut self.editor, &mut self.window, &mut self.menu, is_dark);
        #[cfg(target_os = "windows")]
        if self.window.shown() {
            set_windows_titlebar_theme(&self.window, is_dark);
        }
    }

    fn apply_font(&mut self, font: &FontSpec) {
        self.editor.set_text_font(to_fltk_font(font));
        self.editor.set_text_size(font.size as i32);
        self.editor.redraw();
    }

    fn choose_font(&mut self) {
        let Some(font) = show_font_chooser(&self.settings.font) else {
            return;
        };
        self.apply_font(&font);
        self.settings.font = font;
        if let Err(e) = self.settings.save() {
            dialog::alert_default(&format!("Failed to save settings: {}", e));
        }
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        if !self.controller.session().is_dirty() {
            return true;
        }

        let choice = dialog::choice2_default(
            "You have unsaved changes.",
            "Save",
            "Quit Without Saving",
            "Cancel",
        );

        match choice {
            Some(0) => {
                self.dispatch(Action::Save);
                !self.controller.session().is_dirty()
            }
            Some(1) => true,
            _ => false,
        }
    }
}
