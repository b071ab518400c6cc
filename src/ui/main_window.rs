use fltk::{
    app::{self, Sender},
    enums::Event,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::Message;
use crate::app::domain::session::APP_NAME;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 600, 400, None);
    wind.set_label(&format!("Untitled - {}", APP_NAME));
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, 600, 400, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    route_history_keys(&mut text_editor, *sender);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing the window goes through the same unsaved-changes check as File/Quit
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        menu,
        text_editor,
        buffer,
    }
}

/// The editor has its own undo on Ctrl+Z (Cmd+Z on macOS). Send the keys to
/// the session history instead so there is a single undo stack.
fn route_history_keys(editor: &mut TextEditor, sender: Sender<Message>) {
    editor.handle(move |_, event| {
        if event != Event::KeyDown {
            return false;
        }
        let command = app::is_event_ctrl() || app::is_event_command();
        let Some(key) = app::event_key().to_char() else {
            return false;
        };
        match history_shortcut(key, command, app::is_event_shift()) {
            Some(msg) => {
                sender.send(msg);
                true
            }
            None => false,
        }
    });
}

/// Undo/redo message for a key press, if it is one of the history shortcuts.
fn history_shortcut(key: char, command: bool, shift: bool) -> Option<Message> {
    if !command {
        return None;
    }
    match key.to_ascii_lowercase() {
        'z' if shift => Some(Message::EditRedo),
        'z' => Some(Message::EditUndo),
        'y' => Some(Message::EditRedo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_and_redo_shortcuts() {
        assert_eq!(history_shortcut('z', true, false), Some(Message::EditUndo));
        assert_eq!(history_shortcut('z', true, true), Some(Message::EditRedo));
        assert_eq!(history_shortcut('Z', true, true), Some(Message::EditRedo));
        assert_eq!(history_shortcut('y', true, false), Some(Message::EditRedo));
    }

    #[test]
    fn test_plain_keys_reach_the_editor() {
        assert_eq!(history_shortcut('z', false, false), None);
        assert_eq!(history_shortcut('y', false, true), None);
        assert_eq!(history_shortcut('x', true, false), None);
    }
}
