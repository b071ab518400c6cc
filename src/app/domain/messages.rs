use super::action::Action;

/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditRedo,
    /// The user changed the text buffer.
    BufferModified,

    // View
    ToggleDarkMode,

    // Format
    ChooseFont,
}

impl Message {
    /// The session action this message stands for, if any.
    pub fn action(self) -> Option<Action> {
        match self {
            Message::FileNew => Some(Action::New),
            Message::FileOpen => Some(Action::Open),
            Message::FileSave => Some(Action::Save),
            Message::FileSaveAs => Some(Action::SaveAs),
            Message::EditUndo => Some(Action::Undo),
            Message::EditRedo => Some(Action::Redo),
            Message::ToggleDarkMode => Some(Action::ToggleTheme),
            Message::FileQuit
            | Message::WindowClose
            | Message::BufferModified
            | Message::ChooseFont => None,
        }
    }
}
