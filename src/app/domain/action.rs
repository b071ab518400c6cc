/// Everything the user can ask the editor to do to the session or its theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    New,
    Open,
    Save,
    SaveAs,
    Undo,
    Redo,
    ToggleTheme,
}
