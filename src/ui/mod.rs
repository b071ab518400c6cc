pub mod dialogs;
pub mod file_dialogs;
pub mod fonts;
pub mod main_window;
pub mod menu;
pub mod theme;
