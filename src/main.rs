use fltk::{app, prelude::*};
use tracing::info;

use note_taker::app::state::AppState;
use note_taker::app::{AppSettings, Message, init_logging};
use note_taker::ui::main_window::build_main_window;

fn main() {
    init_logging();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets, sender, settings);

    state.window.show();
    #[cfg(target_os = "windows")]
    note_taker::ui::theme::set_windows_titlebar_theme(&state.window, state.controller.dark_mode());
    info!("editor ready");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                info!("quitting");
                app.quit();
            }
        }
    }
}
