use fltk::{enums::Color, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

/// Colors for one of the two fixed themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text_bg: Color,
    pub text_fg: Color,
    pub cursor: Color,
    pub selection: Color,
    pub window_bg: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_hover: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            text_bg: Color::Black,
            text_fg: Color::White,
            cursor: Color::White,
            selection: Color::from_rgb(70, 70, 100),
            window_bg: Color::from_rgb(64, 64, 64),
            menu_bg: Color::from_rgb(35, 35, 35),
            menu_fg: Color::from_rgb(220, 220, 220),
            menu_hover: Color::from_rgb(60, 60, 60),
        }
    } else {
        Palette {
            text_bg: Color::White,
            text_fg: Color::Black,
            cursor: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
            window_bg: Color::from_rgb(192, 192, 192),
            menu_bg: Color::from_rgb(240, 240, 240),
            menu_fg: Color::Black,
            menu_hover: Color::from_rgb(200, 200, 200),
        }
    }
}

pub fn apply_theme(editor: &mut TextEditor, window: &mut Window, menu: &mut MenuBar, is_dark: bool) {
    let p = palette(is_dark);

    editor.set_color(p.text_bg);
    editor.set_text_color(p.text_fg);
    editor.set_cursor_color(p.cursor);
    editor.set_selection_color(p.selection);
    window.set_color(p.window_bg);
    menu.set_color(p.menu_bg);
    menu.set_text_color(p.menu_fg);
    menu.set_selection_color(p.menu_hover);

    editor.redraw();
    window.redraw();
    menu.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = if is_dark { 1 } else { 0 };
    // 20 on Windows 11 / Windows 10 2004+, 19 on Windows 10 1809-1903
    for attribute in [20, 19] {
        // SAFETY: the HWND belongs to a shown window and `on` outlives the call
        unsafe {
            let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_are_inverse_for_text() {
        let dark = palette(true);
        let light = palette(false);
        assert_eq!(dark.text_bg, Color::Black);
        assert_eq!(dark.text_fg, Color::White);
        assert_eq!(light.text_bg, Color::White);
        assert_eq!(light.text_fg, Color::Black);
    }

    #[test]
    fn test_cursor_visible_on_background() {
        for is_dark in [true, false] {
            let p = palette(is_dark);
            assert_ne!(p.cursor, p.text_bg);
        }
    }
}
