use fltk::{
    button::Button,
    enums::{Align, FrameType},
    frame::Frame,
    menu::Choice,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::font::{FONT_FAMILIES, FONT_SIZES, PREVIEW_TEXT};
use crate::app::domain::{FontSpec, FontStyle};
use crate::ui::fonts::to_fltk_font;

/// Show the font chooser and return the selected font if the user clicked OK.
pub fn show_font_chooser(current: &FontSpec) -> Option<FontSpec> {
    let mut dialog = Window::default()
        .with_size(400, 250)
        .with_label("Choose Font")
        .center_screen();
    dialog.make_modal(true);

    let label_align = Align::Left | Align::Inside;

    Frame::default().with_pos(20, 15).with_size(110, 25).with_label("Font Family").with_align(label_align);
    let mut family_choice = Choice::default().with_pos(140, 15).with_size(240, 25);
    for family in FONT_FAMILIES {
        family_choice.add_choice(family);
    }
    family_choice.set_value(family_index(&current.family));

    Frame::default().with_pos(20, 50).with_size(110, 25).with_label("Font Size").with_align(label_align);
    let mut size_choice = Choice::default().with_pos(140, 50).with_size(240, 25);
    for size in FONT_SIZES {
        size_choice.add_choice(&size.to_string());
    }
    size_choice.set_value(size_index(current.size));

    Frame::default().with_pos(20, 85).with_size(110, 25).with_label("Font Style").with_align(label_align);
    let mut style_choice = Choice::default().with_pos(140, 85).with_size(240, 25);
    for style in FontStyle::all() {
        style_choice.add_choice(style.display_name());
    }
    style_choice.set_value(style_index(current.style));

    let mut preview = Frame::default().with_pos(20, 125).with_size(360, 60).with_label(PREVIEW_TEXT);
    preview.set_frame(FrameType::DownBox);
    preview.set_align(Align::Center | Align::Inside | Align::Clip);
    apply_preview(&mut preview, current);

    let mut ok_btn = Button::default().with_pos(190, 205).with_size(90, 30).with_label("OK");
    let mut cancel_btn = Button::default().with_pos(290, 205).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    // Re-render the preview whenever any of the three choices changes
    let selection = {
        let family_choice = family_choice.clone();
        let size_choice = size_choice.clone();
        let style_choice = style_choice.clone();
        let fallback = current.clone();
        move || selected_font(&family_choice, &size_choice, &style_choice, &fallback)
    };
    let selection = Rc::new(selection);
    for choice in [&mut family_choice, &mut size_choice, &mut style_choice] {
        let selection = selection.clone();
        let mut preview = preview.clone();
        choice.set_callback(move |_| {
            apply_preview(&mut preview, &selection());
        });
    }

    let result = Rc::new(RefCell::new(None));

    let result_ok = result.clone();
    let dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        *result_ok.borrow_mut() = Some(selection());
        dialog_ok.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    dialog.set_callback(move |w| {
        w.hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}

fn apply_preview(preview: &mut Frame, font: &FontSpec) {
    preview.set_label_font(to_fltk_font(font));
    preview.set_label_size(font.size as i32);
    preview.redraw();
}

fn selected_font(family: &Choice, size: &Choice, style: &Choice, fallback: &FontSpec) -> FontSpec {
    FontSpec {
        family: index_to_family(family.value())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.family.clone()),
        size: index_to_size(size.value()).unwrap_or(fallback.size),
        style: index_to_style(style.value()).unwrap_or(fallback.style),
    }
}

fn family_index(family: &str) -> i32 {
    FONT_FAMILIES.iter().position(|f| *f == family).map(|i| i as i32).unwrap_or(0)
}

fn size_index(size: u32) -> i32 {
    FONT_SIZES.iter().position(|s| *s == size).map(|i| i as i32).unwrap_or(0)
}

fn style_index(style: FontStyle) -> i32 {
    FontStyle::all().iter().position(|s| *s == style).map(|i| i as i32).unwrap_or(0)
}

fn index_to_family(index: i32) -> Option<&'static str> {
    usize::try_from(index).ok().and_then(|i| FONT_FAMILIES.get(i)).copied()
}

fn index_to_size(index: i32) -> Option<u32> {
    usize::try_from(index).ok().and_then(|i| FONT_SIZES.get(i)).copied()
}

fn index_to_style(index: i32) -> Option<FontStyle> {
    usize::try_from(index).ok().and_then(|i| FontStyle::all().get(i)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_for_every_option() {
        for (i, family) in FONT_FAMILIES.iter().enumerate() {
            assert_eq!(family_index(family), i as i32);
            assert_eq!(index_to_family(i as i32), Some(*family));
        }
        assert_eq!(size_index(16), 4);
        assert_eq!(index_to_size(4), Some(16));
        assert_eq!(style_index(FontStyle::Italic), 2);
        assert_eq!(index_to_style(1), Some(FontStyle::Bold));
    }

    #[test]
    fn test_no_selection_maps_to_none() {
        assert_eq!(index_to_family(-1), None);
        assert_eq!(index_to_size(-1), None);
        assert_eq!(index_to_style(3), None);
    }

    #[test]
    fn test_unknown_values_select_first_entry() {
        assert_eq!(family_index("Papyrus"), 0);
        assert_eq!(size_index(15), 0);
    }
}
