use fltk::enums::Font;

use crate::app::domain::{FontSpec, FontStyle};

/// Map a font choice onto one of FLTK's built-in faces.
///
/// Screen has no italic face and falls back to plain. Unknown families use
/// Helvetica.
pub fn to_fltk_font(spec: &FontSpec) -> Font {
    match (spec.family.as_str(), spec.style) {
        ("Courier", FontStyle::Plain) => Font::Courier,
        ("Courier", FontStyle::Bold) => Font::CourierBold,
        ("Courier", FontStyle::Italic) => Font::CourierItalic,
        ("Times", FontStyle::Plain) => Font::Times,
        ("Times", FontStyle::Bold) => Font::TimesBold,
        ("Times", FontStyle::Italic) => Font::TimesItalic,
        ("Screen", FontStyle::Bold) => Font::ScreenBold,
        ("Screen", _) => Font::Screen,
        (_, FontStyle::Plain) => Font::Helvetica,
        (_, FontStyle::Bold) => Font::HelveticaBold,
        (_, FontStyle::Italic) => Font::HelveticaItalic,
    }
}
