use serde::{Deserialize, Serialize};

/// Sizes offered by the font chooser.
pub const FONT_SIZES: [u32; 11] = [8, 10, 12, 14, 16, 18, 20, 24, 28, 32, 36];

/// Families offered by the font chooser. Each one has a built-in face in
/// FLTK for every [`FontStyle`].
pub const FONT_FAMILIES: [&str; 4] = ["Helvetica", "Courier", "Times", "Screen"];

pub const PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
}

impl FontStyle {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
        }
    }

    pub fn all() -> &'static [FontStyle] {
        &[Self::Plain, Self::Bold, Self::Italic]
    }
}

/// Font family, size and style for the editor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    #[serde(default = "default_family")]
    pub family: String,

    #[serde(default = "default_size")]
    pub size: u32,

    #[serde(default)]
    pub style: FontStyle,
}

fn default_family() -> String {
    FONT_FAMILIES[0].to_string()
}

fn default_size() -> u32 {
    16
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: default_family(),
            size: default_size(),
            style: FontStyle::Plain,
        }
    }
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: u32, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size: nearest_font_size(size),
            style,
        }
    }

    /// Snap the size onto [`FONT_SIZES`] and replace an unknown family with
    /// the default one.
    pub fn normalized(mut self) -> Self {
        self.size = nearest_font_size(self.size);
        if !FONT_FAMILIES.contains(&self.family.as_str()) {
            self.family = default_family();
        }
        self
    }
}

/// Closest entry of [`FONT_SIZES`]; ties go to the smaller size.
pub fn nearest_font_size(size: u32) -> u32 {
    FONT_SIZES
        .iter()
        .copied()
        .min_by_key(|s| (s.abs_diff(size), *s))
        .unwrap_or_else(default_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font() {
        let font = FontSpec::default();
        assert_eq!(font.family, "Helvetica");
        assert_eq!(font.size, 16);
        assert_eq!(font.style, FontStyle::Plain);
    }

    #[test]
    fn test_nearest_font_size() {
        assert_eq!(nearest_font_size(16), 16);
        assert_eq!(nearest_font_size(0), 8);
        assert_eq!(nearest_font_size(100), 36);
        assert_eq!(nearest_font_size(23), 24);
        // Equidistant between 20 and 24
        assert_eq!(nearest_font_size(22), 20);
    }

    #[test]
    fn test_new_snaps_size() {
        let font = FontSpec::new("Courier", 13, FontStyle::Bold);
        assert_eq!(font.size, 12);
        assert_eq!(font.style, FontStyle::Bold);
    }

    #[test]
    fn test_normalized_replaces_unknown_family() {
        let font = FontSpec {
            family: "Comic Sans".to_string(),
            size: 30,
            style: FontStyle::Italic,
        }
        .normalized();
        assert_eq!(font.family, "Helvetica");
        assert_eq!(font.size, 28);
        assert_eq!(font.style, FontStyle::Italic);
    }

    #[test]
    fn test_style_serialization() {
        let json = serde_json::to_string(&FontStyle::Italic).unwrap();
        assert_eq!(json, "\"Italic\"");
    }

    #[test]
    fn test_partial_font_json() {
        let font: FontSpec = serde_json::from_str(r#"{"family": "Times"}"#).unwrap();
        assert_eq!(font.family, "Times");
        assert_eq!(font.size, 16);
        assert_eq!(font.style, FontStyle::Plain);
    }
}
