use std::borrow::Cow;
use std::path::Path;

/// Extract the file name component of a path for display.
///
/// Returns "Unknown" when the path has no usable file name.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows the input when there is nothing to convert.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename(Path::new("/home/user/notes.txt")), "notes.txt");
        assert_eq!(extract_filename(Path::new("todo.md")), "todo.md");
        assert_eq!(extract_filename(Path::new("/a/b/c/journal")), "journal");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(Path::new("/home/user/")), "user");
        assert_eq!(extract_filename(Path::new("")), "Unknown");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
        assert_eq!(extract_filename(Path::new("..")), "Unknown");
    }

    #[test]
    fn test_normalize_lf_is_borrowed() {
        let text = "line one\nline two\n";
        assert!(matches!(normalize_line_endings(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_crlf_and_cr() {
        assert_eq!(normalize_line_endings("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize_line_endings("a\rb"), "a\nb");
        assert_eq!(normalize_line_endings("a\r\r\nb"), "a\n\nb");
        assert_eq!(normalize_line_endings("\r"), "\n");
    }

    #[test]
    fn test_normalize_keeps_missing_trailing_newline() {
        assert_eq!(normalize_line_endings("no newline\r\nat end"), "no newline\nat end");
    }
}
