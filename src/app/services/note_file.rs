use std::fs;
use std::path::Path;

use tracing::debug;

use super::text_ops::normalize_line_endings;
use crate::app::infrastructure::error::Result;

/// Read a note from disk with line endings normalized to `\n`.
pub fn read_note(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read note");
    Ok(normalize_line_endings(&content).into_owned())
}

/// Write `text` to `path` verbatim, replacing any existing file.
pub fn write_note(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote note");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_open_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        let text = "first line\n\n  indented \u{1f980}\nno trailing newline";

        write_note(&path, text).unwrap();
        assert_eq!(read_note(&path).unwrap(), text);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        write_note(&path, "a much longer original text").unwrap();
        write_note(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_open_normalizes_crlf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("windows.txt");
        fs::write(&path, "one\r\ntwo\r\n").unwrap();
        assert_eq!(read_note(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_note(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_open_invalid_utf8_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, b"\xff\xfe\x00\xc3").unwrap();
        let err = read_note(&path).unwrap_err();
        match err {
            AppError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("note.txt");
        assert!(write_note(&path, "text").is_err());
    }
}
