//! Plain-text ingestion and output
//!
//! Failures surface as recoverable [`WordGraphError`] values; the caller
//! decides whether to continue with an empty graph.

use crate::errors::{Result, WordGraphError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read a whole UTF-8 document
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read document");
            Ok(text)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "document unreadable");
            Err(WordGraphError::source_unreadable(
                path.display().to_string(),
                err.to_string(),
            ))
        }
    }
}

/// Persist a single result string, creating parent directories as needed
pub fn write_output(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let to_error = |err: std::io::Error| {
        warn!(path = %path.display(), error = %err, "output not written");
        WordGraphError::output(path.display().to_string(), err.to_string())
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, contents).map_err(to_error)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_document(dir.path().join("missing.txt")).unwrap_err();

        assert!(matches!(err, WordGraphError::SourceUnreadable { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        assert!(matches!(
            read_document(&path),
            Err(WordGraphError::SourceUnreadable { .. })
        ));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");

        write_output(&path, "a walk here").unwrap();
        assert_eq!(read_document(&path).unwrap(), "a walk here");
    }

    #[test]
    fn test_write_into_directory_fails() {
        let dir = tempdir().unwrap();
        let err = write_output(dir.path(), "x").unwrap_err();
        assert!(matches!(err, WordGraphError::Output { .. }));
    }
}
