//! Atomic replacement of the generated model file.

use docsync_core::{DocsyncError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Writes `contents` to a temporary file next to `destination` and renames it
/// over the destination. The destination is either fully replaced or left as
/// it was.
pub fn write_atomically(destination: &Path, contents: &str) -> Result<()> {
    if destination.file_name().is_none() {
        return Err(DocsyncError::InvalidPath {
            path: destination.to_path_buf(),
        });
    }
    let directory = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(directory)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;
    debug!(temp = ?staged.path(), "Staged generated model");

    staged.persist(destination).map_err(|e| DocsyncError::Io(e.error))?;
    info!(bytes = contents.len(), "Wrote {:?}", destination);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_creates_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("model.kt");

        write_atomically(&destination, "interface Markup\n").unwrap();

        assert_eq!(fs::read_to_string(&destination).unwrap(), "interface Markup\n");
    }

    #[test]
    fn test_replaces_existing_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("model.kt");
        fs::write(&destination, "old contents that are longer than the new ones").unwrap();

        write_atomically(&destination, "new").unwrap();

        assert_eq!(fs::read_to_string(&destination).unwrap(), "new");
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_missing_directory_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("missing").join("model.kt");

        let err = write_atomically(&destination, "x").unwrap_err();

        assert!(matches!(err, DocsyncError::Io(_)));
        assert!(!destination.exists());
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let err = write_atomically(Path::new("/"), "x").unwrap_err();
        assert!(matches!(err, DocsyncError::InvalidPath { .. }));
    }
}
