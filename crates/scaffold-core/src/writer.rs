//! Synchronous filesystem primitives for generation

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

/// Create `path` and any missing ancestors.
///
/// Idempotent: an already-existing directory succeeds. A file occupying the
/// path, or a permission problem, surfaces as `CreateDir` with the failing
/// path attached.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or overwrite the file at `path` with `content`.
///
/// Overwrite is unconditional: no existence check, no backup, no temp-file
/// rename. Re-running generation discards manual edits to generated files.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_ancestors_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call succeeds on the existing directory
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_dir_fails_when_a_file_occupies_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let occupied = tmp.path().join("cmd");
        fs::write(&occupied, "not a directory").unwrap();

        let err = ensure_dir(&occupied).unwrap_err();
        match err {
            ScaffoldError::CreateDir { path, .. } => assert_eq!(path, occupied),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_write_file_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("main.go");

        write_file(&target, "first").unwrap();
        write_file(&target, "second").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn test_write_file_reports_failing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("missing-dir/main.go");

        let err = write_file(&target, "content").unwrap_err();
        match err {
            ScaffoldError::WriteFile { path, .. } => assert_eq!(path, target),
            other => panic!("unexpected error: {}", other),
        }
    }
}
