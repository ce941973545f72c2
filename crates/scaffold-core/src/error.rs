//! Error taxonomy for scaffolding operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating a project or module.
///
/// Every filesystem error is terminal for the invocation: generation is
/// fail-fast with no rollback, so already-created directories and files are
/// left in place for the user to inspect or clean up.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project or module name is unusable as a path segment.
    /// Detected before any filesystem mutation.
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A directory in the plan could not be created.
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rendered file could not be written.
    #[error("failed to write file {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template still contained a `{{...}}` marker after substitution.
    /// The catalog is internal, so this is a bug in the catalog or the
    /// substitution set, never a user error.
    #[error("unresolved placeholder '{{{{{placeholder}}}}}' in template {template}")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },

    /// `generate` was invoked outside a scaffolded project (no go.mod).
    #[error("no go.mod found in {}: run this command inside a generated project", dir.display())]
    NotAProject { dir: PathBuf },

    /// go.mod exists but its module directive could not be read.
    #[error("failed to read module path from {}", path.display())]
    ReadGoMod {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// go.mod has no `module` directive.
    #[error("no module directive in {}", path.display())]
    MissingModuleDirective { path: PathBuf },

    /// A module file already exists; nothing was written.
    #[error("module file already exists: {}", path.display())]
    ModuleExists { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_placeholder_message_shows_braces() {
        let err = ScaffoldError::UnresolvedPlaceholder {
            template: "config/config.go".to_string(),
            placeholder: "module_path".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("{{module_path}}"), "got: {}", msg);
        assert!(msg.contains("config/config.go"));
    }

    #[test]
    fn test_create_dir_carries_source() {
        use std::error::Error;
        let err = ScaffoldError::CreateDir {
            path: PathBuf::from("shopapi/cmd"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("shopapi/cmd"));
        assert!(err.source().is_some());
    }
}
