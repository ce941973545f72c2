//! Project and module identity

use crate::error::{Result, ScaffoldError};
use crate::naming;

/// Identity of a project being scaffolded.
///
/// `module_path` is derived from `name` alone (prefix + name), so two
/// invocations with the same name always produce identical content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    /// User-supplied project name; becomes the root directory and the
    /// default database name in the generated config.
    pub name: String,

    /// Go module path stamped into every generated import statement,
    /// e.g. `github.com/yourusername/shopapi`.
    pub module_path: String,
}

impl ProjectSpec {
    /// Build a spec from a validated name and a module-path prefix.
    ///
    /// The name is used verbatim as a relative path segment, so anything
    /// that would escape the target directory or produce a surprising tree
    /// is rejected here, before any filesystem mutation.
    pub fn new(name: &str, module_prefix: &str) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            module_path: format!("{}/{}", module_prefix.trim_end_matches('/'), name),
        })
    }
}

/// Identity of a module added to an existing project by `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    /// Name as supplied on the command line.
    pub name: String,
    /// PascalCase form used for generated Go type names.
    pub pascal: String,
    /// snake_case form used for generated file names and collection name.
    pub snake: String,
}

impl ModuleSpec {
    pub fn new(name: &str) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            pascal: naming::to_pascal_case(name),
            snake: naming::to_snake_case(name),
        })
    }
}

/// Reject names that are empty or unusable as a single path segment.
fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(ScaffoldError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("name must not be empty");
    }
    if name == "." || name == ".." {
        return invalid("name must not be a relative path component");
    }
    if name.contains('/') || name.contains('\\') {
        return invalid("name must not contain path separators");
    }
    if name.chars().any(|c| c.is_control()) {
        return invalid("name must not contain control characters");
    }
    Ok(())
}
