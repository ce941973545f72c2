//! Path planning for the generated project tree

use crate::project::ProjectSpec;
use crate::templates;
use std::path::PathBuf;

/// Subdirectories created under the project root, in creation order.
/// Identical for every project; only the root varies with the name.
pub const PROJECT_DIRS: &[&str] = &[
    "cmd",
    "config",
    "controllers",
    "middlewares",
    "models",
    "routes",
    "services",
    "utils",
];

/// The full set of paths an `init` run will create.
///
/// Directories come first: every file in `files` lives either at the root
/// or inside one of `directories`, so creating them in order never needs a
/// missing parent.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    /// Project root, the project name joined onto the base directory.
    pub root: PathBuf,
    /// Absolute directory paths in creation order, root first.
    pub directories: Vec<PathBuf>,
    /// Target paths of catalog entries, in catalog order.
    pub files: Vec<PathBuf>,
}

/// Plan the tree for a project under `base`.
///
/// Pure: depends only on the arguments, never on the environment or the
/// current state of the filesystem.
pub fn plan(base: &std::path::Path, spec: &ProjectSpec) -> ScaffoldPlan {
    let root = base.join(&spec.name);

    let mut directories = Vec::with_capacity(PROJECT_DIRS.len() + 1);
    directories.push(root.clone());
    directories.extend(PROJECT_DIRS.iter().map(|d| root.join(d)));

    let files = templates::project_catalog()
        .iter()
        .map(|t| root.join(t.relative_path))
        .collect();

    ScaffoldPlan {
        root,
        directories,
        files,
    }
}
