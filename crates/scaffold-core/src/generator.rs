//! Generation orchestration: init and generate workflows
//!
//! Both workflows are strictly sequential and fail-fast: the first
//! filesystem error aborts the run and nothing already written is rolled
//! back. Partial output is left for the user to inspect, since scaffolds
//! are cheap to regenerate.

use crate::error::{Result, ScaffoldError};
use crate::plan;
use crate::project::{ModuleSpec, ProjectSpec};
use crate::templates;
use crate::writer;
use std::fs;
use std::path::{Path, PathBuf};

/// What a successful `init` run created, for the CLI to report.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// What a successful `generate` run created.
#[derive(Debug, Clone)]
pub struct ModuleReport {
    pub files: Vec<PathBuf>,
}

/// Scaffold a new project under `base`.
///
/// Directories are created first, in plan order, then every catalog entry
/// is rendered and written in catalog order. Existing files at target paths
/// are overwritten unconditionally.
pub fn generate_project(base: &Path, spec: &ProjectSpec) -> Result<ScaffoldReport> {
    let plan = plan::plan(base, spec);

    for dir in &plan.directories {
        writer::ensure_dir(dir)?;
    }

    let substitutions = [
        ("module_path", spec.module_path.as_str()),
        ("project_name", spec.name.as_str()),
    ];

    let mut files = Vec::with_capacity(templates::project_catalog().len());
    for template in templates::project_catalog() {
        let content = templates::render(template.relative_path, template.body, &substitutions)?;
        let target = plan.root.join(template.relative_path);
        writer::write_file(&target, &content)?;
        files.push(target);
    }

    Ok(ScaffoldReport {
        root: plan.root,
        directories: plan.directories,
        files,
    })
}

/// Add a CRUD module to an existing project.
///
/// The module path is recovered from the project's go.mod, so `generate`
/// must run from the project root. Unlike `init`, this never overwrites:
/// all target paths are checked before the first write.
pub fn generate_module(project_dir: &Path, spec: &ModuleSpec) -> Result<ModuleReport> {
    let module_path = read_module_path(project_dir)?;

    let substitutions = [
        ("module_path", module_path.as_str()),
        ("module_pascal", spec.pascal.as_str()),
        ("module_snake", spec.snake.as_str()),
    ];

    // Render target paths and bodies up front; existence check happens
    // before anything touches the filesystem
    let mut rendered = Vec::with_capacity(templates::module_catalog().len());
    for template in templates::module_catalog() {
        let rel = templates::render(template.relative_path, template.relative_path, &substitutions)?;
        let content = templates::render(&rel, template.body, &substitutions)?;
        rendered.push((project_dir.join(rel), content));
    }

    for (target, _) in &rendered {
        if target.exists() {
            return Err(ScaffoldError::ModuleExists {
                path: target.clone(),
            });
        }
    }

    let mut files = Vec::with_capacity(rendered.len());
    for (target, content) in rendered {
        writer::write_file(&target, &content)?;
        files.push(target);
    }

    Ok(ModuleReport { files })
}

/// Read the `module` directive from `<project_dir>/go.mod`.
fn read_module_path(project_dir: &Path) -> Result<String> {
    let go_mod = project_dir.join("go.mod");
    if !go_mod.is_file() {
        return Err(ScaffoldError::NotAProject {
            dir: project_dir.to_path_buf(),
        });
    }

    let content = fs::read_to_string(&go_mod).map_err(|source| ScaffoldError::ReadGoMod {
        path: go_mod.clone(),
        source,
    })?;

    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("module "))
        .map(|rest| rest.trim().to_string())
        .next()
        .ok_or(ScaffoldError::MissingModuleDirective { path: go_mod })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_module_path_parses_directive() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("go.mod"),
            "module github.com/yourusername/shopapi\n\ngo 1.20\n",
        )
        .unwrap();

        let path = read_module_path(tmp.path()).unwrap();
        assert_eq!(path, "github.com/yourusername/shopapi");
    }

    #[test]
    fn test_read_module_path_without_go_mod() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_module_path(tmp.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::NotAProject { .. }));
    }

    #[test]
    fn test_read_module_path_without_directive() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("go.mod"), "go 1.20\n").unwrap();

        let err = read_module_path(tmp.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingModuleDirective { .. }));
    }
}
