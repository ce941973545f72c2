//! Template catalogs and rendering
//!
//! This module provides:
//! - The `FileTemplate` catalog-entry type
//! - The fixed project catalog written by `init`
//! - The per-module catalog written by `generate`
//! - Named-placeholder rendering with fail-loud leftover detection

pub mod module;
pub mod project;
pub mod render;

pub use render::render;

/// One catalog entry: a target path relative to the project root and a
/// parametrized body. Both may carry `{{...}}` markers; neither is ever
/// built from user input.
#[derive(Debug, Clone, Copy)]
pub struct FileTemplate {
    pub relative_path: &'static str,
    pub body: &'static str,
}

/// The fixed, ordered catalog materialized by `init`.
pub fn project_catalog() -> &'static [FileTemplate] {
    project::PROJECT_CATALOG
}

/// The ordered catalog materialized by `generate` for one module.
pub fn module_catalog() -> &'static [FileTemplate] {
    module::MODULE_CATALOG
}
