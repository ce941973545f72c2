//! Scaffold Core - library for generating Gin + MongoDB project skeletons
//!
//! Given a project name, this library materializes a fixed directory layout
//! and a set of Go source files (entry point, config, base data-access
//! layer, base model, router stub, response helpers) for a web-service
//! skeleton. It is purely generative: it emits text for other toolchains to
//! compile and never touches a database or the network itself.
//!
//! # Architecture
//!
//! - **Catalogs** (`templates`) - fixed, build-time sets of (path, body)
//!   templates with `{{...}}` markers
//! - **Planner** (`plan`) - maps a project name to the directory tree and
//!   file targets, purely
//! - **Renderer** (`templates::render`) - named-placeholder substitution
//!   that fails loudly on unresolved markers
//! - **Writer** (`writer`) - synchronous create-dir / overwrite-file
//!   primitives
//! - **Orchestrator** (`generator`) - sequences planning, rendering, and
//!   writing; fail-fast, no rollback
//!
//! Binaries supply product identity through the [`ProductConfig`] trait and
//! keep all terminal interaction to themselves; nothing in this crate
//! prints.
//!
//! # Example
//!
//! ```no_run
//! use scaffold_core::{generator, ProjectSpec};
//!
//! let spec = ProjectSpec::new("shopapi", "github.com/yourusername")?;
//! let report = generator::generate_project(std::path::Path::new("."), &spec)?;
//! assert_eq!(report.files.len(), 7);
//! # Ok::<(), scaffold_core::ScaffoldError>(())
//! ```

pub mod error;
pub mod generator;
pub mod naming;
pub mod plan;
pub mod product;
pub mod project;
pub mod templates;
pub mod writer;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use generator::{generate_module, generate_project, ModuleReport, ScaffoldReport};
pub use plan::{ScaffoldPlan, PROJECT_DIRS};
pub use product::ProductConfig;
pub use project::{ModuleSpec, ProjectSpec};
pub use templates::FileTemplate;
