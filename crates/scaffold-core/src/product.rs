//! Product configuration trait for CLI binaries
//!
//! The scaffolding core is product-agnostic; each binary implements this
//! trait to supply its identity and the module-path prefix stamped into
//! generated imports.

use std::path::Path;

/// Configuration trait for CLI products built on the scaffolding core.
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command).
    fn name(&self) -> &'static str;

    /// Human-readable display name.
    fn display_name(&self) -> &'static str;

    /// Prefix of the Go module path derived for every project, without a
    /// trailing slash, e.g. `github.com/yourusername`.
    fn module_prefix(&self) -> &'static str;

    /// CLI description shown in help text.
    fn cli_description(&self) -> &'static str;

    /// The "next steps" instructions shown after project creation.
    fn next_steps(&self, dir: &Path) -> Vec<String>;
}
