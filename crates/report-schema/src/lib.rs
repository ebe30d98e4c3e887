//! Report schema definitions for archaudit.
//!
//! This crate defines the structure of audit reports: architecture
//! sets, per-binary entries, the aggregate bundle report, the
//! store-submission compliance rules, and the presence-table renderer.

pub mod arch;
pub mod compliance;
pub mod model;
pub mod render;

pub use arch::{ArchSet, ARCH_COLUMNS, FORBIDDEN_ARCHS};
pub use compliance::{has_forbidden_arch, non_compliant};
pub use model::{BinaryEntry, BinaryKind, BundleReport};
pub use render::render_presence_table;
