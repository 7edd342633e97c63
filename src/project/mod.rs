//! Corpus driver — finds source files under the configured roots and scans
//! them into one [`SymbolDatabase`](crate::hir::SymbolDatabase).

mod config;
mod error;
pub mod file_loader;
pub mod workspace_loader;

pub use config::AutodocConfig;
pub use error::LoadError;
pub use workspace_loader::{LoadReport, WorkspaceLoader};
