//! Documentation IR — symbols, tables and name resolution.
//!
//! This module turns source text into documented symbols and collects them
//! into a [`SymbolDatabase`] that renderers read.
//!
//! ## Key Types
//!
//! - [`extract_symbols`] — Line-oriented declaration scanner (one file)
//! - [`DocSymbol`] — A documented declaration emitted by the scanner
//! - [`SymbolDatabase`] — Order-preserving tables for one build
//! - [`GroupKey`], [`DefinitionKey`], [`FunctionKey`] — Structured composite keys
//! - [`closest_match`] — Partial qualified-name resolver
//! - [`Diagnostic`] — Warnings raised while scanning
//!
//! ## Flow
//!
//! ```text
//! source text
//!     │
//!     ▼
//! extract_symbols(file)     ← per file, private state
//!     │
//!     ▼
//! ExtractionResult          ← symbols + diagnostics
//!     │
//!     ▼
//! SymbolDatabase::merge     ← last write wins
//!     │
//!     ▼
//! closest_match / lookups   ← read side
//! ```

mod diagnostics;
mod doc_buffer;
mod extract;
mod keys;
mod resolve;
mod symbols;
mod tables;

pub use diagnostics::{Diagnostic, DiagnosticCollector, codes};
pub use doc_buffer::{Attachment, DocBuffer};
pub use extract::extract_symbols;
pub use keys::{DefinitionKey, FunctionKey, GroupKey, ListKind};
pub use resolve::{closest_match, last_segment, resolve_partial};
pub use symbols::{DocLines, DocSymbol, ExtractionResult};
pub use tables::{FxIndexMap, InterfaceTable, MemberTable, SymbolDatabase, TypeAlias};
