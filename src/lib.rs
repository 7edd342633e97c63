//! # hdldoc-base
//!
//! Core library for extracting documentation comments from VHDL sources and
//! collecting them into queryable symbol tables.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → AnalysisHost (load once per build), Analysis read API
//!   ↓
//! project   → Configuration, file discovery, multi-root corpus driver
//!   ↓
//! hir       → Doc buffer, declaration state machine, symbol tables, resolver
//!   ↓
//! syntax    → Line classification (code, comments, banners)
//!   ↓
//! base      → Constants and text helpers
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → project → ide)
// ============================================================================

/// Foundation: domain constants, keyword and text helpers
pub mod base;

/// Syntax: line-granularity classification of source text
pub mod syntax;

/// High-level IR: documentation extraction and symbol tables
pub mod hir;

/// Project management: configuration, file discovery, corpus loading
pub mod project;

/// Read API consumed by documentation renderers
pub mod ide;

// Re-export the types most callers need
pub use hir::{Diagnostic, DocLines, SymbolDatabase, closest_match};
pub use ide::{Analysis, AnalysisHost};
pub use project::{AutodocConfig, LoadError, WorkspaceLoader};
