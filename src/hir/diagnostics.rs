//! Diagnostics — warnings raised while extracting documentation.
//!
//! Extraction never fails on a single line; problems with comment placement
//! surface here and the scan continues.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// A warning with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: PathBuf,
    /// Line number (1-based).
    pub line: u32,
    /// Warning code (e.g., "W0001").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(file: impl Into<PathBuf>, line: u32, message: impl Into<Arc<str>>) -> Self {
        Self {
            file: file.into(),
            line,
            code: None,
            message: message.into(),
        }
    }

    /// Set the warning code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: warning", self.file.display(), self.line)?;
        if let Some(code) = &self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable warning codes.
pub mod codes {
    /// Documentation both precedes and trails the same declaration.
    pub const DOC_CONFLICT: &str = "W0001";
    /// A group banner was still open when a declaration appeared.
    pub const UNTERMINATED_BANNER: &str = "W0002";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects the warnings of one file's extraction.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
