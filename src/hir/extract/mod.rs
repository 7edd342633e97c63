//! Declaration scanner — a line-oriented state machine that finds documented
//! VHDL declarations without building a syntax tree.
//!
//! Every line is classified on its own (`classify`), then the pair
//! `(ParseState, LinePattern)` selects the action. Documentation comments
//! accumulate in a [`DocBuffer`](crate::hir::DocBuffer) and are handed to the
//! next declaration; anything that is neither documentation nor a recognised
//! declaration clears the buffer.
//!
//! Scanning never fails. Malformed input degrades to fewer symbols, plus a
//! warning for the cases in [`codes`](crate::hir::codes).

mod context;
mod declarations;
mod state;


use std::path::Path;

use crate::hir::symbols::ExtractionResult;
use crate::syntax::lines;
use context::ScanContext;

/// Scan one source text and return its documented symbols in emission order.
///
/// `file` is only used to label diagnostics and log records.
pub fn extract_symbols(file: &Path, source: &str) -> ExtractionResult {
    let mut context = ScanContext::new(file);
    for line in lines(source) {
        context.step(&line);
    }
    let result = context.finish();
    tracing::debug!(
        "[SCAN] {}: {} symbols, {} diagnostics",
        file.display(),
        result.symbols.len(),
        result.diagnostics.len()
    );
    result
}
