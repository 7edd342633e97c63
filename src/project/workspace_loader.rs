use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::{AutodocConfig, LoadError, file_loader};
use crate::hir::{Diagnostic, ExtractionResult, SymbolDatabase, extract_symbols};

/// What happened during one load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of files scanned successfully.
    pub files_scanned: usize,
    /// Roots and files that were skipped.
    pub failures: Vec<LoadError>,
    /// Warnings raised while scanning, in file order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// No failures and no warnings.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.diagnostics.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Loads every source file under the configured roots into a symbol database.
pub struct WorkspaceLoader {
    config: AutodocConfig,
}

impl WorkspaceLoader {
    pub fn new(config: AutodocConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AutodocConfig {
        &self.config
    }

    /// Source files across all roots, in root order, each path at most once.
    ///
    /// Missing roots are recorded in `report` and skipped.
    pub fn discover(&self, report: &mut LoadReport) -> Vec<PathBuf> {
        let mut seen = FxHashSet::default();
        let mut paths = Vec::new();
        for root in self.config.roots() {
            match file_loader::collect_file_paths(root, &self.config.extensions) {
                Ok(found) => paths.extend(found.into_iter().filter(|path| seen.insert(path.clone()))),
                Err(err) => {
                    tracing::warn!("{}", err);
                    report.failures.push(err);
                }
            }
        }
        paths
    }

    /// Scan all roots into `db`.
    ///
    /// Files are scanned independently (in parallel when configured) and
    /// merged in discovery order, so a key declared in several files keeps
    /// the documentation of the last one.
    pub fn load_roots(&self, db: &mut SymbolDatabase) -> LoadReport {
        let mut report = LoadReport::default();
        let paths = self.discover(&mut report);

        let results: Vec<Result<ExtractionResult, LoadError>> = if self.config.parallel {
            paths.par_iter().map(|path| scan_file(path)).collect()
        } else {
            paths.iter().map(|path| scan_file(path)).collect()
        };

        for result in results {
            match result {
                Ok(mut extracted) => {
                    report.files_scanned += 1;
                    report.diagnostics.append(&mut extracted.diagnostics);
                    db.merge(extracted);
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                    report.failures.push(err);
                }
            }
        }

        tracing::info!(
            "Scanned {} files ({} skipped): {} symbols, {} warnings",
            report.files_scanned,
            report.failures.len(),
            db.symbol_count(),
            report.warning_count()
        );
        report
    }

    /// Scan a single file into `db`, returning its diagnostics.
    pub fn load_file_into(&self, path: &Path, db: &mut SymbolDatabase) -> Result<Vec<Diagnostic>, LoadError> {
        let mut extracted = scan_file(path)?;
        let diagnostics = std::mem::take(&mut extracted.diagnostics);
        db.merge(extracted);
        Ok(diagnostics)
    }
}

fn scan_file(path: &Path) -> Result<ExtractionResult, LoadError> {
    let source = file_loader::load_file(path)?;
    Ok(extract_symbols(path, &source))
}
