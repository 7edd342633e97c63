//! AnalysisHost and Analysis — build-scoped state and its read-only view.
//!
//! The `AnalysisHost` owns the configuration, the symbol database and the
//! load report. The corpus is scanned at most once per host; renderers then
//! take `Analysis` snapshots for lookups.
//!
//! ## Usage
//!
//! ```no_run
//! use hdldoc::{AnalysisHost, AutodocConfig};
//!
//! let mut host = AnalysisHost::new(AutodocConfig::new().with_source_path("rtl"));
//! let analysis = host.analysis();
//! if let Some(doc) = analysis.entity("fifo") {
//!     println!("{}", doc.join("\n"));
//! }
//! ```

use std::path::Path;

use crate::hir::{
    Diagnostic, DocLines, FunctionKey, GroupKey, InterfaceTable, MemberTable, SymbolDatabase,
    TypeAlias, extract_symbols, resolve_partial,
};
use crate::project::{AutodocConfig, LoadReport, WorkspaceLoader};

use super::type_index::{TypeEntry, type_index};

/// Owns the symbol tables of one documentation build.
pub struct AnalysisHost {
    config: AutodocConfig,
    db: SymbolDatabase,
    report: LoadReport,
    /// Set once the configured roots have been scanned.
    loaded: bool,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new(AutodocConfig::default())
    }
}

impl AnalysisHost {
    /// Create a host that scans `config`'s roots on first use.
    pub fn new(config: AutodocConfig) -> Self {
        Self {
            config,
            db: SymbolDatabase::new(),
            report: LoadReport::default(),
            loaded: false,
        }
    }

    /// Wrap an already populated database. No roots will be scanned.
    pub fn from_database(db: SymbolDatabase) -> Self {
        Self {
            config: AutodocConfig {
                source_paths: Vec::new(),
                ..AutodocConfig::default()
            },
            db,
            report: LoadReport::default(),
            loaded: true,
        }
    }

    pub fn config(&self) -> &AutodocConfig {
        &self.config
    }

    /// Returns true if the roots have been scanned.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Scans the configured roots unless that already happened.
    ///
    /// Returns `true` if this call performed the scan, `false` if the tables
    /// were already populated.
    pub fn ensure_loaded(&mut self) -> bool {
        if self.loaded {
            return false;
        }

        let loader = WorkspaceLoader::new(self.config.clone());
        let report = loader.load_roots(&mut self.db);
        self.report.files_scanned += report.files_scanned;
        self.report.failures.extend(report.failures);
        self.report.diagnostics.extend(report.diagnostics);
        self.loaded = true;
        true
    }

    /// Drop all tables so the next `analysis()` starts a fresh build.
    pub fn reset(&mut self) {
        self.db = SymbolDatabase::new();
        self.report = LoadReport::default();
        self.loaded = false;
    }

    /// Scan source text that does not live under a configured root.
    ///
    /// Returns the warnings raised for this text.
    pub fn add_source(&mut self, path: impl AsRef<Path>, text: &str) -> Vec<Diagnostic> {
        let mut extracted = extract_symbols(path.as_ref(), text);
        let diagnostics = std::mem::take(&mut extracted.diagnostics);
        self.db.merge(extracted);
        self.report.files_scanned += 1;
        self.report.diagnostics.extend(diagnostics.iter().cloned());
        diagnostics
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Get a snapshot for querying, scanning the corpus first if needed.
    pub fn analysis(&mut self) -> Analysis<'_> {
        self.ensure_loaded();
        Analysis {
            db: &self.db,
            report: &self.report,
        }
    }
}

/// Read-only view of a build's symbol tables.
#[derive(Clone, Copy)]
pub struct Analysis<'a> {
    db: &'a SymbolDatabase,
    report: &'a LoadReport,
}

impl<'a> Analysis<'a> {
    pub fn database(&self) -> &'a SymbolDatabase {
        self.db
    }

    pub fn diagnostics(&self) -> &'a [Diagnostic] {
        &self.report.diagnostics
    }

    // ========================================================================
    // DESIGN UNITS
    // ========================================================================

    pub fn entity(&self, name: &str) -> Option<&'a DocLines> {
        self.db.entity(name)
    }

    pub fn ports(&self, entity: &str) -> Option<&'a InterfaceTable> {
        self.db.ports(entity)
    }

    pub fn generics(&self, entity: &str) -> Option<&'a InterfaceTable> {
        self.db.generics(entity)
    }

    /// Documentation of one port, by its definition text.
    pub fn port(&self, entity: &str, definition: &str) -> Option<&'a DocLines> {
        find_definition(self.ports(entity)?, definition)
    }

    /// Documentation of one generic, by its definition text.
    pub fn generic(&self, entity: &str, definition: &str) -> Option<&'a DocLines> {
        find_definition(self.generics(entity)?, definition)
    }

    pub fn group(&self, entity: &str, title: &str) -> Option<&'a DocLines> {
        self.db.group(&GroupKey::new(entity, title))
    }

    // ========================================================================
    // PACKAGES, TYPES AND FUNCTIONS
    // ========================================================================

    /// Package by full or partial qualified name (`inner` finds `outer.inner`).
    pub fn package(&self, name: &str) -> Option<(&'a str, &'a DocLines)> {
        let target = name.to_lowercase();
        resolve_partial(
            &target,
            self.db.packages().map(|(qualified, doc)| (qualified.as_str(), doc)),
        )
    }

    pub fn record(&self, name: &str) -> Option<&'a DocLines> {
        self.db.record(name)
    }

    pub fn record_elements(&self, record: &str) -> Option<&'a MemberTable> {
        self.db.record_elements(record)
    }

    pub fn enumeration(&self, name: &str) -> Option<&'a DocLines> {
        self.db.enumeration(name)
    }

    pub fn enum_values(&self, enumeration: &str) -> Option<&'a MemberTable> {
        self.db.enum_values(enumeration)
    }

    /// Type alias by simple or package-qualified name.
    pub fn type_alias(&self, name: &str) -> Option<(&'a str, &'a TypeAlias)> {
        let target = name.to_lowercase();
        resolve_partial(
            &target,
            self.db.type_aliases().map(|(alias, info)| (alias.as_str(), info)),
        )
    }

    /// Function by name, optionally qualified with its return type
    /// (`add` or `unsigned.add`).
    pub fn function(&self, name: &str) -> Option<(&'a FunctionKey, &'a DocLines)> {
        let target = name.to_lowercase();
        let candidates: Vec<(String, (&'a FunctionKey, &'a DocLines))> = self
            .db
            .functions()
            .map(|(key, doc)| (key.qualified(), (key, doc)))
            .collect();
        resolve_partial(
            &target,
            candidates
                .iter()
                .map(|(qualified, payload)| (qualified.as_str(), *payload)),
        )
        .map(|(_, payload)| payload)
    }

    pub fn constants(&self, scope: &str) -> Option<&'a MemberTable> {
        self.db.constants(scope)
    }

    pub fn type_index(&self) -> Vec<TypeEntry<'a>> {
        type_index(self.db)
    }
}

fn find_definition<'a>(table: &'a InterfaceTable, definition: &str) -> Option<&'a DocLines> {
    let definition = definition.trim();
    table
        .iter()
        .find(|(key, _)| key.text == definition)
        .map(|(_, doc)| doc)
}
