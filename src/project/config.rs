//! Corpus configuration

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::base::constants::DEFAULT_EXTENSIONS;

/// Where to find source files and how to scan them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutodocConfig {
    /// Ordered list of roots; every root feeds the same symbol tables.
    pub source_paths: Vec<PathBuf>,
    /// Recognised file extensions, without the dot (compared case-insensitively).
    pub extensions: Vec<String>,
    /// Scan files on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AutodocConfig {
    fn default() -> Self {
        Self {
            source_paths: vec![PathBuf::from(".")],
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            parallel: true,
        }
    }
}

impl AutodocConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a single source root.
    pub fn with_source_path(self, path: impl Into<PathBuf>) -> Self {
        self.with_source_paths([path])
    }

    /// Use an ordered list of source roots.
    pub fn with_source_paths<P: Into<PathBuf>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        self.source_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extensions<S: Into<String>>(mut self, extensions: impl IntoIterator<Item = S>) -> Self {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether `extension` (without the dot) names a source file.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    }

    /// Source roots in configured order with repeats removed.
    pub fn roots(&self) -> Vec<&Path> {
        let mut seen = FxHashSet::default();
        self.source_paths
            .iter()
            .map(PathBuf::as_path)
            .filter(|path| seen.insert(*path))
            .collect()
    }
}
