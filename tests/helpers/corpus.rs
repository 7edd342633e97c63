//! Temporary source trees and host setup.

use std::fs;
use std::path::Path;

use hdldoc::hir::DocLines;
use hdldoc::{AnalysisHost, AutodocConfig, SymbolDatabase};
use tempfile::TempDir;

/// Write `files` (relative path, contents) into a fresh temporary directory.
pub fn write_corpus(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (relative, contents) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write source file");
    }
    dir
}

/// Config scanning the given roots sequentially.
pub fn config_for(roots: &[&Path]) -> AutodocConfig {
    AutodocConfig::new()
        .with_source_paths(roots.iter().copied())
        .with_parallel(false)
}

/// A host holding a single in-memory source file.
pub fn host_from_source(source: &str) -> AnalysisHost {
    let mut host = AnalysisHost::from_database(SymbolDatabase::new());
    host.add_source("test.vhd", source);
    host
}

pub fn doc_lines(lines: &[&str]) -> DocLines {
    lines.iter().map(|line| line.to_string()).collect()
}
