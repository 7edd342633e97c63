#![allow(clippy::unwrap_used, clippy::expect_used)]

use hdldoc::project::{LoadReport, WorkspaceLoader};
use hdldoc::{LoadError, SymbolDatabase};
use rstest::rstest;

use crate::helpers::corpus::{config_for, doc_lines, write_corpus};
use crate::helpers::source_fixtures::{UART_ENTITY, UTIL_PACKAGE};

fn load(loader: &WorkspaceLoader) -> (SymbolDatabase, LoadReport) {
    let mut db = SymbolDatabase::new();
    let report = loader.load_roots(&mut db);
    (db, report)
}

#[test]
fn test_multiple_roots_share_tables() {
    let rtl = write_corpus(&[("uart/uart_tx.vhd", UART_ENTITY)]);
    let lib = write_corpus(&[("util.vhdl", UTIL_PACKAGE)]);

    let loader = WorkspaceLoader::new(config_for(&[rtl.path(), lib.path()]));
    let (db, report) = load(&loader);

    assert_eq!(report.files_scanned, 2);
    assert!(report.is_clean());
    assert!(db.entity("uart_tx").is_some());
    assert!(db.package("util").is_some());
}

#[test]
fn test_later_root_wins_on_collision() {
    let first = write_corpus(&[("e.vhd", "-- From first.\nentity e is\nend entity;\n")]);
    let second = write_corpus(&[("e.vhd", "-- From second.\nentity e is\nend entity;\n")]);

    let loader = WorkspaceLoader::new(config_for(&[first.path(), second.path()]));
    let (db, _) = load(&loader);
    assert_eq!(db.entity("e"), Some(&doc_lines(&["From second."])));
}

#[rstest]
#[case::sequential(false)]
#[case::parallel(true)]
fn test_scan_order_is_deterministic(#[case] parallel: bool) {
    let dir = write_corpus(&[
        ("c.vhd", "-- C.\nentity same is\nend entity;\nentity c is\nend entity;\n"),
        ("a.vhd", "-- A.\nentity same is\nend entity;\nentity a is\nend entity;\n"),
        ("nested/b.vhd", "-- B.\nentity same is\nend entity;\nentity b is\nend entity;\n"),
    ]);
    let config = config_for(&[dir.path()]).with_parallel(parallel);
    let (db, report) = load(&WorkspaceLoader::new(config));

    assert_eq!(report.files_scanned, 3);
    let names: Vec<&str> = db.entities().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["same", "a", "c", "b"]);
    // `nested/b.vhd` sorts after `c.vhd`, so it is merged last
    assert_eq!(db.entity("same"), Some(&doc_lines(&["B."])));
}

#[test]
fn test_extension_filter() {
    let dir = write_corpus(&[
        ("keep.vhd", "entity keep is\nend entity;\n"),
        ("also.VHDL", "entity also is\nend entity;\n"),
        ("skip.v", "entity skip is\nend entity;\n"),
        ("skip.txt", "entity text is\nend entity;\n"),
    ]);
    let (db, report) = load(&WorkspaceLoader::new(config_for(&[dir.path()])));
    assert_eq!(report.files_scanned, 2);
    assert!(db.entity("keep").is_some());
    assert!(db.entity("also").is_some());
    assert!(db.entity("skip").is_none());

    let custom = config_for(&[dir.path()]).with_extensions(["v"]);
    let (db, _) = load(&WorkspaceLoader::new(custom));
    assert!(db.entity("skip").is_some());
    assert!(db.entity("keep").is_none());
}

#[test]
fn test_missing_root_recorded_and_skipped() {
    let dir = write_corpus(&[("e.vhd", "entity e is\nend entity;\n")]);
    let missing = dir.path().join("does-not-exist");

    let loader = WorkspaceLoader::new(config_for(&[missing.as_path(), dir.path()]));
    let (db, report) = load(&loader);

    assert_eq!(report.failures.len(), 1);
    assert!(matches!(&report.failures[0], LoadError::RootNotFound(path) if *path == missing));
    assert!(db.entity("e").is_some());
}

#[test]
fn test_warnings_collected_per_file() {
    let dir = write_corpus(&[
        ("bad.vhd", "entity bad is\nport (\n-- Lead.\na : in bit; -- Trail.\n);\nend entity;\n"),
        ("good.vhd", "entity good is\nend entity;\n"),
    ]);
    let (_, report) = load(&WorkspaceLoader::new(config_for(&[dir.path()])));
    assert_eq!(report.warning_count(), 1);
    assert!(report.diagnostics[0].file.ends_with("bad.vhd"));
    assert_eq!(report.diagnostics[0].line, 4);
}
