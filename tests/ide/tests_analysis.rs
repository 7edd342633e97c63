#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use hdldoc::AnalysisHost;
use hdldoc::ide::{FieldError, TypeKind, generic_fields, port_fields};

use crate::helpers::corpus::{config_for, doc_lines, host_from_source, write_corpus};
use crate::helpers::source_fixtures::{UART_ENTITY, UTIL_PACKAGE};

#[test]
fn test_corpus_scanned_once_per_build() {
    let dir = write_corpus(&[("a.vhd", "entity a is\nend entity;\n")]);
    let mut host = AnalysisHost::new(config_for(&[dir.path()]));

    assert!(!host.is_loaded());
    assert!(host.ensure_loaded());
    assert!(!host.ensure_loaded());

    // Files added after the scan are not picked up by the same build
    fs::write(dir.path().join("b.vhd"), "entity b is\nend entity;\n").unwrap();
    assert!(host.analysis().entity("b").is_none());
    assert_eq!(host.report().files_scanned, 1);

    host.reset();
    let analysis = host.analysis();
    assert!(analysis.entity("a").is_some());
    assert!(analysis.entity("b").is_some());
}

#[test]
fn test_analysis_loads_lazily() {
    let dir = write_corpus(&[("uart_tx.vhd", UART_ENTITY)]);
    let mut host = AnalysisHost::new(config_for(&[dir.path()]));
    assert!(host.analysis().entity("uart_tx").is_some());
    assert!(host.is_loaded());
}

#[test]
fn test_port_and_generic_lookup() {
    let mut host = host_from_source(UART_ENTITY);
    let analysis = host.analysis();

    assert_eq!(
        analysis.port("uart_tx", "clk : in std_logic"),
        Some(&doc_lines(&["System clock."]))
    );
    assert_eq!(
        analysis.port("UART_TX", "  rst : in std_logic  "),
        Some(&doc_lines(&["Active high."]))
    );
    assert_eq!(
        analysis.generic("uart_tx", "PARITY : boolean := UNDEFINED"),
        Some(&doc_lines(&["Append an even parity bit."]))
    );
    assert!(analysis.port("uart_tx", "missing : in bit").is_none());
    assert!(analysis.port("no_such_unit", "clk : in std_logic").is_none());
    assert_eq!(
        analysis.group("uart_tx", "Clocking"),
        Some(&doc_lines(&["Clock and synchronous reset."]))
    );
}

#[test]
fn test_definitions_split_into_fields() {
    let mut host = host_from_source(UART_ENTITY);
    let analysis = host.analysis();

    let ports = analysis.ports("uart_tx").unwrap();
    let rows: Vec<(&str, &str, &str)> = ports
        .keys()
        .map(|key| port_fields(&key.text).unwrap())
        .map(|fields| (fields.name, fields.port_type, fields.mode))
        .collect();
    assert_eq!(rows[2], ("data", "std_logic_vector(7 downto 0)", "in"));
    assert_eq!(rows[3], ("tx", "std_logic", "out"));

    let generics = analysis.generics("uart_tx").unwrap();
    let defaults: Vec<&str> = generics
        .keys()
        .map(|key| generic_fields(&key.text).unwrap().default)
        .collect();
    assert_eq!(defaults, vec!["868", "UNDEFINED"]);

    assert!(matches!(port_fields("clk"), Err(FieldError::Port(_))));
}

#[test]
fn test_partial_name_lookups() {
    let mut host = host_from_source(UTIL_PACKAGE);
    let analysis = host.analysis();

    assert_eq!(analysis.package("inner").map(|(name, _)| name), Some("util.inner"));
    assert_eq!(analysis.package("util.inner").map(|(name, _)| name), Some("util.inner"));
    assert_eq!(
        analysis.package("UTIL").map(|(_, doc)| doc),
        Some(&doc_lines(&["Shared helpers."]))
    );
    assert!(analysis.package("other").is_none());

    let (key, doc) = analysis.function("integer.add").unwrap();
    assert_eq!(key.qualified(), "integer.add");
    assert_eq!(doc, &doc_lines(&["Add two integers."]));

    let (name, alias) = analysis.type_alias("util.byte_t").unwrap();
    assert_eq!(name, "byte_t");
    assert_eq!(alias.underlying, "std_logic_vector(7 downto 0)");
}

#[test]
fn test_type_index() {
    let mut host = host_from_source(UTIL_PACKAGE);
    let analysis = host.analysis();
    let index: Vec<(&str, TypeKind)> = analysis
        .type_index()
        .into_iter()
        .map(|entry| (entry.name, entry.kind))
        .collect();
    assert_eq!(
        index,
        vec![
            ("byte_t", TypeKind::Alias),
            ("state_t", TypeKind::Enum),
            ("xfer_t", TypeKind::Record),
        ]
    );
}

#[test]
fn test_diagnostics_visible_through_analysis() {
    let mut host = host_from_source("-- Lead.\nentity e is -- Trail.\nend entity;\n");
    let analysis = host.analysis();
    assert_eq!(analysis.diagnostics().len(), 1);
    assert_eq!(analysis.entity("e"), Some(&doc_lines(&["Lead."])));
}
