#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use hdldoc::hir::{DefinitionKey, GroupKey, SymbolDatabase, codes, extract_symbols};
use rstest::rstest;

use crate::helpers::corpus::doc_lines;
use crate::helpers::source_fixtures::{UART_ENTITY, UTIL_PACKAGE};

fn database(source: &str) -> SymbolDatabase {
    let mut db = SymbolDatabase::new();
    db.merge(extract_symbols(Path::new("fixture.vhd"), source));
    db
}

#[test]
fn test_uart_fixture() {
    let db = database(UART_ENTITY);

    assert_eq!(
        db.entity("UART_TX"),
        Some(&doc_lines(&[
            "Minimal UART transmitter.",
            "",
            "Sends one byte per request."
        ]))
    );

    let generics = db.generics("uart_tx").unwrap();
    assert_eq!(
        generics.get(&DefinitionKey::new("BAUD_DIV : positive := 868")),
        Some(&doc_lines(&["Clock cycles per bit."]))
    );
    assert_eq!(
        generics.get(&DefinitionKey::new("PARITY : boolean := UNDEFINED")),
        Some(&doc_lines(&["Append an even parity bit."]))
    );

    let clocking = GroupKey::new("uart_tx", "Clocking");
    let data = GroupKey::new("uart_tx", "Data");
    assert_eq!(
        db.group(&clocking),
        Some(&doc_lines(&["Clock and synchronous reset."]))
    );
    assert_eq!(db.group(&data), Some(&doc_lines(&[])));

    let ports: Vec<(Option<&str>, &str)> = db
        .ports("uart_tx")
        .unwrap()
        .keys()
        .map(|key| (key.group.as_ref().map(|g| g.title.as_str()), key.text.as_str()))
        .collect();
    assert_eq!(
        ports,
        vec![
            (Some("Clocking"), "clk : in std_logic"),
            (Some("Clocking"), "rst : in std_logic"),
            (Some("Data"), "data : in std_logic_vector(7 downto 0)"),
            (Some("Data"), "tx : out std_logic"),
        ]
    );

    assert_eq!(
        db.constants("uart_tx")
            .unwrap()
            .get("FRAME_BITS : natural := 10"),
        Some(&doc_lines(&["Bits per frame."]))
    );
}

#[test]
fn test_util_fixture() {
    let db = database(UTIL_PACKAGE);

    let packages: Vec<&str> = db.packages().map(|(name, _)| name.as_str()).collect();
    assert_eq!(packages, vec!["util", "util.inner"]);

    let elements: Vec<&str> = db
        .record_elements("xfer_t")
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        elements,
        vec!["addr : unsigned(15 downto 0)", "data : std_logic_vector(31 downto 0)"]
    );

    let values = db.enum_values("state_t").unwrap();
    assert_eq!(values.len(), 3);
    assert_eq!(values.get("idle"), Some(&doc_lines(&["Waiting for work."])));

    assert_eq!(db.type_alias("byte_t").unwrap().doc, doc_lines(&["A byte."]));
    assert_eq!(db.functions().count(), 2);

    let constants = db.constants("util").unwrap();
    assert_eq!(constants.len(), 1);
    assert!(constants.contains_key("TIMEOUT : natural := 100"));
}

#[rstest]
#[case::single(&["Only line."])]
#[case::paragraphs(&["First.", "", "Second."])]
#[case::indented(&["Items:", "  * one", "  * two"])]
fn test_leading_comments_become_doc(#[case] lines: &[&str]) {
    let mut source = String::new();
    for line in lines {
        if line.is_empty() {
            source.push_str("--\n");
        } else {
            source.push_str(&format!("-- {line}\n"));
        }
    }
    source.push_str("type word_t is std_logic_vector(31 downto 0);\n");

    let db = database(&source);
    assert_eq!(db.type_alias("word_t").unwrap().doc, doc_lines(lines));
}

#[rstest]
#[case::entity("-- Lead.\nentity e is -- Trail.\nend entity;\n")]
#[case::function("-- Lead.\nfunction f return bit; -- Trail.\n")]
#[case::record_element("type r is record\n-- Lead.\nx : bit; -- Trail.\nend record;\n")]
#[case::enum_value("type s is (\n-- Lead.\nA, -- Trail.\nB);\n")]
#[case::constant("architecture a of e is\n-- Lead.\nconstant C : bit := '0'; -- Trail.\nbegin\nend a;\n")]
fn test_conflict_warns_once_and_keeps_leading(#[case] source: &str) {
    let result = extract_symbols(Path::new("conflict.vhd"), source);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].code.as_deref(),
        Some(codes::DOC_CONFLICT)
    );
    let documented: Vec<_> = result
        .symbols
        .iter()
        .filter(|symbol| !symbol.doc().is_empty())
        .collect();
    assert_eq!(documented.len(), 1);
    assert_eq!(documented[0].doc(), &doc_lines(&["Lead."]));
}

#[test]
fn test_sentinel_default_is_stable() {
    let first = database("entity e is\ngeneric (\nN : natural\n);\nend entity;\n");
    let stored = first.generics("e").unwrap().keys().next().unwrap().text.clone();
    assert_eq!(stored, "N : natural := UNDEFINED");

    // Feeding the stored text back in does not append a second default
    let again = database(&format!("entity e is\ngeneric (\n{stored}\n);\nend entity;\n"));
    let restored = &again.generics("e").unwrap().keys().next().unwrap().text;
    assert_eq!(restored, &stored);
}

#[test]
fn test_scan_resyncs_on_next_entity() {
    let db = database(
        r#"
entity broken is
    port (
        this line makes no sense
        ((( unbalanced
type lost_t is std_logic;
-- Next unit.
entity next_unit is
end entity;
"#,
    );
    assert!(db.entity("broken").is_some());
    assert!(db.ports("broken").is_none());
    // The unbalanced port list swallows lines until a recognisable unit
    assert!(db.type_alias("lost_t").is_none());
    assert_eq!(db.entity("next_unit"), Some(&doc_lines(&["Next unit."])));
}
