//! Symbol tables — the documentation collected across a whole corpus.
//!
//! Every table preserves insertion order so renderers list ports, elements
//! and values in source order. Re-inserting a key replaces the previous
//! documentation in place (last write wins, no merge).

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use super::keys::{DefinitionKey, FunctionKey, GroupKey, ListKind};
use super::symbols::{DocLines, DocSymbol, ExtractionResult};
use crate::base::normalize_name;

/// Order-preserving map used by every table.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Port or generic definitions of one design unit.
pub type InterfaceTable = FxIndexMap<DefinitionKey, DocLines>;

/// Named members (record elements, enum values, constants) of one owner.
pub type MemberTable = FxIndexMap<String, DocLines>;

/// A type declared as another type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAlias {
    /// The type expression after `is`, e.g. `std_logic_vector(31 downto 0)`.
    pub underlying: String,
    pub doc: DocLines,
}

/// All documentation tables of one build.
#[derive(Clone, Debug, Default)]
pub struct SymbolDatabase {
    entities: FxIndexMap<SmolStr, DocLines>,
    ports: FxIndexMap<SmolStr, InterfaceTable>,
    generics: FxIndexMap<SmolStr, InterfaceTable>,
    groups: FxIndexMap<GroupKey, DocLines>,
    packages: FxIndexMap<SmolStr, DocLines>,
    records: FxIndexMap<SmolStr, DocLines>,
    record_elements: FxIndexMap<SmolStr, MemberTable>,
    enums: FxIndexMap<SmolStr, DocLines>,
    enum_values: FxIndexMap<SmolStr, MemberTable>,
    types: FxIndexMap<SmolStr, TypeAlias>,
    functions: FxIndexMap<FunctionKey, DocLines>,
    constants: FxIndexMap<SmolStr, MemberTable>,
}

impl SymbolDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // WRITES
    // ========================================================================

    /// Record one extracted symbol.
    pub fn insert(&mut self, symbol: DocSymbol) {
        match symbol {
            DocSymbol::Entity { name, doc } => {
                self.entities.insert(name, doc);
            }
            DocSymbol::Interface {
                unit,
                list,
                key,
                doc,
            } => {
                let table = match list {
                    ListKind::Port => &mut self.ports,
                    ListKind::Generic => &mut self.generics,
                };
                table.entry(unit).or_default().insert(key, doc);
            }
            DocSymbol::Group { key, doc, .. } => {
                self.groups.insert(key, doc);
            }
            DocSymbol::Package { name, doc } => {
                self.packages.insert(name, doc);
            }
            DocSymbol::Record { name, doc } => {
                self.records.insert(name, doc);
            }
            DocSymbol::RecordElement {
                record,
                element,
                doc,
            } => {
                self.record_elements
                    .entry(record)
                    .or_default()
                    .insert(element, doc);
            }
            DocSymbol::Enum { name, doc } => {
                self.enums.insert(name, doc);
            }
            DocSymbol::EnumValue {
                enumeration,
                value,
                doc,
            } => {
                self.enum_values
                    .entry(enumeration)
                    .or_default()
                    .insert(value, doc);
            }
            DocSymbol::TypeAlias {
                name,
                underlying,
                doc,
            } => {
                self.types.insert(name, TypeAlias { underlying, doc });
            }
            DocSymbol::Function { key, doc } => {
                self.functions.insert(key, doc);
            }
            DocSymbol::Constant {
                scope,
                definition,
                doc,
            } => {
                self.constants
                    .entry(scope)
                    .or_default()
                    .insert(definition, doc);
            }
        }
    }

    /// Record every symbol of one file, in emission order.
    pub fn merge(&mut self, result: ExtractionResult) {
        for symbol in result.symbols {
            self.insert(symbol);
        }
    }

    // ========================================================================
    // READS (names are case-normalised before lookup)
    // ========================================================================

    pub fn entity(&self, name: &str) -> Option<&DocLines> {
        self.entities.get(normalize_name(name).as_str())
    }

    pub fn ports(&self, unit: &str) -> Option<&InterfaceTable> {
        self.ports.get(normalize_name(unit).as_str())
    }

    pub fn generics(&self, unit: &str) -> Option<&InterfaceTable> {
        self.generics.get(normalize_name(unit).as_str())
    }

    pub fn group(&self, key: &GroupKey) -> Option<&DocLines> {
        self.groups.get(key)
    }

    /// Package documentation by exact qualified name.
    pub fn package(&self, qualified_name: &str) -> Option<&DocLines> {
        self.packages.get(normalize_name(qualified_name).as_str())
    }

    pub fn record(&self, name: &str) -> Option<&DocLines> {
        self.records.get(normalize_name(name).as_str())
    }

    pub fn record_elements(&self, record: &str) -> Option<&MemberTable> {
        self.record_elements.get(normalize_name(record).as_str())
    }

    pub fn enumeration(&self, name: &str) -> Option<&DocLines> {
        self.enums.get(normalize_name(name).as_str())
    }

    pub fn enum_values(&self, enumeration: &str) -> Option<&MemberTable> {
        self.enum_values.get(normalize_name(enumeration).as_str())
    }

    pub fn type_alias(&self, name: &str) -> Option<&TypeAlias> {
        self.types.get(normalize_name(name).as_str())
    }

    pub fn function(&self, key: &FunctionKey) -> Option<&DocLines> {
        self.functions.get(key)
    }

    pub fn constants(&self, scope: &str) -> Option<&MemberTable> {
        self.constants.get(normalize_name(scope).as_str())
    }

    // ========================================================================
    // ITERATION
    // ========================================================================

    pub fn entities(&self) -> impl Iterator<Item = (&SmolStr, &DocLines)> {
        self.entities.iter()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &DocLines)> {
        self.groups.iter()
    }

    pub fn packages(&self) -> impl Iterator<Item = (&SmolStr, &DocLines)> {
        self.packages.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = (&SmolStr, &DocLines)> {
        self.records.iter()
    }

    pub fn enums(&self) -> impl Iterator<Item = (&SmolStr, &DocLines)> {
        self.enums.iter()
    }

    pub fn type_aliases(&self) -> impl Iterator<Item = (&SmolStr, &TypeAlias)> {
        self.types.iter()
    }

    pub fn functions(&self) -> impl Iterator<Item = (&FunctionKey, &DocLines)> {
        self.functions.iter()
    }

    /// Total number of documented symbols across all tables.
    pub fn symbol_count(&self) -> usize {
        let nested = |table: &FxIndexMap<SmolStr, MemberTable>| -> usize {
            table.values().map(IndexMap::len).sum()
        };
        let interfaces = |table: &FxIndexMap<SmolStr, InterfaceTable>| -> usize {
            table.values().map(IndexMap::len).sum()
        };
        self.entities.len()
            + interfaces(&self.ports)
            + interfaces(&self.generics)
            + self.groups.len()
            + self.packages.len()
            + self.records.len()
            + nested(&self.record_elements)
            + self.enums.len()
            + nested(&self.enum_values)
            + self.types.len()
            + self.functions.len()
            + nested(&self.constants)
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_count() == 0
    }
}
