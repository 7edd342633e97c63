//! Alphabetical index of every documented type.

use std::fmt;

use crate::hir::{DocLines, SymbolDatabase};

/// The shape of an indexed type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeKind {
    Record,
    Enum,
    Alias,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Record => "record",
            TypeKind::Enum => "enum",
            TypeKind::Alias => "type",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeEntry<'a> {
    pub name: &'a str,
    pub kind: TypeKind,
    pub doc: &'a DocLines,
}

/// Records, enumerations and aliases sorted by name, then kind.
pub fn type_index(db: &SymbolDatabase) -> Vec<TypeEntry<'_>> {
    let records = db.records().map(|(name, doc)| TypeEntry {
        name: name.as_str(),
        kind: TypeKind::Record,
        doc,
    });
    let enums = db.enums().map(|(name, doc)| TypeEntry {
        name: name.as_str(),
        kind: TypeKind::Enum,
        doc,
    });
    let aliases = db.type_aliases().map(|(name, alias)| TypeEntry {
        name: name.as_str(),
        kind: TypeKind::Alias,
        doc: &alias.doc,
    });

    let mut entries: Vec<TypeEntry<'_>> = records.chain(enums).chain(aliases).collect();
    entries.sort_by(|a, b| a.name.cmp(b.name).then(a.kind.cmp(&b.kind)));
    entries
}
