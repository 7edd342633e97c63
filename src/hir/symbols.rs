//! Symbols emitted by the declaration scanner.

use std::path::PathBuf;

use smol_str::SmolStr;

use super::diagnostics::Diagnostic;
use super::keys::{DefinitionKey, FunctionKey, GroupKey, ListKind};

/// Documentation of one symbol: comment lines in source order, blank lines
/// included verbatim.
pub type DocLines = Vec<String>;

/// A documented declaration found in a source file.
///
/// Names used as table keys are case-normalised; definition texts keep the
/// spelling of the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocSymbol {
    /// `entity <name> is`
    Entity { name: SmolStr, doc: DocLines },
    /// A port or generic definition of a design unit.
    Interface {
        unit: SmolStr,
        list: ListKind,
        key: DefinitionKey,
        doc: DocLines,
    },
    /// A banner-delimited group inside a port or generic list.
    Group {
        key: GroupKey,
        list: ListKind,
        doc: DocLines,
    },
    /// `package <name> is`, keyed by its dotted qualified name.
    Package { name: SmolStr, doc: DocLines },
    /// `type <name> is record`
    Record { name: SmolStr, doc: DocLines },
    /// `<name> : <type>;` inside a record.
    RecordElement {
        record: SmolStr,
        element: String,
        doc: DocLines,
    },
    /// `type <name> is (...)`
    Enum { name: SmolStr, doc: DocLines },
    /// One value of an enumerated type.
    EnumValue {
        enumeration: SmolStr,
        value: String,
        doc: DocLines,
    },
    /// `type <name> is <type-expr>;` or `subtype <name> is <type-expr>;`
    TypeAlias {
        name: SmolStr,
        underlying: String,
        doc: DocLines,
    },
    /// `function <name> (...) return <type>;`
    Function { key: FunctionKey, doc: DocLines },
    /// `constant <name> : <type> [:= <default>];` within an architecture or package.
    Constant {
        scope: SmolStr,
        definition: String,
        doc: DocLines,
    },
}

impl DocSymbol {
    pub fn doc(&self) -> &DocLines {
        match self {
            DocSymbol::Entity { doc, .. }
            | DocSymbol::Interface { doc, .. }
            | DocSymbol::Group { doc, .. }
            | DocSymbol::Package { doc, .. }
            | DocSymbol::Record { doc, .. }
            | DocSymbol::RecordElement { doc, .. }
            | DocSymbol::Enum { doc, .. }
            | DocSymbol::EnumValue { doc, .. }
            | DocSymbol::TypeAlias { doc, .. }
            | DocSymbol::Function { doc, .. }
            | DocSymbol::Constant { doc, .. } => doc,
        }
    }

    /// Short kind label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DocSymbol::Entity { .. } => "entity",
            DocSymbol::Interface { list, .. } => list.as_str(),
            DocSymbol::Group { .. } => "group",
            DocSymbol::Package { .. } => "package",
            DocSymbol::Record { .. } => "record",
            DocSymbol::RecordElement { .. } => "record element",
            DocSymbol::Enum { .. } => "enum",
            DocSymbol::EnumValue { .. } => "enum value",
            DocSymbol::TypeAlias { .. } => "type",
            DocSymbol::Function { .. } => "function",
            DocSymbol::Constant { .. } => "constant",
        }
    }
}

/// Everything extracted from one file.
#[derive(Clone, Debug, Default)]
pub struct ExtractionResult {
    pub file: PathBuf,
    /// Symbols in emission order.
    pub symbols: Vec<DocSymbol>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtractionResult {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }
}
