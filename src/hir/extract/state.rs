//! Parse states and line patterns — the two axes of the transition table.
//!
//! [`classify`] looks at a single comment-stripped line and says what it is,
//! without knowing where the scanner is. The scanner then matches
//! `(ParseState, LinePattern)` to decide the action and the next state.

use smol_str::SmolStr;

use super::declarations::{PackageDecl, TypeDecl, is_function_prototype, parse_package, parse_type};
use crate::base::{contains_keyword, first_word, paren_delta, starts_with_keyword, strip_keyword};
use crate::hir::keys::ListKind;
use crate::hir::symbols::DocLines;

// ============================================================================
// PARSE STATE
// ============================================================================

/// Where the scanner currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum ParseState {
    /// No package open.
    Top,
    /// Inside one or more packages (see the scanner's package stack).
    Package,
    /// Between `entity <name> is` and its `end`.
    EntityDecl,
    /// Inside a `port (...)` or `generic (...)` list.
    Interface(ListCursor),
    /// Between two banner lines inside a port or generic list.
    GroupBanner(Banner),
    /// Between `type <name> is record` and `end record`.
    Record { name: SmolStr },
    /// Inside the value list of a multi-line enumeration.
    Enum { name: SmolStr, depth: i32 },
    /// After `architecture <ident> of <unit> is`.
    ArchDecl(Architecture),
}

/// Parenthesis tracking for an open port or generic list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct ListCursor {
    pub kind: ListKind,
    pub depth: i32,
    /// Set once the list's opening parenthesis has been seen.
    pub opened: bool,
}

impl ListCursor {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            depth: 0,
            opened: false,
        }
    }

    /// Account for the parentheses of one line. Returns `true` when the list
    /// closed on this line.
    pub fn advance(&mut self, code: &str) -> bool {
        if code.contains('(') {
            self.opened = true;
        }
        self.depth += paren_delta(code);
        self.opened && self.depth <= 0
    }

    /// Trailing `)` characters on the closing line that belong to the list.
    pub fn closers(&self) -> usize {
        (1 - self.depth).max(1) as usize
    }
}

/// A group banner being read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Banner {
    /// The list to return to when the banner closes.
    pub list: ListCursor,
    pub title: Option<String>,
    pub doc: DocLines,
    /// Line of the opening banner.
    pub opened_at: u32,
}

impl Banner {
    pub fn new(list: ListCursor, opened_at: u32) -> Self {
        Self {
            list,
            title: None,
            doc: DocLines::new(),
            opened_at,
        }
    }
}

/// The architecture whose declarative region is being scanned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Architecture {
    /// The architecture's own identifier (`rtl` in `architecture rtl of fifo is`).
    pub ident: Option<SmolStr>,
    /// Case-normalised design unit name, the key of its constants.
    pub unit: Option<SmolStr>,
}

// ============================================================================
// LINE PATTERNS
// ============================================================================

/// What a line of code looks like, independent of the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum LinePattern<'a> {
    /// `[pure|impure] function ... ;`
    Function,
    /// `entity <name> is`
    Entity(&'a str),
    /// `architecture <ident> of <unit> is`
    Architecture {
        ident: Option<&'a str>,
        unit: Option<&'a str>,
    },
    Package(PackageDecl<'a>),
    EndPackage,
    EndRecord,
    /// Any other `end ...`; carries the text after `end`.
    End(&'a str),
    /// `port ...` or `generic ...`; carries the text after the keyword.
    ListOpen { kind: ListKind, rest: &'a str },
    Type(TypeDecl<'a>),
    /// A line mentioning the `constant` keyword.
    Constant,
    Other,
}

/// Classify a comment-stripped, trimmed line of code.
pub(super) fn classify(code: &str) -> LinePattern<'_> {
    if is_function_prototype(code) {
        return LinePattern::Function;
    }
    if let Some(rest) = strip_keyword(code, "entity") {
        if contains_keyword(rest, "is") {
            if let Some(name) = first_word(rest) {
                return LinePattern::Entity(name);
            }
        }
        return LinePattern::Other;
    }
    if starts_with_keyword(code, "architecture") {
        let mut words = code.split_whitespace();
        let ident = words.nth(1).and_then(first_word);
        let unit = words.nth(1).and_then(first_word);
        return LinePattern::Architecture { ident, unit };
    }
    if let Some(rest) = strip_keyword(code, "end") {
        if starts_with_keyword(rest, "package") {
            return LinePattern::EndPackage;
        }
        if starts_with_keyword(rest, "record") {
            return LinePattern::EndRecord;
        }
        return LinePattern::End(rest);
    }
    if let Some(rest) = strip_keyword(code, "package") {
        return parse_package(rest).map_or(LinePattern::Other, LinePattern::Package);
    }
    if let Some(rest) = strip_keyword(code, "port") {
        return LinePattern::ListOpen {
            kind: ListKind::Port,
            rest,
        };
    }
    if let Some(rest) = strip_keyword(code, "generic") {
        return LinePattern::ListOpen {
            kind: ListKind::Generic,
            rest,
        };
    }
    if let Some(rest) = strip_keyword(code, "type").or_else(|| strip_keyword(code, "subtype")) {
        return parse_type(rest).map_or(LinePattern::Other, LinePattern::Type);
    }
    if contains_keyword(code, "constant") {
        return LinePattern::Constant;
    }
    LinePattern::Other
}
