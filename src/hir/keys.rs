//! Structured keys for composite identifiers.
//!
//! Group and function keys are built from named parts instead of ad-hoc string
//! concatenation; their canonical dotted form is only used where a plain
//! string is needed (resolver candidates, display).

use std::fmt;

use smol_str::SmolStr;

use crate::base::constants::PATH_SEPARATOR;
use crate::base::normalize_name;

/// Which interface list a definition belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    Port,
    Generic,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Port => "port",
            ListKind::Generic => "generic",
        }
    }
}

/// A named subsection of a port or generic list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupKey {
    /// Case-normalised design unit name.
    pub unit: SmolStr,
    /// Group title as written in the banner.
    pub title: String,
}

impl GroupKey {
    pub fn new(unit: &str, title: impl Into<String>) -> Self {
        Self {
            unit: normalize_name(unit),
            title: title.into(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.unit, PATH_SEPARATOR, self.title)
    }
}

/// Key of a port or generic definition within its design unit.
///
/// Definitions that follow a closed group banner carry that group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefinitionKey {
    pub group: Option<GroupKey>,
    /// Declaration text, e.g. `clk : in std_logic`.
    pub text: String,
}

impl DefinitionKey {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            group: None,
            text: text.into(),
        }
    }

    pub fn in_group(group: GroupKey, text: impl Into<String>) -> Self {
        Self {
            group: Some(group),
            text: text.into(),
        }
    }

    /// Name part of the definition (text before the first `:`).
    pub fn name(&self) -> &str {
        self.text
            .split_once(':')
            .map_or(self.text.as_str(), |(name, _)| name)
            .trim()
    }
}

/// Overload-qualified function key: `return_type.name`, or `name` alone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionKey {
    pub return_type: Option<SmolStr>,
    pub name: SmolStr,
}

impl FunctionKey {
    pub fn new(name: &str, return_type: Option<&str>) -> Self {
        Self {
            return_type: return_type.map(normalize_name),
            name: normalize_name(name),
        }
    }

    /// Canonical dotted form used for resolution.
    pub fn qualified(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.return_type {
            Some(return_type) => write!(f, "{}{}{}", return_type, PATH_SEPARATOR, self.name),
            None => f.write_str(&self.name),
        }
    }
}
