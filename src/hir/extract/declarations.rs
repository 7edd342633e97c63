//! Declaration text helpers — turn one comment-stripped line into the names
//! and definition texts stored in the symbol tables.

use crate::base::constants::{ASSIGN, SENTINEL_DEFAULT};
use crate::base::{contains_keyword, first_word, normalize_name, starts_with_keyword, strip_keyword};
use crate::hir::keys::{FunctionKey, ListKind};

/// Shapes of a line starting with `package`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PackageDecl<'a> {
    /// `package <name> is`
    Declaration(&'a str),
    /// `package body <name> is`
    Body(&'a str),
    /// `package <name> is new <generic package> ...`
    Instance(&'a str),
}

/// Shapes of a line starting with `type` or `subtype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TypeDecl<'a> {
    Record(&'a str),
    /// `values` is the text following the opening parenthesis.
    Enum { name: &'a str, values: &'a str },
    Alias { name: &'a str, underlying: &'a str },
}

/// Parse the text following the `package` keyword.
pub(super) fn parse_package(rest: &str) -> Option<PackageDecl<'_>> {
    if let Some(body) = strip_keyword(rest, "body") {
        return first_word(body).map(PackageDecl::Body);
    }
    let name = first_word(rest)?;
    let after_name = rest[name.len()..].trim_start();
    let is_instance =
        strip_keyword(after_name, "is").is_some_and(|definition| starts_with_keyword(definition, "new"));
    Some(if is_instance {
        PackageDecl::Instance(name)
    } else {
        PackageDecl::Declaration(name)
    })
}

/// Parse the text following the `type`/`subtype` keyword.
///
/// Incomplete declarations (`type t;`) have no `is` and yield `None`.
pub(super) fn parse_type(rest: &str) -> Option<TypeDecl<'_>> {
    let name = first_word(rest)?;
    let after_name = rest[name.len()..].trim_start();
    let definition = strip_keyword(after_name, "is")?;
    if contains_keyword(after_name, "record") {
        Some(TypeDecl::Record(name))
    } else if let Some(values) = definition.strip_prefix('(') {
        Some(TypeDecl::Enum { name, values })
    } else {
        Some(TypeDecl::Alias {
            name,
            underlying: definition.trim_end_matches(';').trim_end(),
        })
    }
}

/// Remove the statement terminator and `closers` trailing parentheses that
/// close the enclosing list.
pub(super) fn strip_list_closers(code: &str, closers: usize) -> &str {
    let mut text = code.trim().trim_end_matches(';').trim_end();
    for _ in 0..closers {
        text = text.strip_suffix(')').unwrap_or(text).trim_end();
    }
    text.trim_end_matches(';').trim()
}

/// Definition text of a port or generic.
///
/// Ports drop their default expression; generics keep it, and a generic
/// without one gets the sentinel default.
pub(super) fn interface_definition(code: &str, list: ListKind, closers: usize) -> Option<String> {
    let text = strip_list_closers(code, closers);
    if !text.contains(':') {
        return None;
    }
    Some(match list {
        ListKind::Port => text
            .split(ASSIGN)
            .next()
            .unwrap_or(text)
            .trim_end()
            .to_string(),
        ListKind::Generic => with_default(text),
    })
}

/// Append the sentinel default unless the text already assigns one.
pub(super) fn with_default(text: &str) -> String {
    if text.contains(ASSIGN) {
        text.to_string()
    } else {
        format!("{text} {ASSIGN} {SENTINEL_DEFAULT}")
    }
}

/// Definition text of a constant declaration (`constant` keyword removed).
pub(super) fn constant_definition(code: &str) -> Option<String> {
    let text = strip_keyword(code, "constant").unwrap_or(code);
    let text = text.trim_end_matches(';').trim();
    text.contains(':').then(|| with_default(text))
}

/// `name : type` text of a record element; splits at the first `:` before any `;`.
pub(super) fn record_element(code: &str) -> Option<String> {
    let declaration = code.split(';').next().unwrap_or(code);
    let (name, element_type) = declaration.split_once(':')?;
    Some(format!("{} : {}", name.trim(), element_type.trim()))
}

/// The value on a line inside a multi-line enumeration (text before the first `,`).
pub(super) fn enum_value(code: &str) -> Option<&str> {
    let value = code
        .split([',', ')'])
        .next()
        .unwrap_or(code)
        .trim()
        .trim_end_matches(';')
        .trim();
    (!value.is_empty()).then_some(value)
}

/// Table key of an enumeration value: identifiers are case-normalised,
/// character literals such as `'X'` keep their case.
pub(super) fn enum_value_key(value: &str) -> String {
    if value.starts_with('\'') {
        value.to_string()
    } else {
        normalize_name(value).to_string()
    }
}

/// Every value listed on the header line of an enumeration.
pub(super) fn enum_header_values(values: &str) -> Vec<&str> {
    let listed = values.split(')').next().unwrap_or(values);
    listed
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect()
}

/// Key of a single-line function prototype.
///
/// `code` starts with `function` (optionally `pure`/`impure`) and ends with `;`.
pub(super) fn function_key(code: &str) -> Option<FunctionKey> {
    let rest = strip_purity(code);
    let rest = strip_keyword(rest, "function")?;
    let name = function_name(rest)?;
    let words: Vec<&str> = code
        .trim_end_matches(';')
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')' || c == ';')
        .filter(|word| !word.is_empty())
        .collect();
    let return_type = words
        .iter()
        .rposition(|word| word.eq_ignore_ascii_case("return"))
        .and_then(|idx| words.get(idx + 1))
        .copied();
    Some(FunctionKey::new(name, return_type))
}

/// Whether a line is a function prototype (`[pure|impure] function ... ;`).
pub(super) fn is_function_prototype(code: &str) -> bool {
    strip_keyword(strip_purity(code), "function").is_some() && code.ends_with(';')
}

fn strip_purity(code: &str) -> &str {
    strip_keyword(code, "pure")
        .or_else(|| strip_keyword(code, "impure"))
        .unwrap_or(code)
}

/// Function designator: an identifier or a quoted operator symbol (`"+"`).
fn function_name(rest: &str) -> Option<&str> {
    if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        return Some(&rest[..end + 2]);
    }
    first_word(rest)
}
