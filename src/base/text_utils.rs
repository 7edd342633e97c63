//! Text manipulation utilities for single lines of VHDL source.
//!
//! The scanner never tokenizes a whole file; every structural decision is made
//! from one comment-stripped line with the helpers below.

use smol_str::SmolStr;

use super::constants::COMMENT_MARKER;

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Case-normalise a name for use as a table key.
pub fn normalize_name(name: &str) -> SmolStr {
    SmolStr::new(name.trim().to_lowercase())
}

/// Characters of a line that lie outside string and character literals,
/// with their byte offsets.
///
/// A tick directly after an identifier or `)` is an attribute or qualifier
/// tick (`clk'event`, `t'(...)`), never the start of a character literal.
struct CodeChars<'a> {
    chars: std::str::CharIndices<'a>,
    prev: Option<char>,
    in_string: bool,
}

impl<'a> CodeChars<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            chars: line.char_indices(),
            prev: None,
            in_string: false,
        }
    }
}

impl Iterator for CodeChars<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, c) = self.chars.next()?;
            let prev = self.prev.replace(c);
            match c {
                '"' => self.in_string = !self.in_string,
                _ if self.in_string => {}
                '\'' if !prev.is_some_and(|p| is_word_character(p) || p == ')') => {
                    let mut ahead = self.chars.clone();
                    match (ahead.next(), ahead.next()) {
                        (Some(_), Some((_, '\''))) => self.chars = ahead,
                        _ => return Some((idx, c)),
                    }
                }
                _ => return Some((idx, c)),
            }
        }
    }
}

/// Split a line into its code part and the text following the comment marker.
///
/// A `--` inside a string or character literal does not start a comment.
///
/// # Example
/// ```
/// use hdldoc::base::split_comment;
///
/// assert_eq!(split_comment("clk : in std_logic; -- clock"), ("clk : in std_logic; ", Some(" clock")));
/// assert_eq!(split_comment("s := \"a--b\";"), ("s := \"a--b\";", None));
/// assert_eq!(split_comment("q := '\"'; -- quote"), ("q := '\"'; ", Some(" quote")));
/// ```
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    for (idx, c) in CodeChars::new(line) {
        if c == '-' && line[idx + 1..].starts_with('-') {
            return (&line[..idx], Some(&line[idx + COMMENT_MARKER.len()..]));
        }
    }
    (line, None)
}

/// Check whether `text` starts with `keyword` (case-insensitive) followed by a
/// non-identifier character or the end of the text.
///
/// # Example
/// ```
/// use hdldoc::base::starts_with_keyword;
///
/// assert!(starts_with_keyword("PORT (", "port"));
/// assert!(!starts_with_keyword("ports_valid : out bit;", "port"));
/// ```
pub fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    let Some(head) = text.get(..keyword.len()) else {
        return false;
    };
    head.eq_ignore_ascii_case(keyword)
        && !text[keyword.len()..]
            .chars()
            .next()
            .is_some_and(is_word_character)
}

/// Strip a leading keyword, returning the remainder with leading whitespace removed.
pub fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    starts_with_keyword(text, keyword).then(|| text[keyword.len()..].trim_start())
}

/// Check whether any whole word of `text` equals `keyword` (case-insensitive).
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.split(|c: char| !is_word_character(c))
        .any(|word| word.eq_ignore_ascii_case(keyword))
}

/// The identifier at the very start of `text`, if any.
pub fn first_word(text: &str) -> Option<&str> {
    let end = text
        .char_indices()
        .find(|(_, c)| !is_word_character(*c))
        .map_or(text.len(), |(idx, _)| idx);
    (end > 0).then(|| &text[..end])
}

/// Net parenthesis balance of a line: opening minus closing parentheses,
/// ignoring those inside string and character literals.
pub fn paren_delta(code: &str) -> i32 {
    CodeChars::new(code)
        .map(|(_, c)| match c {
            '(' => 1,
            ')' => -1,
            _ => 0,
        })
        .sum()
}
