//! Classification of a single source line.

use crate::base::constants::{BANNER_CHAR, BANNER_MIN_RUN};
use crate::base::split_comment;

/// What a comment-only line contributes to documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind<'a> {
    /// `-- text`: a documentation line (text after the marker and one space).
    Doc(&'a str),
    /// A bare `--`: an empty documentation line (paragraph break).
    Blank,
    /// `-- =====`: opens or closes a named group inside a port/generic list.
    Banner,
    /// Any other comment (`--text`, `-----`): not documentation.
    Stray,
}

/// One line of source, split into code and comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: u32,
    /// Code with the comment removed, trimmed.
    pub code: &'a str,
    /// Raw text after the comment marker, if the line has a comment.
    pub comment: Option<&'a str>,
}

impl<'a> SourceLine<'a> {
    pub fn parse(number: u32, raw: &'a str) -> Self {
        let (code, comment) = split_comment(raw);
        Self {
            number,
            code: code.trim(),
            comment,
        }
    }

    /// Nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.code.is_empty() && self.comment.is_none()
    }

    /// A comment with no code in front of it.
    pub fn is_comment_only(&self) -> bool {
        self.code.is_empty() && self.comment.is_some()
    }

    /// Classify a comment-only line. Returns `None` for lines carrying code.
    pub fn comment_kind(&self) -> Option<CommentKind<'a>> {
        if !self.code.is_empty() {
            return None;
        }
        let comment = self.comment?.trim_end();
        if comment.is_empty() {
            return Some(CommentKind::Blank);
        }
        if is_banner(comment.trim_start()) {
            return Some(CommentKind::Banner);
        }
        Some(match comment.strip_prefix(' ') {
            Some(text) => CommentKind::Doc(text),
            None => CommentKind::Stray,
        })
    }

    /// Documentation trailing the code on the same line (`decl; -- text`).
    pub fn inline_doc(&self) -> Option<&'a str> {
        if self.code.is_empty() {
            return None;
        }
        let text = self.comment?.trim_end().strip_prefix(' ')?;
        (!text.trim().is_empty()).then_some(text)
    }
}

fn is_banner(body: &str) -> bool {
    body.chars().count() >= BANNER_MIN_RUN && body.chars().all(|c| c == BANNER_CHAR)
}

/// Iterate the lines of a source text with 1-based numbers.
pub fn lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    source
        .lines()
        .zip(1u32..)
        .map(|(raw, number)| SourceLine::parse(number, raw))
}
