//! Documentation buffer — pending comment lines waiting for a declaration.

use super::symbols::DocLines;

/// Outcome of attaching documentation to one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub doc: DocLines,
    /// In-line text dropped because leading documentation was already present.
    pub discarded_inline: Option<String>,
}

/// Ordered sequence of pending documentation lines.
#[derive(Debug, Clone, Default)]
pub struct DocBuffer {
    lines: DocLines,
}

impl DocBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the text of a `-- text` comment.
    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Append the empty line contributed by a bare `--`.
    pub fn push_blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Hand the pending documentation to a declaration and clear the buffer.
    ///
    /// Leading lines win over an in-line comment; the in-line text becomes the
    /// documentation only when nothing precedes the declaration.
    pub fn attach(&mut self, inline: Option<&str>) -> Attachment {
        let leading = std::mem::take(&mut self.lines);
        match inline {
            Some(text) if leading.is_empty() => Attachment {
                doc: vec![text.to_string()],
                discarded_inline: None,
            },
            Some(text) => Attachment {
                doc: leading,
                discarded_inline: Some(text.to_string()),
            },
            None => Attachment {
                doc: leading,
                discarded_inline: None,
            },
        }
    }
}
