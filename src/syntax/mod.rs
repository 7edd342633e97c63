//! Syntax layer — line-granularity view of VHDL source.
//!
//! There is no tokenizer or grammar here: a file is a sequence of
//! [`SourceLine`]s, each split into its code and its trailing comment.

mod line;

pub use line::{CommentKind, SourceLine, lines};
