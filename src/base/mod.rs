//! Foundation types for the hdldoc toolchain.
//!
//! This module provides:
//! - Domain constants (comment markers, sentinel default, file extensions)
//! - Text helpers for keyword matching on single source lines
//!
//! This module has NO dependencies on other hdldoc modules.

pub mod constants;
pub mod text_utils;

pub use text_utils::{
    contains_keyword, first_word, is_word_character, normalize_name, paren_delta, split_comment,
    starts_with_keyword, strip_keyword,
};
