//! Corpus loading tests.

pub mod tests_workspace;
