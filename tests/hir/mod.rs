//! Extraction tests against the public scanner API.

pub mod tests_extraction;
