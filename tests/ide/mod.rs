//! Read API tests.

pub mod tests_analysis;
