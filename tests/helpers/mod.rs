//! Shared fixtures and setup for integration tests.

pub mod corpus;
pub mod source_fixtures;
