//! Read side — lookups used by documentation renderers.
//!
//! [`AnalysisHost`] scans the corpus once per build and [`Analysis`] answers
//! queries against the result. [`fields`] splits definition texts into the
//! columns a renderer displays.

mod analysis;
pub mod fields;
mod type_index;

pub use analysis::{Analysis, AnalysisHost};
pub use fields::{FieldError, GenericFields, PortFields, generic_fields, port_fields};
pub use type_index::{TypeEntry, TypeKind, type_index};
