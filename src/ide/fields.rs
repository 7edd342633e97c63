//! Display fields of a stored definition text.
//!
//! Renderers show ports as `name | type | mode` and generics and constants as
//! `name | type | default`. The definition texts come from the scanner, so a
//! malformed one usually means hand-written input.

use thiserror::Error;

use crate::base::constants::ASSIGN;

/// A definition text that cannot be split into display fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Malformed port definition, expected `name : mode type`, got `{0}`")]
    Port(String),

    #[error("Malformed generic definition, expected `name : type := default`, got `{0}`")]
    Generic(String),
}

/// `name : mode type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortFields<'a> {
    pub name: &'a str,
    pub port_type: &'a str,
    pub mode: &'a str,
}

/// `name : type := default`; also used for constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericFields<'a> {
    pub name: &'a str,
    pub generic_type: &'a str,
    pub default: &'a str,
}

pub fn port_fields(definition: &str) -> Result<PortFields<'_>, FieldError> {
    let malformed = || FieldError::Port(definition.to_string());
    let (name, rest) = definition.split_once(':').ok_or_else(malformed)?;
    let rest = rest.trim();
    let (mode, port_type) = rest.split_once(char::is_whitespace).ok_or_else(malformed)?;
    let (name, port_type) = (name.trim(), port_type.trim());
    if name.is_empty() || port_type.is_empty() {
        return Err(malformed());
    }
    Ok(PortFields {
        name,
        port_type,
        mode,
    })
}

pub fn generic_fields(definition: &str) -> Result<GenericFields<'_>, FieldError> {
    let malformed = || FieldError::Generic(definition.to_string());
    let (declaration, default) = definition.split_once(ASSIGN).ok_or_else(malformed)?;
    let (name, generic_type) = declaration.split_once(':').ok_or_else(malformed)?;
    let (name, generic_type, default) = (name.trim(), generic_type.trim(), default.trim());
    if name.is_empty() || generic_type.is_empty() {
        return Err(malformed());
    }
    Ok(GenericFields {
        name,
        generic_type,
        default,
    })
}
