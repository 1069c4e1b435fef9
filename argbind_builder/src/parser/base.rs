use std::collections::HashSet;
use thiserror::Error;

use crate::api::{Binding, CoerceError};

/// Failure to bind the Cli onto a destination.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The destination's binding table is malformed.
    /// Raised before any Cli token is inspected.
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    /// A flag value could not be bound onto its field.
    #[error("Parse error for field '{name}': {source}")]
    Field {
        /// The flag (and field) name.
        name: String,
        /// The underlying coercion failure.
        #[source]
        source: CoerceError,
    },
}

impl ParseError {
    pub(crate) fn field(name: impl Into<String>, source: CoerceError) -> Self {
        ParseError::Field {
            name: name.into(),
            source,
        }
    }
}

/// Check the binding table is well formed: every name is non-empty, is not dash-prefixed, contains no `=`, and is unique.
pub(crate) fn validate(bindings: &[Binding<'_>]) -> Result<(), ParseError> {
    let mut names: HashSet<&str> = HashSet::default();

    for binding in bindings {
        let name = binding.name();

        if name.is_empty() {
            return Err(ParseError::InvalidDestination(
                "Cannot bind a field to the empty name.".to_string(),
            ));
        }

        if name.starts_with('-') {
            return Err(ParseError::InvalidDestination(format!(
                "Cannot bind the name '{name}'; names must not start with '-'."
            )));
        }

        if name.contains('=') {
            return Err(ParseError::InvalidDestination(format!(
                "Cannot bind the name '{name}'; names must not contain '='."
            )));
        }

        if !names.insert(name) {
            return Err(ParseError::InvalidDestination(format!(
                "Cannot duplicate the field '{name}'."
            )));
        }
    }

    Ok(())
}
