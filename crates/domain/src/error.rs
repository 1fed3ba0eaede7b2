// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing, decoding, or revising an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A mandatory field was absent at construction or deserialization.
    MissingRequiredField {
        /// Path of the missing field (e.g. `accountInformation.firstName`).
        field: String,
    },
    /// A supplied value does not conform to the field's declared type.
    TypeMismatch {
        /// Path of the offending field.
        field: String,
        /// The declared type of the field.
        expected: &'static str,
        /// The JSON kind that was supplied instead.
        found: &'static str,
    },
    /// A sequence element failed its own decoding or contract.
    MalformedSequence {
        /// Path of the sequence field.
        field: String,
        /// Zero-based position of the offending element.
        index: usize,
        /// Why the element was rejected.
        reason: String,
    },
    /// An identity was assigned to an order that already has one.
    IdentityAlreadyAssigned {
        /// The identity the order already carries.
        existing: i64,
    },
    /// The input is not a JSON document.
    InvalidDocument(String),
    /// The order could not be serialized.
    Serialization(String),
}

impl OrderError {
    /// Shorthand for a missing field at `field`.
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Returns the path of the field this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { field }
            | Self::TypeMismatch { field, .. }
            | Self::MalformedSequence { field, .. } => Some(field),
            Self::IdentityAlreadyAssigned { .. } => Some("id"),
            Self::InvalidDocument(_) | Self::Serialization(_) => None,
        }
    }
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField { field } => {
                write!(f, "Missing required field '{field}'")
            }
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Type mismatch for field '{field}': expected {expected}, found {found}"
                )
            }
            Self::MalformedSequence {
                field,
                index,
                reason,
            } => {
                write!(f, "Malformed element {index} in '{field}': {reason}")
            }
            Self::IdentityAlreadyAssigned { existing } => {
                write!(f, "Order already has persisted identity {existing}")
            }
            Self::InvalidDocument(msg) => write!(f, "Invalid order document: {msg}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for OrderError {}
