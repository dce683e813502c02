//! Core error types for formkit.
//!
//! This module provides the [`FormKitError`] enum covering registry lookups,
//! store mutations, submission validation, generation-stream parsing, and
//! persistence, along with the [`ValidationErrors`] container for per-field
//! submission failures.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Per-field validation failures produced when submitted values are checked
/// against a synthesized schema.
///
/// Errors are keyed by the offending field instance's id, each carrying one
/// or more human-readable messages in rule order.
///
/// # Examples
///
/// ```
/// use formkit_core::error::ValidationErrors;
/// use uuid::Uuid;
///
/// let mut errors = ValidationErrors::new();
/// let field = Uuid::new_v4();
/// errors.insert(field, vec!["Required".to_string()]);
/// assert!(!errors.is_empty());
/// assert_eq!(errors.messages(field).unwrap(), &["Required".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Error messages keyed by field instance id.
    pub field_errors: HashMap<Uuid, Vec<String>>,
}

impl ValidationErrors {
    /// Creates an empty `ValidationErrors`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error messages for one field.
    pub fn insert(&mut self, field: Uuid, messages: Vec<String>) {
        self.field_errors.insert(field, messages);
    }

    /// Returns the messages recorded for the given field, if any.
    pub fn messages(&self, field: Uuid) -> Option<&Vec<String>> {
        self.field_errors.get(&field)
    }

    /// Returns `true` if no field has any errors.
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Returns the number of fields that failed validation.
    pub fn len(&self) -> usize {
        self.field_errors.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.field_errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// The primary error type for formkit.
///
/// Variants fall into three audiences:
///
/// - [`Validation`](Self::Validation) is the only variant ever surfaced to an
///   end user, attached to the offending fields.
/// - [`FormNotFound`](Self::FormNotFound), [`FieldNotFound`](Self::FieldNotFound),
///   [`IndexOutOfRange`](Self::IndexOutOfRange), and
///   [`KindImmutable`](Self::KindImmutable) are recoverable caller errors from
///   store mutations.
/// - [`UnknownFieldKind`](Self::UnknownFieldKind) signals corrupt data or a
///   definition that was never registered; it must surface rather than be
///   silently defaulted.
#[derive(Error, Debug)]
pub enum FormKitError {
    /// A field kind tag did not resolve to any registered definition.
    #[error("unknown field kind: {0:?}")]
    UnknownFieldKind(String),

    /// No form exists with the given id.
    #[error("form not found: {0}")]
    FormNotFound(Uuid),

    /// No field with the given id exists in the addressed form.
    #[error("field not found: {field} in form {form}")]
    FieldNotFound {
        /// The form that was addressed.
        form: Uuid,
        /// The field that was not found.
        field: Uuid,
    },

    /// A reorder index fell outside the form's field list.
    #[error("index {index} out of range for {len} fields")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of fields in the list.
        len: usize,
    },

    /// An update attempted to change a field's kind. Kinds are immutable
    /// after creation; changing kind requires delete and recreate.
    #[error("field {field} has kind {expected:?}; updates may not change it to {requested:?}")]
    KindImmutable {
        /// The field that was addressed.
        field: Uuid,
        /// The field's actual kind tag.
        expected: String,
        /// The kind tag the update carried.
        requested: String,
    },

    /// One or more fields failed submission validation.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A generation-stream line could not be parsed into a message.
    #[error("malformed generation message: {0}")]
    MalformedMessage(String),

    /// An error occurred during serialization or deserialization.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred while persisting or loading state.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormKitError {
    /// Returns `true` if this error is part of the normal end-user flow.
    ///
    /// Only validation failures are shown to the person filling in a form;
    /// everything else is developer-facing.
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for FormKitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A convenience type alias for `Result<T, FormKitError>`.
pub type FormKitResult<T> = Result<T, FormKitError>;
