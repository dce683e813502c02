//! Schema synthesis: one composite validation schema per form document.
//!
//! [`synthesize`] walks a form's field list in display order and asks the
//! registry for each field's schema; the result is a [`FormSchema`] keyed by
//! field id. Schemas are derived, disposable values: recompute after any
//! field-list change, never mutate one in place.

use std::collections::HashMap;

use uuid::Uuid;

use formkit_core::{FormKitError, ValidationErrors, Value};
use formkit_fields::registry;
use formkit_fields::rules::FieldSchema;

use crate::form::Form;

/// The composite validation schema of one form.
///
/// Entries are kept in document order, so the key sequence is deterministic
/// for the same document. Fields validate independently of each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSchema {
    entries: Vec<(Uuid, FieldSchema)>,
}

impl FormSchema {
    /// The per-field schema for the given field id.
    pub fn get(&self, field_id: Uuid) -> Option<&FieldSchema> {
        self.entries
            .iter()
            .find(|(id, _)| *id == field_id)
            .map(|(_, schema)| schema)
    }

    /// The field ids, in document order.
    pub fn keys(&self) -> Vec<Uuid> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    /// The number of per-field schemas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` for the trivially-satisfied schema of an empty form.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks a set of submitted values against every field's schema.
    ///
    /// A field with no entry in `values` is treated as unsubmitted
    /// ([`Value::Null`]). Failures accumulate per field rather than
    /// short-circuiting, so one pass reports every problem.
    pub fn validate(&self, values: &HashMap<Uuid, Value>) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field_id, schema) in &self.entries {
            let value = values.get(field_id).unwrap_or(&Value::Null);
            if let Err(messages) = schema.check(value) {
                errors.insert(*field_id, messages);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Like [`validate`](Self::validate), but wraps failure in
    /// [`FormKitError::Validation`] for callers propagating `FormKitResult`.
    pub fn validate_submission(
        &self,
        values: &HashMap<Uuid, Value>,
    ) -> Result<(), FormKitError> {
        self.validate(values).map_err(FormKitError::Validation)
    }
}

/// Derives the composite validation schema for a form.
///
/// An empty form yields an empty, trivially-satisfied schema. Otherwise
/// each field's definition is looked up in the registry and its
/// `create_schema` rule applied, in field-list order. Pure in the form:
/// synthesizing the same unmodified document twice yields equal schemas.
pub fn synthesize(form: &Form) -> FormSchema {
    let entries = form
        .fields
        .iter()
        .map(|field| {
            let definition = registry::lookup(field.kind());
            (field.id, (definition.create_schema)(field))
        })
        .collect();
    FormSchema { entries }
}
