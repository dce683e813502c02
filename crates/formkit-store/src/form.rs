//! The form document.

use uuid::Uuid;

use formkit_fields::FieldInstance;

/// One form: metadata plus an ordered list of field instances.
///
/// Field order is semantically meaningful (display and tab order). A form
/// owns its fields exclusively; field ids are unique within the form (and
/// in practice globally, being v4 UUIDs).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Form {
    /// Unique document identifier.
    pub id: Uuid,
    /// Form title.
    pub title: String,
    /// Optional form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The fields, in display order.
    pub fields: Vec<FieldInstance>,
}

impl Form {
    /// Creates an empty form with a fresh identifier.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description,
            fields: Vec::new(),
        }
    }

    /// Returns the field with the given id, if present.
    pub fn field(&self, field_id: Uuid) -> Option<&FieldInstance> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Returns the position of the field with the given id.
    pub fn field_index(&self, field_id: Uuid) -> Option<usize> {
        self.fields.iter().position(|f| f.id == field_id)
    }

    /// Returns the field ids in display order.
    pub fn field_ids(&self) -> Vec<Uuid> {
        self.fields.iter().map(|f| f.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_fields::{FieldKind, FieldSpec};

    #[test]
    fn test_new_form_is_empty() {
        let form = Form::new("Survey", Some("About you".to_string()));
        assert!(form.fields.is_empty());
        assert_eq!(form.title, "Survey");
        assert_eq!(form.description.as_deref(), Some("About you"));
    }

    #[test]
    fn test_field_lookup_by_id() {
        let mut form = Form::new("Survey", None);
        let field = FieldSpec::new(FieldKind::Text, "Name").into_instance();
        let id = field.id;
        form.fields.push(field);

        assert_eq!(form.field_index(id), Some(0));
        assert_eq!(form.field(id).unwrap().label, "Name");
        assert!(form.field(Uuid::new_v4()).is_none());
    }
}
