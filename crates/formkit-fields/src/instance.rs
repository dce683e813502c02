//! Field instances and the specs they are created from.

use uuid::Uuid;

use crate::config::FieldConfig;
use crate::kind::FieldKind;

/// One concrete, configured field belonging to a form document.
///
/// Serializes to the flat persisted shape
/// `{ "id": ..., "label": ..., "required": ..., "type": ..., ...kind attrs }`
/// via the internally tagged [`FieldConfig`].
///
/// The id is assigned at creation and stable for the instance's lifetime;
/// the kind is immutable after creation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldInstance {
    /// Process-unique identifier, generated at creation, never reused.
    pub id: Uuid,
    /// Display label.
    pub label: String,
    /// Optional helper text shown under the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether a submission must provide a value for this field.
    #[serde(default)]
    pub required: bool,
    /// Kind-specific configuration, tagged with the kind.
    #[serde(flatten)]
    pub config: FieldConfig,
}

impl FieldInstance {
    /// Returns this instance's field kind.
    pub const fn kind(&self) -> FieldKind {
        self.config.kind()
    }
}

/// A field description without an identity: everything needed to create a
/// [`FieldInstance`] except the id.
///
/// This is the shape callers (the palette, the generation stream) hand to
/// `add_field`. Deserializing a partial spec merges the kind's defaults
/// under the supplied attributes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldSpec {
    /// Display label.
    pub label: String,
    /// Optional helper text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the field is required.
    #[serde(default)]
    pub required: bool,
    /// Kind-specific configuration, tagged with the kind.
    #[serde(flatten)]
    pub config: FieldConfig,
}

impl FieldSpec {
    /// Creates a spec for the given kind with its default configuration.
    pub fn new(kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            required: false,
            config: FieldConfig::default_for(kind),
        }
    }

    /// Sets the required flag.
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the configuration. The kind follows the configuration.
    pub fn config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the kind this spec would create.
    pub const fn kind(&self) -> FieldKind {
        self.config.kind()
    }

    /// Turns this spec into an instance with a fresh identifier.
    pub fn into_instance(self) -> FieldInstance {
        FieldInstance {
            id: Uuid::new_v4(),
            label: self.label,
            description: self.description,
            required: self.required,
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextConfig;

    #[test]
    fn test_into_instance_assigns_fresh_ids() {
        let spec = FieldSpec::new(FieldKind::Text, "Name");
        let a = spec.clone().into_instance();
        let b = spec.into_instance();
        assert_ne!(a.id, b.id);
        assert_eq!(a.label, "Name");
        assert_eq!(a.kind(), FieldKind::Text);
    }

    #[test]
    fn test_flat_wire_shape() {
        let instance = FieldSpec::new(FieldKind::Text, "Name")
            .required(true)
            .config(FieldConfig::Text(TextConfig {
                min_length: Some(2),
                ..TextConfig::default()
            }))
            .into_instance();

        let json = serde_json::to_value(&instance).unwrap();
        // Base attributes and kind attributes live side by side.
        assert_eq!(json["type"], "text");
        assert_eq!(json["label"], "Name");
        assert_eq!(json["required"], true);
        assert_eq!(json["minLength"], 2);
        assert!(json.get("config").is_none());

        let back: FieldInstance = serde_json::from_value(json).unwrap();
        assert_eq!(back, instance);
    }

    #[test]
    fn test_spec_deserializes_with_defaults() {
        let spec: FieldSpec =
            serde_json::from_str(r#"{"type": "textarea", "label": "Feedback"}"#).unwrap();
        assert_eq!(spec.kind(), FieldKind::Textarea);
        assert!(!spec.required);
        match spec.config {
            FieldConfig::Textarea(cfg) => assert_eq!(cfg.rows, 4),
            other => panic!("unexpected config: {other:?}"),
        }
    }
}
