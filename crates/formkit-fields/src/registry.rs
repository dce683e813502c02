//! The field registry: the single source of truth for which field kinds
//! exist.
//!
//! All seven built-in definitions live in one static table in declaration
//! order. Adding a kind means adding one entry here (plus its
//! [`FieldConfig`] variant); nothing else in the system enumerates kinds.

use formkit_core::{FormKitError, FormKitResult};

use crate::config::FieldConfig;
use crate::definition::{EditorRef, FieldDefinition, RendererRef};
use crate::instance::FieldInstance;
use crate::kind::FieldKind;
use crate::rules::{Constraint, FieldSchema};

// ── Per-kind schema derivation ─────────────────────────────────────────
//
// Each function is pure in the instance. The config match is exhaustive
// per kind because an instance's kind is its config variant; the catch-all
// arms only satisfy the type checker.

fn text_schema(field: &FieldInstance) -> FieldSchema {
    let mut schema = FieldSchema::text();
    if field.required {
        schema = schema.rule(Constraint::Required, "Required");
    }
    if let FieldConfig::Text(cfg) = &field.config {
        if let Some(min) = cfg.min_length {
            schema = schema.rule(Constraint::MinLength(min), format!("Minimum {min} characters"));
        }
        if let Some(max) = cfg.max_length {
            schema = schema.rule(Constraint::MaxLength(max), format!("Maximum {max} characters"));
        }
    }
    schema
}

fn number_schema(field: &FieldInstance) -> FieldSchema {
    let mut schema = FieldSchema::number();
    // Required means "a value was submitted", nothing more. Zero and
    // negative numbers pass; a lower bound is an explicit `min`.
    if field.required {
        schema = schema.rule(Constraint::Required, "Required");
    }
    if let FieldConfig::Number(cfg) = &field.config {
        if let Some(min) = cfg.min {
            schema = schema.rule(Constraint::MinValue(min), format!("Minimum value is {min}"));
        }
        if let Some(max) = cfg.max {
            schema = schema.rule(Constraint::MaxValue(max), format!("Maximum value is {max}"));
        }
    }
    schema
}

fn select_schema(field: &FieldInstance) -> FieldSchema {
    let multiple = matches!(&field.config, FieldConfig::Select(cfg) if cfg.multiple);
    let mut schema = if multiple {
        FieldSchema::text_list()
    } else {
        FieldSchema::text()
    };
    if field.required {
        schema = schema.rule(Constraint::NonEmpty, "Required");
    }
    schema
}

fn checkbox_schema(field: &FieldInstance) -> FieldSchema {
    let mut schema = FieldSchema::boolean();
    // A required checkbox means "must agree": it cannot be left unchecked.
    if field.required {
        schema = schema.rule(Constraint::MustBeTrue, "Required");
    }
    schema
}

fn date_schema(field: &FieldInstance) -> FieldSchema {
    let mut schema = FieldSchema::date();
    if field.required {
        schema = schema.rule(Constraint::Required, "Required");
    }
    if let FieldConfig::Date(cfg) = &field.config {
        if let Some(min) = cfg.min_date {
            schema = schema.rule(Constraint::MinDate(min), format!("Date must be after {min}"));
        }
        if let Some(max) = cfg.max_date {
            schema = schema.rule(Constraint::MaxDate(max), format!("Date must be before {max}"));
        }
    }
    schema
}

fn radio_schema(field: &FieldInstance) -> FieldSchema {
    let mut schema = FieldSchema::text();
    if field.required {
        schema = schema.rule(Constraint::NonEmpty, "Required");
    }
    schema
}

fn textarea_schema(field: &FieldInstance) -> FieldSchema {
    let mut schema = FieldSchema::text();
    if field.required {
        schema = schema.rule(Constraint::Required, "Required");
    }
    if let FieldConfig::Textarea(cfg) = &field.config {
        if let Some(min) = cfg.min_length {
            schema = schema.rule(Constraint::MinLength(min), format!("Minimum {min} characters"));
        }
        if let Some(max) = cfg.max_length {
            schema = schema.rule(Constraint::MaxLength(max), format!("Maximum {max} characters"));
        }
    }
    schema
}

// ── Default configurations ─────────────────────────────────────────────

fn text_defaults() -> FieldConfig {
    FieldConfig::default_for(FieldKind::Text)
}

fn number_defaults() -> FieldConfig {
    FieldConfig::default_for(FieldKind::Number)
}

fn select_defaults() -> FieldConfig {
    FieldConfig::default_for(FieldKind::Select)
}

fn checkbox_defaults() -> FieldConfig {
    FieldConfig::default_for(FieldKind::Checkbox)
}

fn date_defaults() -> FieldConfig {
    FieldConfig::default_for(FieldKind::Date)
}

fn radio_defaults() -> FieldConfig {
    FieldConfig::default_for(FieldKind::Radio)
}

fn textarea_defaults() -> FieldConfig {
    FieldConfig::default_for(FieldKind::Textarea)
}

/// The built-in definitions, in declaration (palette) order.
static DEFINITIONS: [FieldDefinition; 7] = [
    FieldDefinition {
        kind: FieldKind::Text,
        label: "Text Input",
        icon: "pen",
        renderer: RendererRef::TextInput,
        editor: EditorRef::TextSettings,
        default_config: text_defaults,
        create_schema: text_schema,
    },
    FieldDefinition {
        kind: FieldKind::Number,
        label: "Number Input",
        icon: "hash",
        renderer: RendererRef::NumberInput,
        editor: EditorRef::NumberSettings,
        default_config: number_defaults,
        create_schema: number_schema,
    },
    FieldDefinition {
        kind: FieldKind::Select,
        label: "Select Input",
        icon: "list-filter",
        renderer: RendererRef::SelectInput,
        editor: EditorRef::SelectSettings,
        default_config: select_defaults,
        create_schema: select_schema,
    },
    FieldDefinition {
        kind: FieldKind::Checkbox,
        label: "Checkbox",
        icon: "check-square",
        renderer: RendererRef::CheckboxInput,
        editor: EditorRef::CheckboxSettings,
        default_config: checkbox_defaults,
        create_schema: checkbox_schema,
    },
    FieldDefinition {
        kind: FieldKind::Date,
        label: "Date Picker",
        icon: "calendar",
        renderer: RendererRef::DatePicker,
        editor: EditorRef::DateSettings,
        default_config: date_defaults,
        create_schema: date_schema,
    },
    FieldDefinition {
        kind: FieldKind::Radio,
        label: "Radio Group",
        icon: "radio",
        renderer: RendererRef::RadioGroup,
        editor: EditorRef::RadioSettings,
        default_config: radio_defaults,
        create_schema: radio_schema,
    },
    FieldDefinition {
        kind: FieldKind::Textarea,
        label: "Long Text",
        icon: "align-left",
        renderer: RendererRef::Textarea,
        editor: EditorRef::TextareaSettings,
        default_config: textarea_defaults,
        create_schema: textarea_schema,
    },
];

/// Returns the definition for a kind. Total over the closed kind set.
pub fn lookup(kind: FieldKind) -> &'static FieldDefinition {
    match kind {
        FieldKind::Text => &DEFINITIONS[0],
        FieldKind::Number => &DEFINITIONS[1],
        FieldKind::Select => &DEFINITIONS[2],
        FieldKind::Checkbox => &DEFINITIONS[3],
        FieldKind::Date => &DEFINITIONS[4],
        FieldKind::Radio => &DEFINITIONS[5],
        FieldKind::Textarea => &DEFINITIONS[6],
    }
}

/// Resolves a raw kind tag to its definition.
///
/// Fails with [`FormKitError::UnknownFieldKind`] for any tag outside the
/// registered set; an unresolvable tag in stored data is a configuration
/// error that must surface, never a silent default.
pub fn lookup_tag(tag: &str) -> FormKitResult<&'static FieldDefinition> {
    let kind: FieldKind = tag.parse()?;
    Ok(lookup(kind))
}

/// Returns every registered definition in stable declaration order,
/// suitable for populating the palette.
pub fn all() -> &'static [FieldDefinition] {
    &DEFINITIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::FieldSpec;
    use formkit_core::Value;

    #[test]
    fn test_lookup_is_total_and_consistent() {
        for kind in FieldKind::ALL {
            let def = lookup(kind);
            assert_eq!(def.kind, kind);
            assert_eq!((def.default_config)().kind(), kind);
        }
    }

    #[test]
    fn test_lookup_tag_unknown_kind_fails() {
        let err = lookup_tag("bogus-kind").unwrap_err();
        assert!(matches!(err, FormKitError::UnknownFieldKind(tag) if tag == "bogus-kind"));
    }

    #[test]
    fn test_all_preserves_declaration_order() {
        let kinds: Vec<FieldKind> = all().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, FieldKind::ALL);
    }

    #[test]
    fn test_minimal_instance_of_every_kind_yields_checkable_schema() {
        for kind in FieldKind::ALL {
            let instance = FieldSpec::new(kind, "Field").into_instance();
            let schema = (lookup(kind).create_schema)(&instance);
            // An optional field with default config accepts an empty value.
            assert!(schema.check(&Value::Null).is_ok(), "kind {kind}");
        }
    }

    #[test]
    fn test_text_schema_reflects_bounds() {
        use crate::config::{FieldConfig, TextConfig};

        let instance = FieldSpec::new(FieldKind::Text, "Name")
            .required(true)
            .config(FieldConfig::Text(TextConfig {
                min_length: Some(3),
                max_length: Some(5),
                ..TextConfig::default()
            }))
            .into_instance();
        let schema = (lookup(FieldKind::Text).create_schema)(&instance);

        assert!(schema.check(&Value::from("ab")).is_err());
        assert!(schema.check(&Value::from("abcdef")).is_err());
        assert!(schema.check(&Value::from("abcd")).is_ok());
    }

    #[test]
    fn test_required_number_treats_zero_as_present() {
        let instance = FieldSpec::new(FieldKind::Number, "Qty")
            .required(true)
            .into_instance();
        let schema = (lookup(FieldKind::Number).create_schema)(&instance);

        assert!(schema.check(&Value::Null).is_err());
        assert!(schema.check(&Value::Int(0)).is_ok());
        assert!(schema.check(&Value::Int(-3)).is_ok());
    }

    #[test]
    fn test_number_minimum_one_is_an_explicit_bound() {
        use crate::config::{FieldConfig, NumberConfig};

        // The legacy ">= 1 when required" behavior is expressible as a
        // stored minimum, which is what it actually was.
        let instance = FieldSpec::new(FieldKind::Number, "Qty")
            .required(true)
            .config(FieldConfig::Number(NumberConfig {
                min: Some(1.0),
                ..NumberConfig::default()
            }))
            .into_instance();
        let schema = (lookup(FieldKind::Number).create_schema)(&instance);

        assert!(schema.check(&Value::Int(0)).is_err());
        assert!(schema.check(&Value::Int(1)).is_ok());
    }

    #[test]
    fn test_multi_select_expects_list() {
        use crate::config::{ChoiceOption, FieldConfig, SelectConfig};

        let instance = FieldSpec::new(FieldKind::Select, "Tags")
            .required(true)
            .config(FieldConfig::Select(SelectConfig {
                options: vec![ChoiceOption::new("a", "A"), ChoiceOption::new("b", "B")],
                multiple: true,
                ..SelectConfig::default()
            }))
            .into_instance();
        let schema = (lookup(FieldKind::Select).create_schema)(&instance);

        assert!(schema.check(&Value::from(vec!["a"])).is_ok());
        assert!(schema.check(&Value::List(vec![])).is_err());
        // A single-select submission does not satisfy a multi-select schema.
        assert!(schema.check(&Value::from("a")).is_err());
    }

    #[test]
    fn test_required_checkbox_must_agree() {
        let instance = FieldSpec::new(FieldKind::Checkbox, "Terms")
            .required(true)
            .into_instance();
        let schema = (lookup(FieldKind::Checkbox).create_schema)(&instance);

        assert!(schema.check(&Value::Bool(true)).is_ok());
        assert!(schema.check(&Value::Bool(false)).is_err());
    }

    #[test]
    fn test_date_schema_bounds() {
        use crate::config::{DateConfig, FieldConfig};

        let min = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let max = chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let instance = FieldSpec::new(FieldKind::Date, "When")
            .config(FieldConfig::Date(DateConfig {
                min_date: Some(min),
                max_date: Some(max),
                ..DateConfig::default()
            }))
            .into_instance();
        let schema = (lookup(FieldKind::Date).create_schema)(&instance);

        let inside = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let before = chrono::NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let after = chrono::NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(schema.check(&Value::Date(inside)).is_ok());
        assert!(schema.check(&Value::Date(before)).is_err());
        assert!(schema.check(&Value::Date(after)).is_err());
    }

    #[test]
    fn test_palette_metadata() {
        let def = lookup(FieldKind::Textarea);
        assert_eq!(def.label, "Long Text");
        assert_eq!(def.icon, "align-left");
        assert_eq!(def.renderer.to_string(), "Textarea");
    }
}
