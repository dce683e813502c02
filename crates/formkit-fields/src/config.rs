//! Per-kind field configuration.
//!
//! Each field kind carries its own configuration struct; the set of legal
//! configuration keys is therefore fixed by the kind at the type level. The
//! structs' `Default` impls are the kind defaults, and every struct is
//! `#[serde(default)]`, so a partial caller-supplied spec merges over the
//! defaults during deserialization: caller keys win, defaults fill absence.

use crate::kind::FieldKind;

/// One selectable option of a select or radio field.
///
/// Deserializes from either the full `{ "value": ..., "label": ... }` object
/// or a bare string, in which case the string is used as both.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChoiceOption {
    /// The submitted value.
    pub value: String,
    /// The human-readable label.
    pub label: String,
}

impl ChoiceOption {
    /// Creates an option from a value and label pair.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for ChoiceOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Full { value: String, label: String },
            Bare(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Full { value, label } => Self { value, label },
            Repr::Bare(s) => Self {
                value: s.clone(),
                label: s,
            },
        })
    }
}

/// The arrangement of a radio group's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadioLayout {
    /// Options laid out in a row.
    Horizontal,
    /// Options stacked in a column.
    Vertical,
}

/// Configuration for a single-line text input.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextConfig {
    /// Placeholder shown while empty.
    pub placeholder: String,
    /// Minimum accepted length in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum accepted length in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            placeholder: "Enter text...".to_string(),
            min_length: None,
            max_length: None,
        }
    }
}

/// Configuration for a numeric input.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberConfig {
    /// Placeholder shown while empty.
    pub placeholder: String,
    /// Minimum accepted value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum accepted value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Spinner increment.
    pub step: f64,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            placeholder: "Enter number...".to_string(),
            min: None,
            max: None,
            step: 1.0,
        }
    }
}

/// Configuration for a dropdown selection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    /// Placeholder shown while nothing is selected.
    pub placeholder: String,
    /// The selectable options.
    pub options: Vec<ChoiceOption>,
    /// Whether more than one option may be selected. When set, the submitted
    /// value is a list of option values instead of a single value.
    pub multiple: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select an option...".to_string(),
            options: Vec::new(),
            multiple: false,
        }
    }
}

/// Configuration for a single checkbox.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxConfig {
    /// Whether the box starts checked.
    pub default_checked: bool,
}

/// Configuration for a date picker.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateConfig {
    /// Placeholder shown while empty.
    pub placeholder: String,
    /// Earliest accepted date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<chrono::NaiveDate>,
    /// Latest accepted date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<chrono::NaiveDate>,
    /// Whether the picker selects a date range instead of a single date.
    pub range_mode: bool,
    /// Whether the picker greys out dates before today. A display hint; the
    /// schema only enforces the explicit `min_date`/`max_date` bounds.
    pub disabled_past_dates: bool,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            placeholder: "Pick a date...".to_string(),
            min_date: None,
            max_date: None,
            range_mode: false,
            disabled_past_dates: false,
        }
    }
}

/// Configuration for a radio-button group.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioConfig {
    /// The selectable options.
    pub options: Vec<ChoiceOption>,
    /// The option value selected initially, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// How the options are arranged.
    pub layout: RadioLayout,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            default_value: None,
            layout: RadioLayout::Vertical,
        }
    }
}

/// Configuration for a multi-line text input.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextareaConfig {
    /// Placeholder shown while empty.
    pub placeholder: String,
    /// Minimum accepted length in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum accepted length in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Number of visible text rows.
    pub rows: u32,
}

impl Default for TextareaConfig {
    fn default() -> Self {
        Self {
            placeholder: "Enter text...".to_string(),
            min_length: None,
            max_length: None,
            rows: 4,
        }
    }
}

/// The configuration of one field instance, tagged by its kind.
///
/// On the wire this is internally tagged with `type`, so a field instance
/// flattens to `{ "type": "text", "placeholder": ..., ... }` alongside its
/// base attributes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldConfig {
    /// Single-line text input.
    Text(TextConfig),
    /// Numeric input.
    Number(NumberConfig),
    /// Dropdown selection.
    Select(SelectConfig),
    /// Single checkbox.
    Checkbox(CheckboxConfig),
    /// Date picker.
    Date(DateConfig),
    /// Radio-button group.
    Radio(RadioConfig),
    /// Multi-line text input.
    Textarea(TextareaConfig),
}

impl FieldConfig {
    /// Returns the kind of field this configuration belongs to.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Select(_) => FieldKind::Select,
            Self::Checkbox(_) => FieldKind::Checkbox,
            Self::Date(_) => FieldKind::Date,
            Self::Radio(_) => FieldKind::Radio,
            Self::Textarea(_) => FieldKind::Textarea,
        }
    }

    /// Returns the default configuration for the given kind.
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(TextConfig::default()),
            FieldKind::Number => Self::Number(NumberConfig::default()),
            FieldKind::Select => Self::Select(SelectConfig::default()),
            FieldKind::Checkbox => Self::Checkbox(CheckboxConfig::default()),
            FieldKind::Date => Self::Date(DateConfig::default()),
            FieldKind::Radio => Self::Radio(RadioConfig::default()),
            FieldKind::Textarea => Self::Textarea(TextareaConfig::default()),
        }
    }
}
