//! The closed set of field kind tags.

use std::fmt;
use std::str::FromStr;

use formkit_core::FormKitError;

/// The type tag of a field, determining its configuration shape, default
/// values, and validation rule.
///
/// The set is closed at compile time; declaration order is the stable order
/// used when enumerating definitions for the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A single-line text input.
    Text,
    /// A numeric input.
    Number,
    /// A dropdown selection.
    Select,
    /// A single checkbox.
    Checkbox,
    /// A date picker.
    Date,
    /// A radio-button group.
    Radio,
    /// A multi-line text input.
    Textarea,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::Number,
        Self::Select,
        Self::Checkbox,
        Self::Date,
        Self::Radio,
        Self::Textarea,
    ];

    /// Returns the wire tag for this kind (the serialized `type` value).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Radio => "radio",
            Self::Textarea => "textarea",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FormKitError;

    /// Parses a wire tag, failing loudly on anything outside the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "select" => Ok(Self::Select),
            "checkbox" => Ok(Self::Checkbox),
            "date" => Ok(Self::Date),
            "radio" => Ok(Self::Radio),
            "textarea" => Ok(Self::Textarea),
            other => Err(FormKitError::UnknownFieldKind(other.to_string())),
        }
    }
}
