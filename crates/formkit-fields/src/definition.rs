//! The immutable per-kind field definition.

use std::fmt;

use crate::config::FieldConfig;
use crate::instance::FieldInstance;
use crate::kind::FieldKind;
use crate::rules::FieldSchema;

/// Identifies the interactive control that collects a field's value.
///
/// The rendering layer maps these references to actual controls; the core
/// never renders and makes no assumption about the UI technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererRef {
    /// Single-line text input.
    TextInput,
    /// Numeric input with spinner.
    NumberInput,
    /// Dropdown select.
    SelectInput,
    /// Single checkbox.
    CheckboxInput,
    /// Calendar date picker.
    DatePicker,
    /// Radio-button group.
    RadioGroup,
    /// Multi-line text area.
    Textarea,
}

/// Identifies the settings panel that edits a field's configuration.
///
/// The editing layer maps these references to configuration panels and
/// translates user input back into field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorRef {
    /// Placeholder and length bounds.
    TextSettings,
    /// Placeholder, value bounds, and step.
    NumberSettings,
    /// Options, placeholder, and the multiple flag.
    SelectSettings,
    /// The default-checked flag.
    CheckboxSettings,
    /// Date bounds and range/past-date flags.
    DateSettings,
    /// Options, default value, and layout.
    RadioSettings,
    /// Placeholder, length bounds, and row count.
    TextareaSettings,
}

impl fmt::Display for RendererRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::NumberInput => "NumberInput",
            Self::SelectInput => "SelectInput",
            Self::CheckboxInput => "CheckboxInput",
            Self::DatePicker => "DatePicker",
            Self::RadioGroup => "RadioGroup",
            Self::Textarea => "Textarea",
        };
        f.write_str(name)
    }
}

/// The immutable descriptor for one field kind.
///
/// One definition exists per kind, created at process start and never
/// destroyed. It bundles everything the rest of the system needs to work
/// with a kind without dispatching on it: palette metadata, renderer and
/// editor references, the default configuration, and the schema-derivation
/// rule.
pub struct FieldDefinition {
    /// The kind this definition describes.
    pub kind: FieldKind,
    /// Human-readable palette label.
    pub label: &'static str,
    /// Icon reference (lucide icon name) for the palette.
    pub icon: &'static str,
    /// Which control collects this kind's value.
    pub renderer: RendererRef,
    /// Which panel edits this kind's configuration.
    pub editor: EditorRef,
    /// Produces the kind's default configuration, merged under caller
    /// overrides when an instance is created.
    pub default_config: fn() -> FieldConfig,
    /// Derives the validation schema for one configured instance. Pure:
    /// a function of the instance alone, never of other fields or state.
    pub create_schema: fn(&FieldInstance) -> FieldSchema,
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("renderer", &self.renderer)
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}
