//! # formkit-fields
//!
//! The field-kind system for formkit: the closed set of field kinds, each
//! kind's configuration shape and defaults, the immutable per-kind
//! definitions, the registry that resolves kind tags to definitions, and the
//! rule-based validation schemas derived from configured field instances.
//!
//! Adding a new field kind is a one-place change: add a [`FieldKind`] variant
//! with its [`config`] struct and register one [`FieldDefinition`] in
//! [`registry`]. No call site dispatches on kind directly.
//!
//! ## Modules
//!
//! - [`kind`] - The [`FieldKind`] tag enum
//! - [`config`] - Per-kind configuration structs and the [`FieldConfig`] enum
//! - [`instance`] - [`FieldInstance`] and [`FieldSpec`]
//! - [`rules`] - The composable [`FieldSchema`](rules::FieldSchema) rule builder
//! - [`definition`] - The immutable [`FieldDefinition`] descriptor
//! - [`registry`] - Lookup and enumeration over the registered definitions

pub mod config;
pub mod definition;
pub mod instance;
pub mod kind;
pub mod registry;
pub mod rules;

pub use config::{
    CheckboxConfig, ChoiceOption, DateConfig, FieldConfig, NumberConfig, RadioConfig, RadioLayout,
    SelectConfig, TextConfig, TextareaConfig,
};
pub use definition::{EditorRef, FieldDefinition, RendererRef};
pub use instance::{FieldInstance, FieldSpec};
pub use kind::FieldKind;
pub use rules::{Constraint, FieldSchema, Rule, ValueType};
