//! # formkit
//!
//! A form-builder core: a registry of self-describing field kinds, form
//! documents built from configured field instances, and composite
//! validation schemas derived from those documents at runtime.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. Depend on `formkit` for the whole system, or on individual
//! crates for finer-grained control.

/// Errors, submitted values, and logging integration.
pub use formkit_core as core;

/// Field kinds, per-kind configuration, definitions, the registry, and
/// validation rules.
pub use formkit_fields as fields;

/// Form documents, the store and its mutation operations, schema
/// synthesis, and persistence.
pub use formkit_store as store;

/// The generation-stream consumer for externally produced forms.
pub use formkit_generate as generate;
