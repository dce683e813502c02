//! # formkit-core
//!
//! Core types for the formkit form-builder: error types, the submitted-value
//! representation, and logging integration. This crate has no dependencies on
//! the other formkit crates and provides the foundation for all of them.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`value`] - The [`Value`](value::Value) type for submitted form data
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use error::{FormKitError, FormKitResult, ValidationErrors};
pub use value::Value;
