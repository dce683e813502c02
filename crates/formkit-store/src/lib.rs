//! # formkit-store
//!
//! The form-document side of formkit: the [`Form`] document model, the
//! [`FormStore`] holding the document collection with its mutation
//! operations, the schema synthesizer that turns a document into a
//! composite [`FormSchema`], and JSON persistence with a versioned
//! envelope.
//!
//! ## Modules
//!
//! - [`form`] - The [`Form`] document
//! - [`store`] - [`FormStore`], [`SharedStore`], and every mutation operation
//! - [`synthesize`] - [`synthesize`](synthesize::synthesize) and [`FormSchema`]
//! - [`persist`] - Versioned save/load of the document collection

pub mod form;
pub mod persist;
pub mod store;
pub mod synthesize;

pub use form::Form;
pub use store::{FieldUpdate, FormStore, FormUpdate, SharedStore};
pub use synthesize::{synthesize, FormSchema};
