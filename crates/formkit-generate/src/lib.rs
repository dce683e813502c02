//! # formkit-generate
//!
//! Consumes the JSON-lines stream produced by an external form generator
//! (typically a language model describing a form from natural language) and
//! turns it into store mutations: one `create_form` for the metadata line,
//! one `add_field` per field line. Malformed lines are logged and skipped;
//! a single bad message never aborts the stream.
//!
//! ## Modules
//!
//! - [`protocol`] - Message parsing and incremental line splitting
//! - [`consumer`] - The [`LineSource`](consumer::LineSource) boundary and
//!   [`run_generation`](consumer::run_generation)

pub mod consumer;
pub mod protocol;

pub use consumer::{run_generation, LineSource};
pub use protocol::{GenerationMessage, LineBuffer};
