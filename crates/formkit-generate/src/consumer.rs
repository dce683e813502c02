//! Driving store mutations from a generation stream.
//!
//! [`run_generation`] reads chunks from a [`LineSource`], assembles them
//! into lines, and applies each parsed message to the store: the metadata
//! line creates the form, each field line adds one field. Every `add_field`
//! is individually atomic, so cancelling the producer mid-stream just stops
//! further fields from arriving; the document stays consistent and no
//! rollback is needed.

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use formkit_core::{FormKitError, FormKitResult};
use formkit_store::SharedStore;

use crate::protocol::{GenerationMessage, LineBuffer};

/// An asynchronous source of stream chunks.
///
/// The production implementation wraps a language-model completion stream;
/// tests script one from a list of chunks. Chunk boundaries carry no
/// meaning: messages are delimited by newlines, not by chunks.
#[async_trait]
pub trait LineSource {
    /// The next chunk, or `None` once the stream is exhausted.
    async fn next_chunk(&mut self) -> Option<String>;
}

/// Consumes a generation stream into the store and returns the created
/// form's id.
///
/// Malformed lines, repeated metadata lines, and field lines arriving
/// before the metadata are logged and skipped; they never abort the
/// stream. A stream that ends without any valid metadata line fails with
/// [`FormKitError::MalformedMessage`], since no form could be created.
pub async fn run_generation<S>(store: &SharedStore, source: &mut S) -> FormKitResult<Uuid>
where
    S: LineSource + Send,
{
    let mut buffer = LineBuffer::new();
    let mut form_id: Option<Uuid> = None;

    while let Some(chunk) = source.next_chunk().await {
        for line in buffer.push(&chunk) {
            apply_line(store, &mut form_id, &line)?;
        }
    }
    if let Some(line) = buffer.finish() {
        apply_line(store, &mut form_id, &line)?;
    }

    form_id.ok_or_else(|| {
        FormKitError::MalformedMessage("stream ended without a metadata message".to_string())
    })
}

fn apply_line(store: &SharedStore, form_id: &mut Option<Uuid>, line: &str) -> FormKitResult<()> {
    match GenerationMessage::parse_line(line) {
        Ok(GenerationMessage::Metadata { title, description }) => {
            if form_id.is_some() {
                warn!(line, "skipping repeated metadata message");
                return Ok(());
            }
            let form = store.create_form(title, description);
            *form_id = Some(form.id);
            Ok(())
        }
        Ok(GenerationMessage::Field(spec)) => match *form_id {
            Some(id) => {
                store.add_field(id, spec, None)?;
                Ok(())
            }
            None => {
                warn!(line, "skipping field message before metadata");
                Ok(())
            }
        },
        Err(err) => {
            warn!(%err, "skipping malformed generation message");
            Ok(())
        }
    }
}
