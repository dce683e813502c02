//! Persistence of the form collection.
//!
//! The document collection is saved as JSON inside a versioned envelope so
//! the format can be migrated forward; the payload is the flat
//! `{ "forms": [...] }` shape. Loading a file written by a newer version is
//! refused rather than guessed at.

use std::fs;
use std::path::Path;

use tracing::debug;

use formkit_core::{FormKitError, FormKitResult};

use crate::form::Form;
use crate::store::FormStore;

/// The current envelope version.
pub const STORAGE_VERSION: u32 = 1;

/// The on-disk envelope: a version tag alongside the form collection.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct StoredState {
    version: u32,
    forms: Vec<Form>,
}

/// Writes the store's forms to `path` as pretty-printed JSON.
pub fn save_to(path: impl AsRef<Path>, store: &FormStore) -> FormKitResult<()> {
    let state = StoredState {
        version: STORAGE_VERSION,
        forms: store.forms().to_vec(),
    };
    let json = serde_json::to_string_pretty(&state)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), forms = state.forms.len(), "saved store");
    Ok(())
}

/// Loads a store from `path`.
///
/// A missing file is a first run and yields an empty store. A version tag
/// newer than [`STORAGE_VERSION`] is a [`FormKitError::Serialization`]
/// failure.
pub fn load_from(path: impl AsRef<Path>) -> FormKitResult<FormStore> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no persisted state, starting empty");
        return Ok(FormStore::new());
    }
    let json = fs::read_to_string(path)?;
    let state: StoredState = serde_json::from_str(&json)?;
    if state.version > STORAGE_VERSION {
        return Err(FormKitError::Serialization(format!(
            "stored state has version {} but this build reads up to {STORAGE_VERSION}",
            state.version
        )));
    }
    debug!(path = %path.display(), forms = state.forms.len(), "loaded store");
    Ok(FormStore::with_forms(state.forms))
}
