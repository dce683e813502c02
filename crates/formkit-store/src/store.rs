//! The form store and its mutation operations.
//!
//! [`FormStore`] holds the document collection and is the only sanctioned
//! write path: every state transition over a form's field list goes through
//! one of its methods, each a synchronous, atomic transform. [`SharedStore`]
//! wraps the store in a process-wide, single-writer container whose lock
//! scope is one operation, so concurrent readers always observe a
//! fully-formed snapshot.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use uuid::Uuid;

use formkit_core::{FormKitError, FormKitResult};
use formkit_fields::{FieldConfig, FieldInstance, FieldSpec};

use crate::form::Form;

/// A partial update to a form's metadata. Absent attributes are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormUpdate {
    /// New title, if any.
    pub title: Option<String>,
    /// New description, if any.
    pub description: Option<String>,
}

/// A partial update to a field instance. Absent attributes are left as-is;
/// the field's kind can never be changed this way.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldUpdate {
    /// New label, if any.
    pub label: Option<String>,
    /// New description, if any.
    pub description: Option<String>,
    /// New required flag, if any.
    pub required: Option<bool>,
    /// Replacement configuration, if any. Must carry the instance's kind.
    pub config: Option<FieldConfig>,
}

/// The form document collection.
///
/// Missing ids are explicit failures ([`FormKitError::FormNotFound`] /
/// [`FieldNotFound`](FormKitError::FieldNotFound)), never silent no-ops, so
/// callers can distinguish "nothing to do" from "wrong id".
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormStore {
    forms: Vec<Form>,
    active_form_id: Option<Uuid>,
}

impl FormStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an already-loaded document collection.
    pub fn with_forms(forms: Vec<Form>) -> Self {
        Self {
            forms,
            active_form_id: None,
        }
    }

    // ── Read access ────────────────────────────────────────────────────

    /// All forms, in creation order.
    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    /// The form with the given id.
    pub fn form(&self, form_id: Uuid) -> FormKitResult<&Form> {
        self.forms
            .iter()
            .find(|f| f.id == form_id)
            .ok_or(FormKitError::FormNotFound(form_id))
    }

    /// The currently active form, if one is set.
    pub fn active_form(&self) -> Option<&Form> {
        let id = self.active_form_id?;
        self.forms.iter().find(|f| f.id == id)
    }

    fn form_mut(&mut self, form_id: Uuid) -> FormKitResult<&mut Form> {
        self.forms
            .iter_mut()
            .find(|f| f.id == form_id)
            .ok_or(FormKitError::FormNotFound(form_id))
    }

    // ── Form operations ────────────────────────────────────────────────

    /// Creates a new, empty form and makes it active. Returns the form.
    pub fn create_form(&mut self, title: impl Into<String>, description: Option<String>) -> Form {
        let form = Form::new(title, description);
        debug!(form = %form.id, title = %form.title, "create form");
        self.active_form_id = Some(form.id);
        self.forms.push(form.clone());
        form
    }

    /// Merges metadata updates into an existing form.
    pub fn update_form(&mut self, form_id: Uuid, updates: FormUpdate) -> FormKitResult<()> {
        let form = self.form_mut(form_id)?;
        if let Some(title) = updates.title {
            form.title = title;
        }
        if let Some(description) = updates.description {
            form.description = Some(description);
        }
        debug!(form = %form_id, "update form");
        Ok(())
    }

    /// Removes a form and all of its fields.
    pub fn delete_form(&mut self, form_id: Uuid) -> FormKitResult<()> {
        let index = self
            .forms
            .iter()
            .position(|f| f.id == form_id)
            .ok_or(FormKitError::FormNotFound(form_id))?;
        self.forms.remove(index);
        if self.active_form_id == Some(form_id) {
            self.active_form_id = None;
        }
        debug!(form = %form_id, "delete form");
        Ok(())
    }

    /// Marks a form as the active one.
    pub fn set_active_form(&mut self, form_id: Uuid) -> FormKitResult<()> {
        self.form(form_id)?;
        self.active_form_id = Some(form_id);
        Ok(())
    }

    // ── Field operations ───────────────────────────────────────────────

    /// Creates a field from a spec and inserts it into a form.
    ///
    /// The instance gets a fresh identifier; its configuration is the spec's
    /// (already defaults-merged by construction or deserialization). With an
    /// in-range `index` the field is inserted there, shifting the rest
    /// right; otherwise it is appended. Returns the created instance.
    pub fn add_field(
        &mut self,
        form_id: Uuid,
        spec: FieldSpec,
        index: Option<usize>,
    ) -> FormKitResult<FieldInstance> {
        let form = self.form_mut(form_id)?;
        let instance = spec.into_instance();
        let at = index.map_or(form.fields.len(), |i| i.min(form.fields.len()));
        debug!(form = %form_id, field = %instance.id, kind = %instance.kind(), at, "add field");
        form.fields.insert(at, instance.clone());
        Ok(instance)
    }

    /// Merges attribute updates into a field.
    ///
    /// The kind is immutable: a replacement configuration of a different
    /// kind fails with [`FormKitError::KindImmutable`] and leaves the
    /// instance untouched. Changing a field's kind requires deleting and
    /// recreating it.
    pub fn update_field(
        &mut self,
        form_id: Uuid,
        field_id: Uuid,
        updates: FieldUpdate,
    ) -> FormKitResult<()> {
        let form = self.form_mut(form_id)?;
        let field = form
            .fields
            .iter_mut()
            .find(|f| f.id == field_id)
            .ok_or(FormKitError::FieldNotFound {
                form: form_id,
                field: field_id,
            })?;

        if let Some(config) = &updates.config {
            if config.kind() != field.kind() {
                return Err(FormKitError::KindImmutable {
                    field: field_id,
                    expected: field.kind().to_string(),
                    requested: config.kind().to_string(),
                });
            }
        }

        if let Some(label) = updates.label {
            field.label = label;
        }
        if let Some(description) = updates.description {
            field.description = Some(description);
        }
        if let Some(required) = updates.required {
            field.required = required;
        }
        if let Some(config) = updates.config {
            field.config = config;
        }
        debug!(form = %form_id, field = %field_id, "update field");
        Ok(())
    }

    /// Removes exactly one field from a form.
    pub fn delete_field(&mut self, form_id: Uuid, field_id: Uuid) -> FormKitResult<()> {
        let form = self.form_mut(form_id)?;
        let index = form
            .field_index(field_id)
            .ok_or(FormKitError::FieldNotFound {
                form: form_id,
                field: field_id,
            })?;
        form.fields.remove(index);
        debug!(form = %form_id, field = %field_id, "delete field");
        Ok(())
    }

    /// Empties a form's field list.
    pub fn clear_fields(&mut self, form_id: Uuid) -> FormKitResult<()> {
        let form = self.form_mut(form_id)?;
        form.fields.clear();
        debug!(form = %form_id, "clear fields");
        Ok(())
    }

    /// Moves the field at `from` to `to`, shifting the fields in between.
    pub fn reorder_fields(&mut self, form_id: Uuid, from: usize, to: usize) -> FormKitResult<()> {
        let form = self.form_mut(form_id)?;
        let len = form.fields.len();
        if from >= len {
            return Err(FormKitError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(FormKitError::IndexOutOfRange { index: to, len });
        }
        let field = form.fields.remove(from);
        form.fields.insert(to, field);
        debug!(form = %form_id, from, to, "reorder fields");
        Ok(())
    }
}

/// A cloneable handle to the process-wide store.
///
/// Each method takes the write lock for exactly one mutation, so every
/// operation is atomic with respect to the others and a reader never sees a
/// half-applied change. An asynchronous producer (like the generation
/// stream) that stops calling mid-way leaves the store consistent; no
/// rollback is ever needed.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<FormStore>>,
}

impl SharedStore {
    /// Wraps a store, typically one freshly loaded from persisted state.
    pub fn new(store: FormStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Read access to the store. Lock poisoning is ignored; the store's
    /// data is valid after a panicked writer because every mutation is a
    /// single structural edit.
    pub fn read(&self) -> RwLockReadGuard<'_, FormStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Atomic [`FormStore::create_form`].
    pub fn create_form(&self, title: impl Into<String>, description: Option<String>) -> Form {
        self.write().create_form(title, description)
    }

    /// Atomic [`FormStore::update_form`].
    pub fn update_form(&self, form_id: Uuid, updates: FormUpdate) -> FormKitResult<()> {
        self.write().update_form(form_id, updates)
    }

    /// Atomic [`FormStore::delete_form`].
    pub fn delete_form(&self, form_id: Uuid) -> FormKitResult<()> {
        self.write().delete_form(form_id)
    }

    /// Atomic [`FormStore::set_active_form`].
    pub fn set_active_form(&self, form_id: Uuid) -> FormKitResult<()> {
        self.write().set_active_form(form_id)
    }

    /// Atomic [`FormStore::add_field`].
    pub fn add_field(
        &self,
        form_id: Uuid,
        spec: FieldSpec,
        index: Option<usize>,
    ) -> FormKitResult<FieldInstance> {
        self.write().add_field(form_id, spec, index)
    }

    /// Atomic [`FormStore::update_field`].
    pub fn update_field(
        &self,
        form_id: Uuid,
        field_id: Uuid,
        updates: FieldUpdate,
    ) -> FormKitResult<()> {
        self.write().update_field(form_id, field_id, updates)
    }

    /// Atomic [`FormStore::delete_field`].
    pub fn delete_field(&self, form_id: Uuid, field_id: Uuid) -> FormKitResult<()> {
        self.write().delete_field(form_id, field_id)
    }

    /// Atomic [`FormStore::clear_fields`].
    pub fn clear_fields(&self, form_id: Uuid) -> FormKitResult<()> {
        self.write().clear_fields(form_id)
    }

    /// Atomic [`FormStore::reorder_fields`].
    pub fn reorder_fields(&self, form_id: Uuid, from: usize, to: usize) -> FormKitResult<()> {
        self.write().reorder_fields(form_id, from, to)
    }

    /// A snapshot of one form, taken under the read lock.
    pub fn form(&self, form_id: Uuid) -> FormKitResult<Form> {
        self.read().form(form_id).cloned()
    }
}
