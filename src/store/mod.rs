// ABOUTME: Single owner of the mutable state record with undo/redo history and A/B snapshots
// ABOUTME: Every mutation persists best-effort and then notifies observers exactly once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! State Store
//!
//! The store is the only place the live [`StateRecord`] changes. Mutations
//! follow one discipline:
//!
//! 1. validate the new value on a copy, leaving the store untouched on error
//! 2. push the replaced record onto the bounded undo stack (clearing redo)
//! 3. replace the record
//! 4. persist the document, logging and swallowing any storage failure
//! 5. call every observer once
//!
//! Snapshot commands and unit switches skip step 2: history holds records only.

/// Bounded undo and redo stacks
pub mod history;
/// Observer registry
pub mod observers;
/// Lifestyle scenario presets
pub mod presets;

use crate::document::{parse_document, parse_persisted, ExportDocument, SandboxDocument};
use crate::storage::DocumentStorage;
use history::History;
use observers::{Observer, ObserverList};
use physio_core::constants::storage::STORAGE_KEY;
use physio_core::errors::{AppError, AppResult};
use physio_core::models::{
    FieldValue, PartialRecord, QuantityFamily, RecordField, Sex, StateRecord, UnitMode, UnitModes,
};
use physio_intelligence::parsing::parse_num;
use physio_intelligence::units::{convert_family, UnitRegistry};
use std::fmt;
use std::mem;
use tracing::{debug, info, warn};

pub use observers::SubscriptionId;
pub use presets::{scenario, scenario_names};

/// Owner of the live record, its history, the comparison snapshots and the unit modes
pub struct StateStore {
    record: StateRecord,
    history: History,
    snapshot_a: Option<StateRecord>,
    snapshot_b: Option<StateRecord>,
    units: UnitRegistry,
    last_changed: Option<RecordField>,
    observers: ObserverList,
    storage: Box<dyn DocumentStorage>,
    storage_key: String,
}

impl StateStore {
    /// Store starting from the default profile, ignoring anything already persisted
    #[must_use]
    pub fn new(storage: Box<dyn DocumentStorage>, history_limit: usize) -> Self {
        Self {
            record: StateRecord::default(),
            history: History::new(history_limit),
            snapshot_a: None,
            snapshot_b: None,
            units: UnitRegistry::default(),
            last_changed: None,
            observers: ObserverList::default(),
            storage,
            storage_key: STORAGE_KEY.to_owned(),
        }
    }

    /// Store restored from the persisted document
    ///
    /// A missing, unreadable or corrupt document falls back to the default
    /// profile. History always starts empty.
    #[must_use]
    pub fn open(storage: Box<dyn DocumentStorage>, history_limit: usize) -> Self {
        let mut store = Self::new(storage, history_limit);
        match store.storage.load(&store.storage_key) {
            Ok(Some(text)) => match parse_persisted(&text) {
                Ok(document) => {
                    info!(
                        backend = store.storage.backend_name(),
                        "Restored persisted sandbox state"
                    );
                    store.restore(document);
                }
                Err(e) => warn!(
                    backend = store.storage.backend_name(),
                    error = %e,
                    "Persisted sandbox state is corrupt, starting from defaults"
                ),
            },
            Ok(None) => debug!(
                backend = store.storage.backend_name(),
                "No persisted sandbox state"
            ),
            Err(e) => warn!(
                backend = store.storage.backend_name(),
                error = %e,
                "Failed to read persisted sandbox state, starting from defaults"
            ),
        }
        store
    }

    fn restore(&mut self, document: SandboxDocument) {
        self.record = document.record;
        self.snapshot_a = document.snapshot_a;
        self.snapshot_b = document.snapshot_b;
        self.units = UnitRegistry::with_modes(document.units);
    }

    // ================================
    // Accessors
    // ================================

    /// Live record
    #[must_use]
    pub const fn record(&self) -> &StateRecord {
        &self.record
    }

    /// Active unit modes
    #[must_use]
    pub const fn units(&self) -> UnitModes {
        self.units.modes()
    }

    /// Snapshot slot A
    #[must_use]
    pub const fn snapshot_a(&self) -> Option<&StateRecord> {
        self.snapshot_a.as_ref()
    }

    /// Snapshot slot B
    #[must_use]
    pub const fn snapshot_b(&self) -> Option<&StateRecord> {
        self.snapshot_b.as_ref()
    }

    /// Field named by the most recent single-field edit
    #[must_use]
    pub const fn last_changed(&self) -> Option<RecordField> {
        self.last_changed
    }

    /// Whether [`undo`](Self::undo) would change anything
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether [`redo`](Self::redo) would change anything
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.has_future()
    }

    /// Number of undo entries
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Name of the storage backend
    #[must_use]
    pub fn storage_backend(&self) -> &'static str {
        self.storage.backend_name()
    }

    /// Current contents as a persistable document
    #[must_use]
    pub fn document(&self) -> SandboxDocument {
        SandboxDocument {
            units: self.units.modes(),
            record: self.record.clone(),
            snapshot_a: self.snapshot_a.clone(),
            snapshot_b: self.snapshot_b.clone(),
        }
    }

    // ================================
    // Record mutations
    // ================================

    /// Overwrite one field
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value does not fit the field; the store
    /// is left untouched and no observer is called.
    pub fn set(&mut self, field: RecordField, value: impl Into<FieldValue>) -> AppResult<()> {
        let mut next = self.record.clone();
        next.apply(field, value.into())?;
        self.commit(next);
        self.last_changed = Some(field);
        self.emit("set");
        Ok(())
    }

    /// Overwrite one field from raw form text
    ///
    /// Numbers accept a comma or a period as decimal separator. Text that
    /// does not parse to a finite value of the right kind skips the mutation
    /// and returns `false`. An unparseable number still marks the field as
    /// [`last_changed`](Self::last_changed).
    pub fn set_input(&mut self, field: RecordField, raw: &str) -> bool {
        let value = if field == RecordField::Sex {
            match raw.parse::<Sex>() {
                Ok(sex) => FieldValue::Sex(sex),
                Err(_) => return false,
            }
        } else {
            let number = parse_num(raw);
            if !number.is_finite() {
                debug!(%field, raw, "Ignoring unparseable input");
                self.last_changed = Some(field);
                return false;
            }
            FieldValue::Number(number)
        };
        self.set(field, value).is_ok()
    }

    /// Overwrite every field present in `partial` as one history step
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a present number is not finite; nothing is applied.
    pub fn set_many(&mut self, partial: &PartialRecord) -> AppResult<()> {
        let next = Self::merged(&self.record, partial)?;
        self.commit(next);
        self.emit("set_many");
        Ok(())
    }

    /// Replace the record with the default profile
    pub fn reset(&mut self) {
        self.commit(StateRecord::default());
        self.emit("reset");
    }

    /// Replace the record with the target profile
    pub fn apply_optimum(&mut self) {
        self.commit(StateRecord::optimum());
        self.emit("apply_optimum");
    }

    /// Merge the named lifestyle scenario onto the record
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown name; nothing is committed
    pub fn apply_scenario(&mut self, name: &str) -> AppResult<()> {
        let partial =
            presets::scenario(name).ok_or_else(|| AppError::not_found(format!("Scenario '{name}'")))?;
        let next = Self::merged(&self.record, &partial)?;
        self.commit(next);
        self.emit("apply_scenario");
        Ok(())
    }

    fn merged(record: &StateRecord, partial: &PartialRecord) -> AppResult<StateRecord> {
        let mut next = record.clone();
        next.merge(partial);
        let non_finite = partial
            .fields()
            .into_iter()
            .find(|field| matches!(next.get(*field), FieldValue::Number(n) if !n.is_finite()));
        if let Some(field) = non_finite {
            return Err(AppError::invalid_input(format!(
                "Field '{field}' requires a finite number"
            )));
        }
        Ok(next)
    }

    fn commit(&mut self, next: StateRecord) {
        let previous = mem::replace(&mut self.record, next);
        self.history.commit(previous);
    }

    // ================================
    // History
    // ================================

    /// Step back one commit; `false` when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(&self.record) else {
            return false;
        };
        self.record = previous;
        self.emit("undo");
        true
    }

    /// Re-apply the last undone commit; `false` when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(&self.record) else {
            return false;
        };
        self.record = next;
        self.emit("redo");
        true
    }

    // ================================
    // Snapshots
    // ================================

    /// Copy the live record into slot A
    pub fn set_snapshot_a(&mut self) {
        self.snapshot_a = Some(self.record.clone());
        self.emit("set_snapshot_a");
    }

    /// Copy the live record into slot B
    pub fn set_snapshot_b(&mut self) {
        self.snapshot_b = Some(self.record.clone());
        self.emit("set_snapshot_b");
    }

    /// Empty both snapshot slots
    pub fn clear_snapshots(&mut self) {
        self.snapshot_a = None;
        self.snapshot_b = None;
        self.emit("clear_snapshots");
    }

    // ================================
    // Units
    // ================================

    /// Switch `family` to `mode`, converting every stored record
    ///
    /// The live record, all undo and redo entries and both snapshots are
    /// converted so they stay expressed in the active mode. Returns `false`
    /// without persisting or notifying when `mode` is already active.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any converted value is not finite; record,
    /// history, snapshots and unit modes are left untouched.
    pub fn convert_units(&mut self, family: QuantityFamily, mode: UnitMode) -> AppResult<bool> {
        let from = self.units.mode(family);
        let mut units = self.units;
        let mut record = self.record.clone();
        if !units.set_mode(family, mode, &mut record)? {
            return Ok(false);
        }

        let mut history = self.history.clone();
        let mut snapshot_a = self.snapshot_a.clone();
        let mut snapshot_b = self.snapshot_b.clone();
        for stored in history
            .records_mut()
            .chain(snapshot_a.iter_mut())
            .chain(snapshot_b.iter_mut())
        {
            convert_family(stored, family, from, mode)?;
        }

        self.record = record;
        self.history = history;
        self.snapshot_a = snapshot_a;
        self.snapshot_b = snapshot_b;
        self.units = units;
        self.emit("convert_units");
        Ok(true)
    }

    // ================================
    // Document interchange
    // ================================

    /// Serialize the current contents with format metadata
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn export_document(&self) -> AppResult<String> {
        let text = ExportDocument::new(self.document()).to_json()?;
        info!(bytes = text.len(), "Exported sandbox document");
        Ok(text)
    }

    /// Replace record, snapshots and unit modes from an interchange document
    ///
    /// The document is parsed completely before anything changes. The
    /// replaced record becomes an undo entry; existing history is converted
    /// to the imported unit modes.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the store untouched if the text is
    /// not a valid document or has no `record`, or `InvalidInput` if existing
    /// history cannot be converted to the imported unit modes
    pub fn import_document(&mut self, text: &str) -> AppResult<()> {
        let imported = parse_document(text)?;
        let target = imported.units.unwrap_or_default();
        let current = self.units.modes();

        let mut history = self.history.clone();
        history.commit(self.record.clone());
        for family in [QuantityFamily::Glucose, QuantityFamily::Lipids] {
            for record in history.records_mut() {
                convert_family(record, family, current.mode(family), target.mode(family))?;
            }
        }
        self.history = history;
        self.record = imported.record;
        self.snapshot_a = imported.snapshot_a;
        self.snapshot_b = imported.snapshot_b;
        self.units = UnitRegistry::with_modes(target);

        info!(
            has_snapshot_a = self.snapshot_a.is_some(),
            has_snapshot_b = self.snapshot_b.is_some(),
            "Imported sandbox document"
        );
        self.emit("import_document");
        Ok(())
    }

    // ================================
    // Observers
    // ================================

    /// Register `observer`, called once after every mutation
    pub fn subscribe(&mut self, observer: impl FnMut(&Self) + Send + 'static) -> SubscriptionId {
        let boxed: Observer = Box::new(observer);
        self.observers.add(boxed)
    }

    /// Remove a subscription; `false` if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Number of registered observers
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn persist(&self) {
        let document = match serde_json::to_string(&self.document()) {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Failed to encode sandbox state, skipping persist");
                return;
            }
        };
        if let Err(e) = self.storage.save(&self.storage_key, &document) {
            warn!(
                backend = self.storage.backend_name(),
                error = %e,
                "Failed to persist sandbox state"
            );
        }
    }

    fn emit(&mut self, operation: &'static str) {
        debug!(
            operation,
            history = self.history.len(),
            redo = self.history.has_future(),
            "State store mutated"
        );
        self.persist();
        let mut observers = self.observers.take();
        observers.notify(self);
        self.observers = observers;
    }
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("record", &self.record)
            .field("history", &self.history.len())
            .field("snapshot_a", &self.snapshot_a.is_some())
            .field("snapshot_b", &self.snapshot_b.is_some())
            .field("units", &self.units.modes())
            .field("observers", &self.observers)
            .field("storage", &self.storage.backend_name())
            .finish_non_exhaustive()
    }
}
