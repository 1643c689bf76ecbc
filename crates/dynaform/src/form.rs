// File: src/form.rs
// Purpose: Form state machine owning the working object, errors and saved snapshot

use dynaform_types::{FieldDescriptor, FieldPath, FormConfiguration};
use dynaform_validation::{validate, ValidationOutcome};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::ErrorMap;
use crate::path;

/// The live state of one form.
///
/// Every transition is a synchronous `&mut self` call, so exactly one edit or
/// submit runs at a time. Validation failures are recorded in the error map;
/// no transition returns an error.
#[derive(Debug, Clone)]
pub struct FormState {
    working: Value,
    errors: ErrorMap,
    saved: Option<Value>,
    revision: u64,
}

/// One descriptor that failed during submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub path: FieldPath,
    pub label: String,
    pub message: String,
}

/// What a submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed and the snapshot was replaced
    Committed,
    /// At least one field failed; the snapshot is unchanged
    Rejected { failures: Vec<FieldFailure> },
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed)
    }

    pub fn failures(&self) -> &[FieldFailure] {
        match self {
            SubmitOutcome::Committed => &[],
            SubmitOutcome::Rejected { failures } => failures,
        }
    }
}

impl FormState {
    /// Start from `initial` as supplied; defaults are not applied here
    pub fn new(initial: Value) -> Self {
        Self {
            working: initial,
            errors: ErrorMap::new(),
            saved: None,
            revision: 0,
        }
    }

    /// Like [`FormState::new`], warning about paths bound by several descriptors
    pub fn for_configuration(initial: Value, config: &FormConfiguration) -> Self {
        for duplicate in config.duplicate_paths() {
            warn!("Path '{}' is bound by more than one field", duplicate);
        }
        Self::new(initial)
    }

    /// Apply one user edit.
    ///
    /// `target` is either the field's own path or a sub-path of it (the
    /// currency widget edits `<path>.currency` and `<path>.value`
    /// separately). After writing, the field is validated against the full
    /// value now stored at its own path, and the outcome is recorded under
    /// that path.
    pub fn edit(
        &mut self,
        target: &FieldPath,
        field: &FieldDescriptor,
        raw: Value,
    ) -> ValidationOutcome {
        self.working = path::write(&self.working, target, raw);
        self.revision += 1;

        let outcome = validate(field, path::read(&self.working, &field.path));
        self.errors.record(&field.path, &outcome);

        debug!(
            "Edit {} (field {}): {}",
            target,
            field.path,
            if outcome.is_valid() { "valid" } else { "invalid" }
        );

        outcome
    }

    /// Validate every field in configuration order and commit when all pass.
    ///
    /// The error map is rebuilt from scratch. When several fields share a
    /// path, the first failure keeps the message for that path. Edits in the
    /// working object are never rolled back.
    pub fn submit(&mut self, config: &FormConfiguration) -> SubmitOutcome {
        let mut errors = ErrorMap::new();
        let mut failures = Vec::new();

        for field in config {
            let outcome = validate(field, path::read(&self.working, &field.path));
            if let Some(message) = outcome.error() {
                if !errors.has_error(&field.path) {
                    errors.insert(field.path.clone(), message);
                }
                failures.push(FieldFailure {
                    path: field.path.clone(),
                    label: field.label.clone(),
                    message: message.to_string(),
                });
            }
        }

        self.errors = errors;

        if failures.is_empty() {
            self.saved = Some(self.working.clone());
            info!("Form submitted: {} fields saved", config.len());
            SubmitOutcome::Committed
        } else {
            info!("Form submit rejected: {} failing fields", failures.len());
            SubmitOutcome::Rejected { failures }
        }
    }

    /// The in-progress data object
    pub fn working(&self) -> &Value {
        &self.working
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The snapshot taken by the last successful submit
    pub fn saved(&self) -> Option<&Value> {
        self.saved.as_ref()
    }

    /// Current value at `path` in the working object
    pub fn value_at(&self, path: &FieldPath) -> Option<&Value> {
        path::read(&self.working, path)
    }

    /// Number of edits applied so far; changes whenever the working object does
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// No field currently shows an error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
