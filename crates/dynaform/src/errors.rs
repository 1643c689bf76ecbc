// File: src/errors.rs
// Purpose: Path-keyed validation messages shown next to each field

use dynaform_types::FieldPath;
use dynaform_validation::ValidationOutcome;
use serde::Serialize;
use std::collections::HashMap;

/// Field paths to their current error message.
///
/// A path with no entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: HashMap<FieldPath, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one validation outcome: failures set the message, successes clear it
    pub fn record(&mut self, path: &FieldPath, outcome: &ValidationOutcome) {
        match outcome.error() {
            Some(message) => {
                self.errors.insert(path.clone(), message.to_string());
            }
            None => {
                self.errors.remove(path);
            }
        }
    }

    pub fn insert(&mut self, path: FieldPath, message: impl Into<String>) {
        self.errors.insert(path, message.into());
    }

    pub fn remove(&mut self, path: &FieldPath) -> Option<String> {
        self.errors.remove(path)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Check if field has an error
    pub fn has_error(&self, path: &FieldPath) -> bool {
        self.errors.contains_key(path)
    }

    /// Get error message for a field
    pub fn get(&self, path: &FieldPath) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    /// Error message for display; the empty string when there is none
    pub fn message_for(&self, path: &FieldPath) -> &str {
        self.get(path).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &str)> {
        self.errors.iter().map(|(path, message)| (path, message.as_str()))
    }
}
