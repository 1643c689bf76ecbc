// File: src/configuration.rs
// Purpose: Ordered list of field descriptors driving a form

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::path::FieldPath;

/// An ordered form configuration; order is render order and submit order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormConfiguration {
    fields: Vec<FieldDescriptor>,
}

impl FormConfiguration {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// Parse the JSON array form of a configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(json: Value) -> Result<Self> {
        Ok(serde_json::from_value(json)?)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn push(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// First descriptor bound exactly to `path`
    pub fn find(&self, path: &FieldPath) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| &field.path == path)
    }

    /// Descriptor owning `path`: an exact match, or the descriptor whose path
    /// is the closest segment prefix (`price` owns `price.value`).
    pub fn owner_of(&self, path: &FieldPath) -> Option<&FieldDescriptor> {
        self.find(path).or_else(|| {
            self.fields
                .iter()
                .filter(|field| path.starts_with(&field.path))
                .max_by_key(|field| field.path.depth())
        })
    }

    /// Paths bound by more than one descriptor, in first-seen order
    pub fn duplicate_paths(&self) -> Vec<&FieldPath> {
        let mut seen = HashSet::new();
        let mut duplicates: Vec<&FieldPath> = Vec::new();

        for field in &self.fields {
            if !seen.insert(&field.path) && !duplicates.contains(&&field.path) {
                duplicates.push(&field.path);
            }
        }

        duplicates
    }
}

impl From<Vec<FieldDescriptor>> for FormConfiguration {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self::new(fields)
    }
}

impl FromIterator<FieldDescriptor> for FormConfiguration {
    fn from_iter<T: IntoIterator<Item = FieldDescriptor>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FormConfiguration {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for FormConfiguration {
    type Item = FieldDescriptor;
    type IntoIter = std::vec::IntoIter<FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
