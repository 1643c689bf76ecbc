// File: src/field.rs
// Purpose: Field descriptor model (text, integer, enum and currency kinds)

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::path::FieldPath;

/// Currency preselected by the empty-object builder
pub const DEFAULT_CURRENCY: &str = "EUR";

/// The composite value stored at a currency field's path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub currency: String,
    pub value: f64,
}

impl CurrencyAmount {
    pub fn new(currency: impl Into<String>, value: f64) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }

    /// JSON form; whole amounts are written as integers
    pub fn to_value(&self) -> Value {
        json!({ "currency": self.currency, "value": number(self.value) })
    }
}

/// One entry of a form configuration.
///
/// Deserializes from the flat JSON shape
/// `{"type": "integerInput", "label": "Age", "path": "age", "min": 0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub label: String,
    pub path: FieldPath,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Kind-specific attributes, tagged by the `type` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldKind {
    #[serde(rename = "textInput", rename_all = "camelCase")]
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },

    #[serde(rename = "integerInput", rename_all = "camelCase")]
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },

    #[serde(rename = "enumInput", rename_all = "camelCase")]
    Enum {
        #[serde(default)]
        values: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },

    #[serde(rename = "currencyInput", rename_all = "camelCase")]
    Currency {
        #[serde(default)]
        currencies: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<CurrencyAmount>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

/// Bare kind tag, used for dispatch and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Integer,
    Enum,
    Currency,
}

impl FieldType {
    /// Tag as it appears in configuration JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "textInput",
            FieldType::Integer => "integerInput",
            FieldType::Enum => "enumInput",
            FieldType::Currency => "currencyInput",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldKind {
    pub fn text() -> Self {
        FieldKind::Text {
            default_value: None,
            placeholder: None,
        }
    }

    pub fn integer() -> Self {
        FieldKind::Integer {
            min: None,
            max: None,
            default_value: None,
            placeholder: None,
        }
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldKind::Enum {
            values: values.into_iter().map(Into::into).collect(),
            default_value: None,
            placeholder: None,
        }
    }

    pub fn currency<I, S>(currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldKind::Currency {
            currencies: currencies.into_iter().map(Into::into).collect(),
            min: None,
            max: None,
            default_value: None,
            placeholder: None,
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text { .. } => FieldType::Text,
            FieldKind::Integer { .. } => FieldType::Integer,
            FieldKind::Enum { .. } => FieldType::Enum,
            FieldKind::Currency { .. } => FieldType::Currency,
        }
    }
}

impl FieldDescriptor {
    pub fn new(label: impl Into<String>, path: FieldPath, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            path,
            required: false,
            kind,
        }
    }

    pub fn text(label: impl Into<String>, path: FieldPath) -> Self {
        Self::new(label, path, FieldKind::text())
    }

    pub fn integer(label: impl Into<String>, path: FieldPath) -> Self {
        Self::new(label, path, FieldKind::integer())
    }

    pub fn enumeration<I, S>(label: impl Into<String>, path: FieldPath, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(label, path, FieldKind::enumeration(values))
    }

    pub fn currency<I, S>(label: impl Into<String>, path: FieldPath, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(label, path, FieldKind::currency(currencies))
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the lower bound; ignored by kinds without numeric bounds
    pub fn with_min(mut self, bound: f64) -> Self {
        if let FieldKind::Integer { min, .. } | FieldKind::Currency { min, .. } = &mut self.kind {
            *min = Some(bound);
        }
        self
    }

    /// Set the upper bound; ignored by kinds without numeric bounds
    pub fn with_max(mut self, bound: f64) -> Self {
        if let FieldKind::Integer { max, .. } | FieldKind::Currency { max, .. } = &mut self.kind {
            *max = Some(bound);
        }
        self
    }

    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        match &mut self.kind {
            FieldKind::Text { placeholder, .. }
            | FieldKind::Integer { placeholder, .. }
            | FieldKind::Enum { placeholder, .. }
            | FieldKind::Currency { placeholder, .. } => *placeholder = Some(text.into()),
        }
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Integer and currency fields carry numeric bounds
    pub fn is_numeric(&self) -> bool {
        matches!(self.field_type(), FieldType::Integer | FieldType::Currency)
    }

    /// `(min, max)`; both `None` for non-numeric kinds
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match &self.kind {
            FieldKind::Integer { min, max, .. } | FieldKind::Currency { min, max, .. } => {
                (*min, *max)
            }
            _ => (None, None),
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Text { placeholder, .. }
            | FieldKind::Integer { placeholder, .. }
            | FieldKind::Enum { placeholder, .. }
            | FieldKind::Currency { placeholder, .. } => placeholder.as_deref(),
        }
    }

    /// Allowed options for enum and currency selectors
    pub fn options(&self) -> &[String] {
        match &self.kind {
            FieldKind::Enum { values, .. } => values,
            FieldKind::Currency { currencies, .. } => currencies,
            _ => &[],
        }
    }

    /// The declared default, shaped for the data object
    pub fn default_value(&self) -> Option<Value> {
        match &self.kind {
            FieldKind::Text { default_value, .. } | FieldKind::Enum { default_value, .. } => {
                default_value.as_ref().map(|s| Value::String(s.clone()))
            }
            FieldKind::Integer { default_value, .. } => default_value.map(Value::from),
            FieldKind::Currency { default_value, .. } => {
                default_value.as_ref().map(CurrencyAmount::to_value)
            }
        }
    }

    /// The value an untouched field starts from: an `EUR 0` pair for
    /// currency fields, the empty string for every other kind.
    pub fn empty_value(&self) -> Value {
        match self.field_type() {
            FieldType::Currency => json!({ "currency": DEFAULT_CURRENCY, "value": 0 }),
            _ => Value::String(String::new()),
        }
    }
}

fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}
