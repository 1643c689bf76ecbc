// File: src/path.rs
// Purpose: Validated dot-delimited paths into a nested data object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DynaformError, Result};

/// A dot-delimited path such as `address.city`.
///
/// Parsing guarantees the path is non-empty and has no empty segments, so
/// every `FieldPath` can be walked without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
}

impl FieldPath {
    /// Parse a path, rejecting the empty string and empty segments
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(DynaformError::InvalidPath {
                path: raw,
                reason: "path is empty",
            });
        }

        if raw.split('.').any(str::is_empty) {
            return Err(DynaformError::InvalidPath {
                path: raw,
                reason: "empty segment",
            });
        }

        Ok(Self { raw })
    }

    /// The path as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Segments in walk order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }

    /// Number of segments (always at least one)
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Last segment, the key written into the innermost mapping
    pub fn leaf(&self) -> &str {
        self.raw.rsplit('.').next().unwrap_or(&self.raw)
    }

    /// Append one segment: `price` + `value` -> `price.value`
    pub fn child(&self, segment: &str) -> Result<Self> {
        if segment.is_empty() || segment.contains('.') {
            return Err(DynaformError::InvalidPath {
                path: format!("{}.{}", self.raw, segment),
                reason: "child segment must be a single non-empty key",
            });
        }
        Ok(Self {
            raw: format!("{}.{}", self.raw, segment),
        })
    }

    /// Segment-wise prefix test; `price` is a prefix of `price.value` but not of `prices`
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        let mut own = self.segments();
        prefix.segments().all(|segment| own.next() == Some(segment))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FieldPath {
    type Err = DynaformError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = DynaformError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(raw)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = DynaformError;

    fn try_from(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.raw
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
