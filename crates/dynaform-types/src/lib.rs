//! Dynaform Types
//!
//! The vocabulary shared by every dynaform crate: field descriptors, the
//! validated dot-path used to bind a field into a data object, and the
//! ordered form configuration that drives rendering and validation.

pub mod configuration;
pub mod error;
pub mod field;
pub mod path;

pub use configuration::FormConfiguration;
pub use error::{DynaformError, Result};
pub use field::{CurrencyAmount, FieldDescriptor, FieldKind, FieldType, DEFAULT_CURRENCY};
pub use path::FieldPath;
