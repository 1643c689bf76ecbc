// Dynaform - configuration-driven forms
// Deep-path data binding, per-field validation and Maud rendering from an ordered field list

pub mod builder;
pub mod config;
pub mod errors;
pub mod form;
pub mod path;
pub mod render;

// Re-export the model and validator so callers only need this crate
pub use dynaform_types::{
    CurrencyAmount, DynaformError, FieldDescriptor, FieldKind, FieldPath, FieldType,
    FormConfiguration, Result, DEFAULT_CURRENCY,
};
pub use dynaform_validation::{validate, ValidationOutcome, REQUIRED_MESSAGE};

pub use builder::{build_default_object, build_empty_object};
pub use config::Settings;
pub use errors::ErrorMap;
pub use form::{FieldFailure, FormState, SubmitOutcome};
pub use render::{FieldEdit, FieldWidget, FormRenderer};

// Re-export Maud for custom widgets
pub use maud::{html, Markup};
