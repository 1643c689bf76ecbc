// File: src/render/mod.rs
// Purpose: Dispatch each field kind to the widget that renders and interprets it

pub mod widgets;

use dynaform_types::{FieldDescriptor, FieldPath, FieldType, FormConfiguration};
use maud::{html, Markup, DOCTYPE};
use serde_json::Value;
use tracing::warn;

use crate::config::Settings;
use crate::form::FormState;

pub use widgets::{CurrencyInput, EnumInput, IntegerInput, TextInput};

/// Element id of the form container swapped by edit responses
pub const FORM_ID: &str = "dynaform";

/// A kind-shaped value produced from raw user input, addressed at the field
/// path or one of its sub-paths.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub path: FieldPath,
    pub value: Value,
}

/// Presentation of one field kind.
///
/// `render` draws the field with its current value and error; inputs are
/// named by the path they edit. `interpret` turns the raw string posted for
/// one of those inputs back into a value of the right shape.
pub trait FieldWidget: Send + Sync {
    fn render(
        &self,
        field: &FieldDescriptor,
        value: Option<&Value>,
        error: &str,
        settings: &Settings,
    ) -> Markup;

    fn interpret(
        &self,
        field: &FieldDescriptor,
        input: &FieldPath,
        raw: &str,
    ) -> Option<FieldEdit>;
}

/// Renders forms from a configuration and routes posted inputs back into
/// edits on a [`FormState`].
pub struct FormRenderer {
    settings: Settings,
    text: Box<dyn FieldWidget>,
    integer: Box<dyn FieldWidget>,
    enumeration: Box<dyn FieldWidget>,
    currency: Box<dyn FieldWidget>,
}

impl FormRenderer {
    /// Renderer with the built-in widgets
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            text: Box::new(TextInput),
            integer: Box::new(IntegerInput),
            enumeration: Box::new(EnumInput),
            currency: Box::new(CurrencyInput),
        }
    }

    /// Swap in a custom widget for one field kind
    pub fn with_widget(mut self, kind: FieldType, widget: Box<dyn FieldWidget>) -> Self {
        match kind {
            FieldType::Text => self.text = widget,
            FieldType::Integer => self.integer = widget,
            FieldType::Enum => self.enumeration = widget,
            FieldType::Currency => self.currency = widget,
        }
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn widget(&self, kind: FieldType) -> &dyn FieldWidget {
        match kind {
            FieldType::Text => self.text.as_ref(),
            FieldType::Integer => self.integer.as_ref(),
            FieldType::Enum => self.enumeration.as_ref(),
            FieldType::Currency => self.currency.as_ref(),
        }
    }

    /// One field with its current value and error
    pub fn render_field(&self, field: &FieldDescriptor, state: &FormState) -> Markup {
        let value = state.value_at(&field.path);
        let error = state.errors().message_for(&field.path);
        self.widget(field.field_type())
            .render(field, value, error, &self.settings)
    }

    /// The form fragment: every field in configuration order plus the submit button
    pub fn render_form(&self, state: &FormState, config: &FormConfiguration) -> Markup {
        let form = &self.settings.form;
        html! {
            form id=(FORM_ID) class="dynaform" method="post" action=(form.submit_action) {
                @for field in config {
                    div.form-row { (self.render_field(field, state)) }
                }
                button.submit-button type="submit" { (form.submit_label) }
            }
        }
    }

    /// The saved snapshot as pretty JSON, `null` before the first submit
    pub fn render_result(&self, state: &FormState) -> Markup {
        let saved = match state.saved() {
            Some(snapshot) => serde_json::to_string_pretty(snapshot).unwrap_or_default(),
            None => "null".to_string(),
        };
        html! {
            section.result-panel {
                h2 { (self.settings.form.result_title) }
                pre { (saved) }
            }
        }
    }

    /// A full HTML document: the form next to the result panel
    pub fn render_page(&self, state: &FormState, config: &FormConfiguration) -> Markup {
        let form = &self.settings.form;
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (form.title) }
                    @if !form.htmx_src.is_empty() {
                        script src=(form.htmx_src) {}
                    }
                }
                body {
                    main.form-container {
                        section.form-panel {
                            h1 { (form.title) }
                            (self.render_form(state, config))
                        }
                        (self.render_result(state))
                    }
                }
            }
        }
    }

    /// Interpret one posted input against the field that owns its path
    pub fn interpret(
        &self,
        config: &FormConfiguration,
        name: &str,
        raw: &str,
    ) -> Option<(FieldDescriptor, FieldEdit)> {
        let input: FieldPath = match name.parse() {
            Ok(path) => path,
            Err(err) => {
                warn!("Ignoring input '{}': {}", name, err);
                return None;
            }
        };

        let Some(field) = config.owner_of(&input) else {
            warn!("Ignoring input '{}': no field is bound to it", name);
            return None;
        };

        let edit = self.widget(field.field_type()).interpret(field, &input, raw)?;
        Some((field.clone(), edit))
    }

    /// Apply posted `(name, raw)` pairs as one edit each, in order.
    ///
    /// Returns the number of edits applied; inputs no field owns are skipped.
    pub fn apply_inputs<'a, I>(
        &self,
        state: &mut FormState,
        config: &FormConfiguration,
        inputs: I,
    ) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut applied = 0;
        for (name, raw) in inputs {
            if let Some((field, edit)) = self.interpret(config, name, raw) {
                state.edit(&edit.path, &field, edit.value);
                applied += 1;
            }
        }
        applied
    }
}

impl Default for FormRenderer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Text shown inside an input for a stored value
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Number from typed text, falling back to the text itself
pub fn parse_number(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::from(n),
        _ => Value::String(raw.to_string()),
    }
}
