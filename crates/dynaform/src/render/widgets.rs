// File: src/render/widgets.rs
// Purpose: Built-in Maud widgets for the four field kinds

use dynaform_types::{FieldDescriptor, FieldPath};
use maud::{html, Markup};
use serde_json::Value;

use super::{display_value, parse_number, FieldEdit, FieldWidget, FORM_ID};
use crate::config::Settings;

/// Key of the currency code inside a currency pair
pub const CURRENCY_KEY: &str = "currency";
/// Key of the amount inside a currency pair
pub const AMOUNT_KEY: &str = "value";

/// Single-line text input
pub struct TextInput;

/// Number input with optional min/max hints
pub struct IntegerInput;

/// Select over the field's allowed values
pub struct EnumInput;

/// Currency select next to an amount input, editing the pair's two members
pub struct CurrencyInput;

impl FieldWidget for TextInput {
    fn render(
        &self,
        field: &FieldDescriptor,
        value: Option<&Value>,
        error: &str,
        settings: &Settings,
    ) -> Markup {
        let name = field.path.as_str();
        let placeholder = field
            .placeholder()
            .unwrap_or(&settings.widgets.placeholder);

        html! {
            div.field.text-input.has-error[!error.is_empty()] {
                (label(&field.label, name, field.required))
                input type="text" id=(name) name=(name)
                    value=(display_value(value))
                    placeholder=(placeholder)
                    required[field.required]
                    hx-post=(settings.form.edit_action) hx-trigger="change"
                    hx-params=(name)
                    hx-target=(edit_target()) hx-swap="outerHTML";
                (helper_text(error))
            }
        }
    }

    fn interpret(
        &self,
        field: &FieldDescriptor,
        input: &FieldPath,
        raw: &str,
    ) -> Option<FieldEdit> {
        own_path(field, input, Value::String(raw.to_string()))
    }
}

impl FieldWidget for IntegerInput {
    fn render(
        &self,
        field: &FieldDescriptor,
        value: Option<&Value>,
        error: &str,
        settings: &Settings,
    ) -> Markup {
        let name = field.path.as_str();
        let (min, max) = field.bounds();
        let placeholder = field
            .placeholder()
            .unwrap_or(&settings.widgets.placeholder);

        html! {
            div.field.integer-input.has-error[!error.is_empty()] {
                (label(&field.label, name, field.required))
                input type="number" step="1" id=(name) name=(name)
                    min=[min] max=[max]
                    value=(display_value(value))
                    placeholder=(placeholder)
                    required[field.required]
                    hx-post=(settings.form.edit_action) hx-trigger="change"
                    hx-params=(name)
                    hx-target=(edit_target()) hx-swap="outerHTML";
                (helper_text(error))
            }
        }
    }

    fn interpret(
        &self,
        field: &FieldDescriptor,
        input: &FieldPath,
        raw: &str,
    ) -> Option<FieldEdit> {
        own_path(field, input, parse_number(raw))
    }
}

impl FieldWidget for EnumInput {
    fn render(
        &self,
        field: &FieldDescriptor,
        value: Option<&Value>,
        error: &str,
        settings: &Settings,
    ) -> Markup {
        let name = field.path.as_str();
        let current = display_value(value);

        html! {
            div.field.enum-input.has-error[!error.is_empty()] {
                (label(&field.label, name, field.required))
                select id=(name) name=(name)
                    required[field.required]
                    hx-post=(settings.form.edit_action) hx-trigger="change"
                    hx-params=(name)
                    hx-target=(edit_target()) hx-swap="outerHTML" {
                    option value="" selected[current.is_empty()] {
                        (field.placeholder().unwrap_or(""))
                    }
                    @for option in field.options() {
                        option value=(option) selected[*option == current] { (option) }
                    }
                }
                (helper_text(error))
            }
        }
    }

    fn interpret(
        &self,
        field: &FieldDescriptor,
        input: &FieldPath,
        raw: &str,
    ) -> Option<FieldEdit> {
        own_path(field, input, Value::String(raw.to_string()))
    }
}

impl FieldWidget for CurrencyInput {
    fn render(
        &self,
        field: &FieldDescriptor,
        value: Option<&Value>,
        error: &str,
        settings: &Settings,
    ) -> Markup {
        let widgets = &settings.widgets;
        let currency_name = format!("{}.{}", field.path, CURRENCY_KEY);
        let amount_name = format!("{}.{}", field.path, AMOUNT_KEY);

        let pair = value.and_then(Value::as_object);
        let currency = display_value(pair.and_then(|p| p.get(CURRENCY_KEY)));
        let amount = match pair.and_then(|p| p.get(AMOUNT_KEY)) {
            Some(amount) => display_value(Some(amount)),
            None => "0".to_string(),
        };
        let (min, max) = field.bounds();

        html! {
            fieldset.field.currency-input.has-error[!error.is_empty()] {
                legend {
                    (field.label)
                    @if field.required { span.required-marker { " *" } }
                }
                div.currency-pair {
                    (label(&widgets.currency_label, &currency_name, field.required))
                    select id=(currency_name) name=(currency_name)
                        required[field.required]
                        hx-post=(settings.form.edit_action) hx-trigger="change"
                        hx-params=(currency_name)
                        hx-target=(edit_target()) hx-swap="outerHTML" {
                        option value="" selected[currency.is_empty()] {
                            (widgets.currency_placeholder)
                        }
                        @for code in field.options() {
                            option value=(code) selected[*code == currency] { (code) }
                        }
                    }
                    (label(&widgets.amount_label, &amount_name, field.required))
                    input type="number" id=(amount_name) name=(amount_name)
                        min=[min] max=[max]
                        value=(amount)
                        placeholder=(field.placeholder().unwrap_or(&widgets.amount_placeholder))
                        required[field.required]
                        hx-post=(settings.form.edit_action) hx-trigger="change"
                        hx-params=(amount_name)
                        hx-target=(edit_target()) hx-swap="outerHTML";
                }
                (helper_text(error))
            }
        }
    }

    fn interpret(
        &self,
        field: &FieldDescriptor,
        input: &FieldPath,
        raw: &str,
    ) -> Option<FieldEdit> {
        if input.depth() != field.path.depth() + 1 || !input.starts_with(&field.path) {
            return None;
        }

        let value = match input.leaf() {
            CURRENCY_KEY => Value::String(raw.to_string()),
            AMOUNT_KEY => parse_number(raw),
            _ => return None,
        };

        Some(FieldEdit {
            path: input.clone(),
            value,
        })
    }
}

/// Edits addressed at exactly the field's path
fn own_path(field: &FieldDescriptor, input: &FieldPath, value: Value) -> Option<FieldEdit> {
    (*input == field.path).then(|| FieldEdit {
        path: input.clone(),
        value,
    })
}

fn label(text: &str, target: &str, required: bool) -> Markup {
    html! {
        label for=(target) {
            (text)
            @if required { span.required-marker { " *" } }
        }
    }
}

fn helper_text(error: &str) -> Markup {
    html! {
        @if !error.is_empty() {
            p.helper-text.error role="alert" { (error) }
        }
    }
}

fn edit_target() -> String {
    format!("#{}", FORM_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(raw: &str) -> FieldPath {
        raw.parse().unwrap()
    }

    #[test]
    fn test_text_renders_value_and_error() {
        let field = FieldDescriptor::text("Name", path("person.name")).with_required(true);
        let html = TextInput
            .render(&field, Some(&json!("Ada")), "This field is required", &Settings::default())
            .into_string();

        assert!(html.contains(r#"name="person.name""#));
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains("required"));
        assert!(html.contains("has-error"));
        assert!(html.contains("This field is required"));
        assert!(html.contains(r#"placeholder="Enter value""#));
        assert!(html.contains(r#"hx-params="person.name""#));
    }

    #[test]
    fn test_integer_renders_bounds() {
        let field = FieldDescriptor::integer("Age", path("age"))
            .with_min(0.0)
            .with_max(120.0);
        let html = IntegerInput
            .render(&field, Some(&json!(45)), "", &Settings::default())
            .into_string();

        assert!(html.contains(r#"type="number""#));
        assert!(html.contains(r#"min="0""#));
        assert!(html.contains(r#"max="120""#));
        assert!(html.contains(r#"value="45""#));
        assert!(!html.contains("has-error"));
    }

    #[test]
    fn test_enum_marks_selected_option() {
        let field = FieldDescriptor::enumeration("Color", path("color"), ["red", "blue"]);
        let html = EnumInput
            .render(&field, Some(&json!("blue")), "", &Settings::default())
            .into_string();

        assert!(html.contains(r#"<option value="blue" selected>blue</option>"#));
        assert!(html.contains(r#"<option value="red">red</option>"#));
    }

    #[test]
    fn test_currency_names_sub_paths() {
        let field = FieldDescriptor::currency("Price", path("price"), ["EUR", "USD"]);
        let html = CurrencyInput
            .render(
                &field,
                Some(&json!({ "currency": "USD", "value": 12 })),
                "",
                &Settings::default(),
            )
            .into_string();

        assert!(html.contains(r#"name="price.currency""#));
        assert!(html.contains(r#"name="price.value""#));
        assert!(html.contains(r#"<option value="USD" selected>USD</option>"#));
        assert!(html.contains(r#"value="12""#));
        assert!(html.contains(r#"hx-params="price.currency""#));
        assert!(html.contains(r#"hx-params="price.value""#));
    }

    #[test]
    fn test_interpret_shapes_values() {
        let age = FieldDescriptor::integer("Age", path("age"));
        assert_eq!(
            IntegerInput.interpret(&age, &path("age"), "45"),
            Some(FieldEdit { path: path("age"), value: json!(45) })
        );
        assert_eq!(IntegerInput.interpret(&age, &path("age.value"), "45"), None);

        let price = FieldDescriptor::currency("Price", path("price"), ["EUR"]);
        assert_eq!(
            CurrencyInput.interpret(&price, &path("price.value"), "9.5"),
            Some(FieldEdit { path: path("price.value"), value: json!(9.5) })
        );
        assert_eq!(
            CurrencyInput.interpret(&price, &path("price.currency"), "EUR"),
            Some(FieldEdit { path: path("price.currency"), value: json!("EUR") })
        );
        assert_eq!(CurrencyInput.interpret(&price, &path("price"), "EUR"), None);
        assert_eq!(CurrencyInput.interpret(&price, &path("price.rate"), "1"), None);
    }
}
