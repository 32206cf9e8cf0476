//! Form Field Components
//!
//! Text inputs, textareas, selects and color pickers. Every field takes an
//! optional `error` message shown under it in the error color.

use dioxus::prelude::*;

use super::button::class_list;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Helper text under the field
    #[props(default)]
    pub helper: Option<String>,
    /// Validation message; replaces the helper text
    #[props(default)]
    pub error: Option<String>,
    /// Leading glyph inside the field
    #[props(default)]
    pub icon: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: t.t("contactInfo.email"),
///         input_type: "email".to_string(),
///         error: issue_for(CardField::Email),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));
    let has_error = props.error.is_some();
    let input_class = class_list("input-field", props.class.as_deref(), &[(has_error, "has-error")]);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if props.required {
                        span { class: "input-required", " *" }
                    }
                }
            }
            div { class: "input-wrapper",
                if let Some(icon) = &props.icon {
                    span { class: "input-icon", "{icon}" }
                }
                input {
                    id: "{id}",
                    class: "{input_class}",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    required: props.required,
                    disabled: props.disabled,
                    oninput: move |e| props.oninput.call(e.value()),
                }
            }
            FieldMessage { error: props.error.clone(), helper: props.helper.clone() }
        }
    }
}

/// Helper or error line under a field.
#[component]
pub fn FieldMessage(error: Option<String>, helper: Option<String>) -> Element {
    match (error, helper) {
        (Some(error), _) => rsx! {
            p { class: "field-message error", role: "alert", "{error}" }
        },
        (None, Some(helper)) => rsx! {
            p { class: "field-message", "{helper}" }
        },
        (None, None) => rsx! {},
    }
}

/// `12 / 200`
pub fn char_counter(value: &str, max: usize) -> String {
    format!("{} / {}", value.chars().count(), max)
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Show a character counter against this limit
    #[props(default)]
    pub max_chars: Option<usize>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("textarea-{}", rand_id()));
    let counter = props.max_chars.map(|max| char_counter(&props.value, max));
    let class = class_list("input-field textarea", None, &[(props.error.is_some(), "has-error")]);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            div { class: "field-footer",
                FieldMessage { error: props.error.clone(), helper: None }
                if let Some(counter) = counter {
                    span { class: "char-counter", "{counter}" }
                }
            }
        }
    }
}

/// Generate a simple random ID for form elements
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// One `<option>`: value and visible label.
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub value: String,
    pub options: Vec<SelectOption>,
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Dropdown select
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }
            select {
                class: "input-field select",
                disabled: props.disabled,
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

/// Color swatch plus hex text field.
#[component]
pub fn ColorField(label: String, value: String, onchange: EventHandler<String>) -> Element {
    rsx! {
        div { class: "form-field color-field",
            label { class: "input-label", "{label}" }
            div { class: "color-row",
                input {
                    class: "color-swatch",
                    r#type: "color",
                    value: "{value}",
                    oninput: move |e| onchange.call(e.value()),
                }
                input {
                    class: "input-field color-hex",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |e| onchange.call(e.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_id_generates_number() {
        let id1 = rand_id();
        let id2 = rand_id();
        assert!(id1 < 1_000_000);
        assert!(id2 < 1_000_000);
    }

    #[test]
    fn char_counter_counts_chars() {
        assert_eq!(char_counter("مرحبا", 200), "5 / 200");
        assert_eq!(char_counter("", 10), "0 / 10");
    }

    #[test]
    fn select_option_new() {
        let opt = SelectOption::new("ar", "العربية");
        assert_eq!(opt.value, "ar");
        assert_eq!(opt.label, "العربية");
    }
}
