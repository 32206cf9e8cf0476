//! Card design controls: template, colors, typography, shape and effects.

use bizcard_core::card::{FontFamily, FONT_SIZE_RANGE};
use bizcard_core::{CardDraft, CardField, FieldValue, TemplateId, ThemeName};
use bizcard_ui::{ColorField, Select, SelectOption, Slider, Swatch, Switch};
use dioxus::prelude::*;

use crate::components::CardEdit;
use crate::context::use_translator;

#[component]
pub fn TemplatePicker(selected: TemplateId, on_select: EventHandler<TemplateId>) -> Element {
    let t = use_translator();

    rsx! {
        div { class: "template-grid compact",
            for template in TemplateId::all().iter().copied() {
                button {
                    key: "{template.as_str()}",
                    class: if template == selected { "template-tile selected" } else { "template-tile" },
                    r#type: "button",
                    onclick: move |_| on_select.call(template),
                    div { class: "template-swatch", style: "background: {template.gradient()};" }
                    span { class: "template-name", {t.t(template.name_key())} }
                    if template.is_premium() {
                        span { class: "badge premium", {t.t("templates.premium")} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DesignPanel(draft: CardDraft, on_edit: EventHandler<CardEdit>) -> Element {
    let t = use_translator();
    let d = draft.design.clone();
    let font_options: Vec<SelectOption> = FontFamily::all()
        .iter()
        .map(|f| SelectOption::new(f.as_str(), f.label()))
        .collect();

    let set = move |field: CardField, value: FieldValue| on_edit.call(CardEdit::Field(field, value));

    rsx! {
        div { class: "form-section design-panel",
            section {
                h4 { {t.t("design.template")} }
                TemplatePicker {
                    selected: d.template,
                    on_select: move |template: TemplateId| {
                        set(CardField::Template, template.as_str().into());
                    },
                }
            }
            section {
                h4 { {t.t("design.colors")} }
                div { class: "swatch-row",
                    for theme in ThemeName::all().iter().copied() {
                        Swatch {
                            key: "{theme.as_str()}",
                            color: theme.primary().to_string(),
                            selected: theme.primary().eq_ignore_ascii_case(&d.primary_color),
                            label: theme.as_str().to_string(),
                            on_click: move |_| set(CardField::PrimaryColor, theme.primary().into()),
                        }
                    }
                }
                div { class: "form-grid three",
                    ColorField {
                        label: t.t("design.primaryColor"),
                        value: d.primary_color.clone(),
                        onchange: move |v: String| set(CardField::PrimaryColor, v.into()),
                    }
                    ColorField {
                        label: t.t("design.backgroundColor"),
                        value: d.background_color.clone(),
                        onchange: move |v: String| set(CardField::BackgroundColor, v.into()),
                    }
                    ColorField {
                        label: t.t("design.textColor"),
                        value: d.text_color.clone(),
                        onchange: move |v: String| set(CardField::TextColor, v.into()),
                    }
                }
            }
            section {
                h4 { {t.t("design.typography")} }
                Select {
                    label: t.t("design.fontFamily"),
                    value: d.font_family.as_str().to_string(),
                    options: font_options,
                    onchange: move |v: String| set(CardField::FontFamily, v.into()),
                }
                Slider {
                    label: t.t("design.fontSize"),
                    value: d.font_size as f64,
                    min: FONT_SIZE_RANGE.0 as f64,
                    max: FONT_SIZE_RANGE.1 as f64,
                    unit: "px".to_string(),
                    onchange: move |v: f64| set(CardField::FontSize, v.into()),
                }
            }
            section {
                h4 { {t.t("design.layout")} }
                Slider {
                    label: t.t("design.borderRadius"),
                    value: d.border_radius as f64,
                    min: 0.0,
                    max: 32.0,
                    step: 2.0,
                    unit: "px".to_string(),
                    onchange: move |v: f64| set(CardField::BorderRadius, v.into()),
                }
                Slider {
                    label: t.t("design.opacity"),
                    value: d.opacity as f64,
                    min: 0.5,
                    max: 1.0,
                    step: 0.1,
                    onchange: move |v: f64| set(CardField::Opacity, v.into()),
                }
            }
            section {
                h4 { {t.t("design.effects")} }
                Switch {
                    label: t.t("design.showShadow"),
                    checked: d.show_shadow,
                    onchange: move |on: bool| set(CardField::ShowShadow, on.into()),
                }
                Switch {
                    label: t.t("design.showBorder"),
                    checked: d.show_border,
                    onchange: move |on: bool| set(CardField::ShowBorder, on.into()),
                }
                Switch {
                    label: t.t("design.showPattern"),
                    checked: d.show_pattern,
                    onchange: move |on: bool| set(CardField::ShowPattern, on.into()),
                }
            }
        }
    }
}
