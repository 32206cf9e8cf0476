//! Social links list: one row per link with platform select, URL field and
//! remove button.

use bizcard_core::card::FieldIssue;
use bizcard_core::{CardField, SocialLinks, SocialPlatform};
use bizcard_ui::{Button, ButtonVariant, EmptyState, IconButton, Input, Select, SelectOption};
use dioxus::prelude::*;

use crate::components::{CardEdit, SocialEdit};
use crate::context::use_translator;

#[component]
pub fn SocialLinksEditor(
    links: SocialLinks,
    #[props(default)] issues: Vec<FieldIssue>,
    on_edit: EventHandler<CardEdit>,
) -> Element {
    let t = use_translator();
    let platform_options: Vec<SelectOption> = SocialPlatform::all()
        .iter()
        .map(|p| SelectOption::new(p.as_str(), format!("{} {}", p.glyph(), p.label())))
        .collect();
    let has_url_issue = issues.iter().any(|i| i.field == CardField::SocialLinks);
    let invalid_url = t.t("socialLinks.errors.invalidUrl");

    rsx! {
        div { class: "form-section social-links-editor",
            if links.is_empty() {
                EmptyState {
                    icon: "\u{1F517}".to_string(),
                    title: t.t("socialLinks.empty"),
                    p { class: "text-secondary", {t.t("socialLinks.emptyHint")} }
                }
            }
            for link in links.iter().cloned() {
                {
                    let id_platform = link.id.clone();
                    let id_url = link.id.clone();
                    let id_remove = link.id.clone();
                    let url_error = (has_url_issue
                        && !link.url.trim().is_empty()
                        && !bizcard_core::card::validation::is_valid_url(&link.url))
                        .then(|| invalid_url.clone());
                    rsx! {
                        div { key: "{link.id}", class: "social-link-row",
                            span {
                                class: "social-badge",
                                style: "background: {link.platform.color()};",
                                "{link.platform.glyph()}"
                            }
                            Select {
                                value: link.platform.as_str().to_string(),
                                options: platform_options.clone(),
                                onchange: move |v: String| {
                                    if let Ok(platform) = v.parse::<SocialPlatform>() {
                                        on_edit.call(CardEdit::Social(SocialEdit::Platform(id_platform.clone(), platform)));
                                    }
                                },
                            }
                            Input {
                                value: link.url.clone(),
                                input_type: "url".to_string(),
                                placeholder: "https://".to_string(),
                                error: url_error,
                                oninput: move |v: String| {
                                    on_edit.call(CardEdit::Social(SocialEdit::Url(id_url.clone(), v)));
                                },
                            }
                            IconButton {
                                aria_label: t.t("socialLinks.remove"),
                                class: "danger".to_string(),
                                onclick: move |_| {
                                    on_edit.call(CardEdit::Social(SocialEdit::Remove(id_remove.clone())));
                                },
                                "\u{1F5D1}"
                            }
                        }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Outlined,
                icon: "+".to_string(),
                onclick: move |_| on_edit.call(CardEdit::Social(SocialEdit::Add)),
                {t.t("socialLinks.add")}
            }
        }
    }
}
