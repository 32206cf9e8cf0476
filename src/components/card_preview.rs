//! Card Preview Component
//!
//! Live rendering of a draft. Everything visual comes from
//! [`PreviewModel`], so the wizard, the edit page and the public page all
//! show the same card.

use bizcard_core::card::PreviewModel;
use bizcard_core::CardDraft;
use dioxus::prelude::*;

use crate::context::use_translator;

#[component]
pub fn CardPreview(
    draft: CardDraft,
    #[props(default = 1.0)] scale: f32,
    /// Render contact rows as links.
    #[props(default = true)]
    interactive: bool,
) -> Element {
    let t = use_translator();
    let model = PreviewModel::from_draft(&draft, scale);
    let placeholder = t.t("preview.yourName");
    let name = model.display_name(&placeholder).to_string();

    let header_class = if model.show_pattern { "card-header patterned" } else { "card-header" };

    rsx! {
        div { class: "card-preview", style: "{model.container_style}",
            div { class: "{header_class}", style: "background: {model.header_gradient};" }
            div { class: "card-body", style: "font-size: {model.body_font_size};",
                div { class: "card-avatar",
                    if let Some(src) = model.avatar.clone() {
                        img { src: "{src}", alt: "{name}" }
                    } else {
                        span { class: "avatar-initials", "{model.initials}" }
                    }
                }
                h2 { class: "card-name", style: "font-size: {model.name_font_size};", "{name}" }
                if !model.job_title.is_empty() {
                    p { class: "card-title", "{model.job_title}" }
                }
                if !model.company.is_empty() {
                    p { class: "card-company", "{model.company}" }
                }
                if !model.bio.is_empty() {
                    p { class: "card-bio", "{model.bio}" }
                }
                if !model.contacts.is_empty() {
                    ul { class: "card-contacts",
                        for row in model.contacts.iter() {
                            li { key: "{row.value}",
                                span { class: "contact-icon", "{row.kind.icon()}" }
                                {
                                    match (&row.href, interactive) {
                                        (Some(href), true) => rsx! {
                                            a { href: "{href}", "{row.value}" }
                                        },
                                        _ => rsx! {
                                            span { "{row.value}" }
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
                if !model.socials.is_empty() {
                    div { class: "card-socials",
                        for social in model.socials.iter() {
                            a {
                                key: "{social.url}",
                                class: "social-badge",
                                href: "{social.url}",
                                title: "{social.platform.label()}",
                                style: "background: {social.color};",
                                "{social.glyph}"
                            }
                        }
                    }
                }
            }
        }
    }
}
