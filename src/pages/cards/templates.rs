//! Template gallery with category filter. Picking a template opens the
//! wizard with it preselected.

use bizcard_core::card::TemplateCategory;
use bizcard_core::dashboard::format_count;
use bizcard_core::TemplateId;
use bizcard_ui::{Button, PillGroup, PillOption};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::PageHeader;
use crate::context::use_translator;

fn category_value(category: Option<TemplateCategory>) -> &'static str {
    match category {
        None => "all",
        Some(TemplateCategory::Business) => "business",
        Some(TemplateCategory::Creative) => "creative",
        Some(TemplateCategory::Minimal) => "minimal",
    }
}

fn parse_category(value: &str) -> Option<TemplateCategory> {
    TemplateCategory::all()
        .iter()
        .copied()
        .find(|c| category_value(Some(*c)) == value)
}

#[component]
pub fn Templates() -> Element {
    let t = use_translator();
    let navigator = use_navigator();
    let mut category = use_signal(|| Option::<TemplateCategory>::None);

    let mut options = vec![PillOption::new("all", t.t("templates.all"))];
    options.extend(
        TemplateCategory::all()
            .iter()
            .map(|c| PillOption::new(category_value(Some(*c)), t.t(c.label_key()))),
    );
    let shown = TemplateId::filtered(category());

    rsx! {
        PageHeader { title: t.t("templates.title"), subtitle: t.t("templates.subtitle") }
        div { class: "card toolbar",
            PillGroup {
                options,
                selected: category_value(category()).to_string(),
                on_select: move |v: String| category.set(parse_category(&v)),
            }
        }
        div { class: "template-grid",
            for template in shown {
                div { key: "{template.as_str()}", class: "card template-card",
                    div { class: "template-swatch large", style: "background: {template.gradient()};",
                        if template.is_premium() {
                            span { class: "badge premium", {t.t("templates.premium")} }
                        }
                    }
                    div { class: "template-info",
                        h3 { {t.t(template.name_key())} }
                        p { class: "text-secondary",
                            {t.t_with("templates.uses", &[("count", format_count(template.uses() as u64).as_str())])}
                        }
                        Button {
                            full_width: true,
                            onclick: move |_| {
                                navigator.push(Route::CreateCard { template: template.as_str().to_string() });
                            },
                            {t.t("templates.useTemplate")}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        assert_eq!(parse_category("all"), None);
        for c in TemplateCategory::all() {
            assert_eq!(parse_category(category_value(Some(*c))), Some(*c));
        }
    }
}
