//! Theme customizer drawer.
//!
//! Every control dispatches a `CustomizerAction`; the store persists the
//! change immediately.

use bizcard_core::customizer::{MAX_BORDER_RADIUS, MIN_BORDER_RADIUS};
use bizcard_core::{ColorMode, CustomizerAction, Direction, LayoutMode, ThemeName};
use bizcard_ui::{Button, ButtonVariant, CloseButton, PillGroup, PillOption, Slider, Swatch, Switch};
use dioxus::prelude::*;

use crate::context::{dispatch, use_customizer, use_customizer_open, use_translator};

fn theme_label_key(theme: ThemeName) -> &'static str {
    match theme {
        ThemeName::Blue => "customizer.themes.blue",
        ThemeName::Aqua => "customizer.themes.aqua",
        ThemeName::Purple => "customizer.themes.purple",
        ThemeName::Green => "customizer.themes.green",
        ThemeName::Cyan => "customizer.themes.cyan",
        ThemeName::Orange => "customizer.themes.orange",
    }
}

#[component]
pub fn CustomizerPanel() -> Element {
    let mut customizer = use_customizer();
    let mut open = use_customizer_open();
    let t = use_translator();

    if !open() {
        return rsx! {};
    }

    let c = customizer.read().clone();

    let mode_options = vec![
        PillOption::new(ColorMode::Light.as_str(), t.t("customizer.light")).with_icon("\u{2600}"),
        PillOption::new(ColorMode::Dark.as_str(), t.t("customizer.dark")).with_icon("\u{263E}"),
    ];
    let direction_options = vec![
        PillOption::new(Direction::Ltr.as_str(), t.t("customizer.ltr")),
        PillOption::new(Direction::Rtl.as_str(), t.t("customizer.rtl")),
    ];
    let layout_options = vec![
        PillOption::new(LayoutMode::Boxed.as_str(), t.t("customizer.boxed")),
        PillOption::new(LayoutMode::Full.as_str(), t.t("customizer.full")),
    ];
    let nav_options = vec![
        PillOption::new("vertical", t.t("customizer.vertical")),
        PillOption::new("horizontal", t.t("customizer.horizontal")),
    ];

    rsx! {
        div { class: "drawer-backdrop", onclick: move |_| open.set(false) }
        aside { class: "drawer customizer-panel",
            div { class: "drawer-header",
                h3 { {t.t("customizer.title")} }
                CloseButton { onclick: move |_| open.set(false), label: t.t("common.close") }
            }
            div { class: "drawer-body",
                section { class: "customizer-section",
                    h4 { {t.t("customizer.themeColor")} }
                    div { class: "swatch-row",
                        for theme in ThemeName::all().iter().copied() {
                            Swatch {
                                key: "{theme.as_str()}",
                                color: theme.primary().to_string(),
                                selected: theme == c.theme,
                                label: t.t(theme_label_key(theme)),
                                on_click: move |_| dispatch(&mut customizer, CustomizerAction::SetTheme(theme)),
                            }
                        }
                    }
                }
                section { class: "customizer-section",
                    h4 { {t.t("customizer.themeMode")} }
                    PillGroup {
                        options: mode_options,
                        selected: c.mode.as_str().to_string(),
                        on_select: move |v: String| {
                            if let Ok(mode) = v.parse::<ColorMode>() {
                                dispatch(&mut customizer, CustomizerAction::SetMode(mode));
                            }
                        },
                    }
                }
                section { class: "customizer-section",
                    h4 { {t.t("customizer.direction")} }
                    PillGroup {
                        options: direction_options,
                        selected: c.direction.as_str().to_string(),
                        on_select: move |v: String| {
                            if let Ok(dir) = v.parse::<Direction>() {
                                dispatch(&mut customizer, CustomizerAction::SetDirection(dir));
                            }
                        },
                    }
                }
                section { class: "customizer-section",
                    h4 { {t.t("customizer.layoutType")} }
                    PillGroup {
                        options: nav_options,
                        selected: if c.is_horizontal { "horizontal".to_string() } else { "vertical".to_string() },
                        on_select: move |v: String| {
                            dispatch(&mut customizer, CustomizerAction::SetHorizontal(v == "horizontal"));
                        },
                    }
                }
                section { class: "customizer-section",
                    h4 { {t.t("customizer.container")} }
                    PillGroup {
                        options: layout_options,
                        selected: c.layout.as_str().to_string(),
                        on_select: move |v: String| {
                            if let Ok(layout) = v.parse::<LayoutMode>() {
                                dispatch(&mut customizer, CustomizerAction::SetLayout(layout));
                            }
                        },
                    }
                }
                section { class: "customizer-section",
                    Switch {
                        label: t.t("customizer.collapseSidebar"),
                        checked: c.is_collapse,
                        disabled: c.is_horizontal,
                        onchange: move |_| dispatch(&mut customizer, CustomizerAction::ToggleSidebar),
                    }
                    Switch {
                        label: t.t("customizer.cardShadow"),
                        description: t.t("customizer.cardShadowDesc"),
                        checked: c.is_card_shadow,
                        onchange: move |on| dispatch(&mut customizer, CustomizerAction::SetCardShadow(on)),
                    }
                }
                section { class: "customizer-section",
                    Slider {
                        label: t.t("customizer.borderRadius"),
                        value: c.border_radius as f64,
                        min: MIN_BORDER_RADIUS as f64,
                        max: MAX_BORDER_RADIUS as f64,
                        unit: "px".to_string(),
                        onchange: move |v: f64| {
                            dispatch(&mut customizer, CustomizerAction::SetBorderRadius(v.round() as i64));
                        },
                    }
                }
            }
            div { class: "drawer-footer",
                Button {
                    variant: ButtonVariant::Outlined,
                    full_width: true,
                    onclick: move |_| {
                        customizer.write().reset();
                        let root = customizer.read().document_root();
                        crate::context::apply_document_root(root);
                        tracing::info!("Preferences reset to defaults");
                    },
                    {t.t("customizer.reset")}
                }
            }
        }
    }
}
