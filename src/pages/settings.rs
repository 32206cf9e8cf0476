//! Settings page: appearance preferences, notification toggles and the
//! loaded configuration.
//!
//! Appearance controls dispatch to the preference store, which persists
//! each change as it happens. Notification toggles live only in this view.

use bizcard_core::customizer::{MAX_BORDER_RADIUS, MIN_BORDER_RADIUS};
use bizcard_core::{ColorMode, CustomizerAction, Direction, Language, LayoutMode, ThemeName};
use bizcard_ui::{Button, ButtonVariant, Notice, PillGroup, PillOption, Select, SelectOption, Slider, Swatch, Switch};
use dioxus::prelude::*;

use crate::components::PageHeader;
use crate::context::{apply_document_root, dispatch, get_data_dir, use_config, use_customizer, use_notice, use_translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NotificationPrefs {
    email: bool,
    push: bool,
    sms: bool,
    whatsapp: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            whatsapp: true,
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let t = use_translator();
    let config = use_config();
    let mut customizer = use_customizer();
    let mut notice = use_notice();
    let mut notifications = use_signal(NotificationPrefs::default);

    let c = customizer.read().clone();
    let n = notifications();

    let mode_options = vec![
        PillOption::new(ColorMode::Light.as_str(), t.t("settings.appearance.light")).with_icon("\u{2600}"),
        PillOption::new(ColorMode::Dark.as_str(), t.t("settings.appearance.dark")).with_icon("\u{263E}"),
    ];
    let layout_options = vec![
        PillOption::new(LayoutMode::Boxed.as_str(), t.t("settings.appearance.boxed")),
        PillOption::new(LayoutMode::Full.as_str(), t.t("settings.appearance.full")),
    ];
    let direction_options = vec![
        PillOption::new(Direction::Ltr.as_str(), t.t("customizer.ltr")),
        PillOption::new(Direction::Rtl.as_str(), t.t("customizer.rtl")),
    ];
    let language_options: Vec<SelectOption> = Language::all()
        .iter()
        .map(|l| SelectOption::new(l.code(), l.native_name()))
        .collect();
    let data_dir = get_data_dir().display().to_string();

    rsx! {
        div { class: "page settings-page",
            PageHeader { title: t.t("settings.title"), subtitle: t.t("settings.description"),
                Button {
                    variant: ButtonVariant::Outlined,
                    onclick: move |_| {
                        customizer.write().reset();
                        let root = customizer.read().document_root();
                        apply_document_root(root);
                        notifications.set(NotificationPrefs::default());
                        tracing::info!("Settings reset to defaults");
                    },
                    {t.t("settings.resetToDefault")}
                }
                Button {
                    onclick: move |_| notice.set(Some(Notice::success(t.t("settings.saved")))),
                    {t.t("settings.saveSettings")}
                }
            }

            div { class: "settings-grid",
                div { class: "card",
                    h4 { {t.t("settings.appearance.title")} }
                    section {
                        h5 { {t.t("settings.appearance.theme")} }
                        PillGroup {
                            options: mode_options,
                            selected: c.mode.as_str().to_string(),
                            on_select: move |v: String| {
                                if let Ok(mode) = v.parse::<ColorMode>() {
                                    dispatch(&mut customizer, CustomizerAction::SetMode(mode));
                                }
                            },
                        }
                        div { class: "swatch-row",
                            for theme in ThemeName::all().iter().copied() {
                                Swatch {
                                    key: "{theme.as_str()}",
                                    color: theme.primary().to_string(),
                                    selected: theme == c.theme,
                                    label: theme.as_str().to_string(),
                                    on_click: move |_| dispatch(&mut customizer, CustomizerAction::SetTheme(theme)),
                                }
                            }
                        }
                    }
                    Select {
                        label: t.t("settings.appearance.language"),
                        value: c.language.code().to_string(),
                        options: language_options,
                        onchange: move |v: String| {
                            if let Ok(lang) = v.parse::<Language>() {
                                dispatch(&mut customizer, CustomizerAction::SetLanguage(lang));
                            }
                        },
                    }
                    section {
                        h5 { {t.t("customizer.direction")} }
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
                    section {
                        h5 { {t.t("settings.appearance.layout")} }
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
                    Slider {
                        label: t.t("settings.appearance.borderRadius"),
                        value: c.border_radius as f64,
                        min: MIN_BORDER_RADIUS as f64,
                        max: MAX_BORDER_RADIUS as f64,
                        unit: "px".to_string(),
                        onchange: move |v: f64| {
                            dispatch(&mut customizer, CustomizerAction::SetBorderRadius(v.round() as i64));
                        },
                    }
                    Switch {
                        label: t.t("settings.appearance.cardShadow"),
                        checked: c.is_card_shadow,
                        onchange: move |on| dispatch(&mut customizer, CustomizerAction::SetCardShadow(on)),
                    }
                }

                div { class: "card",
                    h4 { {t.t("settings.notifications.title")} }
                    Switch {
                        label: t.t("settings.notifications.email"),
                        description: t.t("settings.notifications.emailDesc"),
                        checked: n.email,
                        onchange: move |on| notifications.write().email = on,
                    }
                    Switch {
                        label: t.t("settings.notifications.push"),
                        description: t.t("settings.notifications.pushDesc"),
                        checked: n.push,
                        onchange: move |on| notifications.write().push = on,
                    }
                    Switch {
                        label: t.t("settings.notifications.sms"),
                        description: t.t("settings.notifications.smsDesc"),
                        checked: n.sms,
                        onchange: move |on| notifications.write().sms = on,
                    }
                    Switch {
                        label: t.t("settings.notifications.whatsapp"),
                        description: t.t("settings.notifications.whatsappDesc"),
                        checked: n.whatsapp,
                        onchange: move |on| notifications.write().whatsapp = on,
                    }
                }

                div { class: "card",
                    h4 { {t.t("settings.about.title")} }
                    dl { class: "meta-list",
                        dt { {t.t("settings.about.version")} }
                        dd { {env!("CARGO_PKG_VERSION")} }
                        dt { {t.t("settings.about.dataDir")} }
                        dd { code { "{data_dir}" } }
                        dt { {t.t("settings.about.qrEndpoint")} }
                        dd { code { "{config.qr_endpoint}" } }
                        dt { {t.t("settings.about.publicBaseUrl")} }
                        dd { code { "{config.public_base_url}" } }
                        dt { {t.t("settings.about.logLevel")} }
                        dd { code { "{config.log_level}" } }
                    }
                }
            }
        }
    }
}
