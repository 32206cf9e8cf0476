//! Account profile: header, statistics and the editable personal details.

use bizcard_core::auth::UserProfile;
use bizcard_core::dashboard::StatTile;
use bizcard_core::SavedCard;
use bizcard_ui::{Badge, Button, ButtonVariant, Input, Notice, Spinner, StatCard, Switch, TextArea};
use dioxus::prelude::*;

use crate::components::PageHeader;
use crate::context::{use_api, use_cancellation, use_notice, use_session, use_translator};

/// Local-only account toggles. Nothing is sent anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AccountToggles {
    email_notifications: bool,
    push_notifications: bool,
    profile_visibility: bool,
    two_factor: bool,
}

impl Default for AccountToggles {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            profile_visibility: true,
            two_factor: false,
        }
    }
}

fn initials(profile: &UserProfile) -> String {
    profile
        .first_name
        .chars()
        .take(1)
        .chain(profile.last_name.chars().take(1))
        .collect::<String>()
        .to_uppercase()
}

fn profile_stats(cards: &[SavedCard]) -> Vec<StatTile> {
    let views: u64 = cards.iter().map(|c| c.views as u64).sum();
    let shares: u64 = cards.iter().map(|c| c.shares as u64).sum();
    vec![
        StatTile {
            title_key: "profile.stats.cardsCreated",
            value: cards.len() as u64,
            change_pct: 0.0,
            icon: "\u{1F4C7}",
            color: "primary",
        },
        StatTile {
            title_key: "profile.stats.totalViews",
            value: views,
            change_pct: 0.0,
            icon: "\u{1F441}",
            color: "success",
        },
        StatTile {
            title_key: "profile.stats.totalShares",
            value: shares,
            change_pct: 0.0,
            icon: "\u{1F4E4}",
            color: "warning",
        },
    ]
}

#[component]
pub fn Profile() -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let mut session = use_session();
    let mut notice = use_notice();

    let mut saved = use_signal(|| Option::<UserProfile>::None);
    let mut draft = use_signal(UserProfile::default);
    let mut cards = use_signal(Vec::<SavedCard>::new);
    let mut edit_mode = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut toggles = use_signal(AccountToggles::default);

    use_hook({
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            spawn(async move {
                match api.load_profile(&cancel).await {
                    Ok(profile) => {
                        draft.set(profile.clone());
                        saved.set(Some(profile));
                    }
                    Err(e) => {
                        if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                            notice.set(Some(n));
                        }
                    }
                }
                match api.list_cards(&cancel).await {
                    Ok(list) => cards.set(list),
                    Err(e) => tracing::debug!("Card list unavailable for profile stats: {}", e),
                }
            });
        }
    });

    let save = move |_| {
        let profile = draft.read().clone();
        saving.set(true);
        let api = api.clone();
        let cancel = cancel.clone();
        spawn(async move {
            match api.save_profile(profile, &cancel).await {
                Ok(profile) => {
                    if let Some(s) = session.write().as_mut() {
                        s.user = profile.clone();
                    }
                    saved.set(Some(profile));
                    edit_mode.set(false);
                    notice.set(Some(Notice::success(t.t("profile.saved"))));
                }
                Err(e) => {
                    tracing::warn!("Profile save failed: {}", e);
                    if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                        notice.set(Some(n));
                    }
                }
            }
            saving.set(false);
        });
    };

    let cancel_edit = move |_| {
        if let Some(profile) = saved() {
            draft.set(profile);
        }
        edit_mode.set(false);
    };

    let Some(current) = saved() else {
        return rsx! {
            div { class: "page profile-page",
                Spinner { label: t.t("common.loading") }
            }
        };
    };

    let p = draft.read().clone();
    let editing = edit_mode();
    let tiles = profile_stats(&cards.read());
    let toggle = toggles();

    rsx! {
        div { class: "page profile-page",
            PageHeader { title: t.t("profile.title"), subtitle: t.t("profile.description"),
                if editing {
                    Button { variant: ButtonVariant::Outlined, onclick: cancel_edit, {t.t("common.cancel")} }
                    Button { loading: saving(), onclick: save, {t.t("common.save")} }
                } else {
                    Button {
                        icon: "\u{270E}".to_string(),
                        onclick: move |_| edit_mode.set(true),
                        {t.t("profile.editProfile")}
                    }
                }
            }

            div { class: "card profile-header",
                div { class: "avatar avatar-xl", "{initials(&current)}" }
                div { class: "profile-identity",
                    h2 { "{current.display_name()}" }
                    p { class: "text-secondary", "{current.job_title} \u{00B7} {current.company}" }
                    p { class: "text-secondary", "\u{1F4CD} {current.location}" }
                    Badge { label: current.plan.to_uppercase() }
                }
            }

            div { class: "stat-grid",
                for tile in tiles.iter() {
                    StatCard { key: "{tile.title_key}", title: t.t(tile.title_key), tile: tile.clone() }
                }
            }

            div { class: "profile-columns",
                div { class: "card",
                    h4 { {t.t("profile.personalInformation")} }
                    div { class: "form-grid",
                        Input {
                            label: t.t("profile.firstName"),
                            value: p.first_name.clone(),
                            disabled: !editing,
                            oninput: move |v| draft.write().first_name = v,
                        }
                        Input {
                            label: t.t("profile.lastName"),
                            value: p.last_name.clone(),
                            disabled: !editing,
                            oninput: move |v| draft.write().last_name = v,
                        }
                        Input {
                            label: t.t("profile.email"),
                            input_type: "email".to_string(),
                            value: p.email.clone(),
                            disabled: !editing,
                            oninput: move |v| draft.write().email = v,
                        }
                        Input {
                            label: t.t("profile.phone"),
                            input_type: "tel".to_string(),
                            value: p.phone.clone(),
                            disabled: !editing,
                            oninput: move |v| draft.write().phone = v,
                        }
                        Input {
                            label: t.t("profile.jobTitle"),
                            value: p.job_title.clone(),
                            disabled: !editing,
                            oninput: move |v| draft.write().job_title = v,
                        }
                        Input {
                            label: t.t("profile.company"),
                            value: p.company.clone(),
                            disabled: !editing,
                            oninput: move |v| draft.write().company = v,
                        }
                        Input {
                            label: t.t("profile.location"),
                            value: p.location.clone(),
                            disabled: !editing,
                            oninput: move |v| draft.write().location = v,
                        }
                    }
                    TextArea {
                        label: t.t("profile.bio"),
                        value: p.bio.clone(),
                        rows: 3,
                        disabled: !editing,
                        oninput: move |v| draft.write().bio = v,
                    }
                }

                div { class: "card",
                    h4 { {t.t("profile.privacySettings")} }
                    Switch {
                        label: t.t("profile.emailNotifications"),
                        checked: toggle.email_notifications,
                        onchange: move |on| toggles.write().email_notifications = on,
                    }
                    Switch {
                        label: t.t("profile.pushNotifications"),
                        checked: toggle.push_notifications,
                        onchange: move |on| toggles.write().push_notifications = on,
                    }
                    Switch {
                        label: t.t("profile.profileVisibility"),
                        checked: toggle.profile_visibility,
                        onchange: move |on| toggles.write().profile_visibility = on,
                    }
                    Switch {
                        label: t.t("profile.twoFactorAuth"),
                        checked: toggle.two_factor,
                        onchange: move |on| toggles.write().two_factor = on,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcard_core::api::sample_card;

    #[test]
    fn test_initials_from_names() {
        let profile = UserProfile::default();
        assert_eq!(initials(&profile), "AM");

        let blank = UserProfile {
            first_name: String::new(),
            last_name: String::new(),
            ..UserProfile::default()
        };
        assert_eq!(initials(&blank), "");
    }

    #[test]
    fn test_profile_stats_sum_cards() {
        let mut a = sample_card("a");
        a.views = 10;
        a.shares = 2;
        let mut b = sample_card("b");
        b.views = 5;
        b.shares = 1;

        let tiles = profile_stats(&[a, b]);
        assert_eq!(tiles[0].value, 2);
        assert_eq!(tiles[1].value, 15);
        assert_eq!(tiles[2].value, 3);
    }
}
