use bizcard_core::auth::ResetPasswordForm;
use bizcard_ui::{Alert, Button, Input, Notice, Severity};
use dioxus::prelude::*;

use super::{AuthCard, PasswordStrengthMeter};
use crate::app::Route;
use crate::context::{use_api, use_cancellation, use_notice, use_translator};

/// Password reset reached from the emailed link. Without a token the page
/// only explains that the link is invalid.
#[component]
pub fn ResetPassword(token: String) -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let mut notice = use_notice();

    let mut form = use_signal(ResetPasswordForm::default);
    let mut error = use_signal(|| Option::<&'static str>::None);
    let mut loading = use_signal(|| false);
    let mut done = use_signal(|| false);

    if token.trim().is_empty() {
        return rsx! {
            AuthCard {
                title: t.t("auth.resetPassword.title"),
                subtitle: String::new(),
                Alert { severity: Severity::Error, {t.t("auth.resetPassword.invalidToken")} }
                p { class: "auth-footer",
                    Link { to: Route::ForgotPassword {}, {t.t("auth.resetPassword.requestNew")} }
                }
            }
        };
    }

    let submit = {
        let token = token.clone();
        move |_| {
            let current = form.read().clone();
            if let Err(key) = current.validate() {
                error.set(Some(key));
                return;
            }
            error.set(None);
            loading.set(true);

            let api = api.clone();
            let cancel = cancel.clone();
            let token = token.clone();
            spawn(async move {
                match api.reset_password(&token, &current.password, &cancel).await {
                    Ok(()) => done.set(true),
                    Err(e) => {
                        if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                            notice.set(Some(n));
                        }
                    }
                }
                loading.set(false);
            });
        }
    };

    let f = form.read().clone();
    let strength = f.strength();

    rsx! {
        AuthCard {
            title: t.t("auth.resetPassword.title"),
            subtitle: t.t("auth.resetPassword.subtitle"),
            if done() {
                Alert { severity: Severity::Success, {t.t("auth.resetPassword.success")} }
                Link { class: "btn btn-contained btn-block", to: Route::Login {}, {t.t("auth.resetPassword.goToLogin")} }
            } else {
                if let Some(key) = error() {
                    Alert { severity: Severity::Error, {t.t(key)} }
                }
                Input {
                    label: t.t("auth.resetPassword.password"),
                    input_type: "password".to_string(),
                    value: f.password.clone(),
                    oninput: move |v| form.write().password = v,
                }
                if !f.password.is_empty() {
                    PasswordStrengthMeter { strength }
                }
                Input {
                    label: t.t("auth.resetPassword.confirmPassword"),
                    input_type: "password".to_string(),
                    value: f.confirm_password.clone(),
                    oninput: move |v| form.write().confirm_password = v,
                }
                Button { full_width: true, loading: loading(), onclick: submit,
                    {t.t("auth.resetPassword.submit")}
                }
            }
        }
    }
}
