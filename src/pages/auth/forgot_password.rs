use bizcard_core::auth::ForgotPasswordForm;
use bizcard_ui::{Alert, Button, Input, Notice, Severity};
use dioxus::prelude::*;

use super::AuthCard;
use crate::app::Route;
use crate::context::{use_api, use_cancellation, use_notice, use_translator};

#[component]
pub fn ForgotPassword() -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let mut notice = use_notice();

    let mut form = use_signal(ForgotPasswordForm::default);
    let mut error = use_signal(|| Option::<&'static str>::None);
    let mut loading = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let submit = move |_| {
        let current = form.read().clone();
        if let Err(key) = current.validate() {
            error.set(Some(key));
            return;
        }
        error.set(None);
        loading.set(true);

        let api = api.clone();
        let cancel = cancel.clone();
        spawn(async move {
            match api.request_password_reset(&current.email, &cancel).await {
                Ok(()) => sent.set(true),
                Err(e) => {
                    if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                        notice.set(Some(n));
                    }
                }
            }
            loading.set(false);
        });
    };

    let email = form.read().email.clone();

    rsx! {
        AuthCard {
            title: t.t("auth.forgotPassword.title"),
            subtitle: t.t("auth.forgotPassword.subtitle"),
            if sent() {
                Alert { severity: Severity::Success,
                    {t.t_with("auth.forgotPassword.sent", &[("email", email.as_str())])}
                }
            } else {
                if let Some(key) = error() {
                    Alert { severity: Severity::Error, {t.t(key)} }
                }
                Input {
                    label: t.t("auth.forgotPassword.email"),
                    input_type: "email".to_string(),
                    value: email.clone(),
                    oninput: move |v| form.write().email = v,
                }
                Button { full_width: true, loading: loading(), onclick: submit,
                    {t.t("auth.forgotPassword.submit")}
                }
            }
            p { class: "auth-footer",
                Link { to: Route::Login {}, {t.t("auth.forgotPassword.backToLogin")} }
            }
        }
    }
}
