use bizcard_core::auth::RegisterForm;
use bizcard_ui::{Alert, Button, Input, Notice, Severity};
use dioxus::prelude::*;

use super::{AuthCard, PasswordStrengthMeter};
use crate::app::Route;
use crate::context::{use_api, use_cancellation, use_notice, use_translator};

#[component]
pub fn Register() -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let navigator = use_navigator();
    let mut notice = use_notice();

    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<&'static str>::None);
    let mut loading = use_signal(|| false);

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
            match api
                .register(&current.first_name, &current.last_name, &current.email, &cancel)
                .await
            {
                Ok(profile) => {
                    tracing::info!(username = %profile.username, "Registration complete");
                    notice.set(Some(Notice::success(t.t("auth.register.success"))));
                    navigator.push(Route::VerifyEmail { token: String::new() });
                }
                Err(e) => {
                    if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                        notice.set(Some(n));
                    }
                }
            }
            loading.set(false);
        });
    };

    let f = form.read().clone();
    let strength = f.strength();
    let mismatch = !f.confirm_password.is_empty() && !f.passwords_match();

    rsx! {
        AuthCard { title: t.t("auth.register.title"), subtitle: t.t("auth.register.subtitle"),
            if let Some(key) = error() {
                Alert { severity: Severity::Error, {t.t(key)} }
            }
            div { class: "form-grid",
                Input {
                    label: t.t("auth.register.firstName"),
                    value: f.first_name.clone(),
                    required: true,
                    oninput: move |v| form.write().first_name = v,
                }
                Input {
                    label: t.t("auth.register.lastName"),
                    value: f.last_name.clone(),
                    required: true,
                    oninput: move |v| form.write().last_name = v,
                }
            }
            Input {
                label: t.t("auth.register.email"),
                input_type: "email".to_string(),
                value: f.email.clone(),
                required: true,
                oninput: move |v| form.write().email = v,
            }
            Input {
                label: t.t("auth.register.password"),
                input_type: "password".to_string(),
                value: f.password.clone(),
                required: true,
                oninput: move |v| form.write().password = v,
            }
            if !f.password.is_empty() {
                PasswordStrengthMeter { strength }
            }
            Input {
                label: t.t("auth.register.confirmPassword"),
                input_type: "password".to_string(),
                value: f.confirm_password.clone(),
                required: true,
                error: mismatch.then(|| t.t("auth.register.passwordMismatch")),
                oninput: move |v| form.write().confirm_password = v,
            }
            label { class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: f.accept_terms,
                    onchange: move |e| form.write().accept_terms = e.checked(),
                }
                {t.t("auth.register.acceptTerms")}
            }
            Button { full_width: true, loading: loading(), onclick: submit, {t.t("auth.register.submit")} }
            p { class: "auth-footer",
                {t.t("auth.register.haveAccount")}
                " "
                Link { to: Route::Login {}, {t.t("auth.register.signIn")} }
            }
        }
    }
}
