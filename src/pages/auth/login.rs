use bizcard_core::auth::LoginForm;
use bizcard_ui::{Alert, Button, Input, Notice, Severity};
use dioxus::prelude::*;

use super::AuthCard;
use crate::app::Route;
use crate::context::{use_api, use_cancellation, use_notice, use_session, use_translator};

#[component]
pub fn Login() -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let navigator = use_navigator();
    let mut session = use_session();
    let mut notice = use_notice();

    let mut form = use_signal(LoginForm::default);
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
            match api.login(&current.email, &current.password, &cancel).await {
                Ok(s) => {
                    tracing::info!(remember = current.remember_me, "Login succeeded");
                    session.set(Some(s));
                    notice.set(Some(Notice::success(t.t("auth.login.success"))));
                    navigator.push(Route::DashboardHome {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                        notice.set(Some(n));
                    }
                }
            }
            loading.set(false);
        });
    };

    let f = form.read().clone();

    rsx! {
        AuthCard { title: t.t("auth.login.title"), subtitle: t.t("auth.login.subtitle"),
            if let Some(key) = error() {
                Alert { severity: Severity::Error, {t.t(key)} }
            }
            Input {
                label: t.t("auth.login.email"),
                input_type: "email".to_string(),
                value: f.email,
                oninput: move |v| form.write().email = v,
            }
            Input {
                label: t.t("auth.login.password"),
                input_type: "password".to_string(),
                value: f.password,
                oninput: move |v| form.write().password = v,
            }
            div { class: "auth-row",
                label { class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: f.remember_me,
                        onchange: move |e| form.write().remember_me = e.checked(),
                    }
                    {t.t("auth.login.rememberMe")}
                }
                Link { to: Route::ForgotPassword {}, {t.t("auth.login.forgotPassword")} }
            }
            Button { full_width: true, loading: loading(), onclick: submit, {t.t("auth.login.submit")} }
            p { class: "auth-footer",
                {t.t("auth.login.noAccount")}
                " "
                Link { to: Route::Register {}, {t.t("auth.login.signUp")} }
            }
        }
    }
}
