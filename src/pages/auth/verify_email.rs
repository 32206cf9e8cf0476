use bizcard_core::auth::VerificationStatus;
use bizcard_ui::{Alert, Button, ButtonVariant, Notice, Severity, Spinner};
use dioxus::prelude::*;

use super::AuthCard;
use crate::app::Route;
use crate::context::{use_api, use_cancellation, use_notice, use_translator};

/// Email verification. With a token the check starts on mount; without
/// one the page waits for the user to open the emailed link.
#[component]
pub fn VerifyEmail(token: String) -> Element {
    let t = use_translator();
    let api = use_api();
    let cancel = use_cancellation();
    let mut notice = use_notice();
    let mut status = use_signal(VerificationStatus::default);
    let mut resending = use_signal(|| false);

    use_hook({
        let api = api.clone();
        let cancel = cancel.clone();
        let token = token.clone();
        move || {
            if token.trim().is_empty() {
                return;
            }
            status.set(status.peek().start());
            spawn(async move {
                let result = api.verify_email(&token, &cancel).await;
                if let Err(e) = &result {
                    tracing::warn!("Email verification failed: {}", e);
                }
                status.set(status.peek().resolve(&result));
            });
        }
    });

    let resend = move |_| {
        resending.set(true);
        let api = api.clone();
        let cancel = cancel.clone();
        spawn(async move {
            let result = async {
                let profile = api.load_profile(&cancel).await?;
                api.resend_verification(&profile.email, &cancel).await
            }
            .await;
            match result {
                Ok(()) => notice.set(Some(Notice::success(t.t("auth.verifyEmail.resent")))),
                Err(e) => {
                    if let Some(n) = Notice::from_error(&e, |k| t.t(k)) {
                        notice.set(Some(n));
                    }
                }
            }
            resending.set(false);
        });
    };

    rsx! {
        AuthCard { title: t.t("auth.verifyEmail.title"), subtitle: String::new(),
            {
                match status() {
                    VerificationStatus::Pending => rsx! {
                        div { class: "verify-icon", "\u{2709}" }
                        p { {t.t("auth.verifyEmail.checkInbox")} }
                        Button {
                            variant: ButtonVariant::Outlined,
                            full_width: true,
                            loading: resending(),
                            onclick: resend,
                            {t.t("auth.verifyEmail.resend")}
                        }
                    },
                    VerificationStatus::Loading => rsx! {
                        Spinner { label: t.t("auth.verifyEmail.verifying") }
                    },
                    VerificationStatus::Success => rsx! {
                        Alert { severity: Severity::Success, {t.t("auth.verifyEmail.success")} }
                        Link { class: "btn btn-contained btn-block", to: Route::Login {}, {t.t("auth.verifyEmail.continue")} }
                    },
                    VerificationStatus::Error => rsx! {
                        Alert { severity: Severity::Error, {t.t("auth.verifyEmail.failed")} }
                        Link { class: "btn btn-outlined btn-block", to: Route::Register {}, {t.t("auth.verifyEmail.backToRegister")} }
                    },
                }
            }
        }
    }
}
