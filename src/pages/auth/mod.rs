//! Account pages. Everything runs against the mock API; a successful
//! login only stores a session in memory.

mod forgot_password;
mod login;
mod register;
mod reset_password;
mod verify_email;

pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use register::Register;
pub use reset_password::ResetPassword;
pub use verify_email::VerifyEmail;

use bizcard_core::auth::StrengthLabel;
use dioxus::prelude::*;

use crate::context::use_translator;

/// Centered card used by every auth page.
#[component]
fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "auth-page",
            div { class: "card auth-card",
                h1 { class: "auth-title", "{title}" }
                p { class: "auth-subtitle text-secondary", "{subtitle}" }
                {children}
            }
        }
    }
}

/// Bar and label under a new-password field.
#[component]
fn PasswordStrengthMeter(strength: u8) -> Element {
    let t = use_translator();
    let label = StrengthLabel::of(strength);
    let text = t.t(&format!("auth.register.{}", label.key_suffix()));

    rsx! {
        div { class: "strength-meter",
            div { class: "strength-track",
                div {
                    class: "strength-fill",
                    style: "width: {strength}%; background: {label.color()};",
                }
            }
            span { class: "strength-label", style: "color: {label.color()};", "{text}" }
        }
    }
}
