//! Account screens: form checks, password strength, and the email
//! verification status.

use serde::{Deserialize, Serialize};

use crate::card::validation::is_valid_email;
use crate::error::CardError;

/// Minimum strength accepted for a new password.
pub const MIN_PASSWORD_STRENGTH: u8 = 75;

/// Score a password: 25 points each for length >= 8, an ASCII uppercase
/// letter, a digit, and a non-alphanumeric character.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|&&ok| ok).count() as u8 * 25
}

/// Bucket shown under the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn of(strength: u8) -> Self {
        match strength {
            s if s < 50 => StrengthLabel::Weak,
            s if s < 75 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn key_suffix(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "passwordWeak",
            StrengthLabel::Medium => "passwordMedium",
            StrengthLabel::Strong => "passwordStrong",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "#FA896B",
            StrengthLabel::Medium => "#FFAE1F",
            StrengthLabel::Strong => "#13DEB9",
        }
    }
}

/// Email verification state on the verify-email page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    /// No token yet: "check your inbox".
    #[default]
    Pending,
    Loading,
    Success,
    Error,
}

impl VerificationStatus {
    /// Pending -> Loading. Other states are left alone.
    pub fn start(self) -> Self {
        match self {
            VerificationStatus::Pending => VerificationStatus::Loading,
            other => {
                tracing::debug!(state = ?other, "Ignoring verification start");
                other
            }
        }
    }

    /// Loading -> Success or Error. Other states are left alone.
    pub fn resolve<T>(self, result: &Result<T, CardError>) -> Self {
        match (self, result) {
            (VerificationStatus::Loading, Ok(_)) => VerificationStatus::Success,
            (VerificationStatus::Loading, Err(_)) => VerificationStatus::Error,
            (other, _) => {
                tracing::debug!(state = ?other, "Ignoring verification result");
                other
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, VerificationStatus::Success | VerificationStatus::Error)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    /// First problem as a translation key.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("auth.login.required");
        }
        if !is_valid_email(&self.email) {
            return Err("auth.login.invalidEmail");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl RegisterForm {
    pub fn strength(&self) -> u8 {
        password_strength(&self.password)
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("auth.register.required");
        }
        if !is_valid_email(&self.email) {
            return Err("auth.register.invalidEmail");
        }
        if !self.passwords_match() {
            return Err("auth.register.passwordMismatch");
        }
        if self.strength() < MIN_PASSWORD_STRENGTH {
            return Err("auth.register.passwordTooWeak");
        }
        if !self.accept_terms {
            return Err("auth.register.acceptTermsRequired");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if is_valid_email(&self.email) {
            Ok(())
        } else {
            Err("auth.forgotPassword.invalidEmail")
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn strength(&self) -> u8 {
        password_strength(&self.password)
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.passwords_match() {
            return Err("auth.resetPassword.passwordMismatch");
        }
        if self.strength() < MIN_PASSWORD_STRENGTH {
            return Err("auth.resetPassword.passwordTooWeak");
        }
        Ok(())
    }
}

/// Account owner profile shown on the profile page and header menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub bio: String,
    pub plan: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            username: "ahmed".to_string(),
            first_name: "Ahmed".to_string(),
            last_name: "Mohammed".to_string(),
            email: "ahmed@example.com".to_string(),
            phone: "+966501234567".to_string(),
            job_title: "Software Engineer".to_string(),
            company: "Tech Solutions".to_string(),
            location: "Riyadh, Saudi Arabia".to_string(),
            bio: "Passionate about building digital products.".to_string(),
            plan: "free".to_string(),
        }
    }
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Signed-in session returned by the mock login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_steps() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdefgh"), 25);
        assert_eq!(password_strength("Abcdefgh"), 50);
        assert_eq!(password_strength("Abcdefg1"), 75);
        assert_eq!(password_strength("Abcdef1!"), 100);
        assert_eq!(password_strength("A1!"), 75);
    }

    #[test]
    fn test_strength_label() {
        assert_eq!(StrengthLabel::of(25), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::of(50), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::of(75), StrengthLabel::Strong);
    }

    #[test]
    fn test_verification_transitions() {
        let s = VerificationStatus::Pending.start();
        assert_eq!(s, VerificationStatus::Loading);
        assert_eq!(s.resolve(&Ok::<_, CardError>(())), VerificationStatus::Success);
        assert_eq!(
            s.resolve(&Err::<(), _>(CardError::InvalidToken)),
            VerificationStatus::Error
        );
    }

    #[test]
    fn test_illegal_transitions_ignored() {
        assert_eq!(
            VerificationStatus::Pending.resolve(&Ok::<_, CardError>(())),
            VerificationStatus::Pending
        );
        assert_eq!(VerificationStatus::Success.start(), VerificationStatus::Success);
        assert!(VerificationStatus::Error.is_terminal());
    }

    #[test]
    fn test_reset_form() {
        let mut form = ResetPasswordForm {
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1?".into(),
        };
        assert_eq!(form.validate(), Err("auth.resetPassword.passwordMismatch"));
        form.confirm_password = form.password.clone();
        assert!(form.validate().is_ok());
        form.password = "abc".into();
        form.confirm_password = "abc".into();
        assert_eq!(form.validate(), Err("auth.resetPassword.passwordTooWeak"));
    }

    #[test]
    fn test_login_form() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate(), Err("auth.login.required"));
        form.email = "nope".into();
        form.password = "x".into();
        assert_eq!(form.validate(), Err("auth.login.invalidEmail"));
        form.email = "a@b.co".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_form_requires_terms() {
        let mut form = RegisterForm {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.co".into(),
            password: "Abcdefg1".into(),
            confirm_password: "Abcdefg1".into(),
            accept_terms: false,
        };
        assert_eq!(form.validate(), Err("auth.register.acceptTermsRequired"));
        form.accept_terms = true;
        assert!(form.validate().is_ok());
    }
}
