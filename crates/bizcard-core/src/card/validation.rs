//! Client-side field checks for card drafts.
//!
//! These are loose UI checks: they drive inline error text, never a
//! server contract.

use std::sync::OnceLock;

use regex::Regex;

use super::draft::{CardDraft, CardField};

/// Maximum bio length in characters.
pub const BIO_MAX_CHARS: usize = 200;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^\+?[1-9]\d{0,15}$";
const URL_PATTERN: &str = r"^https?://[^\s/$.?#][^\s]*$";

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("valid regex"))
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("valid regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email.trim())
}

/// Spaces, dashes and parentheses are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    phone_re().is_match(&digits)
}

pub fn is_valid_url(url: &str) -> bool {
    url_re().is_match(url.trim())
}

/// Count characters, not bytes (Arabic text is multi-byte).
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Cut a string to at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// A failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: CardField,
    /// Translation key of the message.
    pub message_key: &'static str,
}

impl FieldIssue {
    fn new(field: CardField, message_key: &'static str) -> Self {
        Self { field, message_key }
    }
}

/// Check a single field value. `None` means the value is acceptable.
pub fn check_field(field: CardField, value: &str) -> Option<FieldIssue> {
    let len = char_len(value.trim());
    let issue = |key| Some(FieldIssue::new(field, key));
    match field {
        CardField::FirstName | CardField::LastName if len < 2 => issue("basicInfo.errors.nameShort"),
        CardField::JobTitle if len < 3 => issue("basicInfo.errors.jobTitleShort"),
        CardField::Company if len < 2 => issue("basicInfo.errors.companyShort"),
        CardField::Bio if char_len(value) > BIO_MAX_CHARS => issue("basicInfo.errors.bioLong"),
        CardField::Email if !value.trim().is_empty() && !is_valid_email(value) => {
            issue("contactInfo.errors.invalidEmail")
        }
        CardField::Phone if !value.trim().is_empty() && !is_valid_phone(value) => {
            issue("contactInfo.errors.invalidPhone")
        }
        CardField::Website if !value.trim().is_empty() && !is_valid_url(value) => {
            issue("contactInfo.errors.invalidUrl")
        }
        _ => None,
    }
}

/// Issues on the basic-info step (names, title, company, bio).
pub fn basic_info_issues(draft: &CardDraft) -> Vec<FieldIssue> {
    [
        (CardField::FirstName, draft.first_name.as_str()),
        (CardField::LastName, draft.last_name.as_str()),
        (CardField::JobTitle, draft.job_title.as_str()),
        (CardField::Company, draft.company.as_str()),
        (CardField::Bio, draft.bio.as_str()),
    ]
    .into_iter()
    .filter_map(|(f, v)| check_field(f, v))
    .collect()
}

/// Issues on the contact step. Empty fields are fine.
pub fn contact_issues(draft: &CardDraft) -> Vec<FieldIssue> {
    [
        (CardField::Email, draft.contact.email.as_str()),
        (CardField::Phone, draft.contact.phone.as_str()),
        (CardField::Website, draft.contact.website.as_str()),
    ]
    .into_iter()
    .filter_map(|(f, v)| check_field(f, v))
    .collect()
}

/// Issues on the social step: filled URLs must look like URLs.
pub fn social_issues(draft: &CardDraft) -> Vec<FieldIssue> {
    draft
        .social_links
        .filled()
        .filter(|l| !is_valid_url(&l.url))
        .map(|_| FieldIssue::new(CardField::SocialLinks, "socialLinks.errors.invalidUrl"))
        .collect()
}

/// Every issue across the draft.
pub fn validate_draft(draft: &CardDraft) -> Vec<FieldIssue> {
    let mut issues = basic_info_issues(draft);
    issues.extend(contact_issues(draft));
    issues.extend(social_issues(draft));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" user.name@example.com "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+966501234567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(!is_valid_phone("0123"));
        assert!(!is_valid_phone("+1234567890123456789"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn test_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://a.b/c?d=e"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https:// spaced.com"));
    }

    #[test]
    fn test_truncate_counts_chars() {
        let arabic = "م".repeat(250);
        let cut = truncate_chars(&arabic, BIO_MAX_CHARS);
        assert_eq!(char_len(&cut), 200);
    }

    #[test]
    fn test_basic_info_issues() {
        let mut draft = CardDraft::default();
        draft.first_name = "A".into();
        draft.last_name = "Smith".into();
        draft.job_title = "Dev".into();
        draft.company = "X".into();
        let issues = basic_info_issues(&draft);
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec![CardField::FirstName, CardField::Company]);
    }

    #[test]
    fn test_empty_contact_is_valid() {
        let draft = CardDraft::default();
        assert!(contact_issues(&draft).is_empty());
    }

    #[test]
    fn test_bad_social_url_flagged() {
        let mut draft = CardDraft::default();
        let id = draft.social_links.add();
        assert!(social_issues(&draft).is_empty());
        draft.social_links.set_url(&id, "not a url");
        assert_eq!(social_issues(&draft).len(), 1);
    }
}
