//! Card draft: the record edited by the creation wizard and the edit page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::social::SocialLinks;
use super::template::{FontFamily, TemplateId};
use super::validation::{truncate_chars, BIO_MAX_CHARS};
use crate::customizer::ThemeName;
use crate::error::{CardError, CardResult};

pub const FONT_SIZE_RANGE: (u8, u8) = (12, 24);
pub const CARD_RADIUS_RANGE: (u8, u8) = (0, 32);
pub const CARD_RADIUS_STEP: u8 = 2;
pub const OPACITY_RANGE: (f32, f32) = (0.5, 1.0);

/// Avatar picked from a local file, kept as a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarImage {
    pub file_name: String,
    pub data_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignSettings {
    pub template: TemplateId,
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: FontFamily,
    pub font_size: u8,
    pub border_radius: u8,
    pub opacity: f32,
    pub show_shadow: bool,
    pub show_border: bool,
    pub show_pattern: bool,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            template: TemplateId::Modern,
            primary_color: ThemeName::default().primary().to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            font_family: FontFamily::Roboto,
            font_size: 16,
            border_radius: 16,
            opacity: 1.0,
            show_shadow: false,
            show_border: false,
            show_pattern: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharingSettings {
    pub is_public: bool,
    pub allow_download: bool,
    #[serde(rename = "showQR")]
    pub show_qr: bool,
}

impl Default for SharingSettings {
    fn default() -> Self {
        Self {
            is_public: true,
            allow_download: true,
            show_qr: true,
        }
    }
}

/// In-progress or saved business card content and styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDraft {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub company: String,
    pub bio: String,
    pub avatar: Option<AvatarImage>,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub social_links: SocialLinks,
    #[serde(flatten)]
    pub design: DesignSettings,
    #[serde(flatten)]
    pub sharing: SharingSettings,
}

/// Scalar fields reachable through the generic setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    FirstName,
    LastName,
    JobTitle,
    Company,
    Bio,
    Email,
    Phone,
    Website,
    Address,
    SocialLinks,
    Template,
    PrimaryColor,
    BackgroundColor,
    TextColor,
    FontFamily,
    FontSize,
    BorderRadius,
    Opacity,
    ShowShadow,
    ShowBorder,
    ShowPattern,
    IsPublic,
    AllowDownload,
    ShowQr,
}

impl CardField {
    pub const ALL: &'static [CardField] = &[
        CardField::FirstName,
        CardField::LastName,
        CardField::JobTitle,
        CardField::Company,
        CardField::Bio,
        CardField::Email,
        CardField::Phone,
        CardField::Website,
        CardField::Address,
        CardField::SocialLinks,
        CardField::Template,
        CardField::PrimaryColor,
        CardField::BackgroundColor,
        CardField::TextColor,
        CardField::FontFamily,
        CardField::FontSize,
        CardField::BorderRadius,
        CardField::Opacity,
        CardField::ShowShadow,
        CardField::ShowBorder,
        CardField::ShowPattern,
        CardField::IsPublic,
        CardField::AllowDownload,
        CardField::ShowQr,
    ];

    /// Wire name, matching the serialized draft.
    pub fn name(&self) -> &'static str {
        match self {
            CardField::FirstName => "firstName",
            CardField::LastName => "lastName",
            CardField::JobTitle => "jobTitle",
            CardField::Company => "company",
            CardField::Bio => "bio",
            CardField::Email => "email",
            CardField::Phone => "phone",
            CardField::Website => "website",
            CardField::Address => "address",
            CardField::SocialLinks => "socialLinks",
            CardField::Template => "template",
            CardField::PrimaryColor => "primaryColor",
            CardField::BackgroundColor => "backgroundColor",
            CardField::TextColor => "textColor",
            CardField::FontFamily => "fontFamily",
            CardField::FontSize => "fontSize",
            CardField::BorderRadius => "borderRadius",
            CardField::Opacity => "opacity",
            CardField::ShowShadow => "showShadow",
            CardField::ShowBorder => "showBorder",
            CardField::ShowPattern => "showPattern",
            CardField::IsPublic => "isPublic",
            CardField::AllowDownload => "allowDownload",
            CardField::ShowQr => "showQR",
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardField {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardField::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| CardError::validation(s, "unknown field"))
    }
}

/// Value handed to the generic field setter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Number(f64),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl FieldValue {
    fn into_text(self, field: CardField) -> CardResult<String> {
        match self {
            FieldValue::Text(s) => Ok(s),
            other => Err(CardError::validation(field.name(), format!("expected text, got {other:?}"))),
        }
    }

    fn into_bool(self, field: CardField) -> CardResult<bool> {
        match self {
            FieldValue::Bool(b) => Ok(b),
            other => Err(CardError::validation(field.name(), format!("expected bool, got {other:?}"))),
        }
    }

    fn into_number(self, field: CardField) -> CardResult<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Ok(n),
            other => Err(CardError::validation(field.name(), format!("expected number, got {other:?}"))),
        }
    }
}

fn clamp_u8(n: f64, (lo, hi): (u8, u8)) -> u8 {
    n.round().clamp(lo as f64, hi as f64) as u8
}

/// Snap a card corner radius to the slider grid (0..=32, step 2).
pub fn snap_card_radius(n: f64) -> u8 {
    let clamped = clamp_u8(n, CARD_RADIUS_RANGE);
    clamped - clamped % CARD_RADIUS_STEP
}

/// Clamp opacity to 0.5..=1.0, one decimal place.
pub fn clamp_opacity(n: f64) -> f32 {
    let clamped = n.clamp(OPACITY_RANGE.0 as f64, OPACITY_RANGE.1 as f64);
    ((clamped * 10.0).round() / 10.0) as f32
}

impl CardDraft {
    /// Empty draft whose primary color follows the active theme.
    pub fn for_theme(theme: ThemeName) -> Self {
        let mut draft = Self::default();
        draft.design.primary_color = theme.primary().to_string();
        draft
    }

    /// Set one field by name. Text goes to text fields, booleans to toggles,
    /// numbers to sliders (clamped to their ranges). The bio is cut to 200
    /// characters. `SocialLinks` is managed through [`SocialLinks`] and is
    /// rejected here.
    pub fn update_field(&mut self, field: CardField, value: impl Into<FieldValue>) -> CardResult<()> {
        let value = value.into();
        match field {
            CardField::FirstName => self.first_name = value.into_text(field)?,
            CardField::LastName => self.last_name = value.into_text(field)?,
            CardField::JobTitle => self.job_title = value.into_text(field)?,
            CardField::Company => self.company = value.into_text(field)?,
            CardField::Bio => self.bio = truncate_chars(&value.into_text(field)?, BIO_MAX_CHARS),
            CardField::Email => self.contact.email = value.into_text(field)?,
            CardField::Phone => self.contact.phone = value.into_text(field)?,
            CardField::Website => self.contact.website = value.into_text(field)?,
            CardField::Address => self.contact.address = value.into_text(field)?,
            CardField::SocialLinks => {
                return Err(CardError::validation(field.name(), "use the social links manager"))
            }
            CardField::Template => self.design.template = value.into_text(field)?.parse()?,
            CardField::PrimaryColor => self.design.primary_color = value.into_text(field)?,
            CardField::BackgroundColor => self.design.background_color = value.into_text(field)?,
            CardField::TextColor => self.design.text_color = value.into_text(field)?,
            CardField::FontFamily => self.design.font_family = value.into_text(field)?.parse()?,
            CardField::FontSize => {
                self.design.font_size = clamp_u8(value.into_number(field)?, FONT_SIZE_RANGE)
            }
            CardField::BorderRadius => {
                self.design.border_radius = snap_card_radius(value.into_number(field)?)
            }
            CardField::Opacity => self.design.opacity = clamp_opacity(value.into_number(field)?),
            CardField::ShowShadow => self.design.show_shadow = value.into_bool(field)?,
            CardField::ShowBorder => self.design.show_border = value.into_bool(field)?,
            CardField::ShowPattern => self.design.show_pattern = value.into_bool(field)?,
            CardField::IsPublic => self.sharing.is_public = value.into_bool(field)?,
            CardField::AllowDownload => self.sharing.allow_download = value.into_bool(field)?,
            CardField::ShowQr => self.sharing.show_qr = value.into_bool(field)?,
        }
        Ok(())
    }

    /// Text value of a text field, for binding inputs.
    pub fn text(&self, field: CardField) -> &str {
        match field {
            CardField::FirstName => &self.first_name,
            CardField::LastName => &self.last_name,
            CardField::JobTitle => &self.job_title,
            CardField::Company => &self.company,
            CardField::Bio => &self.bio,
            CardField::Email => &self.contact.email,
            CardField::Phone => &self.contact.phone,
            CardField::Website => &self.contact.website,
            CardField::Address => &self.contact.address,
            CardField::PrimaryColor => &self.design.primary_color,
            CardField::BackgroundColor => &self.design.background_color,
            CardField::TextColor => &self.design.text_color,
            CardField::Template => self.design.template.as_str(),
            CardField::FontFamily => self.design.font_family.as_str(),
            _ => "",
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Up to two uppercase initials.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|s| s.trim().chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Serialize for the mock API and the CLI.
    pub fn to_json(&self) -> CardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Lifecycle state of a stored card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    #[default]
    Active,
    Draft,
    Inactive,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Active => "active",
            CardStatus::Draft => "draft",
            CardStatus::Inactive => "inactive",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            CardStatus::Active => "cards.active",
            CardStatus::Draft => "cards.draft",
            CardStatus::Inactive => "cards.inactive",
        }
    }
}

/// A card as returned by the (mock) backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCard {
    pub id: String,
    #[serde(flatten)]
    pub draft: CardDraft,
    pub status: CardStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub views: u32,
    pub shares: u32,
}

impl SavedCard {
    /// Wrap a fresh draft with a new id and timestamps.
    pub fn create(draft: CardDraft) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: ulid::Ulid::new().to_string().to_lowercase(),
            draft,
            status: CardStatus::Active,
            created_at: now,
            updated_at: now,
            views: 0,
            shares: 0,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let d = CardDraft::default();
        assert_eq!(d.design.template, TemplateId::Modern);
        assert_eq!(d.design.background_color, "#ffffff");
        assert_eq!(d.design.font_size, 16);
        assert!(d.sharing.is_public && d.sharing.allow_download && d.sharing.show_qr);
        assert!(d.social_links.is_empty());
    }

    #[test]
    fn test_update_text_fields() {
        let mut d = CardDraft::default();
        d.update_field(CardField::FirstName, "Sara").unwrap();
        d.update_field(CardField::Email, "sara@example.com").unwrap();
        assert_eq!(d.first_name, "Sara");
        assert_eq!(d.text(CardField::Email), "sara@example.com");
    }

    #[test]
    fn test_bio_truncated_to_200_chars() {
        let mut d = CardDraft::default();
        d.update_field(CardField::Bio, "x".repeat(300)).unwrap();
        assert_eq!(d.bio.chars().count(), 200);
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let mut d = CardDraft::default();
        assert!(d.update_field(CardField::FirstName, true).is_err());
        assert!(d.update_field(CardField::ShowShadow, "yes").is_err());
        assert!(d.update_field(CardField::FontSize, f64::NAN).is_err());
        assert!(d.update_field(CardField::SocialLinks, "x").is_err());
    }

    #[test]
    fn test_numeric_fields_clamped() {
        let mut d = CardDraft::default();
        d.update_field(CardField::FontSize, 40.0).unwrap();
        assert_eq!(d.design.font_size, 24);
        d.update_field(CardField::BorderRadius, 13.0).unwrap();
        assert_eq!(d.design.border_radius, 12);
        d.update_field(CardField::Opacity, 0.1).unwrap();
        assert_eq!(d.design.opacity, 0.5);
    }

    #[test]
    fn test_enum_fields_parse() {
        let mut d = CardDraft::default();
        d.update_field(CardField::Template, "bold").unwrap();
        d.update_field(CardField::FontFamily, "cairo").unwrap();
        assert_eq!(d.design.template, TemplateId::Bold);
        assert_eq!(d.design.font_family, FontFamily::Cairo);
        assert!(d.update_field(CardField::Template, "neon").is_err());
    }

    #[test]
    fn test_names_and_initials() {
        let mut d = CardDraft::default();
        d.first_name = "ahmed".into();
        d.last_name = " mohammed ".into();
        assert_eq!(d.full_name(), "ahmed mohammed");
        assert_eq!(d.initials(), "AM");
        d.last_name.clear();
        assert_eq!(d.full_name(), "ahmed");
    }

    #[test]
    fn test_json_uses_flat_camel_case() {
        let mut d = CardDraft::default();
        d.first_name = "A".into();
        d.contact.email = "a@b.co".into();
        let json = d.to_json().unwrap();
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"primaryColor\""));
        assert!(json.contains("\"showQR\""));
        assert_eq!(CardDraft::from_json(&json).unwrap(), d);
    }

    #[test]
    fn test_field_names_roundtrip() {
        for f in CardField::ALL {
            assert_eq!(f.name().parse::<CardField>().unwrap(), *f);
        }
    }

    #[test]
    fn test_saved_card_create() {
        let card = SavedCard::create(CardDraft::default());
        assert_eq!(card.status, CardStatus::Active);
        assert_eq!(card.created_at, card.updated_at);
        assert_eq!(card.id.len(), 26);
    }
}
