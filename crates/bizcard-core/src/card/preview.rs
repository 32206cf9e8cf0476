//! Render model for the card preview.
//!
//! Maps a draft to everything the preview component needs: text, CSS
//! strings, and contact/social rows. The mapping is pure.

use super::draft::CardDraft;
use super::social::SocialPlatform;

/// Default preview scale.
pub const DEFAULT_SCALE: f32 = 1.0;

const BASE_NAME_REM: f32 = 1.1;

/// Kind of a contact row, used to pick its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Website,
    Address,
}

impl ContactKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ContactKind::Email => "✉",
            ContactKind::Phone => "☎",
            ContactKind::Website => "🌐",
            ContactKind::Address => "📍",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    pub kind: ContactKind,
    pub value: String,
    /// Link target, if the row is clickable.
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialRow {
    pub platform: SocialPlatform,
    pub color: &'static str,
    pub glyph: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewModel {
    /// Full name, or `None` when both name parts are blank.
    pub name: Option<String>,
    pub initials: String,
    pub job_title: String,
    pub company: String,
    pub bio: String,
    pub avatar: Option<String>,
    pub header_gradient: String,
    pub container_style: String,
    pub name_font_size: String,
    pub body_font_size: String,
    pub show_pattern: bool,
    pub contacts: Vec<ContactRow>,
    pub socials: Vec<SocialRow>,
    pub scale: f32,
}

/// `#rrggbb` plus an alpha suffix; other inputs are returned unchanged.
fn with_alpha(hex: &str, alpha_hex: &str) -> String {
    let h = hex.trim();
    if h.len() == 7 && h.starts_with('#') && h[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        format!("{h}{alpha_hex}")
    } else {
        h.to_string()
    }
}

fn website_href(site: &str) -> String {
    if site.starts_with("http://") || site.starts_with("https://") {
        site.to_string()
    } else {
        format!("https://{site}")
    }
}

impl PreviewModel {
    pub fn from_draft(draft: &CardDraft, scale: f32) -> Self {
        let design = &draft.design;
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { DEFAULT_SCALE };
        let full_name = draft.full_name();

        let header_gradient = format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            design.primary_color,
            with_alpha(&design.primary_color, "CC")
        );

        let mut container = format!(
            "background: {}; color: {}; border-radius: {}px; opacity: {}; font-family: {};",
            design.background_color,
            design.text_color,
            design.border_radius,
            design.opacity,
            design.font_family.css()
        );
        if design.show_shadow {
            container.push_str(" box-shadow: 0 8px 24px rgba(0,0,0,0.18);");
        }
        if design.show_border {
            container.push_str(&format!(" border: 2px solid {};", design.primary_color));
        }
        if (scale - 1.0).abs() > f32::EPSILON {
            container.push_str(&format!(" transform: scale({scale}); transform-origin: top center;"));
        }

        let c = &draft.contact;
        let contacts = [
            (ContactKind::Email, &c.email, Some(format!("mailto:{}", c.email.trim()))),
            (ContactKind::Phone, &c.phone, Some(format!("tel:{}", c.phone.trim()))),
            (ContactKind::Website, &c.website, Some(website_href(c.website.trim()))),
            (ContactKind::Address, &c.address, None),
        ]
        .into_iter()
        .filter(|(_, value, _)| !value.trim().is_empty())
        .map(|(kind, value, href)| ContactRow {
            kind,
            value: value.trim().to_string(),
            href,
        })
        .collect();

        let socials = draft
            .social_links
            .filled()
            .map(|l| SocialRow {
                platform: l.platform,
                color: l.platform.color(),
                glyph: l.platform.glyph(),
                url: l.url.trim().to_string(),
            })
            .collect();

        Self {
            name: (!full_name.is_empty()).then_some(full_name),
            initials: draft.initials(),
            job_title: draft.job_title.trim().to_string(),
            company: draft.company.trim().to_string(),
            bio: draft.bio.clone(),
            avatar: draft.avatar.as_ref().map(|a| a.data_uri.clone()),
            header_gradient,
            container_style: container,
            name_font_size: format!("{:.2}rem", BASE_NAME_REM * design.font_size as f32 / 16.0),
            body_font_size: format!("{}px", design.font_size),
            show_pattern: design.show_pattern,
            contacts,
            socials,
            scale,
        }
    }

    /// Name to display, falling back to the translated placeholder.
    pub fn display_name<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::draft::CardField;

    fn sample() -> CardDraft {
        let mut d = CardDraft::default();
        d.first_name = "Lina".into();
        d.last_name = "Haddad".into();
        d.contact.email = "lina@example.com".into();
        d.contact.website = "lina.dev".into();
        let id = d.social_links.add();
        d.social_links.set_url(&id, "https://linkedin.com/in/lina");
        d.social_links.add();
        d
    }

    #[test]
    fn test_deterministic() {
        let d = sample();
        assert_eq!(PreviewModel::from_draft(&d, 1.0), PreviewModel::from_draft(&d, 1.0));
    }

    #[test]
    fn test_rows_skip_blank_fields() {
        let model = PreviewModel::from_draft(&sample(), 1.0);
        let kinds: Vec<_> = model.contacts.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ContactKind::Email, ContactKind::Website]);
        assert_eq!(model.contacts[0].href.as_deref(), Some("mailto:lina@example.com"));
        assert_eq!(model.contacts[1].href.as_deref(), Some("https://lina.dev"));
        assert_eq!(model.socials.len(), 1);
    }

    #[test]
    fn test_placeholder_name() {
        let model = PreviewModel::from_draft(&CardDraft::default(), 1.0);
        assert_eq!(model.display_name("Your Name"), "Your Name");
        assert!(model.initials.is_empty());
    }

    #[test]
    fn test_style_reflects_design() {
        let mut d = sample();
        d.update_field(CardField::BorderRadius, 24.0).unwrap();
        d.update_field(CardField::ShowBorder, true).unwrap();
        d.update_field(CardField::FontSize, 20.0).unwrap();
        let model = PreviewModel::from_draft(&d, 0.5);
        assert!(model.container_style.contains("border-radius: 24px"));
        assert!(model.container_style.contains("border: 2px solid"));
        assert!(model.container_style.contains("scale(0.5)"));
        assert_eq!(model.body_font_size, "20px");
        assert!(model.header_gradient.contains("#5D87FFCC"));
    }

    #[test]
    fn test_bad_scale_falls_back() {
        let model = PreviewModel::from_draft(&sample(), f32::NAN);
        assert_eq!(model.scale, DEFAULT_SCALE);
    }
}
