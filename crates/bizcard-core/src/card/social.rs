//! Ordered social-link list for a card.
//!
//! Insertion order is display order. Platforms may repeat.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Social network a link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    #[default]
    #[serde(rename = "linkedin")]
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "tiktok")]
    TikTok,
    #[serde(rename = "github")]
    GitHub,
    #[serde(other)]
    Website,
}

impl SocialPlatform {
    pub fn all() -> &'static [SocialPlatform] {
        &[
            SocialPlatform::LinkedIn,
            SocialPlatform::Twitter,
            SocialPlatform::Facebook,
            SocialPlatform::Instagram,
            SocialPlatform::YouTube,
            SocialPlatform::TikTok,
            SocialPlatform::GitHub,
            SocialPlatform::Website,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::TikTok => "tiktok",
            SocialPlatform::GitHub => "github",
            SocialPlatform::Website => "website",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::TikTok => "TikTok",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::Website => "Website",
        }
    }

    /// Brand color used for the icon badge.
    pub fn color(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "#0077B5",
            SocialPlatform::Twitter => "#1DA1F2",
            SocialPlatform::Facebook => "#1877F2",
            SocialPlatform::Instagram => "#E4405F",
            SocialPlatform::YouTube => "#FF0000",
            SocialPlatform::TikTok => "#000000",
            SocialPlatform::GitHub => "#181717",
            SocialPlatform::Website => "#666666",
        }
    }

    /// Short glyph shown inside the badge.
    pub fn glyph(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "in",
            SocialPlatform::Twitter => "𝕏",
            SocialPlatform::Facebook => "f",
            SocialPlatform::Instagram => "◎",
            SocialPlatform::YouTube => "▶",
            SocialPlatform::TikTok => "♪",
            SocialPlatform::GitHub => "⌥",
            SocialPlatform::Website => "🌐",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = std::convert::Infallible;

    /// Unknown tags map to `Website`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Ok(SocialPlatform::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .unwrap_or(SocialPlatform::Website))
    }
}

/// One platform/URL pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: SocialPlatform,
    pub url: String,
}

/// Ordered list of social links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks {
    links: Vec<SocialLink>,
}

impl SocialLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_links(links: Vec<SocialLink>) -> Self {
        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SocialLink> {
        self.links.iter()
    }

    pub fn as_slice(&self) -> &[SocialLink] {
        &self.links
    }

    pub fn get(&self, id: &str) -> Option<&SocialLink> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Append an empty LinkedIn entry and return its id.
    ///
    /// Ids come from the millisecond clock and are bumped past any id
    /// already in the list.
    pub fn add(&mut self) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        let id = candidate.to_string();
        self.links.push(SocialLink {
            id: id.clone(),
            platform: SocialPlatform::default(),
            url: String::new(),
        });
        id
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.links.len();
        self.links.retain(|l| l.id != id);
        self.links.len() != before
    }

    pub fn set_platform(&mut self, id: &str, platform: SocialPlatform) -> bool {
        match self.links.iter_mut().find(|l| l.id == id) {
            Some(link) => {
                link.platform = platform;
                true
            }
            None => false,
        }
    }

    pub fn set_url(&mut self, id: &str, url: impl Into<String>) -> bool {
        match self.links.iter_mut().find(|l| l.id == id) {
            Some(link) => {
                link.url = url.into();
                true
            }
            None => false,
        }
    }

    /// Links with a non-blank URL, in order.
    pub fn filled(&self) -> impl Iterator<Item = &SocialLink> {
        self.links.iter().filter(|l| !l.url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_default_entry() {
        let mut links = SocialLinks::new();
        let id = links.add();
        assert_eq!(links.len(), 1);
        let link = links.get(&id).unwrap();
        assert_eq!(link.platform, SocialPlatform::LinkedIn);
        assert!(link.url.is_empty());
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let mut links = SocialLinks::new();
        let ids: Vec<_> = (0..50).map(|_| links.add()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_remove_only_matching() {
        let mut links = SocialLinks::new();
        let a = links.add();
        let b = links.add();
        let c = links.add();
        assert!(links.remove(&b));
        assert_eq!(
            links.iter().map(|l| l.id.clone()).collect::<Vec<_>>(),
            vec![a, c]
        );
        assert!(!links.remove("nope"));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_update_by_id() {
        let mut links = SocialLinks::new();
        let id = links.add();
        assert!(links.set_platform(&id, SocialPlatform::GitHub));
        assert!(links.set_url(&id, "https://github.com/me"));
        assert!(!links.set_url("missing", "x"));
        let link = links.get(&id).unwrap();
        assert_eq!(link.platform, SocialPlatform::GitHub);
        assert_eq!(link.url, "https://github.com/me");
    }

    #[test]
    fn test_duplicate_platforms_allowed() {
        let mut links = SocialLinks::new();
        links.add();
        links.add();
        assert!(links.iter().all(|l| l.platform == SocialPlatform::LinkedIn));
    }

    #[test]
    fn test_unknown_platform_parses_as_website() {
        assert_eq!("mastodon".parse::<SocialPlatform>().unwrap(), SocialPlatform::Website);
        let link: SocialLink =
            serde_json::from_str(r#"{"id":"1","platform":"mastodon","url":""}"#).unwrap();
        assert_eq!(link.platform, SocialPlatform::Website);
    }
}
