//! Dashboard, analytics, and card-list data.
//!
//! There is no backend, so figures are fixed sample data. Analytics
//! totals scale with the selected time range.

use serde::{Deserialize, Serialize};

use crate::card::{CardStatus, SavedCard, TemplateId};

/// One headline figure.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub title_key: &'static str,
    pub value: u64,
    /// Change against the previous period, in percent.
    pub change_pct: f32,
    pub icon: &'static str,
    pub color: &'static str,
}

impl StatTile {
    pub fn formatted_value(&self) -> String {
        format_count(self.value)
    }

    pub fn formatted_change(&self) -> String {
        format!("{:+.1}%", self.change_pct)
    }

    pub fn is_increase(&self) -> bool {
        self.change_pct >= 0.0
    }
}

/// Thousands separators: `12847` -> `12,847`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub tiles: Vec<StatTile>,
}

impl DashboardStats {
    pub fn sample() -> Self {
        Self {
            tiles: vec![
                StatTile {
                    title_key: "dashboard.stats.totalViews",
                    value: 2_847,
                    change_pct: 12.5,
                    icon: "👁",
                    color: "#5D87FF",
                },
                StatTile {
                    title_key: "dashboard.stats.totalShares",
                    value: 456,
                    change_pct: 8.2,
                    icon: "↗",
                    color: "#49BEFF",
                },
                StatTile {
                    title_key: "dashboard.stats.qrScans",
                    value: 1_234,
                    change_pct: 15.3,
                    icon: "▦",
                    color: "#13DEB9",
                },
                StatTile {
                    title_key: "dashboard.stats.newContacts",
                    value: 89,
                    change_pct: 5.7,
                    icon: "👤",
                    color: "#FFAE1F",
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    View,
    Share,
    QrScan,
    Contact,
}

impl ActivityKind {
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivityKind::View => "dashboard.activity.cardViewed",
            ActivityKind::Share => "dashboard.activity.cardShared",
            ActivityKind::QrScan => "dashboard.activity.qrScanned",
            ActivityKind::Contact => "dashboard.activity.newContact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::View => "👁",
            ActivityKind::Share => "↗",
            ActivityKind::QrScan => "▦",
            ActivityKind::Contact => "👤",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentActivity {
    pub kind: ActivityKind,
    pub subject: String,
    pub minutes_ago: u32,
}

impl RecentActivity {
    pub fn sample() -> Vec<RecentActivity> {
        vec![
            RecentActivity {
                kind: ActivityKind::View,
                subject: "Main Business Card".to_string(),
                minutes_ago: 5,
            },
            RecentActivity {
                kind: ActivityKind::Share,
                subject: "Projects Card".to_string(),
                minutes_ago: 15,
            },
            RecentActivity {
                kind: ActivityKind::QrScan,
                subject: "Main Business Card".to_string(),
                minutes_ago: 30,
            },
            RecentActivity {
                kind: ActivityKind::Contact,
                subject: "Sara Ali".to_string(),
                minutes_ago: 60,
            },
        ]
    }

    /// Translation key and count for "n minutes/hours ago".
    pub fn relative_time(&self) -> (&'static str, u32) {
        if self.minutes_ago < 60 {
            ("common.minutesAgo", self.minutes_ago)
        } else if self.minutes_ago < 24 * 60 {
            ("common.hoursAgo", self.minutes_ago / 60)
        } else {
            ("common.daysAgo", self.minutes_ago / (24 * 60))
        }
    }
}

/// Shortcut button on the dashboard home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub title_key: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            title_key: "dashboard.quickActions.createCard",
            icon: "+",
            href: "/dashboard/cards/create",
            primary: true,
        },
        QuickAction {
            title_key: "dashboard.quickActions.generateQR",
            icon: "▦",
            href: "/dashboard/qr",
            primary: false,
        },
        QuickAction {
            title_key: "dashboard.quickActions.shareCard",
            icon: "↗",
            href: "/dashboard/share",
            primary: false,
        },
        QuickAction {
            title_key: "dashboard.quickActions.viewAnalytics",
            icon: "📈",
            href: "/dashboard/analytics",
            primary: false,
        },
        QuickAction {
            title_key: "dashboard.quickActions.settings",
            icon: "⚙",
            href: "/dashboard/settings",
            primary: false,
        },
        QuickAction {
            title_key: "dashboard.quickActions.notifications",
            icon: "🔔",
            href: "/dashboard/notifications",
            primary: false,
        },
    ]
}

/// Period selector on the analytics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
}

impl TimeRange {
    pub fn all() -> &'static [TimeRange] {
        &[
            TimeRange::Last7Days,
            TimeRange::Last30Days,
            TimeRange::Last90Days,
            TimeRange::LastYear,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "analytics.last7Days",
            TimeRange::Last30Days => "analytics.last30Days",
            TimeRange::Last90Days => "analytics.last90Days",
            TimeRange::LastYear => "analytics.lastYear",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            TimeRange::Last7Days => 7,
            TimeRange::Last30Days => 30,
            TimeRange::Last90Days => 90,
            TimeRange::LastYear => 365,
        }
    }

    /// Multiplier against the 30-day sample figures.
    fn factor(&self) -> f64 {
        self.days() as f64 / 30.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopCard {
    pub name: String,
    pub views: u64,
    pub shares: u64,
    /// Engagement score, 0..=100.
    pub engagement: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Mobile,
    Desktop,
    Tablet,
}

impl Device {
    pub fn label_key(&self) -> &'static str {
        match self {
            Device::Mobile => "analytics.mobile",
            Device::Desktop => "analytics.desktop",
            Device::Tablet => "analytics.tablet",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceShare {
    pub device: Device,
    pub percentage: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationShare {
    pub country_key: &'static str,
    pub flag: &'static str,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub range: TimeRange,
    pub tiles: Vec<StatTile>,
    pub top_cards: Vec<TopCard>,
    pub devices: Vec<DeviceShare>,
    pub locations: Vec<LocationShare>,
}

fn scaled(base: u64, factor: f64) -> u64 {
    (base as f64 * factor).round() as u64
}

impl Analytics {
    pub fn for_range(range: TimeRange) -> Self {
        let f = range.factor();
        let tiles = vec![
            ("analytics.totalViews", 12_847, 23.5, "👁", "#5D87FF"),
            ("analytics.totalShares", 3_456, 18.2, "↗", "#49BEFF"),
            ("analytics.qrScans", 8_234, 31.7, "▦", "#13DEB9"),
            ("analytics.newContacts", 1_892, 12.4, "👤", "#FFAE1F"),
        ]
        .into_iter()
        .map(|(title_key, base, change_pct, icon, color)| StatTile {
            title_key,
            value: scaled(base, f),
            change_pct,
            icon,
            color,
        })
        .collect();

        let top_cards = [
            ("Main Business Card", 4_567, 234, 85),
            ("Projects Card", 3_421, 189, 78),
            ("Personal Card", 2_156, 98, 65),
        ]
        .into_iter()
        .map(|(name, views, shares, engagement)| TopCard {
            name: name.to_string(),
            views: scaled(views, f),
            shares: scaled(shares, f),
            engagement,
        })
        .collect();

        let devices = vec![
            DeviceShare {
                device: Device::Mobile,
                percentage: 68,
                color: "#5D87FF",
            },
            DeviceShare {
                device: Device::Desktop,
                percentage: 24,
                color: "#49BEFF",
            },
            DeviceShare {
                device: Device::Tablet,
                percentage: 8,
                color: "#FFAE1F",
            },
        ];

        let locations = [
            ("analytics.countries.sa", "🇸🇦", 5_234),
            ("analytics.countries.ae", "🇦🇪", 2_156),
            ("analytics.countries.eg", "🇪🇬", 1_789),
            ("analytics.countries.kw", "🇰🇼", 987),
            ("analytics.countries.qa", "🇶🇦", 654),
        ]
        .into_iter()
        .map(|(country_key, flag, views)| LocationShare {
            country_key,
            flag,
            views: scaled(views, f),
        })
        .collect();

        Self {
            range,
            tiles,
            top_cards,
            devices,
            locations,
        }
    }

    /// Share of the top location's views for the bar width.
    pub fn location_percent(&self, views: u64) -> u8 {
        let max = self.locations.iter().map(|l| l.views).max().unwrap_or(0);
        if max == 0 {
            0
        } else {
            ((views as f64 / max as f64) * 100.0).round() as u8
        }
    }
}

/// Row on the "my cards" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub views: u64,
    pub shares: u64,
    pub qr_scans: u64,
    pub status: CardStatus,
    pub last_updated: chrono::NaiveDate,
    pub template: TemplateId,
    pub is_public: bool,
}

impl CardSummary {
    pub fn sample() -> Vec<CardSummary> {
        let date = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        vec![
            CardSummary {
                id: "1".to_string(),
                name: "Main Business Card".to_string(),
                views: 1_234,
                shares: 89,
                qr_scans: 456,
                status: CardStatus::Active,
                last_updated: date(2024, 1, 15),
                template: TemplateId::Modern,
                is_public: true,
            },
            CardSummary {
                id: "2".to_string(),
                name: "Projects Card".to_string(),
                views: 567,
                shares: 34,
                qr_scans: 123,
                status: CardStatus::Active,
                last_updated: date(2024, 1, 10),
                template: TemplateId::Creative,
                is_public: false,
            },
            CardSummary {
                id: "3".to_string(),
                name: "Personal Card".to_string(),
                views: 234,
                shares: 12,
                qr_scans: 67,
                status: CardStatus::Draft,
                last_updated: date(2024, 1, 8),
                template: TemplateId::Minimal,
                is_public: true,
            },
        ]
    }
}

impl From<&SavedCard> for CardSummary {
    fn from(card: &SavedCard) -> Self {
        let name = card.draft.full_name();
        Self {
            id: card.id.clone(),
            name: if name.is_empty() { card.id.clone() } else { name },
            views: card.views as u64,
            shares: card.shares as u64,
            qr_scans: 0,
            status: card.status,
            last_updated: card.updated_at.date_naive(),
            template: card.draft.design.template,
            is_public: card.draft.sharing.is_public,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CardStatus),
}

impl StatusFilter {
    pub fn all() -> [StatusFilter; 4] {
        [
            StatusFilter::All,
            StatusFilter::Only(CardStatus::Active),
            StatusFilter::Only(CardStatus::Draft),
            StatusFilter::Only(CardStatus::Inactive),
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            StatusFilter::All => "cards.all",
            StatusFilter::Only(status) => status.label_key(),
        }
    }

    pub fn matches(&self, status: CardStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Search and status filter on the card list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl CardFilter {
    pub fn matches(&self, card: &CardSummary) -> bool {
        let needle = self.search.trim().to_lowercase();
        (needle.is_empty() || card.name.to_lowercase().contains(&needle))
            && self.status.matches(card.status)
    }

    pub fn apply<'a>(&self, cards: &'a [CardSummary]) -> Vec<&'a CardSummary> {
        cards.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_847), "12,847");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_change_formatting() {
        let tile = &DashboardStats::sample().tiles[0];
        assert_eq!(tile.formatted_change(), "+12.5%");
        assert!(tile.is_increase());
    }

    #[test]
    fn test_analytics_scale_with_range() {
        let week = Analytics::for_range(TimeRange::Last7Days);
        let month = Analytics::for_range(TimeRange::default());
        let year = Analytics::for_range(TimeRange::LastYear);
        assert_eq!(month.tiles[0].value, 12_847);
        assert!(week.tiles[0].value < month.tiles[0].value);
        assert!(year.tiles[0].value > month.tiles[0].value);
        let device_total: u32 = month.devices.iter().map(|d| d.percentage as u32).sum();
        assert_eq!(device_total, 100);
    }

    #[test]
    fn test_location_percent() {
        let a = Analytics::for_range(TimeRange::Last30Days);
        assert_eq!(a.location_percent(a.locations[0].views), 100);
    }

    #[test]
    fn test_summary_of_saved_card() {
        let mut draft = crate::card::CardDraft::default();
        let blank = SavedCard::create(draft.clone());
        assert_eq!(CardSummary::from(&blank).name, blank.id);

        draft.first_name = "Lina".into();
        draft.last_name = "Haddad".into();
        let card = SavedCard::create(draft);
        let summary = CardSummary::from(&card);
        assert_eq!(summary.name, "Lina Haddad");
        assert_eq!(summary.status, CardStatus::Active);
        assert_eq!(summary.qr_scans, 0);
    }

    #[test]
    fn test_card_filter() {
        let cards = CardSummary::sample();
        let mut filter = CardFilter::default();
        assert_eq!(filter.apply(&cards).len(), 3);
        filter.search = "PROJECT".into();
        assert_eq!(filter.apply(&cards).len(), 1);
        filter.search.clear();
        filter.status = StatusFilter::Only(CardStatus::Draft);
        let drafts = filter.apply(&cards);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, "3");
    }

    #[test]
    fn test_relative_time() {
        let items = RecentActivity::sample();
        assert_eq!(items[0].relative_time(), ("common.minutesAgo", 5));
        assert_eq!(items[3].relative_time(), ("common.hoursAgo", 1));
    }
}
