//! User settings record and compiled-in defaults.
//!
//! # Responsibility
//! - Define the single settings record persisted alongside the
//!   collections.
//! - Own the compiled-in default values and the fill-missing-fields
//!   reconciliation applied to older persisted data.
//!
//! # Invariants
//! - `Default::default()` is the one source of fallback values; any field
//!   absent from a stored document is backfilled from it.
//! - `screensaver_timeout` is whole minutes; zero disables the feature.

use serde::{Deserialize, Serialize};

/// Interface theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

/// Interface accent color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccentColor {
    #[default]
    Indigo,
    Blue,
    Violet,
    Emerald,
    Rose,
    Amber,
}

/// Dashboard sections a user can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardPane {
    Stats,
    PapersPipeline,
    Deadlines,
    Teaching,
    Grants,
    Reviews,
    Students,
    Conferences,
}

impl DashboardPane {
    /// Every pane, in display order.
    pub const ALL: [DashboardPane; 8] = [
        Self::Stats,
        Self::PapersPipeline,
        Self::Deadlines,
        Self::Teaching,
        Self::Grants,
        Self::Reviews,
        Self::Students,
        Self::Conferences,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Stats => "Stat Cards",
            Self::PapersPipeline => "Papers Pipeline",
            Self::Deadlines => "Upcoming Deadlines",
            Self::Teaching => "Active Courses",
            Self::Grants => "Grant Summary",
            Self::Reviews => "Pending Reviews",
            Self::Students => "Active Students",
            Self::Conferences => "Upcoming Conferences",
        }
    }
}

/// Text-extraction provider for the import assistant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiProvider {
    #[default]
    Gemini,
    Openai,
}

/// Cached external citation statistics with their own freshness stamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScholarStats {
    pub citations: u32,
    pub h_index: u32,
    pub i10_index: u32,
    /// ISO-8601 stamp of the fetch that produced this snapshot.
    pub last_updated: String,
}

/// The single persisted settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub visible_panes: Vec<DashboardPane>,
    /// Idle minutes before the screensaver activates; 0 disables.
    pub screensaver_timeout: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_scholar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_provider: Option<AiProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholar_stats: Option<ScholarStats>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            accent_color: AccentColor::Indigo,
            visible_panes: vec![
                DashboardPane::Stats,
                DashboardPane::PapersPipeline,
                DashboardPane::Deadlines,
            ],
            screensaver_timeout: 5,
            google_scholar_url: None,
            ai_provider: None,
            ai_api_key: None,
            scholar_stats: None,
        }
    }
}

/// Stored shape with every field optional, used once at hydration time.
///
/// Older builds persisted fewer fields; parsing through this shape and
/// reconciling keeps those documents readable without a migration pass.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredSettings {
    pub theme: Option<Theme>,
    pub accent_color: Option<AccentColor>,
    pub visible_panes: Option<Vec<DashboardPane>>,
    pub screensaver_timeout: Option<u32>,
    pub google_scholar_url: Option<String>,
    pub ai_provider: Option<AiProvider>,
    pub ai_api_key: Option<String>,
    pub scholar_stats: Option<ScholarStats>,
}

impl UserSettings {
    /// Reconciles a stored document against the compiled-in defaults.
    pub fn reconcile(stored: StoredSettings) -> Self {
        let defaults = Self::default();
        Self {
            theme: stored.theme.unwrap_or(defaults.theme),
            accent_color: stored.accent_color.unwrap_or(defaults.accent_color),
            visible_panes: stored.visible_panes.unwrap_or(defaults.visible_panes),
            screensaver_timeout: stored
                .screensaver_timeout
                .unwrap_or(defaults.screensaver_timeout),
            google_scholar_url: stored.google_scholar_url,
            ai_provider: stored.ai_provider,
            ai_api_key: stored.ai_api_key,
            scholar_stats: stored.scholar_stats,
        }
    }
}
