//! Settings store over a single hydration-safe cell.
//!
//! # Responsibility
//! - Expose intent-level setters for every user preference.
//! - Keep the visible-panes list duplicate-free.
//!
//! # Invariants
//! - `reset_to_defaults` restores a value deep-equal to the compiled-in
//!   defaults, clearing stored credentials.
//! - Every write goes through the owning cell and inherits its
//!   best-effort persistence semantics.

use std::rc::Rc;

use log::info;

use crate::model::settings::{
    AccentColor, AiProvider, DashboardPane, ScholarStats, StoredSettings, Theme, UserSettings,
};
use crate::store::{BackingStore, CellValue, PersistedCell};

impl CellValue for UserSettings {
    fn default_value() -> Self {
        Self::default()
    }

    fn from_stored(raw: &str) -> Result<Self, serde_json::Error> {
        let stored: StoredSettings = serde_json::from_str(raw)?;
        Ok(Self::reconcile(stored))
    }

    fn to_stored(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The persisted settings record and its mutation surface.
pub struct SettingsStore {
    cell: PersistedCell<UserSettings>,
}

impl SettingsStore {
    pub fn new(backing: Rc<dyn BackingStore>, key: &'static str) -> Self {
        Self {
            cell: PersistedCell::new(backing, key),
        }
    }

    /// Performs the one-time backing read. Idempotent.
    pub fn hydrate(&self) {
        self.cell.hydrate();
    }

    pub fn is_hydrated(&self) -> bool {
        self.cell.is_hydrated()
    }

    /// Current settings and whether they were loaded from backing.
    pub fn read(&self) -> (UserSettings, bool) {
        self.cell.read()
    }

    pub fn snapshot(&self) -> UserSettings {
        self.cell.snapshot()
    }

    /// Applies an arbitrary field-level mutation.
    pub fn update(&self, mutate: impl FnOnce(&mut UserSettings)) {
        self.cell.write(|mut settings| {
            mutate(&mut settings);
            settings
        });
    }

    pub fn set_theme(&self, theme: Theme) {
        self.update(|s| s.theme = theme);
    }

    pub fn set_accent_color(&self, accent: AccentColor) {
        self.update(|s| s.accent_color = accent);
    }

    pub fn set_screensaver_timeout(&self, minutes: u32) {
        self.update(|s| s.screensaver_timeout = minutes);
    }

    pub fn set_google_scholar_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.update(|s| {
            s.google_scholar_url = if url.trim().is_empty() { None } else { Some(url) }
        });
    }

    pub fn set_ai_provider(&self, provider: AiProvider) {
        self.update(|s| s.ai_provider = Some(provider));
    }

    pub fn set_ai_api_key(&self, key: impl Into<String>) {
        let key = key.into();
        self.update(|s| s.ai_api_key = if key.trim().is_empty() { None } else { Some(key) });
    }

    /// Stores a freshly fetched citation snapshot.
    pub fn record_scholar_stats(&self, stats: ScholarStats) {
        self.update(|s| s.scholar_stats = Some(stats));
    }

    /// Adds the pane if hidden, removes it if visible. Never duplicates.
    pub fn toggle_pane(&self, pane: DashboardPane) {
        self.update(|s| {
            if s.visible_panes.contains(&pane) {
                s.visible_panes.retain(|p| *p != pane);
            } else {
                s.visible_panes.push(pane);
            }
        });
    }

    pub fn is_pane_visible(&self, pane: DashboardPane) -> bool {
        self.cell.snapshot().visible_panes.contains(&pane)
    }

    /// Discards all customization, credentials included.
    pub fn reset_to_defaults(&self) {
        self.cell.write(|_| UserSettings::default());
        info!("event=settings_reset module=repo status=ok");
    }
}
