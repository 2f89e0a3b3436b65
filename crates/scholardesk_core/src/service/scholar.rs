//! One-shot citation statistics refresh.
//!
//! # Responsibility
//! - Fetch the configured public profile page once per session and cache
//!   the extracted statistics in settings.
//!
//! # Invariants
//! - The in-session guard arms on the first attempted fetch, success or
//!   failure; the task is never retried automatically within a session.
//! - An unconfigured or not-yet-hydrated settings store skips without
//!   arming the guard.
//! - A successful refresh performs exactly one settings write.

use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::now_iso;
use crate::model::settings::ScholarStats;
use crate::repo::settings_repo::SettingsStore;

// The public profile page lists citation counts, h-index and i10-index
// as the first column of its statistics table, in that order.
static STAT_CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"gsc_rsb_std">(\d+)<"#).expect("valid stat cell regex"));

/// Failure of one refresh attempt.
#[derive(Debug)]
pub enum RefreshError {
    Http(String),
    /// The page fetched fine but carried no recognizable statistics.
    UnrecognizedPage,
}

impl Display for RefreshError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(details) => write!(f, "profile fetch failed: {details}"),
            Self::UnrecognizedPage => write!(f, "profile page had no statistics table"),
        }
    }
}

impl Error for RefreshError {}

/// Fetch seam, so the refresh task is testable without a network.
pub trait StatsFetcher {
    fn fetch(&self, url: &str) -> Result<ScholarStats, RefreshError>;
}

/// Production fetcher: plain GET plus regex extraction.
#[derive(Debug, Default)]
pub struct HttpStatsFetcher;

impl StatsFetcher for HttpStatsFetcher {
    fn fetch(&self, url: &str) -> Result<ScholarStats, RefreshError> {
        let body = reqwest::blocking::get(url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|err| RefreshError::Http(err.to_string()))?;
        extract_stats(&body).ok_or(RefreshError::UnrecognizedPage)
    }
}

/// Pulls (citations, h-index, i10-index) out of a profile page.
///
/// The table interleaves all-time and recent columns; the all-time
/// values are the first, third and fifth cells.
pub fn extract_stats(body: &str) -> Option<ScholarStats> {
    let values: Vec<u32> = STAT_CELL_RE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect();

    if values.len() < 5 {
        return None;
    }

    Some(ScholarStats {
        citations: values[0],
        h_index: values[2],
        i10_index: values[4],
        last_updated: now_iso(),
    })
}

/// Result of asking the refresher to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Updated(ScholarStats),
    /// Nothing attempted; the reason names the unmet precondition.
    Skipped(&'static str),
    Failed(String),
}

/// Startup task wrapper carrying the in-session one-shot guard.
pub struct ScholarRefresher<F: StatsFetcher> {
    fetcher: F,
    attempted: Cell<bool>,
}

impl<F: StatsFetcher> ScholarRefresher<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            attempted: Cell::new(false),
        }
    }

    /// Runs the refresh if it has not been attempted this session.
    ///
    /// Call after settings hydration completes; this is the explicit
    /// scheduling point, not view computation.
    pub fn run_once(&self, settings: &SettingsStore) -> RefreshOutcome {
        if self.attempted.get() {
            return RefreshOutcome::Skipped("already-attempted");
        }
        if !settings.is_hydrated() {
            return RefreshOutcome::Skipped("not-hydrated");
        }

        let url = match settings.snapshot().google_scholar_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => return RefreshOutcome::Skipped("unconfigured"),
        };

        self.attempted.set(true);
        match self.fetcher.fetch(&url) {
            Ok(stats) => {
                settings.record_scholar_stats(stats.clone());
                info!(
                    "event=scholar_refresh module=service status=ok citations={}",
                    stats.citations
                );
                RefreshOutcome::Updated(stats)
            }
            Err(err) => {
                warn!("event=scholar_refresh module=service status=error error={err}");
                RefreshOutcome::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::extract_stats;

    const PAGE: &str = concat!(
        r#"<td class="gsc_rsb_std">1524</td><td class="gsc_rsb_std">310</td>"#,
        r#"<td class="gsc_rsb_std">21</td><td class="gsc_rsb_std">9</td>"#,
        r#"<td class="gsc_rsb_std">34</td><td class="gsc_rsb_std">12</td>"#,
    );

    #[test]
    fn extracts_all_time_columns() {
        let stats = extract_stats(PAGE).expect("page should parse");
        assert_eq!(stats.citations, 1524);
        assert_eq!(stats.h_index, 21);
        assert_eq!(stats.i10_index, 34);
        assert!(!stats.last_updated.is_empty());
    }

    #[test]
    fn unrecognized_page_yields_none() {
        assert!(extract_stats("<html>nothing here</html>").is_none());
    }
}
