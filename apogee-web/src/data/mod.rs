//! Data source loading.
//!
//! Each dataset has a fixed priority order of sources; the first one that
//! fetches and parses wins and failures fall through to the next. Nothing in
//! this layer surfaces an error to the caller: exhausting a chain yields an
//! empty or absent result and the page renders its silent empty state.
//! Failures are only reported to the developer console.

use apogee_core::model::{PlannedLaunchEntry, RocketCatalog, SeasonLog};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Seasons the site knows about, newest last.
pub const SEASON_KEYS: [&str; 2] = ["2025", "2026"];

/// Planned-launch listings show at most this many upcoming entries.
pub const PLANNED_DISPLAY_LIMIT: usize = 3;

/// Why a single source attempt failed. Internal to the loader; every public
/// entry point swallows these into empty results.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory launch-history cache keyed by year, so repeated season switches
/// do not re-fetch. Owned by the launches page; only ever touched from the
/// single-threaded UI event loop.
#[derive(Debug, Default)]
pub struct LaunchArchive {
    cache: HashMap<u16, Rc<SeasonLog>>,
}

/// How pages hold the archive: one shared handle per page instance.
pub type SharedArchive = Rc<RefCell<LaunchArchive>>;

impl LaunchArchive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cached(&self, year: u16) -> Option<Rc<SeasonLog>> {
        self.cache.get(&year).cloned()
    }

    pub fn store(&mut self, year: u16, log: SeasonLog) -> Rc<SeasonLog> {
        let log = Rc::new(log);
        self.cache.insert(year, log.clone());
        log
    }
}

/// The catalog compiled into the bundle, used when every fetch candidate
/// fails (e.g. when the site is opened straight from disk).
#[must_use]
pub fn seed_catalog() -> RocketCatalog {
    RocketCatalog::from_json(include_str!("../../static/data/rockets.json")).unwrap_or_default()
}

/// Launch history bundled with the app, the fallback for known seasons.
#[must_use]
pub fn bundled_season(year: u16) -> Option<SeasonLog> {
    let raw = match year {
        2025 => include_str!("../../static/data/launches-2025.json"),
        2026 => include_str!("../../static/data/launches-2026.json"),
        _ => return None,
    };
    SeasonLog::from_json(raw).ok()
}

/// Normalize CSV text into planned entries. The CSV micro-parser is total,
/// so a fetched CSV never falls through to the JSON source.
#[must_use]
pub fn parse_planned_csv(text: &str) -> Vec<PlannedLaunchEntry> {
    apogee_core::csv::parse_records(text)
        .iter()
        .take(PLANNED_DISPLAY_LIMIT)
        .map(PlannedLaunchEntry::from_raw)
        .collect()
}

#[derive(Debug, Deserialize, Default)]
struct PlannedFile {
    #[serde(default, rename = "plannedLaunches")]
    planned_launches: Vec<serde_json::Value>,
}

/// Normalize the JSON planned-launch container.
///
/// # Errors
///
/// Returns an error when the text is not well-formed JSON; entries that are
/// not objects are skipped rather than failing the file.
pub fn parse_planned_json(text: &str) -> Result<Vec<PlannedLaunchEntry>, LoadError> {
    let file: PlannedFile = serde_json::from_str(text)?;
    Ok(file
        .planned_launches
        .iter()
        .filter_map(serde_json::Value::as_object)
        .take(PLANNED_DISPLAY_LIMIT)
        .map(PlannedLaunchEntry::from_raw)
        .collect())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| LoadError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    response
        .text()
        .await
        .map_err(|err| LoadError::Fetch(err.to_string()))
}

/// Planned launches for a season: CSV first, JSON on fetch failure, empty
/// when both sources are exhausted.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_planned(year: u16) -> Vec<PlannedLaunchEntry> {
    match fetch_text(&format!("data/planned-launches-{year}.csv")).await {
        Ok(text) => parse_planned_csv(&text),
        Err(csv_err) => {
            log::debug!("planned-launch CSV unavailable for {year}: {csv_err}");
            match fetch_text(&format!("data/planned-launches-{year}.json")).await {
                Ok(text) => parse_planned_json(&text).unwrap_or_else(|err| {
                    log::warn!("planned-launch JSON malformed for {year}: {err}");
                    Vec::new()
                }),
                Err(json_err) => {
                    log::debug!("no planned-launch data for {year}: {json_err}");
                    Vec::new()
                }
            }
        }
    }
}

/// The rocket catalog: candidate paths are tried in order so pages at
/// different directory depths both work, then the bundled seed wins.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_catalog() -> RocketCatalog {
    const CANDIDATES: [&str; 2] = ["../data/rockets.json", "data/rockets.json"];
    for url in CANDIDATES {
        match fetch_text(url).await {
            Ok(text) => match RocketCatalog::from_json(&text) {
                Ok(catalog) => return catalog,
                Err(err) => log::warn!("rocket catalog at {url} malformed: {err}"),
            },
            Err(err) => log::debug!("rocket catalog not at {url}: {err}"),
        }
    }
    seed_catalog()
}

/// Launch history for a season, going through the archive cache. A cache
/// miss fetches the per-year file, falling back to the bundled season; an
/// unknown year resolves to `None` and the page renders nothing for it.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_season(archive: &SharedArchive, year: u16) -> Option<Rc<SeasonLog>> {
    if let Some(hit) = archive.borrow().cached(year) {
        return Some(hit);
    }
    let fetched = match fetch_text(&format!("data/launches-{year}.json")).await {
        Ok(text) => match SeasonLog::from_json(&text) {
            Ok(log) => Some(log),
            Err(err) => {
                log::warn!("launch history for {year} malformed: {err}");
                None
            }
        }
        Err(err) => {
            log::debug!("launch history for {year} not fetched: {err}");
            None
        }
    };
    let log = fetched.or_else(|| bundled_season(year))?;
    Some(archive.borrow_mut().store(year, log))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_seasons_cover_known_years_only() {
        let season = bundled_season(2025).unwrap();
        assert_eq!(season.year, 2025);
        assert_eq!(season.launch_days.len(), 3);
        assert!(bundled_season(2026).is_some());
        assert!(bundled_season(1999).is_none());
    }

    #[test]
    fn seed_catalog_is_never_empty() {
        let catalog = seed_catalog();
        assert_eq!(catalog.rockets.len(), 4);
        assert!(catalog.find("Green Thunder").is_some());
    }

    #[test]
    fn shipped_planned_csv_normalizes_and_truncates() {
        let entries =
            parse_planned_csv(include_str!("../../static/data/planned-launches-2026.csv"));
        assert_eq!(entries.len(), PLANNED_DISPLAY_LIMIT);
        assert_eq!(entries[0].event, "Spring Shakeout");
        assert_eq!(entries[0].date, "2026-03-21");
        // Quoted field with an embedded comma survives the micro-parser.
        assert_eq!(
            entries[0].notes,
            "First flights for the winter workshop builds, weather permitting"
        );
        // Doubled quotes come through as literal quotes.
        assert_eq!(
            entries[2].notes,
            "Altitude attempt, \"go fever\" is not a flight plan"
        );
    }

    #[test]
    fn shipped_planned_json_normalizes_mixed_key_casings() {
        let entries =
            parse_planned_json(include_str!("../../static/data/planned-launches-2026.json"))
                .unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].location, "Wake County Launch Field");
        assert_eq!(entries[0].event, "Spring Shakeout");
        assert_eq!(entries[1].rocket, "TARC Champion");
        assert_eq!(entries[2].event, "State Championship");
    }

    #[test]
    fn malformed_planned_json_is_an_error_not_a_panic() {
        assert!(parse_planned_json("{ not json").is_err());
        // A well-formed file without the expected key is just empty.
        assert!(parse_planned_json("{}").unwrap().is_empty());
    }

    #[test]
    fn archive_caches_by_year() {
        let mut archive = LaunchArchive::new();
        assert!(archive.cached(2025).is_none());
        let stored = archive.store(2025, bundled_season(2025).unwrap());
        let hit = archive.cached(2025).unwrap();
        assert!(Rc::ptr_eq(&stored, &hit));
        assert!(archive.cached(2026).is_none());
    }
}
