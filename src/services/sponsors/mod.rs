mod fetcher;

pub use fetcher::{SponsorFetchError, SponsorFetcher};

use anyhow::Result;

use crate::models::sponsor::{SponsorPanelState, SponsorRecord};

/// Owns the sponsor list lifecycle for the panel. Each activation
/// performs exactly one fetch; the outcome is terminal until the panel
/// is activated again.
pub struct SponsorService {
    state: SponsorPanelState,
    fetched: bool,
}

impl Default for SponsorService {
    fn default() -> Self {
        Self::new()
    }
}

impl SponsorService {
    pub fn new() -> Self {
        Self {
            state: SponsorPanelState::Loading,
            fetched: false,
        }
    }

    pub fn state(&self) -> &SponsorPanelState {
        &self.state
    }

    /// Resets to the skeleton state so the next `load_with` call may
    /// fetch again.
    pub fn activate(&mut self) {
        self.state = SponsorPanelState::Loading;
        self.fetched = false;
    }

    /// Runs the one fetch for this activation. Later calls are no-ops
    /// until `activate` resets the panel.
    pub fn load_with<F>(&mut self, fetch: F) -> &SponsorPanelState
    where
        F: FnOnce() -> Result<Vec<SponsorRecord>>,
    {
        if self.fetched {
            return &self.state;
        }
        self.fetched = true;

        match fetch() {
            Ok(sponsors) => {
                log::info!("Loaded {} sponsor record(s)", sponsors.len());
                self.state = SponsorPanelState::Loaded(sponsors);
            }
            Err(err) => {
                // The view only distinguishes "failed"; kinds stay in the log.
                log::warn!("Sponsor fetch failed: {err:#}");
                self.state = SponsorPanelState::Failed;
            }
        }

        &self.state
    }

    /// Fetches from the live endpoint.
    pub fn load(&mut self, fetcher: &SponsorFetcher, url: &str) -> &SponsorPanelState {
        self.load_with(|| fetcher.fetch_sponsors(url))
    }
}
