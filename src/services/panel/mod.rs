use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::models::countdown::CountdownSnapshot;
use crate::models::settings::PanelSettings;
use crate::models::sponsor::{SponsorPanelState, SponsorRecord};

use super::countdown::{CountdownTicker, TickerTick};
use super::sponsors::{SponsorFetcher, SponsorService};

/// View-facing state for the vote panel: the countdown ticker plus the
/// sponsor list for the current activation.
pub struct VotePanel {
    settings: PanelSettings,
    ticker: CountdownTicker,
    sponsors: SponsorService,
}

impl VotePanel {
    pub fn new(settings: PanelSettings) -> Self {
        let ticker = CountdownTicker::with_interval(settings.tick_interval());
        Self {
            settings,
            ticker,
            sponsors: SponsorService::new(),
        }
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    /// Brings the panel on screen: arms the ticker and fires the one
    /// sponsor fetch for this activation.
    pub fn activate(&mut self, fetcher: &SponsorFetcher) -> &SponsorPanelState {
        let url = self.settings.sponsors_url.clone();
        self.activate_with(|| fetcher.fetch_sponsors(&url))
    }

    /// Activation with an injected fetch, for hosts and tests that
    /// supply their own transport.
    pub fn activate_with<F>(&mut self, fetch: F) -> &SponsorPanelState
    where
        F: FnOnce() -> Result<Vec<SponsorRecord>>,
    {
        self.ticker.resume();
        self.sponsors.activate();
        self.sponsors.load_with(fetch)
    }

    /// Takes the panel off screen; no countdown computation happens
    /// until the next activation.
    pub fn suspend(&mut self) {
        self.ticker.suspend();
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn tick(&mut self) -> TickerTick {
        self.ticker.tick()
    }

    pub fn tick_at(&mut self, now: DateTime<Utc>) -> TickerTick {
        self.ticker.tick_at(now)
    }

    pub fn sponsor_state(&self) -> &SponsorPanelState {
        self.sponsors.state()
    }

    pub fn last_snapshot(&self) -> Option<&CountdownSnapshot> {
        self.ticker.last_snapshot()
    }

    /// Outbound link for a listed tool, carrying the configured
    /// referral tag.
    pub fn tool_link(&self, href: &str) -> String {
        crate::utils::links::outbound_link(href, &self.settings.ref_tag)
    }
}
