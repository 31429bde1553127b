use serde::{Deserialize, Serialize};

/// One sponsor slot as served by the ad endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorRecord {
    /// Slot label shown above the card, e.g. "Sponsor" or "Partner".
    #[serde(rename = "type")]
    pub kind: String,
    pub link: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub call_to_action: String,
}

/// Lifecycle of the sponsor list for one panel activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SponsorPanelState {
    /// Fetch outcome pending; the view shows skeleton cards.
    Loading,
    Loaded(Vec<SponsorRecord>),
    /// Fetch failed; the view shows a static error message. The
    /// failure is generic, error kinds stay in the log.
    Failed,
}

impl Default for SponsorPanelState {
    fn default() -> Self {
        Self::Loading
    }
}

impl SponsorPanelState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// The loaded records, or `None` while loading or failed.
    pub fn sponsors(&self) -> Option<&[SponsorRecord]> {
        match self {
            Self::Loaded(sponsors) => Some(sponsors),
            _ => None,
        }
    }
}
