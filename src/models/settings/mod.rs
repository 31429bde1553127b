// Panel settings model

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Values the panel reads from its TOML settings file. Unknown or
/// missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Endpoint serving the sponsor record array.
    pub sponsors_url: String,
    /// Countdown recompute cadence in milliseconds.
    pub tick_interval_ms: u64,
    /// Referral tag appended to outbound tool links.
    pub ref_tag: String,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            sponsors_url: "https://d1gl9g4ciwvjfq.cloudfront.net/api/GetDevhuntAds".to_string(),
            tick_interval_ms: 1_000,
            ref_tag: "devhunt".to_string(),
        }
    }
}

impl PanelSettings {
    /// Tick cadence as a std duration, floored at 1 ms.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_target_production_endpoint_at_one_second() {
        let settings = PanelSettings::default();

        assert!(settings.sponsors_url.starts_with("https://"));
        assert_eq!(settings.tick_interval(), Duration::from_millis(1_000));
        assert_eq!(settings.ref_tag, "devhunt");
    }

    #[test]
    fn partial_toml_fills_missing_keys_from_defaults() {
        let settings: PanelSettings = toml::from_str("tick_interval_ms = 250").unwrap();

        assert_eq!(settings.tick_interval(), Duration::from_millis(250));
        assert_eq!(settings.sponsors_url, PanelSettings::default().sponsors_url);
    }

    #[test]
    fn zero_interval_is_floored_to_one_millisecond() {
        let settings = PanelSettings {
            tick_interval_ms: 0,
            ..PanelSettings::default()
        };

        assert_eq!(settings.tick_interval(), Duration::from_millis(1));
    }
}
