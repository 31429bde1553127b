// DevHunt Panel
// Main entry point

use std::thread;
use std::time::Duration;

use anyhow::Result;

use devhunt_panel::models::settings::PanelSettings;
use devhunt_panel::models::sponsor::SponsorPanelState;
use devhunt_panel::services::panel::VotePanel;
use devhunt_panel::services::settings::SettingsService;
use devhunt_panel::services::sponsors::SponsorFetcher;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting DevHunt panel");

    let settings = match SettingsService::default_path() {
        Some(path) => SettingsService::load(&path)?,
        None => PanelSettings::default(),
    };

    let fetcher = SponsorFetcher::new()?;
    let mut panel = VotePanel::new(settings);

    match panel.activate(&fetcher) {
        SponsorPanelState::Loaded(sponsors) => {
            for sponsor in sponsors {
                println!("[{}] {}: {}", sponsor.kind, sponsor.title, sponsor.description);
            }
        }
        SponsorPanelState::Failed => println!("Error loading sponsors"),
        SponsorPanelState::Loading => {}
    }

    loop {
        let tick = panel.tick();
        if tick.changed {
            if let Some(snapshot) = tick.snapshot {
                println!("Vote closing in: {}", snapshot.remaining);
            }
        }
        thread::sleep(tick.next_due_in.unwrap_or(Duration::from_millis(1_000)));
    }
}
