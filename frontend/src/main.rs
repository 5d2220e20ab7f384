mod app;
mod components;
mod services;

use app::App;
use services::logging::Logger;
use shared::TrackerConfig;

/// Runtime configuration. `POCKETPULSE_API_URL` set at build time overrides
/// the default API location.
pub fn app_config() -> TrackerConfig {
    match option_env!("POCKETPULSE_API_URL") {
        Some(url) => TrackerConfig::with_base_url(url),
        None => TrackerConfig::default(),
    }
}

fn main() {
    let config = app_config();
    Logger::init(config.log_level());
    log::info!("Starting PocketPulse");
    yew::Renderer::<App>::new().render();
}
