use log::{error, info};

use portfolio_site::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio interactivity");
    if let Err(e) = portfolio_site::start() {
        error!("Failed to start: {}", e);
    }
}
