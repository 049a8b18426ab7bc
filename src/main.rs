//! Eule demo binary
//!
//! Rotates a box by the configured Euler angles and classifies random
//! points against it, reporting the result through the logger.

use eule::config::EuleConfig;
use eule::demo;

fn main() {
    // Load configuration before the logger so the log level can come from it
    let (config, load_error) = match EuleConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (EuleConfig::default(), Some(e)),
    };

    env_logger::Builder::new()
        .parse_filters(&config.debug.log_level)
        .parse_default_env()
        .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let report = demo::run(&config);
    if report.disagreements > 0 {
        log::warn!("{} points classified inconsistently", report.disagreements);
    }
}
