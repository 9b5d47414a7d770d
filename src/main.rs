// SPDX-License-Identifier: MPL-2.0
use onedark_viewer::{app, config};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let (config, config_warning) = config::load();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(warning) = config_warning {
        warn!(event = "config.load_failed", %warning);
    }

    app::run(config)
}
