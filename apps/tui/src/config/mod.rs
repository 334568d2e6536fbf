// Configuration and logging setup for cs_catalog_tui

mod logging;
mod settings;

pub use logging::init_logging;
pub use settings::init_app_config;
