use cs_catalog::CatalogConfig;
use dotenv::dotenv;

/// Initializes the catalog configuration.
/// Reads `.env` first so `CATALOG_*` variables there apply like real ones.
pub fn init_app_config() -> CatalogConfig {
    dotenv().ok();

    let config = CatalogConfig::from_env();
    tracing::debug!(base_url = %config.base_url(), "catalog configuration loaded");
    config
}
