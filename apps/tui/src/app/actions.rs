use std::sync::Arc;

use cs_catalog::{fetch_data, CatalogConfig, Category};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::app::state::{App, Completion};
use cs_catalog_tui::HttpSource;

/// Spawns catalog fetches and reports each one back as a [`Completion`].
#[derive(Debug, Clone)]
pub struct CatalogActions {
    source: HttpSource,
    config: Arc<CatalogConfig>,
    completions: UnboundedSender<Completion>,
}

impl CatalogActions {
    pub fn new(source: HttpSource, config: CatalogConfig) -> (Self, UnboundedReceiver<Completion>) {
        let (completions, receiver) = unbounded_channel();
        let actions = Self {
            source,
            config: Arc::new(config),
            completions,
        };
        (actions, receiver)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Start one GET for `category`. Overlapping requests are allowed; the
    /// app keeps only the newest result.
    pub fn trigger(&self, app: &mut App, category: Category) {
        let ticket = app.begin_fetch(category);
        let source = self.source.clone();
        let config = Arc::clone(&self.config);
        let completions = self.completions.clone();

        tokio::spawn(async move {
            let result = fetch_data(&source, &config, category.endpoint()).await;
            if completions
                .send(Completion {
                    ticket,
                    category,
                    result,
                })
                .is_err()
            {
                tracing::debug!(category = category.as_str(), "event loop gone, dropping result");
            }
        });
    }
}
