//! Shared catalog core for the web page and the terminal browser.
pub mod audio;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod projection;
pub mod registry;
pub mod render;
pub mod sequence;

#[cfg(test)]
mod testing;

pub use config::{AudioConfig, CatalogConfig};
pub use domain::Category;
pub use error::{AudioError, BindError, FetchError};
pub use pipeline::{dispatch, fetch_data, CatalogResponse, CatalogSource, DispatchOutcome};
pub use projection::{Card, CardImage, CardLine, Field};
pub use registry::{ActionBinding, ActionRegistry, TriggerSurface};
pub use render::{render_error, render_items, DisplayRegion, RegionBuffer, RegionNode};
pub use sequence::{RequestTracker, Ticket};
