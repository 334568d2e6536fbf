// App module for cs_catalog_tui
// Holds the browser state and the fetch actions

pub mod actions;
pub mod input;
pub mod state;

pub use actions::CatalogActions;
pub use input::handle_input;
pub use state::{App, Completion};
