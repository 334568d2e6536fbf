// UI module for cs_catalog_tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::catalog::render_catalog(app, f);

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
