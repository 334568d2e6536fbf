mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use std::process::ExitCode;

use app::{App, CatalogActions};
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use cs_catalog_tui::{config, HttpSource};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();

    // Interactive mode needs a real terminal on stdout
    let interactive = !args.headless && is_terminal();
    config::init_logging(args.debug, args.log_file.as_deref(), interactive)?;

    let mut catalog_config = config::init_app_config();
    args.apply_overrides(&mut catalog_config);
    let source = HttpSource::new()?;

    if !interactive {
        return event::run_headless(&source, &catalog_config, args.category, args.output_format())
            .await;
    }

    let (actions, mut completions) = CatalogActions::new(source, catalog_config);
    let mut app = App::new();
    if let Some(category) = args.category {
        actions.trigger(&mut app, category);
    }
    tracing::info!(base_url = %actions.config().base_url(), "starting catalog browser");

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, &actions, &mut completions).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result.map(|()| ExitCode::SUCCESS)
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
