use std::cell::RefCell;
use std::fmt::Write as _;
use std::process::ExitCode;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use cs_catalog::{dispatch, CatalogConfig, Category, DispatchOutcome, RegionBuffer, RegionNode};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::{handle_input, App, CatalogActions, Completion};
use crate::cli::OutputFormat;
use cs_catalog_tui::HttpSource;
use crate::terminal::CatalogTerminal;
use crate::ui;

/// Run one fetch without a UI and print the resulting region.
///
/// A failed fetch is printed like any other region (its error line) and
/// reported through the exit code only.
pub async fn run_headless(
    source: &HttpSource,
    config: &CatalogConfig,
    category: Option<Category>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let Some(category) = category else {
        println!("{}", render_category_table(config));
        return Ok(ExitCode::SUCCESS);
    };

    let region = RefCell::new(RegionBuffer::new());
    let tracker = cs_catalog::RequestTracker::new();
    let outcome = dispatch(source, config, category, &tracker, &region).await;

    println!("{}", render_region(category, &region.into_inner(), format)?);

    Ok(if fetch_succeeded(&outcome) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn fetch_succeeded(outcome: &DispatchOutcome) -> bool {
    !matches!(outcome, DispatchOutcome::Failed(_))
}

fn render_region(category: Category, region: &RegionBuffer, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(category, region),
        OutputFormat::Json => serde_json::to_string_pretty(region.nodes())?,
        OutputFormat::Html => region.to_html(),
    })
}

fn render_category_table(config: &CatalogConfig) -> String {
    let mut out = String::from("\nCatalog Categories\n==================\n");
    for category in Category::ALL {
        let _ = writeln!(
            out,
            "- {:<13} {:<20} {}",
            category.as_str(),
            category.trigger_id(),
            config.category_url(category)
        );
    }
    out
}

fn render_text(category: Category, region: &RegionBuffer) -> String {
    let title = format!("{} ({})", category.label(), region.cards().count());
    let mut out = format!("\n{title}\n{}\n", "=".repeat(title.chars().count()));

    for node in region.nodes() {
        match node {
            RegionNode::Card(card) => {
                let _ = writeln!(out, "{}", card.heading);
                for line in &card.lines {
                    match &line.color {
                        Some(color) if !color.is_empty() => {
                            let _ = writeln!(out, "  {}: {} ({color})", line.label, line.value);
                        }
                        _ => {
                            let _ = writeln!(out, "  {}: {}", line.label, line.value);
                        }
                    }
                }
                let _ = writeln!(out, "  Image: {}", card.image.src);
            }
            RegionNode::Error { message } => {
                let _ = writeln!(out, "{message}");
            }
        }
    }

    out
}

/// Run the main application event loop
pub async fn run(
    terminal: &mut CatalogTerminal,
    app: &mut App,
    actions: &CatalogActions,
    completions: &mut UnboundedReceiver<Completion>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(category) = handle_input(app, key.code) {
                        actions.trigger(app, category);
                    }
                    if !app.running {
                        break;
                    }
                }
                Ok(_) | Err(_) => {
                    // Resizes redraw on the next pass; other events are ignored
                }
            }
        }

        while let Ok(completion) = completions.try_recv() {
            app.complete(completion);
        }

        // Let spawned fetches make progress between polls
        tokio::task::yield_now().await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_catalog::render_items;
    use serde_json::json;

    #[test]
    fn text_output_lists_cards_with_colours() {
        let mut region = RegionBuffer::new();
        render_items(
            &mut region,
            Category::Weapons,
            &[json!({
                "name": "AK-47",
                "category": {"name": "Rifle"},
                "rarity": {"name": "Classified", "color": "#d32ce6"},
                "image": "ak47.png"
            })],
        );

        let text = render_text(Category::Weapons, &region);

        assert!(text.contains("Weapons (1)\n==========="));
        assert!(text.contains("AK-47\n  Category: Rifle\n  Rarity: Classified (#d32ce6)\n  Image: ak47.png"));
    }

    #[test]
    fn text_output_shows_error_line() {
        let mut region = RegionBuffer::new();
        cs_catalog::render_error(
            &mut region,
            &cs_catalog::FetchError::request_failed(404, "Not Found"),
        );

        let text = render_text(Category::Keys, &region);

        assert!(text.contains("Keys (0)"));
        assert!(text.contains("Error: Not Found"));
    }

    #[test]
    fn category_table_lists_every_endpoint() {
        let table = render_category_table(&CatalogConfig::default());
        for category in Category::ALL {
            assert!(table.contains(&CatalogConfig::default().category_url(category)));
        }
    }

    #[test]
    fn only_failed_fetches_count_as_failures() {
        assert!(fetch_succeeded(&DispatchOutcome::Rendered { cards: 0 }));
        assert!(fetch_succeeded(&DispatchOutcome::Stale));
        assert!(!fetch_succeeded(&DispatchOutcome::Failed(
            cs_catalog::FetchError::request_failed(500, "Internal Server Error")
        )));
    }

    #[test]
    fn failed_fetch_prints_its_error_once() {
        let mut region = RegionBuffer::new();
        cs_catalog::render_error(
            &mut region,
            &cs_catalog::FetchError::request_failed(503, "Service Unavailable"),
        );

        let html = render_region(Category::Keys, &region, OutputFormat::Html).unwrap();

        assert_eq!(html.matches("Error: Service Unavailable").count(), 1);
    }
}
