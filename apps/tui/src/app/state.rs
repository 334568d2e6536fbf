use cs_catalog::pipeline::apply;
use cs_catalog::{Category, DispatchOutcome, FetchError, RegionBuffer, RequestTracker, Ticket};
use serde_json::Value;

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

/// A finished fetch, delivered back to the event loop.
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub category: Category,
    pub result: Result<Vec<Value>, FetchError>,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub selected_index: usize,
    pub region: RegionBuffer,
    pub shown: Option<Category>,
    pub tracker: RequestTracker,
    pub in_flight: usize,
    pub status_message: String,
    pub show_help: bool,
    pub scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            selected_index: 0,
            region: RegionBuffer::new(),
            shown: None,
            tracker: RequestTracker::new(),
            in_flight: 0,
            status_message: "Pick a category and press Enter".to_string(),
            show_help: false,
            scroll: 0,
        }
    }

    pub fn selected_category(&self) -> Category {
        Category::from_index(self.selected_index).unwrap_or(Category::Weapons)
    }

    pub fn select_next(&mut self) {
        self.selected_index = wrap_increment(self.selected_index, Category::ALL.len());
    }

    pub fn select_previous(&mut self) {
        self.selected_index = wrap_decrement(self.selected_index, Category::ALL.len());
    }

    /// Record a new request for `category` and hand back its ticket.
    pub fn begin_fetch(&mut self, category: Category) -> Ticket {
        self.selected_index = category.index();
        self.in_flight += 1;
        self.status_message = format!("Fetching {}...", category.label());
        self.tracker.issue()
    }

    /// Apply a finished fetch. Responses superseded by a newer request are dropped.
    pub fn complete(&mut self, completion: Completion) -> DispatchOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        let Completion {
            ticket,
            category,
            result,
        } = completion;
        let outcome = apply(&self.tracker, ticket, category, result, &mut self.region);

        match &outcome {
            DispatchOutcome::Rendered { cards } => {
                self.shown = Some(category);
                self.scroll = 0;
                self.status_message = format!("{cards} {} loaded", category.label());
            }
            DispatchOutcome::Failed(_) => {
                self.shown = None;
                self.scroll = 0;
                self.status_message = format!("Failed to fetch {}", category.label());
            }
            DispatchOutcome::Stale => {}
        }

        outcome
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let last = self.region.len().saturating_sub(1);
        self.scroll = (self.scroll + amount).min(last);
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }
}
