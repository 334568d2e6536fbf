use std::fmt::{self, Write as _};

use serde::Serialize;
use serde_json::Value;

use crate::domain::Category;
use crate::projection::{project_all, Card};

/// A surface whose children are replaced wholesale by each render or error.
///
/// Implementations only append; clearing is always requested first by
/// [`render_items`] and [`render_error`].
pub trait DisplayRegion {
    fn clear(&mut self);
    fn append_card(&mut self, card: &Card);
    fn append_error(&mut self, message: &str);
}

/// Replace the region's contents with one card per item.
pub fn render_items<R: DisplayRegion + ?Sized>(region: &mut R, category: Category, items: &[Value]) {
    region.clear();
    for card in project_all(category, items) {
        region.append_card(&card);
    }
    tracing::debug!(category = category.as_str(), cards = items.len(), "rendered catalog");
}

/// Replace the region's contents with a single error line.
pub fn render_error<R: DisplayRegion + ?Sized>(region: &mut R, error: &dyn fmt::Display) {
    let message = error.to_string();
    region.clear();
    region.append_error(&message);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RegionNode {
    Card(Card),
    Error { message: String },
}

/// In-memory display region. Backs the terminal front-end and tests.
#[derive(Debug, Default, Clone)]
pub struct RegionBuffer {
    nodes: Vec<RegionNode>,
}

impl RegionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[RegionNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.nodes.iter().filter_map(|node| match node {
            RegionNode::Card(card) => Some(card),
            RegionNode::Error { .. } => None,
        })
    }

    pub fn error(&self) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            RegionNode::Error { message } => Some(message.as_str()),
            RegionNode::Card(_) => None,
        })
    }

    pub fn to_html(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                RegionNode::Card(card) => card_markup(card),
                RegionNode::Error { message } => error_markup(message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DisplayRegion for RegionBuffer {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append_card(&mut self, card: &Card) {
        self.nodes.push(RegionNode::Card(card.clone()));
    }

    fn append_error(&mut self, message: &str) {
        self.nodes.push(RegionNode::Error {
            message: message.to_string(),
        });
    }
}

pub fn card_markup(card: &Card) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="{}"><h2>{}</h2>"#,
        card.class,
        escape_html(&card.heading)
    );
    for line in &card.lines {
        match &line.color {
            Some(color) => {
                let _ = write!(
                    html,
                    r#"<p>{}: <span style="color: {}">{}</span></p>"#,
                    line.label,
                    escape_html(color),
                    escape_html(&line.value)
                );
            }
            None => {
                let _ = write!(html, "<p>{}: {}</p>", line.label, escape_html(&line.value));
            }
        }
    }
    let _ = write!(
        html,
        r#"<img src="{}" alt="{}" width="{}"></div>"#,
        escape_html(&card.image.src),
        escape_html(&card.image.alt),
        card.image.width
    );
    html
}

pub fn error_markup(message: &str) -> String {
    format!(r#"<p class="error">{}</p>"#, escape_html(message))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
