//! Field projection from raw catalog records into display cards.
//!
//! Records are kept as the remote `serde_json::Value` and read by JSON
//! pointer. A field that is missing or has the wrong shape projects to an
//! empty string, the same gap a template interpolation would leave.

use serde::Serialize;
use serde_json::Value;

use crate::domain::Category;

/// One optional descriptive line a category may show on its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Category,
    Rarity,
    Type,
    Team,
}

impl Field {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Rarity => "Rarity",
            Self::Type => "Type",
            Self::Team => "Team",
        }
    }

    const fn pointer(self) -> &'static str {
        match self {
            Self::Category => "/category/name",
            Self::Rarity => "/rarity/name",
            Self::Type => "/type",
            Self::Team => "/team/name",
        }
    }

    /// Pointer to the colour applied to this line's value, if the field is coloured.
    const fn color_pointer(self) -> Option<&'static str> {
        match self {
            Self::Rarity => Some("/rarity/color"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLine {
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
}

/// Display form of one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub class: &'static str,
    pub heading: String,
    pub lines: Vec<CardLine>,
    pub image: CardImage,
}

impl Card {
    pub fn project(category: Category, item: &Value) -> Self {
        let name = text_at(item, "/name");

        let lines = category
            .fields()
            .iter()
            .map(|field| CardLine {
                label: field.label(),
                value: text_at(item, field.pointer()),
                color: field.color_pointer().map(|pointer| text_at(item, pointer)),
            })
            .collect();

        Self {
            class: category.card_class(),
            image: CardImage {
                src: text_at(item, "/image"),
                alt: name.clone(),
                width: category.image_width(),
            },
            heading: name,
            lines,
        }
    }
}

/// Project every item in order. No filtering, sorting or deduplication.
pub fn project_all(category: Category, items: &[Value]) -> Vec<Card> {
    items
        .iter()
        .map(|item| Card::project(category, item))
        .collect()
}

fn text_at(item: &Value, pointer: &str) -> String {
    match item.pointer(pointer) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn weapon_projects_category_and_coloured_rarity() {
        let item = json!({
            "name": "AK-47",
            "category": {"name": "Rifle"},
            "rarity": {"name": "Classified", "color": "#d32ce6"},
            "image": "ak47.png"
        });

        let card = Card::project(Category::Weapons, &item);

        assert_eq!(card.class, "weapon");
        assert_eq!(card.heading, "AK-47");
        assert_eq!(card.lines.len(), 2);
        assert_eq!(card.lines[0].label, "Category");
        assert_eq!(card.lines[0].value, "Rifle");
        assert_eq!(card.lines[0].color, None);
        assert_eq!(card.lines[1].value, "Classified");
        assert_eq!(card.lines[1].color.as_deref(), Some("#d32ce6"));
        assert_eq!(card.image.src, "ak47.png");
        assert_eq!(card.image.alt, "AK-47");
        assert_eq!(card.image.width, 300);
    }

    #[test]
    fn missing_fields_degrade_to_empty_text() {
        let item = json!({"name": "Operation Breakout Case", "team": "not an object"});

        let crate_card = Card::project(Category::Crates, &item);
        assert_eq!(crate_card.lines[0].label, "Type");
        assert_eq!(crate_card.lines[0].value, "");
        assert_eq!(crate_card.image.src, "");

        let agent_card = Card::project(Category::Agents, &item);
        assert_eq!(agent_card.lines[0].value, "");
    }

    #[test]
    fn non_object_items_still_produce_a_card() {
        let cards = project_all(Category::Keys, &[json!(null), json!(42)]);
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|card| card.heading.is_empty()));
    }

    #[test]
    fn projection_keeps_source_order_and_duplicates() {
        let items = vec![json!({"name": "B"}), json!({"name": "A"}), json!({"name": "B"})];
        let headings: Vec<_> = project_all(Category::Collections, &items)
            .into_iter()
            .map(|card| card.heading)
            .collect();
        assert_eq!(headings, ["B", "A", "B"]);
    }
}
