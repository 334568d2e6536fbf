use cs_catalog::{BindError, Card, CardLine, DisplayRegion, TriggerSurface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// The page's results container.
pub struct DomRegion {
    document: Document,
    root: Element,
}

impl DomRegion {
    pub fn locate(document: &Document, id: &str) -> Result<Self, BindError> {
        let root = document
            .get_element_by_id(id)
            .ok_or_else(|| BindError::MissingRegion(id.to_string()))?;
        Ok(Self {
            document: document.clone(),
            root,
        })
    }

    fn element(&self, tag: &str, text: Option<&str>) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        if let Some(text) = text {
            element.set_text_content(Some(text));
        }
        Ok(element)
    }

    fn build_card(&self, card: &Card) -> Result<Element, JsValue> {
        let container = self.element("div", None)?;
        container.set_class_name(card.class);
        let heading = self.element("h2", Some(&card.heading))?;
        container.append_child(&heading)?;

        for line in &card.lines {
            let paragraph = self.element("p", None)?;
            paragraph.set_text_content(Some(&line_text(line)));
            if let Some(style) = value_style(line) {
                let span = self.element("span", Some(&line.value))?;
                span.set_attribute("style", &style)?;
                paragraph.append_child(&span)?;
            }
            container.append_child(&paragraph)?;
        }

        let image = self.element("img", None)?;
        image.set_attribute("src", &card.image.src)?;
        image.set_attribute("alt", &card.image.alt)?;
        image.set_attribute("width", &card.image.width.to_string())?;
        container.append_child(&image)?;

        Ok(container)
    }

    fn append(&self, node: Result<Element, JsValue>) {
        if let Err(error) = node.and_then(|element| self.root.append_child(&element)) {
            web_sys::console::error_2(&"Failed to update results".into(), &error);
        }
    }
}

impl DisplayRegion for DomRegion {
    fn clear(&mut self) {
        self.root.set_text_content(None);
    }

    fn append_card(&mut self, card: &Card) {
        self.append(self.build_card(card));
    }

    fn append_error(&mut self, message: &str) {
        let paragraph = self.element("p", Some(message)).map(|element| {
            element.set_class_name("error");
            element
        });
        self.append(paragraph);
    }
}

/// Paragraph text of a field line. Coloured values go in a child span.
fn line_text(line: &CardLine) -> String {
    if line.color.is_some() {
        format!("{}: ", line.label)
    } else {
        format!("{}: {}", line.label, line.value)
    }
}

fn value_style(line: &CardLine) -> Option<String> {
    line.color.as_ref().map(|color| format!("color: {color}"))
}

/// Attaches click listeners to trigger elements by id.
pub struct DomTriggers {
    document: Document,
}

impl DomTriggers {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }
}

impl TriggerSurface for DomTriggers {
    fn listen(&mut self, trigger_id: &str, handler: Box<dyn FnMut()>) -> Result<(), BindError> {
        let element = self
            .document
            .get_element_by_id(trigger_id)
            .ok_or_else(|| BindError::MissingTrigger(trigger_id.to_string()))?;

        let closure = Closure::wrap(handler);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|error| BindError::Listener {
                id: trigger_id.to_string(),
                reason: crate::fetch::js_message(&error),
            })?;

        // Listeners live as long as the page.
        closure.forget();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_catalog::Category;
    use serde_json::json;

    fn ak47() -> Card {
        Card::project(
            Category::Weapons,
            &json!({
                "name": "AK-47",
                "category": {"name": "Rifle"},
                "rarity": {"name": "Classified", "color": "#d32ce6"},
                "image": "ak47.png"
            }),
        )
    }

    #[test]
    fn plain_lines_carry_label_and_value() {
        let card = ak47();
        assert_eq!(line_text(&card.lines[0]), "Category: Rifle");
        assert_eq!(value_style(&card.lines[0]), None);
    }

    #[test]
    fn coloured_lines_leave_the_value_to_a_span() {
        let card = ak47();
        assert_eq!(line_text(&card.lines[1]), "Rarity: ");
        assert_eq!(value_style(&card.lines[1]).as_deref(), Some("color: #d32ce6"));
        assert_eq!(card.lines[1].value, "Classified");
    }
}
