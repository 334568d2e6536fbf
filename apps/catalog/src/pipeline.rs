//! One fetch per trigger: GET, status check, JSON parse, then render or error.

use std::cell::RefCell;

use serde_json::Value;

use crate::config::CatalogConfig;
use crate::domain::Category;
use crate::error::FetchError;
use crate::render::{render_error, render_items, DisplayRegion};
use crate::sequence::{RequestTracker, Ticket};

/// A response whose body has not been read yet.
#[allow(async_fn_in_trait)]
pub trait CatalogResponse {
    fn status(&self) -> u16;
    fn status_text(&self) -> String;
    async fn json(self) -> Result<Value, FetchError>;
}

/// Something that can issue a GET for a catalog URL.
///
/// Transport failures map to [`FetchError::NetworkFailure`]; HTTP error
/// statuses are returned as ordinary responses.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    type Response: CatalogResponse;

    async fn get(&self, url: &str) -> Result<Self::Response, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Rendered { cards: usize },
    Failed(FetchError),
    Stale,
}

pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

pub fn status_check<R: CatalogResponse>(response: &R) -> Result<(), FetchError> {
    let status = response.status();
    if is_success(status) {
        Ok(())
    } else {
        Err(FetchError::request_failed(status, &response.status_text()))
    }
}

/// Issue exactly one GET for `endpoint` and return the parsed item array.
pub async fn fetch_data<S: CatalogSource>(
    source: &S,
    config: &CatalogConfig,
    endpoint: &str,
) -> Result<Vec<Value>, FetchError> {
    let url = config.endpoint_url(endpoint);
    tracing::debug!(%url, "fetching catalog");

    let response = source.get(&url).await?;
    status_check(&response)?;

    match response.json().await? {
        Value::Array(items) => Ok(items),
        other => Err(FetchError::ParseFailed(format!(
            "expected a JSON array, got {}",
            value_kind(&other)
        ))),
    }
}

/// Apply a finished fetch to the region unless a newer request was issued since.
pub fn apply<R: DisplayRegion + ?Sized>(
    tracker: &RequestTracker,
    ticket: Ticket,
    category: Category,
    result: Result<Vec<Value>, FetchError>,
    region: &mut R,
) -> DispatchOutcome {
    if !tracker.is_current(ticket) {
        tracing::warn!(
            category = category.as_str(),
            ticket = ticket.value(),
            "discarding stale catalog response"
        );
        return DispatchOutcome::Stale;
    }

    match result {
        Ok(items) => {
            render_items(region, category, &items);
            DispatchOutcome::Rendered { cards: items.len() }
        }
        Err(error) => {
            tracing::warn!(category = category.as_str(), %error, "catalog fetch failed");
            render_error(region, &error);
            DispatchOutcome::Failed(error)
        }
    }
}

/// Fetch one category and render the outcome into `region`.
///
/// The region is borrowed only after the response settles, so other
/// dispatches may run while this one is waiting.
pub async fn dispatch<S, R>(
    source: &S,
    config: &CatalogConfig,
    category: Category,
    tracker: &RequestTracker,
    region: &RefCell<R>,
) -> DispatchOutcome
where
    S: CatalogSource,
    R: DisplayRegion,
{
    let ticket = tracker.issue();
    let result = fetch_data(source, config, category.endpoint()).await;
    apply(tracker, ticket, category, result, &mut *region.borrow_mut())
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RegionBuffer;
    use crate::testing::{MemorySource, StubResponse};
    use serde_json::json;

    const WEAPONS_URL: &str = "https://bymykel.github.io/CSGO-API/api/en/skins.json";

    #[tokio::test]
    async fn success_renders_one_card_per_item() {
        let source = MemorySource::new().with(
            WEAPONS_URL,
            StubResponse::ok(
                r##"[{"name":"AK-47","category":{"name":"Rifle"},"rarity":{"name":"Classified","color":"#d32ce6"},"image":"ak47.png"}]"##,
            ),
        );
        let region = RefCell::new(RegionBuffer::new());
        let tracker = RequestTracker::new();

        let outcome = dispatch(
            &source,
            &CatalogConfig::default(),
            Category::Weapons,
            &tracker,
            &region,
        )
        .await;

        assert_eq!(outcome, DispatchOutcome::Rendered { cards: 1 });
        assert_eq!(source.requests(), [WEAPONS_URL]);
        let region = region.borrow();
        let card = region.cards().next().cloned();
        let Some(card) = card else {
            panic!("no card rendered");
        };
        assert_eq!(card.heading, "AK-47");
        assert_eq!(card.lines[0].value, "Rifle");
        assert_eq!(card.lines[1].color.as_deref(), Some("#d32ce6"));
        assert_eq!(card.image.alt, "AK-47");
    }

    #[tokio::test]
    async fn empty_array_renders_nothing_and_no_error() {
        let source = MemorySource::new().with(WEAPONS_URL, StubResponse::ok("[]"));
        let region = RefCell::new(RegionBuffer::new());
        let tracker = RequestTracker::new();

        let outcome = dispatch(
            &source,
            &CatalogConfig::default(),
            Category::Weapons,
            &tracker,
            &region,
        )
        .await;

        assert_eq!(outcome, DispatchOutcome::Rendered { cards: 0 });
        assert!(region.borrow().is_empty());
    }

    #[tokio::test]
    async fn http_failure_shows_single_error_with_status_text() {
        let source = MemorySource::new().with(
            WEAPONS_URL,
            StubResponse::status(500, "Internal Server Error", "oops"),
        );
        let region = RefCell::new(RegionBuffer::new());
        region
            .borrow_mut()
            .append_card(&crate::projection::Card::project(
                Category::Weapons,
                &json!({"name": "stale"}),
            ));
        let tracker = RequestTracker::new();

        let outcome = dispatch(
            &source,
            &CatalogConfig::default(),
            Category::Weapons,
            &tracker,
            &region,
        )
        .await;

        assert!(matches!(
            outcome,
            DispatchOutcome::Failed(FetchError::RequestFailed { status: 500, .. })
        ));
        let region = region.borrow();
        assert_eq!(region.len(), 1);
        assert_eq!(region.cards().count(), 0);
        assert!(region
            .error()
            .is_some_and(|message| message.contains("Internal Server Error")));
    }

    #[tokio::test]
    async fn malformed_json_surfaces_like_http_failure() {
        let source = MemorySource::new().with(WEAPONS_URL, StubResponse::ok("[{\"name\":"));
        let region = RefCell::new(RegionBuffer::new());
        let tracker = RequestTracker::new();

        let outcome = dispatch(
            &source,
            &CatalogConfig::default(),
            Category::Weapons,
            &tracker,
            &region,
        )
        .await;

        assert!(matches!(outcome, DispatchOutcome::Failed(FetchError::ParseFailed(_))));
        assert_eq!(region.borrow().len(), 1);
        assert!(region.borrow().error().is_some());
    }

    #[tokio::test]
    async fn non_array_body_is_a_parse_failure() {
        let source = MemorySource::new().with(WEAPONS_URL, StubResponse::ok(r#"{"name":"x"}"#));

        let result = fetch_data(&source, &CatalogConfig::default(), "skins.json").await;

        assert_eq!(
            result,
            Err(FetchError::ParseFailed(
                "expected a JSON array, got an object".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn network_failure_is_routed_to_the_error_line() {
        let source = MemorySource::new();
        let region = RefCell::new(RegionBuffer::new());
        let tracker = RequestTracker::new();

        let outcome = dispatch(
            &source,
            &CatalogConfig::default(),
            Category::Stickers,
            &tracker,
            &region,
        )
        .await;

        assert!(matches!(outcome, DispatchOutcome::Failed(FetchError::NetworkFailure(_))));
        assert_eq!(region.borrow().len(), 1);
    }

    #[test]
    fn stale_completion_does_not_overwrite_newer_render() {
        let tracker = RequestTracker::new();
        let mut region = RegionBuffer::new();

        let slow = tracker.issue();
        let fast = tracker.issue();

        let fresh = apply(
            &tracker,
            fast,
            Category::Keys,
            Ok(vec![json!({"name": "Key"})]),
            &mut region,
        );
        let stale = apply(
            &tracker,
            slow,
            Category::Weapons,
            Ok(vec![json!({"name": "AK-47"}), json!({"name": "M4A4"})]),
            &mut region,
        );

        assert_eq!(fresh, DispatchOutcome::Rendered { cards: 1 });
        assert_eq!(stale, DispatchOutcome::Stale);
        assert_eq!(region.len(), 1);
        assert_eq!(region.cards().next().map(|c| c.class), Some("key"));
    }

    #[test]
    fn success_range_is_2xx_only() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(199));
        assert!(!is_success(304));
        assert!(!is_success(404));
    }
}
