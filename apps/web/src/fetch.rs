use cs_catalog::{CatalogResponse, CatalogSource, FetchError};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Catalog source backed by the browser's `fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSource;

pub struct BrowserResponse(Response);

impl CatalogResponse for BrowserResponse {
    fn status(&self) -> u16 {
        self.0.status()
    }

    fn status_text(&self) -> String {
        self.0.status_text()
    }

    async fn json(self) -> Result<Value, FetchError> {
        let promise = self
            .0
            .json()
            .map_err(|error| FetchError::ParseFailed(js_message(&error)))?;

        let json = JsFuture::from(promise)
            .await
            .map_err(|error| FetchError::ParseFailed(js_message(&error)))?;

        serde_wasm_bindgen::from_value::<Value>(json)
            .map_err(|error| FetchError::ParseFailed(error.to_string()))
    }
}

impl CatalogSource for BrowserSource {
    type Response = BrowserResponse;

    async fn get(&self, url: &str) -> Result<BrowserResponse, FetchError> {
        let Some(window) = web_sys::window() else {
            return Err(FetchError::NetworkFailure("no window available".to_string()));
        };

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|error| FetchError::NetworkFailure(js_message(&error)))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|error| FetchError::NetworkFailure(js_message(&error)))?;

        let response = response_value
            .dyn_into::<Response>()
            .map_err(|_| FetchError::NetworkFailure("fetch did not return a Response".to_string()))?;

        Ok(BrowserResponse(response))
    }
}

/// Message of a thrown JS value, as `error.message` would read it.
pub fn js_message(value: &JsValue) -> String {
    let error_message = value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()));
    thrown_message(error_message, value.as_string(), || format!("{value:?}"))
}

/// An `Error`'s message wins over a thrown string; anything else is debug-printed.
fn thrown_message(
    error_message: Option<String>,
    thrown_string: Option<String>,
    debug: impl FnOnce() -> String,
) -> String {
    error_message.or(thrown_string).unwrap_or_else(debug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_catalog::pipeline::status_check;

    /// Status line as the browser exposes it on a `Response`.
    struct StatusLine {
        status: u16,
        status_text: &'static str,
    }

    impl CatalogResponse for StatusLine {
        fn status(&self) -> u16 {
            self.status
        }

        fn status_text(&self) -> String {
            self.status_text.to_string()
        }

        async fn json(self) -> Result<Value, FetchError> {
            Ok(Value::Array(Vec::new()))
        }
    }

    #[test]
    fn error_message_takes_priority() {
        let message = thrown_message(
            Some("Failed to fetch".to_string()),
            Some("ignored".to_string()),
            || "debug".to_string(),
        );
        assert_eq!(message, "Failed to fetch");
    }

    #[test]
    fn thrown_strings_are_used_verbatim() {
        let message = thrown_message(None, Some("NetworkError".to_string()), || {
            "debug".to_string()
        });
        assert_eq!(message, "NetworkError");
    }

    #[test]
    fn other_values_fall_back_to_debug_output() {
        let message = thrown_message(None, None, || "JsValue(undefined)".to_string());
        assert_eq!(message, "JsValue(undefined)");
    }

    #[test]
    fn http_failure_shows_the_status_text() {
        let response = StatusLine {
            status: 404,
            status_text: "Not Found",
        };

        let error = status_check(&response).unwrap_err();

        assert_eq!(error.to_string(), "Error: Not Found");
    }

    #[test]
    fn empty_status_text_uses_the_reason_phrase() {
        // HTTP/2 responses arrive with an empty statusText
        let response = StatusLine {
            status: 503,
            status_text: "",
        };

        let error = status_check(&response).unwrap_err();

        assert_eq!(error.to_string(), "Error: Service Unavailable");
    }

    #[test]
    fn success_statuses_pass() {
        let response = StatusLine {
            status: 200,
            status_text: "OK",
        };
        assert!(status_check(&response).is_ok());
    }
}
