use color_eyre::Result;
use cs_catalog::{CatalogResponse, CatalogSource, FetchError};
use serde_json::Value;

/// Catalog source backed by a shared `reqwest` client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cs_catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[derive(Debug)]
pub struct HttpResponse {
    inner: reqwest::Response,
}

impl CatalogResponse for HttpResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn status_text(&self) -> String {
        self.inner
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string()
    }

    async fn json(self) -> Result<Value, FetchError> {
        let body = self
            .inner
            .text()
            .await
            .map_err(|e| FetchError::NetworkFailure(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl CatalogSource for HttpSource {
    type Response = HttpResponse;

    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let inner = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkFailure(e.to_string()))?;
        Ok(HttpResponse { inner })
    }
}
