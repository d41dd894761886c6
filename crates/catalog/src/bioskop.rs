//! Bioskop Online catalog API client.
//!
//! Only two read-only endpoints are used: `video/searchAll` and `video/title`.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::provider::CatalogProvider;
use crate::{CatalogError, Envelope, UpstreamTitle, lenient};

pub const API_BASE_URL: &str = "https://v1-api.bioskoponline.com/";

pub struct BioskopClient {
    base_url: String,
    client: reqwest::Client,
}

impl BioskopClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Envelope<T>, CatalogError> {
        let url = self.endpoint(path);
        debug!(url = %url, ?params, "catalog request");

        let resp = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                code: i64::from(status.as_u16()),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        resp.json()
            .await
            .map_err(|e| CatalogError::Decode(format!("parse JSON: {e}")))
    }
}

impl Default for BioskopClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for BioskopClient {
    fn name(&self) -> &str {
        "bioskoponline"
    }

    async fn search_titles(&self, keyword: &str) -> Result<Vec<UpstreamTitle>, CatalogError> {
        // Hits are decoded one by one so a malformed record is skipped.
        let hits = self
            .get_envelope::<Vec<serde_json::Value>>("video/searchAll", &[("keyword", keyword)])
            .await?
            .into_data()?;
        Ok(lenient::decode_items(hits))
    }

    async fn get_title(&self, hashed_id: &str) -> Result<UpstreamTitle, CatalogError> {
        self.get_envelope::<UpstreamTitle>("video/title", &[("hashed_id", hashed_id)])
            .await?
            .into_data()
    }
}
