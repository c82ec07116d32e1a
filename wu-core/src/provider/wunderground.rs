use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;

use crate::model::{Record, WeatherRequest};

use super::{WeatherProvider, build_url};

#[derive(Clone)]
pub struct WundergroundProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WundergroundProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

impl fmt::Debug for WundergroundProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WundergroundProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl WeatherProvider for WundergroundProvider {
    async fn fetch(&self, request: &WeatherRequest) -> Result<Record> {
        let category = request.category;
        let url = build_url(&self.base_url, &self.api_key, request);
        tracing::debug!(
            url = %url.replace(self.api_key.as_str(), "<key>"),
            "requesting {category}"
        );

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send {category} request to Weather Underground"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read Weather Underground {category} response body"))?;
        tracing::debug!(%status, bytes = body.len(), "received {category} response");

        if !status.is_success() {
            return Err(anyhow!(
                "Weather Underground {category} request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Record::from_json(category, &body)
            .with_context(|| format!("Failed to parse Weather Underground {category} JSON"))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
