//! Encyclopedia-lookup service client
//!
//! Wraps the Wikipedia REST page-summary endpoint; the gateway depends only
//! on the `extract` field.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ApiError;

#[async_trait]
pub trait WikiService: Send + Sync {
    async fn summary(&self, query: &str) -> Result<String, ApiError>;
}

pub struct HttpWikiService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWikiService {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SummaryResponse {
    extract: Option<String>,
}

#[async_trait]
impl WikiService for HttpWikiService {
    async fn summary(&self, query: &str) -> Result<String, ApiError> {
        // Article titles use underscores for spaces.
        let title = query.trim().replace(' ', "_");
        let url = format!("{}/api/rest_v1/page/summary/{}", self.base_url, title);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let parsed: SummaryResponse = response.json().await?;
        parsed
            .extract
            .filter(|extract| !extract.is_empty())
            .ok_or_else(|| ApiError::MalformedBody("extract".into()))
    }
}
