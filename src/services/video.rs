//! Video-search service client

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ApiError;

/// Top search hit for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
    pub description: String,
}

impl VideoHit {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

#[async_trait]
pub trait VideoSearchService: Send + Sync {
    async fn search(&self, query: &str) -> Result<VideoHit, ApiError>;
}

pub struct HttpVideoSearchService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpVideoSearchService {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
}

#[async_trait]
impl VideoSearchService for HttpVideoSearchService {
    async fn search(&self, query: &str) -> Result<VideoHit, ApiError> {
        let url = format!("{}/youtube/v3/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let parsed: SearchResponse = response.json().await?;
        parsed
            .items
            .into_iter()
            .next()
            .map(|item| VideoHit {
                video_id: item.id.video_id,
                title: item.snippet.title,
                description: item.snippet.description,
            })
            .ok_or_else(|| ApiError::MalformedBody("items[0]".into()))
    }
}
