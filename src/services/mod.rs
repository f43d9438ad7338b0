//! External content services
//!
//! One trait per service with an HTTP implementation each, plus the media
//! transcoder backing the sticker handler. All HTTP clients share a single
//! connection pool with a bounded per-request timeout.

pub mod completion;
pub mod media;
pub mod video;
pub mod weather;
pub mod wiki;

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::error::ApiError;

pub use completion::{CompletionService, HttpCompletionService};
pub use media::{ImageTranscoder, MediaTranscoder, STICKER_SIZE};
pub use video::{HttpVideoSearchService, VideoHit, VideoSearchService};
pub use weather::{HttpWeatherService, WeatherReport, WeatherService};
pub use wiki::{HttpWikiService, WikiService};

/// The handler set's view of the outside world.
pub struct Services {
    pub completion: Arc<dyn CompletionService>,
    pub weather: Arc<dyn WeatherService>,
    pub wiki: Arc<dyn WikiService>,
    pub video: Arc<dyn VideoSearchService>,
}

impl Services {
    /// Builds the HTTP-backed service set from configuration.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            completion: Arc::new(HttpCompletionService::new(
                client.clone(),
                &config.completion_base_url,
                &config.completion_model,
                &config.ai_api_key,
            )),
            weather: Arc::new(HttpWeatherService::new(
                client.clone(),
                &config.weather_base_url,
                &config.weather_api_key,
            )),
            wiki: Arc::new(HttpWikiService::new(client.clone(), &config.wiki_base_url)),
            video: Arc::new(HttpVideoSearchService::new(
                client,
                &config.video_base_url,
                &config.youtube_api_key,
            )),
        })
    }
}
