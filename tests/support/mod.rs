//! Test doubles shared by the integration tests: a scripted transport that
//! replays canned event streams, a link that records every outbound send,
//! and static content services.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, mpsc};

use waygate::config::GatewayConfig;
use waygate::error::{ApiError, TransportError};
use waygate::services::{
    CompletionService, Services, VideoHit, VideoSearchService, WeatherReport, WeatherService,
    WikiService,
};
use waygate::transport::{
    CredentialBlob, InboundEvent, OutboundPayload, Transport, TransportLink, TransportSession,
};

/// Records outbound payloads; serves seeded media on download.
pub struct RecordingLink {
    sent: Mutex<Vec<(String, OutboundPayload)>>,
    media: Option<Vec<u8>>,
}

impl RecordingLink {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            media: None,
        }
    }

    pub fn with_media(media: Vec<u8>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            media: Some(media),
        }
    }

    pub async fn sent_payloads(&self) -> Vec<(String, OutboundPayload)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl TransportLink for RecordingLink {
    async fn send(&self, target: &str, payload: &OutboundPayload) -> Result<(), TransportError> {
        self.sent
            .lock()
            .await
            .push((target.to_string(), payload.clone()));
        Ok(())
    }

    async fn download_media(&self, _media_ref: &str) -> Result<Vec<u8>, TransportError> {
        self.media
            .clone()
            .ok_or(TransportError::MediaDownload("no media seeded".into()))
    }
}

/// Replays one canned event stream per connect call.
pub struct ScriptedTransport {
    scripts: Mutex<VecDeque<Vec<InboundEvent>>>,
    pub link: Arc<RecordingLink>,
    connects: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(scripts: Vec<Vec<InboundEvent>>) -> Self {
        Self::with_link(scripts, RecordingLink::new())
    }

    /// A transport whose link serves `media` for every download, for
    /// scripts that exercise media-backed commands.
    pub fn with_media(scripts: Vec<Vec<InboundEvent>>, media: Vec<u8>) -> Self {
        Self::with_link(scripts, RecordingLink::with_media(media))
    }

    fn with_link(scripts: Vec<Vec<InboundEvent>>, link: RecordingLink) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            link: Arc::new(link),
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn connect(
        &self,
        _credentials: Option<CredentialBlob>,
    ) -> Result<TransportSession, TransportError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let script = self
            .scripts
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| TransportError::Connect("no scripted session left".into()))?;

        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(async move {
            for event in script {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });

        Ok(TransportSession {
            link: self.link.clone(),
            events: rx,
        })
    }
}

/// Content service that always answers with the same string.
pub struct StaticService(pub &'static str);

#[async_trait]
impl CompletionService for StaticService {
    async fn complete(&self, _prompt: &str) -> Result<String, ApiError> {
        Ok(self.0.to_string())
    }
}

#[async_trait]
impl WeatherService for StaticService {
    async fn lookup(&self, _city: &str) -> Result<WeatherReport, ApiError> {
        Ok(WeatherReport {
            temp_c: 18.0,
            humidity: 60.0,
            description: self.0.to_string(),
        })
    }
}

#[async_trait]
impl WikiService for StaticService {
    async fn summary(&self, _query: &str) -> Result<String, ApiError> {
        Ok(self.0.to_string())
    }
}

#[async_trait]
impl VideoSearchService for StaticService {
    async fn search(&self, _query: &str) -> Result<VideoHit, ApiError> {
        Ok(VideoHit {
            video_id: "abc123".to_string(),
            title: self.0.to_string(),
            description: String::new(),
        })
    }
}

pub fn static_services() -> Services {
    Services {
        completion: Arc::new(StaticService("a completion")),
        weather: Arc::new(StaticService("clear sky")),
        wiki: Arc::new(StaticService("an extract")),
        video: Arc::new(StaticService("a title")),
    }
}

/// Config pointing the credential store at a scratch path; no network
/// defaults matter because the tests inject their own services.
pub fn test_config(credentials_path: &std::path::Path) -> GatewayConfig {
    GatewayConfig {
        credentials_path: credentials_path.to_string_lossy().into_owned(),
        reconnect_delay_secs: 0,
        max_connect_retries: 2,
        request_timeout_secs: 5,
        ai_api_key: "test-key".to_string(),
        weather_api_key: "test-key".to_string(),
        youtube_api_key: "test-key".to_string(),
        completion_base_url: "http://127.0.0.1:9".to_string(),
        completion_model: "test-model".to_string(),
        weather_base_url: "http://127.0.0.1:9".to_string(),
        wiki_base_url: "http://127.0.0.1:9".to_string(),
        video_base_url: "http://127.0.0.1:9".to_string(),
    }
}
