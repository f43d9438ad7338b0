//! Weather-lookup service client

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ApiError;

/// Current conditions for one city, metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temp_c: f64,
    pub humidity: f64,
    pub description: String,
}

#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn lookup(&self, city: &str) -> Result<WeatherReport, ApiError>;
}

pub struct HttpWeatherService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpWeatherService {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
    #[serde(default)]
    weather: Vec<WeatherCondition>,
}

#[derive(Deserialize)]
struct WeatherMain {
    temp: f64,
    humidity: f64,
}

#[derive(Deserialize)]
struct WeatherCondition {
    description: String,
}

#[async_trait]
impl WeatherService for HttpWeatherService {
    async fn lookup(&self, city: &str) -> Result<WeatherReport, ApiError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let parsed: WeatherResponse = response.json().await?;
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::MalformedBody("weather[0].description".into()))?;

        Ok(WeatherReport {
            temp_c: parsed.main.temp,
            humidity: parsed.main.humidity,
            description: condition.description,
        })
    }
}
