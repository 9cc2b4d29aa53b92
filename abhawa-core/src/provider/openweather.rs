use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::AcquireError,
    model::{CurrentReading, ForecastPeriod, ForecastReadings},
};

use super::WeatherProvider;

/// HTTP client for the OpenWeather current-conditions and 5-day/3-hour
/// forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    country_code: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key(),
            country_code: config.country_code.clone(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            http: Client::new(),
        }
    }

    async fn get_body(&self, endpoint: &str, location: &str) -> Result<String, AcquireError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let place = format!("{},{}", location, self.country_code);

        debug!(endpoint, place = %place, "issuing weather request");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", place.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(AcquireError::Rejected {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, location: &str) -> Result<CurrentReading, AcquireError> {
        let body = self.get_body("weather", location).await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .ok_or(AcquireError::MissingField("weather"))?;

        Ok(CurrentReading {
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            condition,
            utc_offset_secs: parsed.timezone,
        })
    }

    async fn forecast(&self, location: &str) -> Result<ForecastReadings, AcquireError> {
        let body = self.get_body("forecast", location).await?;
        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        let periods = parsed
            .list
            .into_iter()
            .map(|entry| {
                let condition = entry
                    .weather
                    .into_iter()
                    .next()
                    .map(|w| w.main)
                    .ok_or(AcquireError::MissingField("weather"))?;

                Ok(ForecastPeriod {
                    timestamp: entry.dt,
                    temperature_c: entry.main.temp,
                    humidity_pct: entry.main.humidity,
                    condition,
                })
            })
            .collect::<Result<Vec<_>, AcquireError>>()?;

        Ok(ForecastReadings {
            utc_offset_secs: parsed.city.timezone,
            periods,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    timezone: i32,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
