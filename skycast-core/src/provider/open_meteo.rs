use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    config::DEFAULT_FORECAST_URL,
    model::{CurrentWeather, DailySeries, ForecastResult, HourlySeries, Location},
    provider::truncate_body,
    units::UnitMode,
    WeatherError,
};

use super::ForecastProvider;

const SERVICE: &str = "Open-Meteo";
const HOURLY_FIELDS: &str = "temperature_2m,weathercode,windspeed_10m";
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_FORECAST_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.to_string(), http: Client::new() }
    }

    fn query(location: &Location, unit: UnitMode) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];
        params.extend(
            unit.system()
                .query_params()
                .into_iter()
                .map(|(name, value)| (name, value.to_string())),
        );
        params
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    timezone: Option<String>,
    current_weather: CurrentWeather,
    hourly: HourlySeries,
    daily: DailySeries,
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    #[instrument(skip(self), fields(city = %location.city), level = "debug")]
    async fn fetch(
        &self,
        location: &Location,
        unit: UnitMode,
    ) -> Result<ForecastResult, WeatherError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&Self::query(location, unit))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                service: SERVICE,
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OmResponse = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Parse { service: SERVICE, source })?;

        if !parsed.hourly.is_aligned() || !parsed.daily.is_aligned() {
            tracing::warn!("{SERVICE} returned series of unequal length");
        }

        tracing::debug!(
            hourly = parsed.hourly.len(),
            daily = parsed.daily.len(),
            "forecast received"
        );

        Ok(ForecastResult {
            current: parsed.current_weather,
            hourly: parsed.hourly,
            daily: parsed.daily,
            location: location.clone(),
            timezone: parsed.timezone,
        })
    }
}
