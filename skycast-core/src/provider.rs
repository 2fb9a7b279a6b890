use crate::{
    Config, ForecastResult, Location, UnitMode, WeatherError,
    provider::{nominatim::NominatimGeocoder, open_meteo::OpenMeteoProvider},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod nominatim;
pub mod open_meteo;

/// Source of forecast data for a resolved location.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, location: &Location, unit: UnitMode)
    -> Result<ForecastResult, WeatherError>;
}

/// Free-text place search. `Ok(None)` means the service had no candidate.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn search(&self, query: &str) -> Result<Option<Location>, WeatherError>;
}

/// Construct the forecast provider, honouring a configured endpoint override.
pub fn forecast_provider_from_config(config: &Config) -> Box<dyn ForecastProvider> {
    Box::new(OpenMeteoProvider::with_base_url(config.forecast_url()))
}

pub fn geocoder_from_config(config: &Config) -> Box<dyn Geocoder> {
    Box::new(NominatimGeocoder::with_base_url(config.geocoding_url()))
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
