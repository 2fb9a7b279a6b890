use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    WeatherError, config::DEFAULT_GEOCODING_URL, model::Location, provider::truncate_body,
};

use super::Geocoder;

const SERVICE: &str = "Nominatim";
// Nominatim's usage policy requires an identifying agent.
const AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));
const FALLBACK_COUNTRY: &str = "World";

/// OpenStreetMap Nominatim search. Best effort: no SLA, rate limited.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    http: Client,
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_GEOCODING_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), http: Client::new() }
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct NmCandidate {
    lat: String,
    lon: String,
    display_name: String,
}

impl NmCandidate {
    fn into_location(self) -> Result<Location, WeatherError> {
        let parse = |v: &str| v.trim().parse::<f64>().ok();
        let (Some(latitude), Some(longitude)) = (parse(&self.lat), parse(&self.lon)) else {
            return Err(WeatherError::InvalidCandidate(format!(
                "lat={}, lon={}",
                self.lat, self.lon
            )));
        };

        // display_name is most-specific-first: "Paris, Ile-de-France, France"
        let mut segments = self.display_name.split(',').map(str::trim);
        let city = segments.next().unwrap_or_default().to_string();
        let country = match self.display_name.rsplit(',').next().map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => FALLBACK_COUNTRY.to_string(),
        };

        Ok(Location { latitude, longitude, city, country })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self), level = "debug")]
    async fn search(&self, query: &str) -> Result<Option<Location>, WeatherError> {
        let url = format!("{}/search", self.base_url);

        let res = self
            .http
            .get(&url)
            .header(USER_AGENT, AGENT)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
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

        let candidates: Vec<NmCandidate> = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Parse { service: SERVICE, source })?;

        candidates.into_iter().next().map(NmCandidate::into_location).transpose()
    }
}
