//! Errors raised while resolving a location or fetching a forecast.

use thiserror::Error;

pub const FETCH_FAILED_MESSAGE: &str = "Could not fetch weather data. Please try again later.";
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name to search.";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("No city name given")]
    EmptyCity,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse {service} JSON: {source}")]
    Parse {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Geocoding candidate has invalid coordinates: {0}")]
    InvalidCandidate(String),
}

impl WeatherError {
    /// Banner text shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyCity => EMPTY_CITY_MESSAGE,
            _ => FETCH_FAILED_MESSAGE,
        }
    }

    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyCity)
    }
}
