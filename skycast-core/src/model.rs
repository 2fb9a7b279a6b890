use serde::{Deserialize, Serialize};

/// A resolved place. Produced by the resolver, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, city: &str, country: &str) -> Self {
        Self { latitude, longitude, city: city.to_string(), country: country.to_string() }
    }

    /// Berlin, Germany. Used at startup and whenever resolution fails.
    pub fn default_location() -> Self {
        Self::new(52.52, 13.41, "Berlin", "Germany")
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// `current_weather` block of the forecast response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub time: String,
    pub temperature: f64,
    pub weathercode: i32,
    pub windspeed: f64,
}

/// Parallel hourly arrays; index `i` of every array belongs to `time[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub weathercode: Vec<Option<i32>>,
    #[serde(default)]
    pub windspeed_10m: Vec<Option<f64>>,
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn is_aligned(&self) -> bool {
        let n = self.time.len();
        self.temperature_2m.len() == n && self.weathercode.len() == n && self.windspeed_10m.len() == n
    }
}

/// Parallel daily arrays, aligned the same way as [`HourlySeries`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    #[serde(default)]
    pub weathercode: Vec<Option<i32>>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn is_aligned(&self) -> bool {
        let n = self.time.len();
        self.weathercode.len() == n
            && self.temperature_2m_max.len() == n
            && self.temperature_2m_min.len() == n
            && self.precipitation_sum.len() == n
    }
}

/// One successful forecast fetch, tagged with the location it was requested for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub current: CurrentWeather,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
    pub location: Location,
    pub timezone: Option<String>,
}
