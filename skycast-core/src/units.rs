use serde::{Deserialize, Serialize};

/// Measurement system used both for the API request and for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    #[default]
    Metric,
    Imperial,
}

impl UnitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitMode::Metric => "metric",
            UnitMode::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [UnitMode] {
        &[UnitMode::Metric, UnitMode::Imperial]
    }

    pub fn system(self) -> UnitSystem {
        UnitSystem::for_mode(self)
    }
}

impl std::fmt::Display for UnitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "metric" => Ok(UnitMode::Metric),
            "imperial" => Ok(UnitMode::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported unit systems: metric, imperial."
            )),
        }
    }
}

/// Display symbols and request parameters for one [`UnitMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSystem {
    pub temp_symbol: &'static str,
    pub wind_symbol: &'static str,
    pub precip_symbol: &'static str,
    pub api_temp_unit: &'static str,
    pub api_wind_unit: &'static str,
    pub api_precip_unit: &'static str,
}

const METRIC: UnitSystem = UnitSystem {
    temp_symbol: "°C",
    wind_symbol: "km/h",
    precip_symbol: "mm",
    api_temp_unit: "celsius",
    api_wind_unit: "kmh",
    api_precip_unit: "mm",
};

const IMPERIAL: UnitSystem = UnitSystem {
    temp_symbol: "°F",
    wind_symbol: "mph",
    precip_symbol: "in",
    api_temp_unit: "fahrenheit",
    api_wind_unit: "mph",
    api_precip_unit: "inch",
};

impl UnitSystem {
    pub const fn for_mode(mode: UnitMode) -> Self {
        match mode {
            UnitMode::Metric => METRIC,
            UnitMode::Imperial => IMPERIAL,
        }
    }

    /// Temperature suffix for headline values: the degree sign without the unit letter.
    pub fn headline_symbol(&self) -> &'static str {
        "°"
    }

    pub fn query_params(&self) -> [(&'static str, &'static str); 3] {
        [
            ("temperature_unit", self.api_temp_unit),
            ("windspeed_unit", self.api_wind_unit),
            ("precipitation_unit", self.api_precip_unit),
        ]
    }
}
