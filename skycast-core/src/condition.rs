/// Icon and label for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCode {
    pub icon: &'static str,
    pub description: &'static str,
}

pub const UNKNOWN: WeatherCode = WeatherCode { icon: "❓", description: "Unknown" };

// Inclusive, disjoint, checked in order.
const TABLE: &[(i32, i32, WeatherCode)] = &[
    (0, 1, WeatherCode { icon: "☀️", description: "Clear Sky" }),
    (2, 3, WeatherCode { icon: "🌤️", description: "Partly Cloudy" }),
    (45, 48, WeatherCode { icon: "☁️", description: "Foggy" }),
    (51, 55, WeatherCode { icon: "🌧️", description: "Drizzle" }),
    (61, 65, WeatherCode { icon: "🌧️", description: "Rain" }),
    (71, 75, WeatherCode { icon: "❄️", description: "Snow" }),
    (95, 99, WeatherCode { icon: "⛈️", description: "Thunderstorm" }),
];

/// Classify a weather code. Codes outside the table (freezing rain, showers,
/// hail, ...) render as [`UNKNOWN`].
pub fn classify(code: i32) -> WeatherCode {
    TABLE
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&code))
        .map(|(_, _, wc)| *wc)
        .unwrap_or(UNKNOWN)
}

/// Same as [`classify`], with a missing code treated as unknown.
pub fn classify_opt(code: Option<i32>) -> WeatherCode {
    code.map(classify).unwrap_or(UNKNOWN)
}
