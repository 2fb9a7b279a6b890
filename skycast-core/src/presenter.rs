//! Turns a [`ForecastResult`] into display strings and hands them to a [`Surface`].

use std::time::{Duration, Instant};

use crate::{
    condition::{classify, classify_opt},
    datetime::{format_date, format_time, round_half_up, short_weekday},
    model::ForecastResult,
    units::UnitMode,
};

pub const DAILY_ROWS: usize = 7;
pub const HOURLY_ROWS: usize = 8;
pub const BANNER_LIFETIME: Duration = Duration::from_secs(4);

const MISSING: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRow {
    pub weekday: String,
    pub icon: &'static str,
    pub max: String,
    pub min: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyRow {
    pub hour: String,
    pub icon: &'static str,
    pub temperature: String,
}

/// Everything the surface shows for one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastView {
    pub location: String,
    pub date: String,
    pub icon: &'static str,
    pub description: &'static str,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub precipitation: String,
    pub daily: Vec<DailyRow>,
    pub hourly: Vec<HourlyRow>,
}

/// Display port. Implementations replace all previous content on `render`.
pub trait Surface {
    fn render(&mut self, view: &ForecastView);

    /// Show a transient message; it should disappear after [`BANNER_LIFETIME`].
    fn notify(&mut self, message: &str);

    fn set_loading(&mut self, loading: bool);
}

/// A notification with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    shown_at: Instant,
}

impl Banner {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string(), shown_at: Instant::now() }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < BANNER_LIFETIME
    }
}

fn degrees(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{}{}", round_half_up(v), suffix),
        None => MISSING.to_string(),
    }
}

/// Index of the hourly slot in the same hour as `current_time`.
fn current_hour_index(result: &ForecastResult) -> Option<usize> {
    let current = result.current.time.as_str();
    let prefix = current.get(..13).unwrap_or(current);
    result.hourly.time.iter().position(|t| t.starts_with(prefix))
}

pub fn build_view(result: &ForecastResult, unit: UnitMode) -> ForecastView {
    let units = unit.system();
    let deg = units.headline_symbol();
    let current = &result.current;
    let daily = &result.daily;
    let hourly = &result.hourly;
    let condition = classify(current.weathercode);

    let temperature = format!("{}{}", round_half_up(current.temperature), deg);
    let precip_today = daily.precipitation_sum.first().copied().flatten().unwrap_or(0.0);

    let daily_rows = daily
        .time
        .iter()
        .take(DAILY_ROWS)
        .enumerate()
        .map(|(i, day)| DailyRow {
            weekday: short_weekday(day),
            icon: classify_opt(daily.weathercode.get(i).copied().flatten()).icon,
            max: degrees(daily.temperature_2m_max.get(i).copied().flatten(), deg),
            min: degrees(daily.temperature_2m_min.get(i).copied().flatten(), deg),
        })
        .collect();

    let hourly_rows = match current_hour_index(result) {
        Some(start) => hourly
            .time
            .iter()
            .enumerate()
            .skip(start)
            .take(HOURLY_ROWS)
            .map(|(i, time)| HourlyRow {
                hour: format_time(time),
                icon: classify_opt(hourly.weathercode.get(i).copied().flatten()).icon,
                temperature: degrees(hourly.temperature_2m.get(i).copied().flatten(), deg),
            })
            .collect(),
        None => Vec::new(),
    };

    ForecastView {
        location: result.location.label(),
        date: format_date(&current.time, true),
        icon: condition.icon,
        description: condition.description,
        // No apparent temperature in the response; feels-like mirrors the headline.
        feels_like: temperature.clone(),
        temperature,
        humidity: "N/A".to_string(),
        wind: format!("{} {}", round_half_up(current.windspeed), units.wind_symbol),
        precipitation: format!("{} {}", round_half_up(precip_today), units.precip_symbol),
        daily: daily_rows,
        hourly: hourly_rows,
    }
}

/// Render the last result, if any.
pub fn render<S: Surface + ?Sized>(result: Option<&ForecastResult>, unit: UnitMode, surface: &mut S) {
    if let Some(result) = result {
        surface.render(&build_view(result, unit));
    }
}
