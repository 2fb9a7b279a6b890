use std::{
    io::{self, Write},
    time::Instant,
};

use skycast_core::{Banner, ForecastView, Surface};

/// Writes forecasts to stdout and banners to stderr.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    banner: Option<Banner>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn active_banner(&mut self) -> Option<&Banner> {
        let now = Instant::now();
        if self.banner.as_ref().is_some_and(|b| !b.is_visible(now)) {
            self.banner = None;
        }
        self.banner.as_ref()
    }
}

pub fn format_view(view: &ForecastView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n{}\n\n", view.location, view.date));
    out.push_str(&format!("  {}  {}  {}\n\n", view.icon, view.temperature, view.description));
    out.push_str(&format!("  {:<14}{}\n", "Feels like", view.feels_like));
    out.push_str(&format!("  {:<14}{}\n", "Humidity", view.humidity));
    out.push_str(&format!("  {:<14}{}\n", "Wind", view.wind));
    out.push_str(&format!("  {:<14}{}\n", "Precipitation", view.precipitation));

    out.push_str("\nDaily forecast\n");
    for day in &view.daily {
        out.push_str(&format!("  {:<5}{}  {:>5} {:>5}\n", day.weekday, day.icon, day.max, day.min));
    }

    out.push_str("\nHourly forecast\n");
    if view.hourly.is_empty() {
        out.push_str("  --\n");
    }
    for hour in &view.hourly {
        out.push_str(&format!("  {:<7}{}  {:>5}\n", hour.hour, hour.icon, hour.temperature));
    }

    out
}

impl Surface for TerminalSurface {
    fn render(&mut self, view: &ForecastView) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "\n{}", format_view(view));

        if let Some(banner) = self.active_banner() {
            eprintln!("! {}", banner.message);
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("! {message}");
        self.banner = Some(Banner::new(message));
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            eprintln!("Loading forecast...");
        }
    }
}
