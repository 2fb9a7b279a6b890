//! Drives the interaction controller with in-memory providers and a
//! recording surface, without any network or terminal.

use async_trait::async_trait;
use skycast_core::{
    AppState, Controller, CurrentWeather, DailySeries, ForecastProvider, ForecastResult,
    ForecastView, Geocoder, HourlySeries, Location, LocationResolver, Surface, UnitMode,
    WeatherError,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Calls {
    geocode: Vec<String>,
    fetch: Vec<(Location, UnitMode)>,
}

type Shared = Arc<Mutex<Calls>>;

#[derive(Debug)]
struct FakeGeocoder {
    calls: Shared,
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn search(&self, query: &str) -> Result<Option<Location>, WeatherError> {
        self.calls.lock().unwrap().geocode.push(query.to_string());
        if query == "Paris" {
            Ok(Some(Location::new(48.85, 2.35, "Paris", "France")))
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug)]
struct FakeForecast {
    calls: Shared,
    fail: bool,
    daily_days: usize,
}

fn forecast_for(location: &Location, days: usize, base: f64) -> ForecastResult {
    let hours = 48;
    ForecastResult {
        current: CurrentWeather {
            time: "2024-01-15T10:00".into(),
            temperature: base,
            weathercode: 2,
            windspeed: 9.6,
        },
        hourly: HourlySeries {
            time: (0..hours)
                .map(|h| format!("2024-01-{:02}T{:02}:00", 15 + h / 24, h % 24))
                .collect(),
            temperature_2m: vec![Some(base); hours],
            weathercode: vec![Some(61); hours],
            windspeed_10m: vec![Some(9.6); hours],
        },
        daily: DailySeries {
            time: (0..days).map(|d| format!("2024-01-{:02}", 15 + d)).collect(),
            weathercode: vec![Some(0); days],
            temperature_2m_max: vec![Some(base + 3.0); days],
            temperature_2m_min: vec![Some(base - 3.0); days],
            precipitation_sum: vec![Some(1.2); days],
        },
        location: location.clone(),
        timezone: Some("auto".into()),
    }
}

#[async_trait]
impl ForecastProvider for FakeForecast {
    async fn fetch(
        &self,
        location: &Location,
        unit: UnitMode,
    ) -> Result<ForecastResult, WeatherError> {
        let mut calls = self.calls.lock().unwrap();
        calls.fetch.push((location.clone(), unit));
        if self.fail {
            return Err(WeatherError::InvalidCandidate("forced failure".into()));
        }
        let base = if unit == UnitMode::Imperial { 50.0 } else { 10.0 };
        Ok(forecast_for(location, self.daily_days, base + calls.fetch.len() as f64))
    }
}

#[derive(Debug, Default)]
struct RecordingSurface {
    current: Option<ForecastView>,
    renders: usize,
    banners: Vec<String>,
    loading: Vec<bool>,
}

impl Surface for RecordingSurface {
    fn render(&mut self, view: &ForecastView) {
        self.current = Some(view.clone());
        self.renders += 1;
    }

    fn notify(&mut self, message: &str) {
        self.banners.push(message.to_string());
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading.push(loading);
    }
}

fn controller(fail: bool, daily_days: usize) -> (Controller<RecordingSurface>, Shared) {
    let calls: Shared = Arc::default();
    let resolver = LocationResolver::new(Box::new(FakeGeocoder { calls: Arc::clone(&calls) }));
    let forecast = Box::new(FakeForecast { calls: Arc::clone(&calls), fail, daily_days });
    let ctrl =
        Controller::new(resolver, forecast, AppState::default(), RecordingSurface::default());
    (ctrl, calls)
}

#[tokio::test]
async fn startup_loads_default_location() {
    let (mut ctrl, calls) = controller(false, 7);

    ctrl.startup().await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.fetch.len(), 1);
    assert_eq!(calls.fetch[0], (Location::default_location(), UnitMode::Metric));
    assert!(calls.geocode.is_empty());

    let view = ctrl.surface().current.as_ref().unwrap();
    assert_eq!(view.location, "Berlin, Germany");
    assert_eq!(view.daily.len(), 7);
    assert_eq!(view.hourly.len(), 8);
    assert_eq!(view.hourly[0].hour, "10 AM");
    assert_eq!(ctrl.surface().loading, vec![true, false]);
}

#[tokio::test]
async fn empty_city_shows_banner_without_network() {
    let (mut ctrl, calls) = controller(false, 7);

    let err = ctrl.submit_city("   ").await.unwrap_err();

    assert!(matches!(err, WeatherError::EmptyCity));
    assert_eq!(ctrl.surface().banners, vec!["Please enter a city name to search."]);
    let calls = calls.lock().unwrap();
    assert!(calls.geocode.is_empty());
    assert!(calls.fetch.is_empty());
    assert!(ctrl.surface().loading.is_empty());
}

#[tokio::test]
async fn submit_resolves_then_fetches() {
    let (mut ctrl, calls) = controller(false, 7);

    ctrl.submit_city("  Paris ").await.unwrap();

    {
        let calls = calls.lock().unwrap();
        assert_eq!(calls.geocode, vec!["Paris"]);
        assert_eq!(calls.fetch[0].0.city, "Paris");
    }
    assert_eq!(ctrl.surface().current.as_ref().unwrap().location, "Paris, France");
    assert_eq!(ctrl.state().last().unwrap().location.city, "Paris");
}

#[tokio::test]
async fn unknown_city_falls_back_to_default() {
    let (mut ctrl, _) = controller(false, 7);

    ctrl.submit_city("Atlantis").await.unwrap();

    assert_eq!(ctrl.surface().current.as_ref().unwrap().location, "Berlin, Germany");
}

#[tokio::test]
async fn unit_change_without_data_only_notifies() {
    let (mut ctrl, calls) = controller(false, 7);

    ctrl.change_unit(UnitMode::Imperial).await.unwrap();

    assert!(calls.lock().unwrap().fetch.is_empty());
    assert_eq!(ctrl.surface().banners, vec!["Units set to imperial. Please search for a city."]);
    assert_eq!(ctrl.state().unit(), UnitMode::Imperial);

    // The chosen unit applies to the next search.
    ctrl.submit_city("tokyo").await.unwrap();
    assert_eq!(calls.lock().unwrap().fetch[0].1, UnitMode::Imperial);
    assert_eq!(ctrl.surface().current.as_ref().unwrap().wind, "10 mph");
}

#[tokio::test]
async fn unit_change_refetches_same_location() {
    let (mut ctrl, calls) = controller(false, 7);

    ctrl.submit_city("London").await.unwrap();
    ctrl.change_unit(UnitMode::Imperial).await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.fetch.len(), 2);
    assert_eq!(calls.fetch[1].0, Location::new(51.5074, 0.1278, "London", "UK"));
    assert_eq!(calls.fetch[1].1, UnitMode::Imperial);
    assert!(ctrl.surface().banners.is_empty());
    assert_eq!(ctrl.surface().current.as_ref().unwrap().precipitation, "1 in");
}

#[tokio::test]
async fn rerender_replaces_previous_rows() {
    let (mut ctrl, _) = controller(false, 7);

    ctrl.startup().await.unwrap();
    let first = ctrl.surface().current.clone().unwrap();

    ctrl.submit_city("Tokyo").await.unwrap();
    let second = ctrl.surface().current.clone().unwrap();

    assert_eq!(ctrl.surface().renders, 2);
    assert_eq!(second.daily.len(), 7);
    assert_eq!(second.hourly.len(), 8);
    assert_ne!(first.temperature, second.temperature);
    assert!(second.daily.iter().all(|d| d.max == "15°"));
}

#[tokio::test]
async fn fetch_failure_shows_banner_and_keeps_nothing() {
    let (mut ctrl, _) = controller(true, 7);

    let err = ctrl.startup().await.unwrap_err();

    assert!(!err.is_user_error());
    assert_eq!(
        ctrl.surface().banners,
        vec!["Could not fetch weather data. Please try again later."]
    );
    assert_eq!(ctrl.surface().loading, vec![true, false]);
    assert_eq!(ctrl.surface().renders, 0);
    assert!(ctrl.state().last().is_none());
}

#[tokio::test]
async fn short_daily_series_is_not_an_error() {
    let (mut ctrl, _) = controller(false, 3);

    ctrl.startup().await.unwrap();

    assert_eq!(ctrl.surface().current.as_ref().unwrap().daily.len(), 3);
}
