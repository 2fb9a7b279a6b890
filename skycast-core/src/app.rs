//! Application state and the interaction controller that wires user actions
//! to resolver, forecast provider and presenter.

use crate::{
    ForecastResult, Location, UnitMode, WeatherError,
    error::EMPTY_CITY_MESSAGE,
    presenter::{self, Surface},
    provider::ForecastProvider,
    resolver::LocationResolver,
};

/// Identifies one forecast request. Only the most recently issued token may
/// store its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Unit mode plus the last accepted forecast. Owned by the controller.
#[derive(Debug, Default)]
pub struct AppState {
    unit: UnitMode,
    last: Option<ForecastResult>,
    issued: u64,
}

impl AppState {
    pub fn new(unit: UnitMode) -> Self {
        Self { unit, ..Self::default() }
    }

    pub fn unit(&self) -> UnitMode {
        self.unit
    }

    pub fn set_unit(&mut self, unit: UnitMode) {
        self.unit = unit;
    }

    pub fn last(&self) -> Option<&ForecastResult> {
        self.last.as_ref()
    }

    pub fn begin_request(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Store `result` if `token` is still current. Returns false for a
    /// superseded request, whose response is dropped.
    pub fn complete(&mut self, token: RequestToken, result: ForecastResult) -> bool {
        if token.0 != self.issued {
            tracing::debug!(token = token.0, latest = self.issued, "discarding stale forecast");
            return false;
        }
        self.last = Some(result);
        true
    }
}

#[derive(Debug)]
pub struct Controller<S: Surface> {
    resolver: LocationResolver,
    forecast: Box<dyn ForecastProvider>,
    state: AppState,
    surface: S,
}

impl<S: Surface> Controller<S> {
    pub fn new(
        resolver: LocationResolver,
        forecast: Box<dyn ForecastProvider>,
        state: AppState,
        surface: S,
    ) -> Self {
        Self { resolver, forecast, state, surface }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Initial load for the built-in default location.
    pub async fn startup(&mut self) -> Result<(), WeatherError> {
        self.load(Location::default_location()).await
    }

    /// Search for a city typed by the user.
    pub async fn submit_city(&mut self, text: &str) -> Result<(), WeatherError> {
        let city = text.trim();
        if city.is_empty() {
            self.surface.notify(EMPTY_CITY_MESSAGE);
            return Err(WeatherError::EmptyCity);
        }

        let location = self.resolver.resolve(city).await;
        self.load(location).await
    }

    /// Switch units; re-fetches the current location when data is loaded.
    pub async fn change_unit(&mut self, unit: UnitMode) -> Result<(), WeatherError> {
        self.state.set_unit(unit);

        match self.state.last().map(|r| r.location.clone()) {
            Some(location) => self.load(location).await,
            None => {
                self.surface.notify(&format!("Units set to {unit}. Please search for a city."));
                Ok(())
            }
        }
    }

    async fn load(&mut self, location: Location) -> Result<(), WeatherError> {
        let token = self.state.begin_request();
        let unit = self.state.unit();

        self.surface.set_loading(true);
        let outcome = self.forecast.fetch(&location, unit).await;
        self.surface.set_loading(false);

        match outcome {
            Ok(result) => {
                if self.state.complete(token, result) {
                    presenter::render(self.state.last(), unit, &mut self.surface);
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to fetch weather data for {}: {}", location.label(), e);
                self.surface.notify(e.user_message());
                Err(e)
            }
        }
    }
}
