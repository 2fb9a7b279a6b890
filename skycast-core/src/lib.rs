//! Core library for the `skycast` forecast viewer.
//!
//! This crate defines:
//! - Unit systems, weather-code classification and date formatting
//! - Location resolution and the Open-Meteo forecast client
//! - The presenter, its display port and the interaction controller
//! - Configuration handling
//!
//! It is used by `skycast-cli`, but any front-end that implements
//! [`presenter::Surface`] can drive the same controller.

pub mod app;
pub mod condition;
pub mod config;
pub mod datetime;
pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod resolver;
pub mod units;

pub use app::{AppState, Controller, RequestToken};
pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentWeather, DailySeries, ForecastResult, HourlySeries, Location};
pub use presenter::{Banner, ForecastView, Surface};
pub use provider::{ForecastProvider, Geocoder};
pub use resolver::LocationResolver;
pub use units::{UnitMode, UnitSystem};
