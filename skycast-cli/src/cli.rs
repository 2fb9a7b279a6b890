use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select, Text};
use skycast_core::{
    AppState, Config, Controller, LocationResolver, UnitMode, WeatherError,
    provider::{forecast_provider_from_config, geocoder_from_config},
};

use crate::terminal::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current conditions and forecast for any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the default city and unit system.
    Configure,

    /// Print the forecast once and exit.
    Show {
        /// City name; the configured default city when absent.
        city: Option<String>,

        /// "metric" or "imperial"; overrides the config file.
        #[arg(long, short)]
        units: Option<String>,
    },

    /// Search cities and switch units in a prompt loop.
    Interactive {
        /// "metric" or "imperial"; overrides the config file.
        #[arg(long, short)]
        units: Option<String>,
    },
}

/// One line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Units(Option<&'a str>),
    City(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    let mut words = trimmed.split_whitespace();

    match words.next() {
        Some(":q" | ":quit") => Input::Quit,
        Some(":u" | ":units") => Input::Units(words.next()),
        _ => Input::City(trimmed),
    }
}

type TerminalController = Controller<TerminalSurface>;

fn build_controller(config: &Config, units: Option<&str>) -> anyhow::Result<TerminalController> {
    let unit = match units {
        Some(u) => UnitMode::try_from(u)?,
        None => config.unit_mode()?,
    };

    let resolver = LocationResolver::new(geocoder_from_config(config));
    let forecast = forecast_provider_from_config(config);

    Ok(Controller::new(resolver, forecast, AppState::new(unit), TerminalSurface::new()))
}

/// Startup load: the configured city, else the built-in default location.
async fn initial_load(ctrl: &mut TerminalController, config: &Config) -> Result<(), WeatherError> {
    match config.default_city.as_deref() {
        Some(city) => ctrl.submit_city(city).await,
        None => ctrl.startup().await,
    }
}

fn prompt_unit(current: UnitMode) -> Result<UnitMode, InquireError> {
    let options = UnitMode::all().to_vec();
    let start = options.iter().position(|m| *m == current).unwrap_or(0);

    Select::new("Units:", options).with_starting_cursor(start).prompt()
}

async fn interactive(config: &Config, units: Option<&str>) -> anyhow::Result<()> {
    let mut ctrl = build_controller(config, units)?;

    if let Err(e) = initial_load(&mut ctrl, config).await {
        tracing::debug!("initial load failed: {e}");
    }

    loop {
        let line = match Text::new("City:")
            .with_help_message(":u [metric|imperial] to change units, :q to quit")
            .prompt()
        {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let outcome = match parse_input(&line) {
            Input::Quit => break,
            Input::Units(Some(value)) => match UnitMode::try_from(value) {
                Ok(mode) => ctrl.change_unit(mode).await,
                Err(e) => {
                    eprintln!("{e}");
                    continue;
                }
            },
            Input::Units(None) => match prompt_unit(ctrl.state().unit()) {
                Ok(mode) => ctrl.change_unit(mode).await,
                Err(InquireError::OperationCanceled) => continue,
                Err(e) => return Err(e.into()),
            },
            Input::City(city) => ctrl.submit_city(city).await,
        };

        // Already shown to the user as a banner.
        if let Err(e) = outcome {
            tracing::debug!("action failed: {e}");
        }
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let city = Text::new("Default city:")
        .with_default(cfg.default_city.as_deref().unwrap_or(""))
        .with_help_message("Leave empty to start with Berlin, Germany")
        .prompt()
        .context("Failed to read default city")?;
    cfg.set_default_city(&city);

    let unit = prompt_unit(cfg.unit_mode().unwrap_or_default())
        .context("Failed to read unit system")?;
    cfg.set_unit_mode(unit);

    cfg.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { city, units } => {
                let config = Config::load()?;
                let mut ctrl = build_controller(&config, units.as_deref())?;

                let outcome = match city.as_deref() {
                    Some(city) => ctrl.submit_city(city).await,
                    None => initial_load(&mut ctrl, &config).await,
                };
                outcome.context("No forecast available")?;
            }
            Command::Interactive { units } => {
                let config = Config::load()?;
                interactive(&config, units.as_deref()).await?;
            }
        }

        Ok(())
    }
}
