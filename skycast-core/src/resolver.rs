use crate::{Location, provider::Geocoder};

/// Maps free text to a [`Location`]. Never fails: anything the geocoder
/// cannot answer resolves to [`Location::default_location`].
#[derive(Debug)]
pub struct LocationResolver {
    geocoder: Box<dyn Geocoder>,
}

fn known_city(text: &str) -> Option<Location> {
    let lower = text.to_lowercase();

    if lower.contains("berlin") {
        Some(Location::default_location())
    } else if lower.contains("tokyo") {
        Some(Location::new(35.6895, 139.6917, "Tokyo", "Japan"))
    } else if lower.contains("london") {
        Some(Location::new(51.5074, 0.1278, "London", "UK"))
    } else {
        None
    }
}

impl LocationResolver {
    pub fn new(geocoder: Box<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    pub async fn resolve(&self, text: &str) -> Location {
        if let Some(location) = known_city(text) {
            return location;
        }

        match self.geocoder.search(text).await {
            Ok(Some(location)) => {
                tracing::debug!("Resolved '{}' to {}", text, location.label());
                location
            }
            Ok(None) => {
                tracing::warn!("No geocoding match for '{}', using default location", text);
                Location::default_location()
            }
            Err(e) => {
                tracing::warn!("Geocoding failed for '{}': {}", text, e);
                Location::default_location()
            }
        }
    }
}
