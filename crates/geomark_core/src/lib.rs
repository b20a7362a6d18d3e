//! Core domain logic for Geomark.
//! This crate is the single source of truth for geofence-record invariants.

pub mod db;
pub mod form;
pub mod logging;
pub mod map;
pub mod model;
pub mod repo;
pub mod store;

pub use form::add_geotification::{AddGeotificationForm, SubmissionHandler};
pub use logging::{default_log_level, init_logging, logging_status};
pub use map::{CircleOverlay, MapPresenter, MapScene, Pin};
pub use model::geotification::{Coordinate, EventType, Geotification, GeotificationId};
pub use repo::geotification_repo::{
    GeotificationRepository, PreferencesGeotificationRepository, SAVED_ITEMS_KEY,
};
pub use repo::preferences_repo::{PreferencesRepository, SqlitePreferencesRepository};
pub use repo::{RepoError, RepoResult};
pub use store::geotification_store::{GeotificationStore, MAX_MONITORED_RADIUS_METERS};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
