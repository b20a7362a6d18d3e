//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `geomark_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use geomark_core::{
    Coordinate, EventType, Geotification, GeotificationStore, MapScene,
    PreferencesGeotificationRepository, SqlitePreferencesRepository,
};

fn main() {
    println!("geomark_core ping={}", geomark_core::ping());
    println!("geomark_core version={}", geomark_core::core_version());

    // One in-memory pass over the store wiring, independent of the
    // Flutter/FFI runtime setup.
    match geomark_core::db::open_db_in_memory() {
        Ok(conn) => {
            let repo =
                PreferencesGeotificationRepository::new(SqlitePreferencesRepository::new(&conn));
            let mut store = GeotificationStore::new(repo, MapScene::new());
            store.load_all();
            store.accept_submission(Geotification::new(
                Coordinate::new(37.33, -122.03),
                150.0,
                "smoke",
                EventType::OnEntry,
            ));
            println!("geomark_core {}", store.count_caption());
        }
        Err(err) => eprintln!("geomark_core smoke store failed: {err}"),
    }
}
