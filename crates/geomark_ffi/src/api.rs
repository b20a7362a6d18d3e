//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for the mobile UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Store state is reconstructed from the durable slot per call; the
//!   frontend never holds Rust-side handles.

use geomark_core::db::open_db;
use geomark_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AddGeotificationForm, Coordinate, EventType, Geotification, GeotificationStore, MapScene,
    PreferencesGeotificationRepository, SqlitePreferencesRepository,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const FENCE_DB_FILE_NAME: &str = "geomark_fences.sqlite3";
static FENCE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

type SqliteStore<'conn> = GeotificationStore<
    PreferencesGeotificationRepository<SqlitePreferencesRepository<'conn>>,
    MapScene,
>;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for fence mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Identifier of the affected record, when one exists.
    pub fence_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl FenceActionResponse {
    fn success(message: impl Into<String>, fence_id: Option<String>) -> Self {
        Self {
            ok: true,
            fence_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            fence_id: None,
            message: message.into(),
        }
    }
}

/// One stored geofence as the map screen renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct FenceListItem {
    pub fence_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub note: String,
    /// `On Entry` / `On Exit` trigger label.
    pub event_label: String,
    /// Pin callout subtitle, e.g. `Radius: 150m - On Entry`.
    pub subtitle: String,
}

/// List response envelope for the map screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FenceListResponse {
    pub items: Vec<FenceListItem>,
    /// Title-bar caption, e.g. `Geotifications: 2`.
    pub count_caption: String,
    pub message: String,
}

/// Submits the add-geotification form: clamp, add, persist.
///
/// `radius_text` carries the raw text field content; an unparsable value
/// falls back to a zero radius with no error, matching the form contract.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - `ok=false` with no record when the radius/note gate rejects the form.
#[flutter_rust_bridge::frb(sync)]
pub fn fence_add(
    latitude: f64,
    longitude: f64,
    radius_text: String,
    note: String,
    on_entry: bool,
) -> FenceActionResponse {
    let form = AddGeotificationForm {
        radius_text,
        note,
        event_type: if on_entry {
            EventType::OnEntry
        } else {
            EventType::OnExit
        },
    };

    let outcome = with_store(|store| {
        if !form.submit(Coordinate::new(latitude, longitude), store) {
            return FenceActionResponse::failure("Radius and note are both required.");
        }

        match store.records().last() {
            Some(record) => {
                FenceActionResponse::success("Geotification added.", Some(record.id.to_string()))
            }
            None => FenceActionResponse::failure("submission produced no record"),
        }
    });

    outcome.unwrap_or_else(|err| FenceActionResponse::failure(format!("fence_add failed: {err}")))
}

/// Removes one geofence by identifier and persists the remaining sequence.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - An absent identifier is a successful no-op, mirroring the store.
#[flutter_rust_bridge::frb(sync)]
pub fn fence_remove(fence_id: String) -> FenceActionResponse {
    let id = match Uuid::parse_str(fence_id.trim()) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("event=fence_remove module=ffi status=error error={err}");
            return FenceActionResponse::failure(format!("invalid fence id `{fence_id}`: {err}"));
        }
    };

    let outcome = with_store(|store| {
        let Some(record) = find_record(store, id) else {
            return FenceActionResponse::success("No matching geotification.", None);
        };

        store.remove_and_save(&record);
        FenceActionResponse::success("Geotification removed.", Some(record.id.to_string()))
    });

    outcome
        .unwrap_or_else(|err| FenceActionResponse::failure(format!("fence_remove failed: {err}")))
}

/// Lists the stored geofences for the map screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns an empty list with a failure message when storage is
///   unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn fence_list() -> FenceListResponse {
    let outcome = with_store(|store| FenceListResponse {
        items: store.records().iter().map(to_list_item).collect(),
        count_caption: store.count_caption(),
        message: format!("Loaded {} geotification(s).", store.count()),
    });

    outcome.unwrap_or_else(|err| FenceListResponse {
        items: Vec::new(),
        count_caption: String::new(),
        message: format!("fence_list failed: {err}"),
    })
}

fn with_store<T>(f: impl FnOnce(&mut SqliteStore<'_>) -> T) -> Result<T, String> {
    let db_path = resolve_fence_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("fence DB open failed: {err}"))?;
    let repo = PreferencesGeotificationRepository::new(SqlitePreferencesRepository::new(&conn));
    let mut store = GeotificationStore::new(repo, MapScene::new());
    store.load_all();
    Ok(f(&mut store))
}

fn resolve_fence_db_path() -> PathBuf {
    FENCE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("GEOMARK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(FENCE_DB_FILE_NAME)
        })
        .clone()
}

fn find_record(store: &SqliteStore<'_>, id: Uuid) -> Option<Geotification> {
    store.records().iter().find(|record| record.id == id).cloned()
}

fn to_list_item(record: &Geotification) -> FenceListItem {
    FenceListItem {
        fence_id: record.id.to_string(),
        latitude: record.coordinate.latitude,
        longitude: record.coordinate.longitude,
        radius: record.radius,
        note: record.note.clone(),
        event_label: record.event_type.label().to_string(),
        subtitle: record.annotation_subtitle(),
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, fence_add, fence_list, fence_remove, init_logging, ping};
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn fence_add_clamps_radius_and_shows_up_in_list() {
        let note = unique_token("clamped-fence");
        let added = fence_add(37.33, -122.03, "15000".to_string(), note.clone(), true);
        assert!(added.ok, "{}", added.message);
        let fence_id = added.fence_id.clone().expect("add should return fence_id");

        let listed = fence_list();
        let item = listed
            .items
            .iter()
            .find(|item| item.fence_id == fence_id)
            .expect("added fence should be listed");
        assert_eq!(item.radius, 10_000.0);
        assert_eq!(item.note, note);
        assert_eq!(item.event_label, "On Entry");
        assert_eq!(item.subtitle, "Radius: 10000m - On Entry");
        assert!(listed.count_caption.starts_with("Geotifications: "));
    }

    #[test]
    fn fence_add_rejects_missing_note() {
        let response = fence_add(1.0, 1.0, "100".to_string(), String::new(), true);
        assert!(!response.ok);
        assert!(response.fence_id.is_none());
        assert!(response.message.contains("required"));
    }

    #[test]
    fn fence_add_persists_into_the_preferences_slot() {
        let note = unique_token("persisted-fence");
        let added = fence_add(48.86, 2.35, "120".to_string(), note.clone(), false);
        assert!(added.ok, "{}", added.message);

        let conn = geomark_core::db::open_db(super::resolve_fence_db_path()).expect("open db");
        let blob: Vec<u8> = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [geomark_core::SAVED_ITEMS_KEY],
                |row| row.get(0),
            )
            .expect("query saved_items blob");
        assert!(String::from_utf8_lossy(&blob).contains(&note));
    }

    #[test]
    fn fence_remove_deletes_a_listed_fence() {
        let note = unique_token("removed-fence");
        let added = fence_add(51.5, -0.12, "80".to_string(), note, false);
        assert!(added.ok, "{}", added.message);
        let fence_id = added.fence_id.expect("add should return fence_id");

        let removed = fence_remove(fence_id.clone());
        assert!(removed.ok, "{}", removed.message);

        let listed = fence_list();
        assert!(listed.items.iter().all(|item| item.fence_id != fence_id));
    }

    #[test]
    fn fence_remove_of_absent_id_is_a_noop() {
        let response = fence_remove("00000000-0000-4000-8000-00000000dead".to_string());
        assert!(response.ok, "{}", response.message);
        assert!(response.fence_id.is_none());
    }

    #[test]
    fn fence_remove_rejects_unparsable_id() {
        let response = fence_remove("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid fence id"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
