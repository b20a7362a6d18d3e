use geomark_core::db::{open_db, open_db_in_memory};
use geomark_core::{
    Coordinate, EventType, Geotification, GeotificationRepository,
    PreferencesGeotificationRepository, PreferencesRepository, RepoError,
    SqlitePreferencesRepository, SAVED_ITEMS_KEY,
};
use uuid::Uuid;

fn fixed_record(id: &str, latitude: f64, longitude: f64, radius: f64, note: &str) -> Geotification {
    Geotification::with_id(
        Uuid::parse_str(id).unwrap(),
        Coordinate::new(latitude, longitude),
        radius,
        note,
        EventType::OnExit,
    )
}

#[test]
fn missing_slot_loads_an_empty_sequence() {
    let conn = open_db_in_memory().unwrap();
    let repo = PreferencesGeotificationRepository::new(SqlitePreferencesRepository::new(&conn));

    assert!(repo.load_all().unwrap().is_empty());
}

#[test]
fn replace_then_load_roundtrips_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = PreferencesGeotificationRepository::new(SqlitePreferencesRepository::new(&conn));

    let records = vec![
        fixed_record("00000000-0000-4000-8000-000000000001", 37.33, -122.03, 150.0, "office"),
        fixed_record("00000000-0000-4000-8000-000000000002", 48.86, 2.35, 10_000.0, ""),
    ];
    repo.replace_all(&records).unwrap();

    let restored = repo.load_all().unwrap();
    assert_eq!(restored, records);
}

#[test]
fn every_save_overwrites_the_full_blob() {
    let conn = open_db_in_memory().unwrap();
    let repo = PreferencesGeotificationRepository::new(SqlitePreferencesRepository::new(&conn));

    let first = fixed_record("00000000-0000-4000-8000-000000000001", 1.0, 1.0, 100.0, "a");
    let second = fixed_record("00000000-0000-4000-8000-000000000002", 2.0, 2.0, 200.0, "b");

    repo.replace_all(&[first, second.clone()]).unwrap();
    repo.replace_all(&[second.clone()]).unwrap();

    assert_eq!(repo.load_all().unwrap(), vec![second]);
}

#[test]
fn load_preserves_sequence_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = PreferencesGeotificationRepository::new(SqlitePreferencesRepository::new(&conn));

    let records = vec![
        fixed_record("00000000-0000-4000-8000-000000000003", 3.0, 3.0, 300.0, "c"),
        fixed_record("00000000-0000-4000-8000-000000000001", 1.0, 1.0, 100.0, "a"),
        fixed_record("00000000-0000-4000-8000-000000000002", 2.0, 2.0, 200.0, "b"),
    ];
    repo.replace_all(&records).unwrap();

    let ids: Vec<_> = repo
        .load_all()
        .unwrap()
        .into_iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(ids, records.iter().map(|record| record.id).collect::<Vec<_>>());
}

#[test]
fn undecodable_blob_is_rejected_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let prefs = SqlitePreferencesRepository::new(&conn);
    prefs.write(SAVED_ITEMS_KEY, b"definitely not json").unwrap();

    let repo = PreferencesGeotificationRepository::new(prefs);
    let err = repo.load_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn sequence_survives_reopening_a_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geomark.db");
    let records = vec![fixed_record(
        "00000000-0000-4000-8000-000000000009",
        51.5,
        -0.12,
        420.0,
        "station",
    )];

    {
        let conn = open_db(&path).unwrap();
        let repo =
            PreferencesGeotificationRepository::new(SqlitePreferencesRepository::new(&conn));
        repo.replace_all(&records).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = PreferencesGeotificationRepository::new(SqlitePreferencesRepository::new(&conn));
    assert_eq!(repo.load_all().unwrap(), records);
}

#[test]
fn raw_slot_reads_and_writes_opaque_blobs() {
    let conn = open_db_in_memory().unwrap();
    let prefs = SqlitePreferencesRepository::new(&conn);

    assert_eq!(prefs.read("untouched_key").unwrap(), None);

    prefs.write("theme", b"dark").unwrap();
    assert_eq!(prefs.read("theme").unwrap().as_deref(), Some(&b"dark"[..]));

    prefs.write("theme", b"light").unwrap();
    assert_eq!(prefs.read("theme").unwrap().as_deref(), Some(&b"light"[..]));
}
