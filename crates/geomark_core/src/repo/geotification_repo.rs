//! Geotification persistence adapter over the preferences slot.
//!
//! # Responsibility
//! - Serialize the full ordered record sequence to one JSON blob and back.
//! - Pin the fixed slot key shared with the mobile frontend.
//!
//! # Invariants
//! - `replace_all` overwrites the entire blob; ordering is preserved.
//! - A missing slot decodes to an empty sequence; an undecodable blob is an
//!   `InvalidData` error, not an empty sequence.

use super::preferences_repo::PreferencesRepository;
use super::{RepoError, RepoResult};
use crate::model::geotification::Geotification;

/// Fixed preference key holding the encoded geotification sequence.
pub const SAVED_ITEMS_KEY: &str = "saved_items";

/// Persistence interface for the geotification sequence.
pub trait GeotificationRepository {
    fn load_all(&self) -> RepoResult<Vec<Geotification>>;
    fn replace_all(&self, records: &[Geotification]) -> RepoResult<()>;
}

/// Adapter encoding the sequence as JSON into a preference slot.
pub struct PreferencesGeotificationRepository<P: PreferencesRepository> {
    prefs: P,
}

impl<P: PreferencesRepository> PreferencesGeotificationRepository<P> {
    pub fn new(prefs: P) -> Self {
        Self { prefs }
    }
}

impl<P: PreferencesRepository> GeotificationRepository for PreferencesGeotificationRepository<P> {
    fn load_all(&self) -> RepoResult<Vec<Geotification>> {
        match self.prefs.read(SAVED_ITEMS_KEY)? {
            None => Ok(Vec::new()),
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
                RepoError::InvalidData(format!("undecodable `{SAVED_ITEMS_KEY}` blob: {err}"))
            }),
        }
    }

    fn replace_all(&self, records: &[Geotification]) -> RepoResult<()> {
        let bytes = serde_json::to_vec(records).map_err(|err| {
            RepoError::InvalidData(format!("unencodable geotification sequence: {err}"))
        })?;
        self.prefs.write(SAVED_ITEMS_KEY, &bytes)
    }
}
