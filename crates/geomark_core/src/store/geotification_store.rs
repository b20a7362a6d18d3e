//! Owning store for the ordered geotification sequence.
//!
//! # Responsibility
//! - Own the ordered record sequence and mirror every mutation into the
//!   map presenter (one annotation plus one overlay per record).
//! - Replay the persisted sequence on load and rewrite it fully on save.
//!
//! # Invariants
//! - Record uniqueness is by identifier; removal of an absent identifier
//!   is a silent no-op.
//! - Persistence failures never propagate: they are logged and swallowed.
//! - The radius clamp runs only on the form-receive path, not on `add`.

use crate::form::add_geotification::SubmissionHandler;
use crate::map::MapPresenter;
use crate::model::geotification::Geotification;
use crate::repo::geotification_repo::GeotificationRepository;
use log::error;

/// Largest radius the platform will monitor, in meters.
pub const MAX_MONITORED_RADIUS_METERS: f64 = 10_000.0;

/// Ordered geotification sequence with presenter and persistence wiring.
///
/// Generic over the persistence repository and the map presenter so tests
/// can substitute in-memory and recording stubs.
pub struct GeotificationStore<R: GeotificationRepository, M: MapPresenter> {
    repo: R,
    map: M,
    records: Vec<Geotification>,
}

impl<R: GeotificationRepository, M: MapPresenter> GeotificationStore<R, M> {
    /// Creates an empty store; call [`GeotificationStore::load_all`] to
    /// replay the persisted sequence.
    pub fn new(repo: R, map: M) -> Self {
        Self {
            repo,
            map,
            records: Vec::new(),
        }
    }

    /// Appends `record` and mirrors it into the presenter.
    ///
    /// Side effects are always two notifications: one pin annotation add
    /// and one circle overlay add matching the record's coordinate and
    /// radius. Never fails.
    pub fn add(&mut self, record: Geotification) {
        self.map.add_annotation(&record);
        self.map.add_overlay(record.coordinate, record.radius);
        self.records.push(record);
    }

    /// Removes the record matching `record.id`, if present.
    ///
    /// An absent identifier is a silent no-op. On removal the presenter
    /// loses the matching annotation and the first overlay with exactly
    /// the record's coordinate and radius.
    pub fn remove(&mut self, record: &Geotification) {
        let Some(index) = self.records.iter().position(|item| item.id == record.id) else {
            return;
        };

        let removed = self.records.remove(index);
        self.map.remove_annotation(&removed);
        self.map.remove_overlay(removed.coordinate, removed.radius);
    }

    /// Clears the sequence and replays `add` for every persisted record,
    /// so presenter side effects fire per restored record.
    ///
    /// A missing slot restores nothing; an undecodable blob is logged and
    /// degrades to an empty sequence.
    pub fn load_all(&mut self) {
        self.records.clear();

        let restored = match self.repo.load_all() {
            Ok(records) => records,
            Err(err) => {
                error!("event=load_all module=store status=error error={err}");
                Vec::new()
            }
        };

        for record in restored {
            self.add(record);
        }
    }

    /// Rewrites the full current sequence into the durable slot.
    ///
    /// On encode or write failure the error is logged and swallowed: no
    /// retry, no partial write, no propagation to the caller.
    pub fn save_all(&self) {
        if let Err(err) = self.repo.replace_all(&self.records) {
            error!("event=save_all module=store status=error error={err}");
        }
    }

    /// Receive path of the add-form callback: clamp, add, persist.
    pub fn accept_submission(&mut self, mut record: Geotification) {
        record.clamp_radius(MAX_MONITORED_RADIUS_METERS);
        self.add(record);
        self.save_all();
    }

    /// Delete-accessory path: remove (no-op when absent), then persist.
    pub fn remove_and_save(&mut self, record: &Geotification) {
        self.remove(record);
        self.save_all();
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Title-bar caption reflecting the current count.
    pub fn count_caption(&self) -> String {
        format!("Geotifications: {}", self.count())
    }

    pub fn records(&self) -> &[Geotification] {
        &self.records
    }

    pub fn presenter(&self) -> &M {
        &self.map
    }
}

impl<R: GeotificationRepository, M: MapPresenter> SubmissionHandler for GeotificationStore<R, M> {
    fn on_submit(&mut self, record: Geotification) {
        self.accept_submission(record);
    }
}
