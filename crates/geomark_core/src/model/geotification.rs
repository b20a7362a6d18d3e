//! Geotification domain model.
//!
//! # Responsibility
//! - Define the record for one monitored circular region.
//! - Provide the radius clamp and the annotation display projections.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `coordinate`, `note` and `event_type` are immutable after creation.
//! - After `clamp_radius(max)`, `radius <= max`. No lower bound is enforced;
//!   zero or negative radii are representable when upstream validation is
//!   skipped.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a geotification record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GeotificationId = Uuid;

/// Geographic point as a (latitude, longitude) pair in degrees.
///
/// Equality is exact floating-point equality. Overlay removal relies on
/// this, so no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Boundary-crossing direction that triggers the region's notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Fire when the user enters the circular region.
    OnEntry,
    /// Fire when the user exits the circular region.
    OnExit,
}

impl EventType {
    /// Human-readable label used in annotation subtitles.
    pub fn label(self) -> &'static str {
        match self {
            Self::OnEntry => "On Entry",
            Self::OnExit => "On Exit",
        }
    }
}

/// One monitored circular region: center, radius, note and trigger kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geotification {
    /// Stable global ID generated at creation time.
    pub id: GeotificationId,
    /// Region center. Immutable after creation.
    pub coordinate: Coordinate,
    /// Region radius in meters. Mutable only via [`Geotification::clamp_radius`].
    pub radius: f64,
    /// Free-form user note. Immutable after creation.
    pub note: String,
    /// Entry/exit trigger selection. Immutable after creation.
    pub event_type: EventType,
}

impl Geotification {
    /// Creates a record with a freshly generated stable ID.
    pub fn new(
        coordinate: Coordinate,
        radius: f64,
        note: impl Into<String>,
        event_type: EventType,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), coordinate, radius, note, event_type)
    }

    /// Creates a record with a caller-provided stable ID.
    ///
    /// Used by restore paths where identity already exists in the persisted
    /// blob.
    pub fn with_id(
        id: GeotificationId,
        coordinate: Coordinate,
        radius: f64,
        note: impl Into<String>,
        event_type: EventType,
    ) -> Self {
        Self {
            id,
            coordinate,
            radius,
            note: note.into(),
            event_type,
        }
    }

    /// Caps the radius at `max_radius`. Idempotent, never fails.
    ///
    /// The receiving side of the add-form callback applies this once before
    /// the record enters the store; no lower bound is checked here.
    pub fn clamp_radius(&mut self, max_radius: f64) {
        self.radius = self.radius.min(max_radius);
    }

    /// Pin callout title: the note, or a fixed fallback when it is empty.
    pub fn annotation_title(&self) -> &str {
        if self.note.is_empty() {
            "No Note"
        } else {
            &self.note
        }
    }

    /// Pin callout subtitle describing radius and trigger kind.
    pub fn annotation_subtitle(&self) -> String {
        format!("Radius: {}m - {}", self.radius, self.event_type.label())
    }
}
