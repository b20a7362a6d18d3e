//! Add-geotification form state and submission flow.
//!
//! # Responsibility
//! - Hold the raw radius text, note text and event-type selection.
//! - Produce one record per submission from the map center read at submit
//!   time.
//!
//! # Invariants
//! - Submission is gated only on both text fields being non-empty; this is
//!   presentation-layer validation, not a model invariant.
//! - An unparsable radius silently falls back to `0.0`.
//! - The form never mutates the store itself; records reach it through the
//!   registered handler.

use crate::model::geotification::{Coordinate, EventType, Geotification};

/// Receiving end of the form's submission callback.
///
/// The geotification store implements this and applies the radius clamp
/// before the record enters its sequence.
pub trait SubmissionHandler {
    fn on_submit(&mut self, record: Geotification);
}

/// Input state of the add-geotification screen.
#[derive(Debug, Clone)]
pub struct AddGeotificationForm {
    /// Raw text of the radius field, parsed at build time.
    pub radius_text: String,
    /// Raw text of the note field, carried verbatim into the record.
    pub note: String,
    /// Selection of the binary entry/exit control.
    pub event_type: EventType,
}

impl AddGeotificationForm {
    pub fn new(event_type: EventType) -> Self {
        Self {
            radius_text: String::new(),
            note: String::new(),
            event_type,
        }
    }

    /// Enable state for the submit action: both text fields non-empty.
    pub fn can_submit(&self) -> bool {
        !self.radius_text.is_empty() && !self.note.is_empty()
    }

    /// Builds one record from the current fields and the map center.
    ///
    /// A radius that fails to parse becomes `0.0` with no surfaced error.
    /// Every call generates a fresh identifier.
    pub fn build(&self, center: Coordinate) -> Geotification {
        let radius = self.radius_text.parse::<f64>().unwrap_or(0.0);
        Geotification::new(center, radius, self.note.clone(), self.event_type)
    }

    /// Delivers a freshly built record to `handler` when the gate passes.
    ///
    /// Returns whether a record was delivered.
    pub fn submit<H: SubmissionHandler>(&self, center: Coordinate, handler: &mut H) -> bool {
        if !self.can_submit() {
            return false;
        }

        handler.on_submit(self.build(center));
        true
    }
}
