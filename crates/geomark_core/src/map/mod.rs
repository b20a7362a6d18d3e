//! Map presentation port consumed by the geotification store.
//!
//! # Responsibility
//! - Define the capability the store uses to keep the map widget in sync.
//! - Provide the owned scene bookkeeping backing that widget.
//!
//! # Invariants
//! - The presenter holds only a derived, non-owning view of the store's
//!   records; the store drives every mutation.

pub mod scene;

pub use scene::{CircleOverlay, MapScene, Pin};

use crate::model::geotification::{Coordinate, Geotification};

/// Abstract map capability: pin annotations plus circular radius overlays.
///
/// Implemented by [`MapScene`] for the real widget backing and by recording
/// stubs in tests.
pub trait MapPresenter {
    fn add_annotation(&mut self, record: &Geotification);
    fn remove_annotation(&mut self, record: &Geotification);
    fn add_overlay(&mut self, center: Coordinate, radius: f64);
    fn remove_overlay(&mut self, center: Coordinate, radius: f64);
}
