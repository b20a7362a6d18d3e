//! Owned pin/overlay bookkeeping for the map widget.
//!
//! # Responsibility
//! - Track the pins and circle overlays currently on the map.
//! - Resolve overlay removal with the first-exact-match scan.
//!
//! # Invariants
//! - Overlay matching uses exact floating-point equality of center and
//!   radius, no tolerance.
//! - At most one overlay instance is removed per call; ties keep their
//!   remaining instances.

use super::MapPresenter;
use crate::model::geotification::{Coordinate, Geotification, GeotificationId};

/// Pin annotation derived from one geotification record.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: GeotificationId,
    pub coordinate: Coordinate,
    pub title: String,
    pub subtitle: String,
}

/// Circular radius overlay rendered around a pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOverlay {
    pub center: Coordinate,
    pub radius: f64,
}

/// In-crate map state consumed by the rendering frontend.
#[derive(Debug, Default)]
pub struct MapScene {
    pins: Vec<Pin>,
    overlays: Vec<CircleOverlay>,
}

impl MapScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn overlays(&self) -> &[CircleOverlay] {
        &self.overlays
    }
}

impl MapPresenter for MapScene {
    fn add_annotation(&mut self, record: &Geotification) {
        self.pins.push(Pin {
            id: record.id,
            coordinate: record.coordinate,
            title: record.annotation_title().to_string(),
            subtitle: record.annotation_subtitle(),
        });
    }

    fn remove_annotation(&mut self, record: &Geotification) {
        if let Some(index) = self.pins.iter().position(|pin| pin.id == record.id) {
            self.pins.remove(index);
        }
    }

    fn add_overlay(&mut self, center: Coordinate, radius: f64) {
        self.overlays.push(CircleOverlay { center, radius });
    }

    fn remove_overlay(&mut self, center: Coordinate, radius: f64) {
        // Find exactly one overlay with the same center and radius to remove.
        let matched = self
            .overlays
            .iter()
            .position(|overlay| overlay.center == center && overlay.radius == radius);
        if let Some(index) = matched {
            self.overlays.remove(index);
        }
    }
}
