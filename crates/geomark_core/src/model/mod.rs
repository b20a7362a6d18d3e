//! Domain model for monitored geofence regions.
//!
//! # Responsibility
//! - Define the canonical geotification record shared by store, persistence
//!   and map projections.
//! - Keep radius mutation behind the clamp operation.
//!
//! # Invariants
//! - Every record is identified by a stable `GeotificationId`.
//! - `clamp_radius(max)` is the only sanctioned radius mutation.

pub mod geotification;
