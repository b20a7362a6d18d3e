//! Geotification store: the owning sequence and its side-effect wiring.
//!
//! # Responsibility
//! - Orchestrate record mutations, map-presenter sync and persistence.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod geotification_store;
