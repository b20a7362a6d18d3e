//! Add-record form logic decoupled from any UI toolkit.
//!
//! # Responsibility
//! - Gate submission on the two required text fields.
//! - Build exactly one record per submission and hand it to a listener.

pub mod add_geotification;
