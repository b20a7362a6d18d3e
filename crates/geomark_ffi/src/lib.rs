//! FFI crate bridging `geomark_core` to the Flutter frontend.

pub mod api;
