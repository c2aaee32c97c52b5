//! Time-to-pixel mapping and the live pan/zoom transform layered on top of it.

pub mod scale;
pub mod view;
