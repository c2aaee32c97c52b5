//! Pan/zoom/hover state and the controller that turns input into render passes.

pub mod controller;
pub mod state;
