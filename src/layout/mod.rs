//! Zoom-independent timeline geometry: year buckets, lanes, and card stacks.

pub mod group;
pub mod lanes;
pub mod stack;
pub mod wrap;
