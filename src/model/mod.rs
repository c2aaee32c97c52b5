pub mod event;
pub mod sample;
