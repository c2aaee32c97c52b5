pub mod date;
pub mod events;
