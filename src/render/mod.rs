pub mod commands;
pub mod surface;
pub mod svg;
pub mod ticks;
