pub mod config;
pub mod console;
pub mod models;
pub mod theater;

pub use theater::{BookingError, StatsSnapshot, Theater};
