pub mod seat;

pub use seat::SeatState;
