use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    Available,
    Booked,
}

impl SeatState {
    pub fn glyph(self) -> char {
        match self {
            SeatState::Available => 'S',
            SeatState::Booked => 'B',
        }
    }
}
