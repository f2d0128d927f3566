use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One cell of the board: a number 1..=15, or 0 for the empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile(pub(crate) u8);

impl Tile {
    pub const EMPTY: Tile = Tile(0);

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl PartialEq<u8> for Tile {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl Display for Tile {
    // Fixed-width fields keep rows aligned for 1- and 2-digit tiles.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "    "),
            v @ 1..=9 => write!(f, "  {} ", v),
            v => write!(f, " {} ", v),
        }
    }
}
