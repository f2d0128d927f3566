use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Direction a tile slides in. The set is closed; every match on it is
/// exhaustive, so an unsupported tag is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectionError {
    #[error("unknown command {0:?}")]
    UnknownCommand(char),
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn invert(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Uniform draw over the four variants from an injected source.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }

    /// Characters the game accepts at the prompt: the four moves plus 'q'.
    pub fn is_command(ch: char) -> bool {
        matches!(ch, 'w' | 'a' | 's' | 'd' | 'q')
    }
}

impl TryFrom<char> for Direction {
    type Error = DirectionError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'w' => Ok(Direction::Up),
            's' => Ok(Direction::Down),
            'a' => Ok(Direction::Left),
            'd' => Ok(Direction::Right),
            other => Err(DirectionError::UnknownCommand(other)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", s)
    }
}
