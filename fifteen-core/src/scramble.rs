use rand::{rngs::StdRng, SeedableRng};

use crate::board::Board;
use crate::direction::Direction;

/// Random moves applied by a default scramble.
pub const DEFAULT_MOVES: usize = 200;

pub struct Scrambler {
    rng: StdRng,
}

impl Scrambler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(rand::thread_rng()).unwrap(),
        };
        Self { rng }
    }

    /// Applies `moves` random-direction moves. Blocked attempts count as
    /// moves, matching a blind shuffle against the grid edges. Every
    /// intermediate state is reached by legal moves, so the result is
    /// always solvable.
    pub fn scramble(&mut self, board: &mut Board, moves: usize) {
        for _ in 0..moves {
            board.apply_move(Direction::random(&mut self.rng));
        }
    }
}
