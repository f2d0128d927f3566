use anyhow::{bail, Context, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::direction::Direction;
use crate::tile::Tile;

pub const SIZE: usize = 4;
const CELLS: usize = SIZE * SIZE;

/// Grid coordinate. Signed so a neighbor computed at the grid edge can land
/// off the board; such positions must pass `in_bounds` before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub r: i8,
    pub c: i8,
}

impl Pos {
    /// The neighboring coordinate one step in `d`. May leave the grid.
    pub fn step(self, d: Direction) -> Pos {
        match d {
            Direction::Up => Pos { r: self.r - 1, c: self.c },
            Direction::Down => Pos { r: self.r + 1, c: self.c },
            Direction::Left => Pos { r: self.r, c: self.c - 1 },
            Direction::Right => Pos { r: self.r, c: self.c + 1 },
        }
    }

    pub fn in_bounds(self) -> bool {
        self.r >= 0 && (self.r as usize) < SIZE && self.c >= 0 && (self.c as usize) < SIZE
    }

    fn idx(self) -> usize {
        debug_assert!(self.in_bounds());
        self.r as usize * SIZE + self.c as usize
    }
}

/// Outcome of a move attempt. `Blocked` means the blank was already on the
/// grid edge in that direction and the board is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved,
    Blocked,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// The 4x4 tile grid. Owns all mutation; cells are only ever swapped, so the
/// values 0..=15 each appear exactly once for the board's whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: [Tile; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Canonical solved layout: 1..=15 ascending row-major, blank last.
    pub fn new() -> Self {
        let mut tiles = [Tile::EMPTY; CELLS];
        for (i, t) in tiles.iter_mut().take(CELLS - 1).enumerate() {
            *t = Tile(i as u8 + 1);
        }
        Self { tiles }
    }

    /// Parses 16 whitespace-separated values, row-major, 0 for the blank.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tiles = [Tile::EMPTY; CELLS];
        let mut seen = [false; CELLS];
        let mut count = 0;
        for token in text.split_whitespace() {
            if count == CELLS {
                bail!("expected {} values, got more", CELLS);
            }
            let v: u8 = token
                .parse()
                .with_context(|| format!("invalid tile {:?}", token))?;
            if v as usize >= CELLS {
                bail!("tile {} out of range 0..=15", v);
            }
            if seen[v as usize] {
                bail!("duplicate tile {}", v);
            }
            seen[v as usize] = true;
            tiles[count] = Tile(v);
            count += 1;
        }
        if count != CELLS {
            bail!("expected {} values, got {}", CELLS, count);
        }
        Ok(Self { tiles })
    }

    /// Slides one tile a single step in `dir`. The tile that ends up in the
    /// blank's slot comes from the opposite side: pushing tiles "up" moves
    /// the tile below the blank.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        let blank = self.blank();
        let source = blank.step(dir.invert());
        if !source.in_bounds() {
            trace!("{} blocked, blank at ({}, {})", dir, blank.r, blank.c);
            return MoveOutcome::Blocked;
        }
        self.tiles.swap(blank.idx(), source.idx());
        debug!("slid {} {}", self.tiles[blank.idx()].value(), dir);
        MoveOutcome::Moved
    }

    /// True only for the layout `new` produces, blank in the final cell.
    pub fn is_solved(&self) -> bool {
        self.tiles[CELLS - 1].is_empty()
            && self.tiles[..CELLS - 1]
                .iter()
                .enumerate()
                .all(|(i, t)| *t == i as u8 + 1)
    }

    /// Row-major scan for the unique empty cell. O(16), not worth caching.
    pub fn blank(&self) -> Pos {
        for (i, t) in self.tiles.iter().enumerate() {
            if t.is_empty() {
                return Pos {
                    r: (i / SIZE) as i8,
                    c: (i % SIZE) as i8,
                };
            }
        }
        unreachable!("board always holds exactly one empty tile")
    }

    pub fn tile(&self, p: Pos) -> Tile {
        self.tiles[p.idx()]
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(SIZE)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(SIZE) {
            for t in row {
                write!(f, "{}", t)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
