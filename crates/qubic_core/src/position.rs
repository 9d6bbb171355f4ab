//! Cell coordinates in the 4×4×4 cube.

use super::types::Board;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cells along one edge of the cube.
pub const SIZE: u8 = 4;

/// Total number of cells in the cube.
pub const CELL_COUNT: usize = 64;

/// A cell in the cube, identified by `(x, y, z)` with each axis in `0..4`.
///
/// A `Position` can only be obtained through [`Position::new`] or
/// [`Position::from_index`], so every value in circulation is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(try_from = "Coordinates", into = "Coordinates")]
#[display("({x}, {y}, {z})")]
pub struct Position {
    x: u8,
    y: u8,
    z: u8,
}

/// Wire form of a position; validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Coordinates {
    x: u8,
    y: u8,
    z: u8,
}

impl TryFrom<Coordinates> for Position {
    type Error = PositionError;

    fn try_from(c: Coordinates) -> Result<Self, Self::Error> {
        Position::new(c.x, c.y, c.z)
    }
}

impl From<Position> for Coordinates {
    fn from(p: Position) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl Position {
    /// Creates a position, rejecting any coordinate outside `0..4`.
    #[track_caller]
    #[instrument]
    pub fn new(x: u8, y: u8, z: u8) -> Result<Self, PositionError> {
        if x >= SIZE || y >= SIZE || z >= SIZE {
            return Err(PositionError::new(x, y, z));
        }
        Ok(Self { x, y, z })
    }

    /// Builds a position from coordinates already known to be in range.
    pub(crate) const fn at(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// X coordinate (column within a layer).
    pub fn x(self) -> u8 {
        self.x
    }

    /// Y coordinate (row within a layer).
    pub fn y(self) -> u8 {
        self.y
    }

    /// Z coordinate (layer).
    pub fn z(self) -> u8 {
        self.z
    }

    /// Flat index `x + 4y + 16z` in `0..64`.
    pub fn index(self) -> usize {
        self.x as usize + self.y as usize * 4 + self.z as usize * 16
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::at(
            (index % 4) as u8,
            ((index / 4) % 4) as u8,
            (index / 16) as u8,
        ))
    }

    /// Every position in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }

    /// Empty cells of `board`, in index order.
    #[instrument(skip(board))]
    pub fn legal_moves(board: &Board) -> Vec<Position> {
        Self::all().filter(|pos| board.is_empty(*pos)).collect()
    }
}

/// Coordinates outside the cube.
#[derive(Debug, Clone, Display, Error)]
#[display("Position ({}, {}, {}) is outside the 4x4x4 cube at {}:{}", x, y, z, file, line)]
pub struct PositionError {
    /// Rejected x coordinate.
    pub x: u8,
    /// Rejected y coordinate.
    pub y: u8,
    /// Rejected z coordinate.
    pub z: u8,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new position error with caller location tracking.
    #[track_caller]
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            x,
            y,
            z,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
