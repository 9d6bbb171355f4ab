//! The 76 winning lines of the 4×4×4 cube.
//!
//! Lines are generated once, on first use, and shared read-only for the
//! life of the process. Iteration order is fixed and doubles as the
//! tie-break when one move completes several lines:
//!
//! 1. rows (x varies), 16 lines
//! 2. columns (y varies), 16 lines
//! 3. pillars (z varies), 16 lines
//! 4. diagonals inside each z layer, then each y layer, then each x layer,
//!    8 lines per family
//! 5. the 4 space diagonals joining opposite corners

use super::position::{Position, SIZE};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// Number of cells in a line.
pub const LINE_LEN: usize = 4;

/// Number of distinct winning lines in a 4×4×4 cube.
pub const TOTAL_LINES: usize = 76;

/// Four positions forming a straight line through the cube.
pub type Line = [Position; LINE_LEN];

static WINNING_LINES: OnceLock<Vec<Line>> = OnceLock::new();

/// All winning lines in generation order.
pub fn winning_lines() -> &'static [Line] {
    WINNING_LINES.get_or_init(generate_lines)
}

/// Number of winning lines; always [`TOTAL_LINES`].
#[instrument]
pub fn total_winning_lines() -> usize {
    winning_lines().len()
}

/// Geometric family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LineFamily {
    /// x varies.
    Row,
    /// y varies.
    Column,
    /// z varies.
    Pillar,
    /// Diagonal within a layer of constant z.
    LayerDiagonal,
    /// Diagonal within a plane of constant y.
    VerticalDiagonalY,
    /// Diagonal within a plane of constant x.
    VerticalDiagonalX,
    /// Corner-to-corner through the cube's centre.
    SpaceDiagonal,
}

impl LineFamily {
    /// Family of the line at `index` in [`winning_lines`].
    pub fn of_index(index: usize) -> Option<Self> {
        const FAMILIES: [(usize, LineFamily); 7] = [
            (16, LineFamily::Row),
            (32, LineFamily::Column),
            (48, LineFamily::Pillar),
            (56, LineFamily::LayerDiagonal),
            (64, LineFamily::VerticalDiagonalY),
            (72, LineFamily::VerticalDiagonalX),
            (76, LineFamily::SpaceDiagonal),
        ];
        FAMILIES
            .iter()
            .find(|(end, _)| index < *end)
            .map(|(_, family)| *family)
    }
}

/// Builds the line table. Callers should use [`winning_lines`].
#[instrument]
fn generate_lines() -> Vec<Line> {
    let n = SIZE;
    let rev = |i: u8| n - 1 - i;
    let mut lines: Vec<Line> = Vec::with_capacity(TOTAL_LINES);

    let line = |f: &dyn Fn(u8) -> Position| -> Line { [f(0), f(1), f(2), f(3)] };

    // Rows, columns, pillars.
    for z in 0..n {
        for y in 0..n {
            lines.push(line(&|i| Position::at(i, y, z)));
        }
    }
    for z in 0..n {
        for x in 0..n {
            lines.push(line(&|i| Position::at(x, i, z)));
        }
    }
    for y in 0..n {
        for x in 0..n {
            lines.push(line(&|i| Position::at(x, y, i)));
        }
    }

    // In-plane diagonals.
    for z in 0..n {
        lines.push(line(&|i| Position::at(i, i, z)));
        lines.push(line(&|i| Position::at(i, rev(i), z)));
    }
    for y in 0..n {
        lines.push(line(&|i| Position::at(i, y, i)));
        lines.push(line(&|i| Position::at(i, y, rev(i))));
    }
    for x in 0..n {
        lines.push(line(&|i| Position::at(x, i, i)));
        lines.push(line(&|i| Position::at(x, i, rev(i))));
    }

    // Space diagonals.
    lines.push(line(&|i| Position::at(i, i, i)));
    lines.push(line(&|i| Position::at(i, i, rev(i))));
    lines.push(line(&|i| Position::at(i, rev(i), i)));
    lines.push(line(&|i| Position::at(rev(i), i, i)));

    debug!(count = lines.len(), "Generated winning lines");
    lines
}
