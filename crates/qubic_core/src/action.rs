//! Entries of the move history log.

use super::{Player, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Whether a history entry placed a mark or passed the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveKind {
    /// A mark was placed.
    Move,
    /// The turn was forfeited, usually on timeout.
    Skip,
}

/// One recorded turn.
///
/// Entries are immutable once appended to a game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player whose turn it was.
    pub player: Player,
    /// Where the mark went; `None` for skips.
    pub position: Option<Position>,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
    /// Placement or skip.
    pub kind: MoveKind,
}

impl Move {
    /// A placement stamped with the current time.
    #[instrument]
    pub fn placement(player: Player, position: Position) -> Self {
        Self::placement_at(player, position, Utc::now())
    }

    /// A placement with an explicit timestamp.
    pub fn placement_at(player: Player, position: Position, created_at: DateTime<Utc>) -> Self {
        Self {
            player,
            position: Some(position),
            created_at,
            kind: MoveKind::Move,
        }
    }

    /// A skipped turn stamped with the current time.
    #[instrument]
    pub fn skip(player: Player) -> Self {
        Self {
            player,
            position: None,
            created_at: Utc::now(),
            kind: MoveKind::Skip,
        }
    }

    /// The placed position if this entry is a real move.
    pub fn placed(&self) -> Option<Position> {
        match self.kind {
            MoveKind::Move => self.position,
            MoveKind::Skip => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.placed() {
            Some(pos) => write!(f, "{} -> {}", self.player, pos),
            None => write!(f, "{} skipped", self.player),
        }
    }
}

/// Iterates the real placements of a history, skipping skips.
pub fn real_moves(history: &[Move]) -> impl Iterator<Item = (Player, Position, &Move)> {
    history
        .iter()
        .filter_map(|m| m.placed().map(|pos| (m.player, pos, m)))
}
