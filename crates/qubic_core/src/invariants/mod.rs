//! Invariants of [`GameState`](crate::GameState).
//!
//! Each invariant is a logical property that holds after every transition.
//! They are checked in debug builds and testable independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, d)| InvariantViolation::new(d))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod board_matches_history;
pub mod threats_cleared;
pub mod winning_line_consistent;

pub use board_matches_history::BoardMatchesHistoryInvariant;
pub use threats_cleared::ThreatsClearedInvariant;
pub use winning_line_consistent::WinningLineConsistentInvariant;

/// All game state invariants as a composable set.
pub type GameInvariants = (
    BoardMatchesHistoryInvariant,
    ThreatsClearedInvariant,
    WinningLineConsistentInvariant,
);
