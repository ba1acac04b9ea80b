//! First-class invariants for resolved boards.
//!
//! Invariants are logical properties that hold between moves. They are
//! checked after every `resolve` in debug builds and can be tested on their
//! own. While a move is still unresolved they hold vacuously.

mod alternating_turns;
mod balanced_marks;
mod game_over_consistent;
mod winner_matches_lines;

pub use alternating_turns::AlternatingTurnsInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use game_over_consistent::GameOverConsistentInvariant;
pub use winner_matches_lines::WinnerMatchesLinesInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
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

/// A set of invariants checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every board invariant as one composable set.
pub type BoardInvariants = (
    WinnerMatchesLinesInvariant,
    GameOverConsistentInvariant,
    AlternatingTurnsInvariant,
    BalancedMarksInvariant,
);
