//! Player marks.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// First mark.
    X,
    /// Second mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Uniform choice between the two marks, so `rng.random::<Mark>()` works.
impl Distribution<Mark> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Mark {
        if rng.random_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        }
    }
}
