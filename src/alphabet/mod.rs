//! Alphabet arithmetic for the lacuna engine.
//! Contains the [`Letter`] type, the distance reflections and the parity
//! classification used to sort generated strings into tables.

pub mod letter;

pub use letter::{to_string, Letter, NotALetter, ALPHABET, ALPHABET_LEN, HALF_ALPHABET};

use serde::{Deserialize, Serialize};

/// Additive vector from `x` to `y` through `Z`: `(26 - x) + y`.
pub fn distance_to(x: Letter, y: Letter) -> Letter {
    Letter::from_index((ALPHABET_LEN as i64 - x.index() as i64) + y.index() as i64)
}

/// Reflection of `x` against `y`.
///
/// Shares the formula of [`distance_to`]; the engine only ever reflects
/// against `Z`, which yields the lacuna complement.
pub fn distance_from(x: Letter, y: Letter) -> Letter {
    distance_to(x, y)
}

/// Parity class of a string of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Every index is even.
    AllEven,
    /// Every index is odd.
    AllOdd,
    /// Both parities occur.
    Mixed,
}

impl Polarity {
    /// Classifies a string by the parity of its alphabet indices.
    ///
    /// An empty string is vacuously [`Polarity::AllEven`].
    pub fn classify(letters: &[Letter]) -> Polarity {
        if letters.iter().all(|letter| letter.is_even()) {
            Polarity::AllEven
        } else if letters.iter().all(|letter| !letter.is_even()) {
            Polarity::AllOdd
        } else {
            Polarity::Mixed
        }
    }

    /// Single-letter tag used in traces (`E`, `O`, `M`).
    pub const fn tag(self) -> char {
        match self {
            Polarity::AllEven => 'E',
            Polarity::AllOdd => 'O',
            Polarity::Mixed => 'M',
        }
    }
}

/// Complements every letter of a string against `Z`.
pub fn lacuna_text(letters: &[Letter]) -> Vec<Letter> {
    letters.iter().map(|letter| letter.lacuna()).collect()
}

/// Element-wise [`distance_to`] between two equally long strings.
pub fn distance_text(from: &[Letter], to: &[Letter]) -> Vec<Letter> {
    debug_assert_eq!(from.len(), to.len());
    from.iter()
        .zip(to)
        .map(|(&x, &y)| distance_to(x, y))
        .collect()
}
