//! The 26-symbol Latin alphabet with 1-indexed modular arithmetic.
//!
//! Every value handled by the engine is a [`Letter`]: a transparent wrapper
//! around its alphabet index in `[1, 26]`.  Arithmetic wraps modulo 26 with
//! the residue `0` mapped to `26` (`Z`), so there is no "letter before `A`".

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Half the alphabet; pairs a letter with its `+13` partner.
pub const HALF_ALPHABET: u8 = 13;

/// The alphabet in index order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A single alphabet letter stored as its 1-based index.
///
/// # Representation
///
/// * The wrapped byte is always within `[1, 26]`; constructors reduce any
///   integer modulo 26 and map `0` onto `26`.
/// * Ordering follows the alphabet index, so sorting letters sorts them
///   alphabetically.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct Letter(u8);

impl Letter {
    /// `A`, index 1.
    pub const A: Letter = Letter(1);
    /// `M`, index 13. Its own lacuna.
    pub const M: Letter = Letter(13);
    /// `Z`, index 26. The reflection origin used for every lacuna.
    pub const Z: Letter = Letter(26);

    /// Converts any integer into a letter, wrapping modulo 26 with `0 -> Z`.
    pub fn from_index(index: i64) -> Letter {
        match index.rem_euclid(ALPHABET_LEN as i64) {
            0 => Letter::Z,
            residue => Letter(residue as u8),
        }
    }

    /// Parses a single alphabetic character, ignoring case.
    pub fn from_char(ch: char) -> Option<Letter> {
        if ch.is_ascii_alphabetic() {
            let upper = ch.to_ascii_uppercase() as u8;
            Some(Letter(upper - b'A' + 1))
        } else {
            None
        }
    }

    /// Returns the 1-based alphabet index.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the upper-case character for this letter.
    pub const fn to_char(self) -> char {
        ALPHABET[(self.0 - 1) as usize]
    }

    /// Whether the alphabet index is even.
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    /// Complement of the letter reflected through `Z`.
    ///
    /// `M` and `Z` are fixed points; every other letter forms a 2-cycle with
    /// its partner (`A <-> Y`, `B <-> X`, ..., `L <-> N`).
    pub fn lacuna(self) -> Letter {
        super::distance_from(self, Letter::Z)
    }

    /// Lower member of the `(letter, letter + 13)` pair containing this letter.
    pub const fn pair_base(self) -> u8 {
        if self.0 <= HALF_ALPHABET {
            self.0
        } else {
            self.0 - HALF_ALPHABET
        }
    }

    /// Iterates over all 26 letters in alphabet order.
    pub fn all() -> impl Iterator<Item = Letter> + Clone {
        (1..=ALPHABET_LEN).map(Letter)
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.to_char(), self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}

/// Error returned when a character outside `A..=Z` is converted into a [`Letter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotALetter(pub char);

impl fmt::Display for NotALetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a Latin letter", self.0)
    }
}

impl std::error::Error for NotALetter {}

impl TryFrom<char> for Letter {
    type Error = NotALetter;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::from_char(ch).ok_or(NotALetter(ch))
    }
}

/// Renders a slice of letters as an upper-case string.
pub fn to_string(letters: &[Letter]) -> String {
    letters.iter().map(|letter| letter.to_char()).collect()
}
