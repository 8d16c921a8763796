use core::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::{distance_from, Letter};

/// The four transcriptions from an intermediate letter to plaintext.
///
/// Discriminants are the algorithm indices chosen by the rule engine and must
/// stay in this order.  In the puzzle's own numbering they are ciphers
/// 3, 1, 4 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transcription {
    /// `x`
    Identity = 0,
    /// `c + x`
    Sum = 1,
    /// `Z - x`
    Reflect = 2,
    /// `c + (Z - x)`
    ReflectSum = 3,
}

impl Transcription {
    /// All transcriptions in algorithm-index order.
    pub const ALL: [Transcription; 4] = [
        Transcription::Identity,
        Transcription::Sum,
        Transcription::Reflect,
        Transcription::ReflectSum,
    ];

    /// Selects a transcription from an algorithm accumulator, reduced mod 4.
    pub const fn from_algorithm(algorithm: u32) -> Transcription {
        match algorithm % 4 {
            0 => Transcription::Identity,
            1 => Transcription::Sum,
            2 => Transcription::Reflect,
            _ => Transcription::ReflectSum,
        }
    }

    /// Algorithm index in `[0, 4)`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Transcribes `source` for a position whose ciphertext letter is `own`.
    pub fn apply(self, own: Letter, source: Letter) -> Letter {
        match self {
            Transcription::Identity => source,
            Transcription::Sum => {
                Letter::from_index(own.index() as i64 + source.index() as i64)
            }
            Transcription::Reflect => distance_from(source, Letter::Z),
            Transcription::ReflectSum => {
                let reflected = distance_from(source, Letter::Z);
                Letter::from_index(own.index() as i64 + reflected.index() as i64)
            }
        }
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
