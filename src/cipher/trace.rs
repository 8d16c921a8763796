use serde::{Deserialize, Serialize};

use crate::alphabet::Letter;
use crate::character::{Activity, Character, Transcription};
use crate::rules::{Branch, RulesEngine};
use crate::square::Corner;
use crate::table::TableKind;

/// Serialisable record of one resolved position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTrace {
    pub index: usize,
    pub letter: Letter,
    pub lacuna: Letter,
    pub use_alt: bool,
    pub branch: Branch,
    pub table: TableKind,
    pub position: Corner,
    pub algorithm: Transcription,
    pub intermediate: Letter,
    pub plaintext: Letter,
    pub cipher_active: Activity,
    pub lacuna_active: Activity,
    pub decoded_lacuna: Activity,
}

impl CharacterTrace {
    /// Captures a finalised character; `None` while it is still unresolved.
    pub fn capture(character: &Character) -> Option<CharacterTrace> {
        Some(CharacterTrace {
            index: character.index(),
            letter: character.character(),
            lacuna: character.lacuna(),
            use_alt: character.use_alt(),
            branch: RulesEngine::branch(character),
            table: character.table(),
            position: character.position(),
            algorithm: Transcription::from_algorithm(character.algorithm()),
            intermediate: character.intermediate()?,
            plaintext: character.deciphered()?,
            cipher_active: character.cipher_active(),
            lacuna_active: character.lacuna_active(),
            decoded_lacuna: character.decoded_lacuna(),
        })
    }

    /// `(table, position, algorithm)` triple of the position.
    pub fn triple(&self) -> (TableKind, Corner, Transcription) {
        (self.table, self.position, self.algorithm)
    }
}
