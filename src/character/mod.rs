//! Character Resolver: one ciphertext position and its two squares.
//!
//! A [`Character`] follows a two-phase lifecycle.  [`Character::build`]
//! derives the even and mixed squares; [`Character::resolve`] runs the rule
//! engine once, fixing the selected table, corner and algorithm and reading
//! the intermediate letter.  [`Character::finalize`] then reduces the
//! algorithm and transcribes the plaintext letter.  After resolution the only
//! mutation left is the lacuna marking performed by the sequence driver.

mod activity;
mod transcription;

pub use activity::Activity;
pub use transcription::Transcription;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Letter, ALPHABET_LEN, HALF_ALPHABET};
use crate::rules::RulesEngine;
use crate::square::{Corner, Square};
use crate::table::{can_replace, TableKind, TablePair};

/// Outcome of a finalised position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub table: TableKind,
    pub position: Corner,
    pub algorithm: Transcription,
    pub intermediate: Letter,
    pub letter: Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Built,
    Resolved,
    Finalised,
}

/// One ciphertext position.
#[derive(Debug, Clone)]
pub struct Character {
    index: usize,
    character: Letter,
    lacuna: Letter,
    use_alt: bool,
    even: Square,
    mixed: Square,
    pub(crate) table: TableKind,
    pub(crate) position: Corner,
    pub(crate) algorithm: u32,
    intermediate: Option<Letter>,
    deciphered: Option<Letter>,
    stage: Stage,
}

impl Character {
    /// Builds position `index` (1-based) holding `character`.
    ///
    /// `use_alt` is the alternation flag assigned by the sequence driver.
    pub fn build(index: usize, character: Letter, use_alt: bool, tables: &TablePair) -> Character {
        assert!(index >= 1, "character positions are 1-based");
        let even = Square::build(character, tables.get(TableKind::Even).clone(), use_alt);
        let mixed = Square::build(character, tables.get(TableKind::Mixed).clone(), use_alt);
        Character {
            index,
            character,
            lacuna: character.lacuna(),
            use_alt,
            even,
            mixed,
            table: TableKind::from(index % 2 != 0),
            position: Corner::TopLeft,
            algorithm: 0,
            intermediate: None,
            deciphered: None,
            stage: Stage::Built,
        }
    }

    /// Runs the rule engine and returns the intermediate letter.
    ///
    /// Resolution happens once; later calls return the stored letter.
    pub fn resolve(&mut self) -> Letter {
        if let (Some(letter), true) = (self.intermediate, self.is_resolved()) {
            return letter;
        }
        let letter = RulesEngine::apply(self);
        self.stage = Stage::Resolved;
        letter
    }

    /// Reduces the algorithm into `[0, 4)` and transcribes the plaintext
    /// letter, resolving first if needed.
    pub fn finalize(&mut self) -> Resolution {
        let intermediate = self.resolve();
        self.algorithm %= 4;
        let algorithm = Transcription::from_algorithm(self.algorithm);
        let letter = self.transcribe(algorithm, intermediate);
        self.deciphered = Some(letter);
        self.stage = Stage::Finalised;
        Resolution {
            table: self.table,
            position: self.position,
            algorithm,
            intermediate,
            letter,
        }
    }

    /// Applies `algorithm` to `source` using this position's letter.
    pub fn transcribe(&self, algorithm: Transcription, source: Letter) -> Letter {
        algorithm.apply(self.character, source)
    }

    /// Reads the intermediate letter from the selected square and corner.
    pub(crate) fn select_intermediate(&mut self) -> Letter {
        let position = self.position;
        self.square_mut(self.table.flipped()).clear_active();
        let letter = self.square_mut(self.table).active(position);
        self.intermediate = Some(letter);
        letter
    }

    /// Marks the lacuna of a decoded letter in both squares.
    pub fn mark_lacuna(&mut self, decoded: Letter) {
        self.even.mark_lacuna(decoded);
        self.mixed.mark_lacuna(decoded);
    }

    /// 1-based position in the ciphertext.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn character(&self) -> Letter {
        self.character
    }

    pub fn lacuna(&self) -> Letter {
        self.lacuna
    }

    /// Alternation flag assigned by the sequence driver.
    pub fn use_alt(&self) -> bool {
        self.use_alt
    }

    /// Whether the letter's own alphabet index is even.
    pub fn binary(&self) -> bool {
        self.character.is_even()
    }

    /// Whether a square located the letter through its replacement.
    pub fn mapped(&self) -> bool {
        self.even.mapped() || self.mixed.mapped()
    }

    /// Whether `letter` is a key of the replacement map.
    pub fn can_replace(&self, letter: Letter) -> bool {
        can_replace(letter)
    }

    pub fn square(&self, kind: TableKind) -> &Square {
        match kind {
            TableKind::Even => &self.even,
            TableKind::Mixed => &self.mixed,
        }
    }

    pub(crate) fn square_mut(&mut self, kind: TableKind) -> &mut Square {
        match kind {
            TableKind::Even => &mut self.even,
            TableKind::Mixed => &mut self.mixed,
        }
    }

    /// Where the ciphertext letter sits across both squares.
    pub fn cipher_active(&self) -> Activity {
        Activity::from_markers(self.even.cipher_active(), self.mixed.cipher_active())
    }

    /// Where the lacuna letter sits across both squares.
    pub fn lacuna_active(&self) -> Activity {
        Activity::from_markers(self.even.lacuna_active(), self.mixed.lacuna_active())
    }

    /// Where the lacunae of decoded letters were marked across both squares.
    pub fn decoded_lacuna(&self) -> Activity {
        Activity::from_markers(self.even.decoded_lacuna(), self.mixed.decoded_lacuna())
    }

    /// Whether the position index is a multiple of `modulus`.
    pub fn index_divisible(&self, modulus: usize) -> bool {
        self.index % modulus == 0
    }

    /// Whether the letter's own index is a multiple of `modulus`.
    pub fn char_divisible(&self, modulus: u8) -> bool {
        self.character.index() % modulus == 0
    }

    /// Whether the lacuna's index is a multiple of `modulus`.
    pub fn lacuna_divisible(&self, modulus: u8) -> bool {
        self.lacuna.index() % modulus == 0
    }

    /// Residue conditions of the position.
    pub fn residues(&self) -> Residues {
        let row = |modulus: u8| ResidueRow {
            modulus,
            index: self.index_divisible(modulus as usize),
            cipher: self.char_divisible(modulus),
            lacuna: self.lacuna_divisible(modulus),
        };
        Residues {
            rows: [row(2), row(5), row(15)],
        }
    }

    /// Corner sums of both squares and their reductions:
    /// `(even, mixed, sum, sum % 26, sum % 60, (sum % 60) % 26)`.
    pub fn totals(&self) -> (u32, u32, u32, u32, u32, u32) {
        let even = self.even.total();
        let mixed = self.mixed.total();
        let sum = even + mixed;
        (even, mixed, sum, sum % 26, sum % 60, (sum % 60) % 26)
    }

    /// Whether the position falls in an even-numbered 26-letter block.
    pub fn alphabet_even(&self) -> bool {
        ((self.index / ALPHABET_LEN as usize) + 1) % 2 == 0
    }

    /// Whether the position's column in a 26-wide layout is past `M`.
    pub fn upper_alphabet(&self) -> bool {
        let column = match self.index % ALPHABET_LEN as usize {
            0 => ALPHABET_LEN as usize,
            column => column,
        };
        column > HALF_ALPHABET as usize
    }

    /// All four transcriptions of `letter`, laid out `[[0, 1], [3, 2]]`.
    pub fn all_positions(&self, letter: Letter) -> [[Letter; 2]; 2] {
        let t = |algorithm| self.transcribe(algorithm, letter);
        [
            [t(Transcription::Identity), t(Transcription::Sum)],
            [t(Transcription::ReflectSum), t(Transcription::Reflect)],
        ]
    }

    /// Every letter reachable by transcribing any corner of either square.
    pub fn reachable_letters(&self) -> Vec<Letter> {
        let mut reachable: Vec<Letter> = self
            .even
            .values()
            .into_iter()
            .chain(self.mixed.values())
            .flat_map(|value| {
                Transcription::ALL.map(|algorithm| self.transcribe(algorithm, value))
            })
            .collect();
        reachable.sort();
        reachable.dedup();
        reachable
    }

    /// Selected table (meaningful once resolved).
    pub fn table(&self) -> TableKind {
        self.table
    }

    /// Selected corner (meaningful once resolved).
    pub fn position(&self) -> Corner {
        self.position
    }

    /// Algorithm accumulator; reduced into `[0, 4)` by [`Character::finalize`].
    pub fn algorithm(&self) -> u32 {
        self.algorithm
    }

    pub fn intermediate(&self) -> Option<Letter> {
        self.intermediate
    }

    pub fn deciphered(&self) -> Option<Letter> {
        self.deciphered
    }

    pub fn is_resolved(&self) -> bool {
        self.stage != Stage::Built
    }
}

/// One row of the residue condition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueRow {
    pub modulus: u8,
    pub index: bool,
    pub cipher: bool,
    pub lacuna: bool,
}

impl ResidueRow {
    fn all(&self) -> bool {
        self.index && self.cipher && self.lacuna
    }

    fn none(&self) -> bool {
        !self.index && !self.cipher && !self.lacuna
    }
}

/// Divisibility of the position index, letter index and lacuna index by
/// 2, 5 and 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residues {
    pub rows: [ResidueRow; 3],
}

impl Residues {
    /// Every condition holds.
    pub fn all_on(&self) -> bool {
        self.rows.iter().all(ResidueRow::all)
    }

    /// No condition holds.
    pub fn all_off(&self) -> bool {
        self.rows.iter().all(ResidueRow::none)
    }
}
