//! Rule engine selecting table, corner and transcription for a position.
//!
//! [`RulesEngine::apply`] is a single deterministic pass over the state
//! `(corner, table, algorithm)` of a [`Character`]:
//!
//! | Stage | Effect |
//! |-------|--------|
//! | Seed | `table = index odd`, corner `tl`, algorithm from `table`, `binary`, `mapped`, replaceability and the `%15`/`%5` residues; the letter's own parity flips the table. |
//! | Alternate swap | When the alternation flag is set and the letter was mapped: parity-dependent table flips, corner `tr`, or back to `tl` on even letters. |
//! | Binary rotation | Even letters move to the diagonally opposite corner. |
//! | Primary rule | One of four branches keyed by complete cipher/lacuna activity (see [`Branch`]). |
//! | Read | The intermediate letter is the selected corner of the selected square. |
//!
//! Each guard may flip the table independently of the guards before it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::character::{Activity, Character};
use crate::square::Corner;
use crate::table::TableKind;

/// Primary rule selected by the activity of the cipher and lacuna letters.
///
/// A letter counts as active only when both squares hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// Neither letter is held by both squares.
    Neither,
    /// Only the cipher letter is held by both squares.
    Cipher,
    /// Only the lacuna letter is held by both squares.
    Lacuna,
    /// Both letters are held by both squares.
    Both,
}

impl Branch {
    /// Classifies the activity pair.
    pub fn select(cipher: Activity, lacuna: Activity) -> Branch {
        match (cipher.all(), lacuna.all()) {
            (false, false) => Branch::Neither,
            (true, false) => Branch::Cipher,
            (false, true) => Branch::Lacuna,
            (true, true) => Branch::Both,
        }
    }
}

/// Which marker pair [`RulesEngine::unpack`] inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Cipher,
    Lacuna,
}

/// Stateless decision procedure over a [`Character`].
pub struct RulesEngine;

impl RulesEngine {
    /// Resolves `character`, writing its table, corner and algorithm, and
    /// returns the intermediate letter.
    pub fn apply(character: &mut Character) -> Letter {
        Self::seed(character);
        Self::alternate_swap(character);
        Self::binary_rotation(character);

        let cipher = character.cipher_active();
        let lacuna = character.lacuna_active();
        let branch = Branch::select(cipher, lacuna);
        match branch {
            Branch::Neither => Self::neither(character),
            Branch::Cipher => {
                character.position =
                    Self::unpack(character, cipher.even(), cipher.mixed(), Marker::Cipher);
            }
            Branch::Lacuna => {
                character.position =
                    Self::unpack(character, lacuna.even(), lacuna.mixed(), Marker::Lacuna);
            }
            Branch::Both => {
                let from_cipher =
                    Self::unpack(character, cipher.even(), cipher.mixed(), Marker::Cipher);
                let from_lacuna =
                    Self::unpack(character, lacuna.even(), lacuna.mixed(), Marker::Lacuna);
                character.position = if from_cipher == from_lacuna {
                    Corner::TopLeft
                } else {
                    Corner::BottomRight
                };
            }
        }

        let intermediate = character.select_intermediate();
        trace!(
            index = character.index(),
            letter = %character.character(),
            ?branch,
            table = ?character.table,
            position = %character.position,
            algorithm = character.algorithm,
            intermediate = %intermediate,
            "position resolved"
        );
        intermediate
    }

    /// Branch the engine takes for `character`'s current markers.
    pub fn branch(character: &Character) -> Branch {
        Branch::select(character.cipher_active(), character.lacuna_active())
    }

    fn seed(character: &mut Character) {
        let odd_index = !character.index_divisible(2);
        let binary = character.binary();
        let mapped = character.mapped();

        character.table = TableKind::from(odd_index);
        character.position = Corner::TopLeft;

        character.algorithm = if !character.table.is_even() || binary {
            1
        } else {
            0
        };
        if mapped {
            character.algorithm = 0;
        }
        if character.can_replace(character.character()) && !mapped {
            character.algorithm += 2;
        }
        if character.index_divisible(15) {
            character.algorithm += 1;
        }
        if character.char_divisible(5) {
            character.algorithm += 1;
        }

        if binary {
            flip(character);
        }
    }

    fn alternate_swap(character: &mut Character) {
        if !(character.use_alt() && character.mapped()) {
            return;
        }
        if character.index_divisible(2) {
            flip(character);
        }
        character.position = Corner::TopRight;
        if character.binary() {
            flip(character);
            character.position = Corner::TopLeft;
        }
    }

    fn binary_rotation(character: &mut Character) {
        if character.binary() {
            character.position = character.position.opposite();
        }
    }

    fn neither(character: &mut Character) {
        let binary = character.binary();
        let use_alt = character.use_alt();
        let mapped = character.mapped();

        // Doubled indices, compared raw against cell indices.
        let doubled_cipher = doubled(character.character());
        let doubled_lacuna = doubled(character.lacuna());
        let even = character.square(TableKind::Even);
        let mixed = character.square(TableKind::Mixed);
        let coincidence = match mixed.offset_of_index(doubled_lacuna) {
            Some(offset) => Some(even.offset_of_index(doubled_cipher).unwrap_or(offset)),
            None => even
                .offset_of_index(doubled_lacuna)
                .map(|offset| mixed.offset_of_index(doubled_cipher).unwrap_or(offset)),
        };
        // A coincidence on the top-left corner leaves the state alone.
        if let Some(offset) = coincidence.filter(|&offset| offset != 0) {
            flip(character);
            character.position = Corner::CLOCKWISE[offset];
        }

        if !character.table.is_even() && binary {
            character.position = Corner::TopLeft;
            if !character.char_divisible(5) {
                character.algorithm += 1;
            }
        }

        let five_minute = character.index_divisible(5) && character.table.is_even();
        let top_left_direction = character.table.is_even() && !binary && !use_alt;

        let position_letter = Letter::from_index(character.index() as i64);
        if use_alt && !mapped && character.can_replace(position_letter) {
            flip(character);
            character.algorithm += 3;
        }

        character.algorithm += match character.position {
            Corner::TopLeft if top_left_direction && !five_minute => 2,
            Corner::TopLeft | Corner::TopRight | Corner::BottomRight | Corner::BottomLeft => 0,
        };
    }

    /// Secondary rules for a marker pair; returns the selected corner.
    ///
    /// Flips the table on odd letters (and, for unmapped letters, when only
    /// the even square holds the marker), adds the order-table contribution
    /// to the algorithm, then maps the validated corner through the final
    /// corner table.
    pub fn unpack(
        character: &mut Character,
        even: Option<Corner>,
        mixed: Option<Corner>,
        marker: Marker,
    ) -> Corner {
        let lacuna = marker == Marker::Lacuna;
        let binary = character.binary();
        let use_alt = character.use_alt();
        let mapped = character.mapped();
        let odd_index = !character.index_divisible(2);

        if !binary {
            flip(character);
        }
        if !mapped && even.is_some() && mixed.is_none() {
            flip(character);
        }

        let table_even = character.table.is_even();
        let even_order: u32 = match even {
            None => 0,
            Some(Corner::TopLeft) => 1,
            Some(Corner::BottomRight) => 2,
            Some(Corner::TopRight) => {
                if lacuna && odd_index {
                    3
                } else {
                    1
                }
            }
            Some(Corner::BottomLeft) => {
                if lacuna && odd_index {
                    2
                } else {
                    1
                }
            }
        };
        let mixed_order: u32 = match mixed {
            None => 0,
            Some(Corner::TopLeft) => {
                if binary && table_even && !use_alt && even.is_some() {
                    3
                } else if !odd_index {
                    0
                } else if binary && use_alt {
                    3
                } else {
                    2
                }
            }
            Some(Corner::BottomRight) => 2,
            Some(Corner::TopRight) => {
                if table_even && !use_alt {
                    2
                } else if !lacuna {
                    0
                } else if character.index_divisible(5) {
                    1
                } else {
                    3
                }
            }
            Some(Corner::BottomLeft) => {
                if table_even || !lacuna {
                    3
                } else if binary && use_alt {
                    1
                } else {
                    2
                }
            }
        };
        character.algorithm += (even_order + mixed_order) % 4;

        if let (Some(even_corner), Some(mixed_corner)) = (even, mixed) {
            if let Some(corner) = Self::pair_override(character, even_corner, mixed_corner) {
                return corner;
            }
        }

        let mut validate = mixed.or(even).unwrap_or(character.position);
        // Five-minute rule.
        if odd_index && character.char_divisible(5) && even.is_some() && mixed.is_none() {
            validate = Corner::BottomRight;
        }

        let key = if !mapped || !binary {
            validate
        } else {
            character.position
        };
        let table_even = character.table.is_even();
        match key {
            Corner::TopLeft if odd_index => Corner::BottomRight,
            Corner::TopLeft => Corner::BottomLeft,
            Corner::TopRight if odd_index => Corner::TopLeft,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft if table_even && !mapped => Corner::BottomRight,
            Corner::BottomLeft if !use_alt && binary => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::BottomRight => Corner::TopRight,
        }
    }

    /// Override for markers present in both squares; `None` falls through to
    /// the single-marker path.
    fn pair_override(character: &mut Character, even: Corner, mixed: Corner) -> Option<Corner> {
        match (even, mixed) {
            (Corner::BottomLeft, Corner::TopLeft) => {
                flip(character);
                Some(if character.binary() && character.use_alt() {
                    Corner::TopRight
                } else {
                    Corner::BottomLeft
                })
            }
            (Corner::TopLeft, Corner::BottomRight) => Some(Corner::TopLeft),
            (Corner::TopRight, Corner::BottomRight) => Some(Corner::BottomLeft),
            (Corner::BottomRight, Corner::TopRight) => Some(Corner::TopLeft),
            _ => None,
        }
    }
}

fn flip(character: &mut Character) {
    character.table = character.table.flipped();
}

fn doubled(letter: Letter) -> u8 {
    (letter.index() * 2) % ALPHABET_LEN
}

#[cfg(test)]
mod tests;
