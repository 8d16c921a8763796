//! Border keys used to locate a letter's row and column in a Grid Table.
//!
//! The keys never contribute cell values.  `top` and `bottom` address
//! columns, `left` and `right` address rows.  Positions are 1-based.
//!
//! | Key | Even table | Mixed table |
//! |-----|------------|-------------|
//! | `top` | pair walk from 6 | alphabet `A..Z` |
//! | `bottom` | pair walk from 12 | alphabet `Z..A` |
//! | `left` | pair walk from 6 | pair walk from 6 |
//! | `right` | pair walk from 14 | pair walk from 14 |
//!
//! A pair walk visits `start, 2*start, 3*start, ...` (mod 26) and records the
//! `(letter, letter + 13)` pair holding each visited letter.

use core::fmt;

use super::TableKind;
use crate::alphabet::{Letter, ALPHABET_LEN, HALF_ALPHABET};

/// Stride and first position of the `left` walk.
pub const LEFT_START: u8 = 6;
/// Stride and first position of the `right` walk.
pub const RIGHT_START: u8 = 14;
/// Stride and first position of the even table's `top` walk.
pub const EVEN_TOP_START: u8 = 6;
/// Stride and first position of the even table's `bottom` walk.
pub const EVEN_BOTTOM_START: u8 = 12;

/// Fixed letter substitutions applied to alternating occurrences.
pub const REPLACEMENTS: [(char, char); 12] = [
    ('M', 'K'),
    ('V', 'J'),
    ('Z', 'V'),
    ('K', 'V'),
    ('E', 'I'),
    ('Q', 'L'),
    ('U', 'O'),
    ('A', 'E'),
    ('W', 'H'),
    ('H', 'A'),
    ('O', 'N'),
    ('R', 'Q'),
];

/// Returns the substitute for `letter`, if it is a replacement key.
pub fn replacement(letter: Letter) -> Option<Letter> {
    let ch = letter.to_char();
    REPLACEMENTS
        .iter()
        .find(|(from, _)| *from == ch)
        .and_then(|(_, to)| Letter::from_char(*to))
}

/// Whether `letter` is a key of the replacement map.
pub fn can_replace(letter: Letter) -> bool {
    replacement(letter).is_some()
}

/// One addressable position of a border key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySlot {
    /// A single alphabet letter.
    Single(Letter),
    /// A letter and its `+13` partner.
    Pair(Letter, Letter),
}

impl KeySlot {
    /// Pair slot containing `letter`.
    pub fn pair_of(letter: Letter) -> KeySlot {
        let base = letter.pair_base();
        KeySlot::Pair(
            Letter::from_index(base as i64),
            Letter::from_index((base + HALF_ALPHABET) as i64),
        )
    }

    /// Whether the slot holds `letter`.
    pub fn contains(&self, letter: Letter) -> bool {
        match *self {
            KeySlot::Single(only) => only == letter,
            KeySlot::Pair(low, high) => low == letter || high == letter,
        }
    }
}

impl fmt::Display for KeySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySlot::Single(letter) => write!(f, "{letter}"),
            KeySlot::Pair(low, high) => write!(f, "{low}{high}"),
        }
    }
}

/// Ordered sequence of key slots along one border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderKey {
    slots: Vec<KeySlot>,
}

impl BorderKey {
    /// The alphabet in order, one letter per slot.
    pub fn alphabet() -> Self {
        Self {
            slots: Letter::all().map(KeySlot::Single).collect(),
        }
    }

    /// The alphabet reversed, one letter per slot.
    pub fn alphabet_reversed() -> Self {
        let mut slots: Vec<KeySlot> = Letter::all().map(KeySlot::Single).collect();
        slots.reverse();
        Self { slots }
    }

    /// Pair walk of `len` slots starting (and striding) at `start`.
    pub fn pair_walk(start: u8, len: usize) -> Self {
        let stride = start as u32;
        let mut position = start as u32;
        let mut slots = Vec::with_capacity(len);
        for _ in 0..len {
            slots.push(KeySlot::pair_of(Letter::from_index(position as i64)));
            position = (position + stride) % ALPHABET_LEN as u32;
        }
        Self { slots }
    }

    /// 1-based position of the first slot holding `letter`.
    pub fn position(&self, letter: Letter) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.contains(letter))
            .map(|offset| offset + 1)
    }

    /// Slots in border order.
    pub fn slots(&self) -> &[KeySlot] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the key has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for BorderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (offset, slot) in self.slots.iter().enumerate() {
            if offset > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

/// The four border keys of one Grid Table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderKeys {
    pub top: BorderKey,
    pub bottom: BorderKey,
    pub left: BorderKey,
    pub right: BorderKey,
}

impl BorderKeys {
    /// Derives the keys for a table of the given kind and column count.
    ///
    /// Pair walks cover at least the 13 distinct pairs so that every letter
    /// is locatable on every border.
    pub fn new(kind: TableKind, columns: usize) -> Self {
        let len = columns.max(HALF_ALPHABET as usize);
        let (top, bottom) = match kind {
            TableKind::Even => (
                BorderKey::pair_walk(EVEN_TOP_START, len),
                BorderKey::pair_walk(EVEN_BOTTOM_START, len),
            ),
            TableKind::Mixed => (BorderKey::alphabet(), BorderKey::alphabet_reversed()),
        };
        Self {
            top,
            bottom,
            left: BorderKey::pair_walk(LEFT_START, len),
            right: BorderKey::pair_walk(RIGHT_START, len),
        }
    }
}
