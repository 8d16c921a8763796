//! 2x2 neighbourhoods ("squares") read out of a Grid Table.
//!
//! A [`Square`] is derived for one ciphertext letter and one table.  The
//! letter (or its replacement, on alternating occurrences) is located on the
//! four border keys; the resulting two rows and two columns select four
//! cells, read clockwise from the top-left corner.

use core::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::Letter;
use crate::table::{replacement, BorderKey, GridTable, TableKind};

/// Corner of a square, in clockwise order from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "bl")]
    BottomLeft,
}

impl Corner {
    /// Clockwise order starting at the top-left.
    pub const CLOCKWISE: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Offset of the corner in [`Corner::CLOCKWISE`].
    pub const fn offset(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    /// Diagonally opposite corner.
    pub const fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::TopLeft,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
        }
    }

    /// Two-letter tag (`tl`, `tr`, `br`, `bl`).
    pub const fn tag(self) -> &'static str {
        match self {
            Corner::TopLeft => "tl",
            Corner::TopRight => "tr",
            Corner::BottomRight => "br",
            Corner::BottomLeft => "bl",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Rows and columns bounding a square, each axis ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Window {
    /// Builds the window from the four located key positions.
    ///
    /// `top`/`bottom` key positions address columns, `left`/`right` rows.
    pub fn from_key_positions(top: usize, bottom: usize, left: usize, right: usize) -> Self {
        Self {
            top: top.min(bottom),
            left: left.min(right),
            bottom: top.max(bottom),
            right: left.max(right),
        }
    }

    /// `(row, column)` of a corner.
    pub const fn coordinates(&self, corner: Corner) -> (usize, usize) {
        match corner {
            Corner::TopLeft => (self.left, self.top),
            Corner::TopRight => (self.left, self.bottom),
            Corner::BottomLeft => (self.right, self.top),
            Corner::BottomRight => (self.right, self.bottom),
        }
    }
}

/// A 2x2 window into one Grid Table for one ciphertext letter.
#[derive(Debug, Clone)]
pub struct Square {
    character: Letter,
    mapped_to: Letter,
    table: Arc<GridTable>,
    window: Window,
    corners: [Letter; 4],
    cipher_active: Option<Corner>,
    lacuna_active: Option<Corner>,
    decoded_lacuna: Option<Corner>,
    selected: Option<Corner>,
}

impl Square {
    /// Derives the square of `character` in `table`.
    ///
    /// With `use_alt` set, a replacement-map key is located on the `top` and
    /// `right` borders through its substitute.  The construction-time
    /// activity markers are seeded from `character`.
    ///
    /// # Panics
    ///
    /// Panics if a letter cannot be found on a border key, which a correctly
    /// built table rules out.
    pub fn build(character: Letter, table: Arc<GridTable>, use_alt: bool) -> Square {
        let mapped_to = if use_alt {
            replacement(character).unwrap_or(character)
        } else {
            character
        };

        let keys = table.keys();
        let kind = table.kind();
        let top = locate(&keys.top, mapped_to, kind, "top");
        let right = locate(&keys.right, mapped_to, kind, "right");
        let bottom = locate(&keys.bottom, character, kind, "bottom");
        let left = locate(&keys.left, character, kind, "left");
        let window = Window::from_key_positions(top, bottom, left, right);

        let corners = Corner::CLOCKWISE.map(|corner| {
            let (row, column) = window.coordinates(corner);
            table.cell(row, column)
        });

        let mut square = Square {
            character,
            mapped_to,
            table,
            window,
            corners,
            cipher_active: None,
            lacuna_active: None,
            decoded_lacuna: None,
            selected: None,
        };
        square.mark_cipher(character);
        square
    }

    /// Records where `letter` and its lacuna sit in this square.
    pub fn mark_cipher(&mut self, letter: Letter) {
        self.cipher_active = self.corner_of(letter);
        self.lacuna_active = self.corner_of(letter.lacuna());
    }

    /// Records the corner holding the lacuna of a letter decoded elsewhere.
    ///
    /// Leaves the marker untouched when the lacuna is absent.
    pub fn mark_lacuna(&mut self, decoded: Letter) -> Option<Corner> {
        let corner = self.corner_of(decoded.lacuna());
        if corner.is_some() {
            self.decoded_lacuna = corner;
        }
        corner
    }

    /// Clears the construction-time activity markers.
    pub fn clear_markers(&mut self) {
        self.cipher_active = None;
        self.lacuna_active = None;
        self.decoded_lacuna = None;
    }

    /// Letter at `corner`, recording it as the selected corner.
    pub fn active(&mut self, corner: Corner) -> Letter {
        self.selected = Some(corner);
        self.value(corner)
    }

    /// Selects the corner holding `letter`, if any, and returns it.
    pub fn active_letter(&mut self, letter: Letter) -> Option<Letter> {
        let corner = self.corner_of(letter)?;
        Some(self.active(corner))
    }

    /// Forgets the selected corner.
    pub fn clear_active(&mut self) {
        self.selected = None;
    }

    /// Letter at `corner`.
    pub fn value(&self, corner: Corner) -> Letter {
        self.corners[corner.offset()]
    }

    /// Corner values clockwise from the top-left.
    pub fn values(&self) -> [Letter; 4] {
        self.corners
    }

    /// First corner, clockwise from the top-left, holding `letter`.
    pub fn corner_of(&self, letter: Letter) -> Option<Corner> {
        self.corners
            .iter()
            .position(|value| *value == letter)
            .map(|offset| Corner::CLOCKWISE[offset])
    }

    /// Clockwise offset of the first corner whose alphabet index equals `raw`.
    ///
    /// `raw` is an unreduced residue in `[0, 26)`; `0` never matches since
    /// cells hold indices in `[1, 26]`.
    pub fn offset_of_index(&self, raw: u8) -> Option<usize> {
        self.corners.iter().position(|value| value.index() == raw)
    }

    /// Whether any corner holds `letter`.
    pub fn contains(&self, letter: Letter) -> bool {
        self.corner_of(letter).is_some()
    }

    /// Sum of the four corner indices.
    pub fn total(&self) -> u32 {
        self.corners.iter().map(|value| value.index() as u32).sum()
    }

    /// Whether the letter was located through its replacement.
    pub fn mapped(&self) -> bool {
        self.mapped_to != self.character
    }

    pub fn character(&self) -> Letter {
        self.character
    }

    pub fn mapped_to(&self) -> Letter {
        self.mapped_to
    }

    pub fn kind(&self) -> TableKind {
        self.table.kind()
    }

    pub fn table(&self) -> &GridTable {
        &self.table
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn cipher_active(&self) -> Option<Corner> {
        self.cipher_active
    }

    pub fn lacuna_active(&self) -> Option<Corner> {
        self.lacuna_active
    }

    pub fn decoded_lacuna(&self) -> Option<Corner> {
        self.decoded_lacuna
    }

    pub fn selected(&self) -> Option<Corner> {
        self.selected
    }
}

fn locate(key: &BorderKey, letter: Letter, kind: TableKind, border: &str) -> usize {
    key.position(letter).unwrap_or_else(|| {
        panic!("letter {letter} missing from the {border} border key of the {kind:?} table")
    })
}

#[cfg(test)]
mod tests;
