//! Grid Tables derived from a ciphertext and its lacuna text.
//!
//! | Step | Item | Notes |
//! |------|------|-------|
//! | 1 | [`DistanceClosure`] | Reachable `(string, polarity)` pairs, memoised in a [`DistanceCache`]. |
//! | 2 | Row filter | [`TableKind::Even`] keeps all-even strings, [`TableKind::Mixed`] keeps mixed ones. |
//! | 3 | Padding | A synthetic row (26 on even headers, 13 on odd) is repeated up to 13 rows. |
//! | 4 | Columns | De-duplicated by header letter, then sorted by it. |
//! | 5 | [`BorderKeys`] | Permutations of the 13 letter pairs used to locate rows and columns. |
//!
//! A table is built once per `(ciphertext, kind)` and shared read-only by
//! every Square built against it.

mod cache;
mod closure;
mod grid;
mod keys;

pub use cache::{DistanceCache, SeedKey};
pub use closure::{DistanceClosure, CLOSURE_PASSES, FOLD_ROUNDS};
pub use grid::{GridTable, MIN_ROWS};
pub use keys::{
    can_replace, replacement, BorderKey, BorderKeys, KeySlot, EVEN_BOTTOM_START, EVEN_TOP_START,
    LEFT_START, REPLACEMENTS, RIGHT_START,
};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Letter, Polarity};

/// Selector between the two Grid Tables.
///
/// The rule engine treats the selector as a boolean: `true` is the even
/// table, `false` the mixed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    /// Rows drawn from all-even strings.
    Even,
    /// Rows drawn from mixed-parity strings.
    Mixed,
}

impl TableKind {
    /// Both kinds, even first.
    pub const ALL: [TableKind; 2] = [TableKind::Even, TableKind::Mixed];

    /// Polarity class of the rows kept in this table.
    pub const fn polarity(self) -> Polarity {
        match self {
            TableKind::Even => Polarity::AllEven,
            TableKind::Mixed => Polarity::Mixed,
        }
    }

    /// The other table.
    pub const fn flipped(self) -> TableKind {
        match self {
            TableKind::Even => TableKind::Mixed,
            TableKind::Mixed => TableKind::Even,
        }
    }

    /// Boolean form: `true` for [`TableKind::Even`].
    pub const fn is_even(self) -> bool {
        matches!(self, TableKind::Even)
    }
}

impl From<bool> for TableKind {
    fn from(even: bool) -> Self {
        if even {
            TableKind::Even
        } else {
            TableKind::Mixed
        }
    }
}

/// The even and mixed tables of one ciphertext.
#[derive(Debug, Clone)]
pub struct TablePair {
    even: Arc<GridTable>,
    mixed: Arc<GridTable>,
}

impl TablePair {
    /// Builds both tables for `ciphertext` against `cache`.
    pub fn build(ciphertext: &[Letter], cache: &DistanceCache) -> Self {
        Self {
            even: Arc::new(GridTable::build(ciphertext, TableKind::Even, cache)),
            mixed: Arc::new(GridTable::build(ciphertext, TableKind::Mixed, cache)),
        }
    }

    /// Shared handle to the table of `kind`.
    pub fn get(&self, kind: TableKind) -> &Arc<GridTable> {
        match kind {
            TableKind::Even => &self.even,
            TableKind::Mixed => &self.mixed,
        }
    }
}
