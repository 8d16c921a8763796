use core::fmt;

use tracing::debug;

use super::cache::DistanceCache;
use super::keys::BorderKeys;
use super::TableKind;
use crate::alphabet::{lacuna_text, Letter};

/// Minimum number of rows of every Grid Table.
pub const MIN_ROWS: usize = 13;

/// Immutable matrix of letters derived from the distance closure.
///
/// Rows are closure strings of the table's polarity class in discovery
/// order.  Columns are de-duplicated by their header (first-row) letter and
/// sorted by it.  Row and column references are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTable {
    kind: TableKind,
    rows: Vec<Vec<Letter>>,
    keys: BorderKeys,
}

impl GridTable {
    /// Builds the table of `kind` for `ciphertext`, pulling the closure of
    /// `(ciphertext, lacuna text)` from `cache`.
    pub fn build(ciphertext: &[Letter], kind: TableKind, cache: &DistanceCache) -> GridTable {
        let lacuna = lacuna_text(ciphertext);
        let closure = cache.closure(ciphertext, &lacuna);

        let mut rows: Vec<Vec<Letter>> = closure
            .of_polarity(kind.polarity())
            .map(<[Letter]>::to_vec)
            .collect();
        if rows.is_empty() {
            rows.push(ciphertext.to_vec());
        }

        let header = rows[0].clone();
        let padding: Vec<Letter> = header
            .iter()
            .map(|letter| if letter.is_even() { Letter::Z } else { Letter::M })
            .collect();
        while rows.len() < MIN_ROWS {
            rows.push(padding.clone());
        }

        let mut columns: Vec<usize> = Vec::with_capacity(header.len());
        for (offset, letter) in header.iter().enumerate() {
            if !columns.iter().any(|&kept| header[kept] == *letter) {
                columns.push(offset);
            }
        }
        columns.sort_by_key(|&offset| header[offset]);

        let rows: Vec<Vec<Letter>> = rows
            .iter()
            .map(|row| columns.iter().map(|&offset| row[offset]).collect())
            .collect();
        let keys = BorderKeys::new(kind, columns.len());

        debug!(
            ?kind,
            rows = rows.len(),
            columns = columns.len(),
            "grid table built"
        );

        GridTable { kind, rows, keys }
    }

    /// Which of the two tables this is.
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Number of rows (at least [`MIN_ROWS`]).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (distinct header letters).
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Column headers: the first row's letters.
    pub fn headers(&self) -> &[Letter] {
        &self.rows[0]
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[Vec<Letter>] {
        &self.rows
    }

    /// Border keys of this table.
    pub fn keys(&self) -> &BorderKeys {
        &self.keys
    }

    /// Cell at 1-based `(row, column)`.
    ///
    /// References past the table's extent wrap around it, so a short
    /// ciphertext with few distinct columns is still fully addressable.
    pub fn cell(&self, row: usize, column: usize) -> Letter {
        debug_assert!(row >= 1 && column >= 1, "grid references are 1-based");
        let row = (row - 1) % self.row_count();
        let column = (column - 1) % self.column_count();
        self.rows[row][column]
    }
}

impl fmt::Display for GridTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|letter| format!("{:02}", letter.index()))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
