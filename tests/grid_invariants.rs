mod _fixtures;

use std::collections::HashSet;

use _fixtures::{letters, CACHE, K4};
use kryptos_lacuna::alphabet::{lacuna_text, Letter, Polarity};
use kryptos_lacuna::square::Square;
use kryptos_lacuna::table::{DistanceClosure, GridTable, TableKind, TablePair, MIN_ROWS};
use proptest::prelude::*;

fn check_table(table: &GridTable) -> Result<(), TestCaseError> {
    prop_assert!(table.row_count() >= MIN_ROWS);
    prop_assert_eq!(table.headers(), &table.rows()[0][..]);
    let distinct: HashSet<Letter> = table.headers().iter().copied().collect();
    prop_assert_eq!(distinct.len(), table.column_count());
    prop_assert!(table.headers().windows(2).all(|pair| pair[0] < pair[1]));
    for row in table.rows() {
        prop_assert_eq!(row.len(), table.column_count());
    }
    if table.kind() == TableKind::Even {
        for row in table.rows() {
            prop_assert!(row.iter().all(|letter| letter.is_even()));
        }
    }
    Ok(())
}

#[test]
fn k4_tables() {
    let tables = TablePair::build(&letters(K4), &CACHE);
    for kind in TableKind::ALL {
        check_table(tables.get(kind)).expect("table invariants hold");
    }
    assert_eq!(tables.get(TableKind::Even).column_count(), 13);
    assert_eq!(tables.get(TableKind::Mixed).column_count(), 26);
    assert!(!CACHE.is_empty());
}

proptest! {
    #[test]
    fn tables_hold_their_invariants(text in "[A-Z]{1,48}") {
        let ciphertext = letters(&text);
        let tables = TablePair::build(&ciphertext, &CACHE);
        for kind in TableKind::ALL {
            check_table(tables.get(kind))?;
        }
    }

    #[test]
    fn every_letter_has_a_square(text in "[A-Z]{1,24}", use_alt in any::<bool>()) {
        let tables = TablePair::build(&letters(&text), &CACHE);
        for kind in TableKind::ALL {
            for letter in Letter::all() {
                let square = Square::build(letter, tables.get(kind).clone(), use_alt);
                let window = square.window();
                prop_assert!(window.top <= window.bottom);
                prop_assert!(window.left <= window.right);
            }
        }
    }

    #[test]
    fn closure_is_bounded(text in "[A-Z]{1,48}") {
        let start = letters(&text);
        let closure = DistanceClosure::compute(&start, &lacuna_text(&start));
        prop_assert!(closure.len() <= 27);
        prop_assert_eq!(&closure.entries()[0].0, &start);
        for (entry, polarity) in closure.entries() {
            prop_assert_eq!(entry.len(), start.len());
            prop_assert_eq!(*polarity, Polarity::classify(entry));
        }
    }
}
