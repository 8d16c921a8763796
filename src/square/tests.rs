use super::{Corner, Square, Window};
use crate::alphabet::{to_string, Letter};
use crate::table::{DistanceCache, TableKind, TablePair};

fn letters(text: &str) -> Vec<Letter> {
    text.chars().filter_map(Letter::from_char).collect()
}

fn letter(ch: char) -> Letter {
    Letter::from_char(ch).expect("alphabetic")
}

fn kryptos_tables() -> TablePair {
    TablePair::build(&letters("KRYPTOS"), &DistanceCache::new())
}

#[test]
fn corners_read_clockwise_from_window() {
    let tables = kryptos_tables();
    for kind in TableKind::ALL {
        let table = tables.get(kind).clone();
        let square = Square::build(letter('K'), table.clone(), false);
        let window = square.window();
        assert!(window.top <= window.bottom);
        assert!(window.left <= window.right);
        for corner in Corner::CLOCKWISE {
            let (row, column) = window.coordinates(corner);
            assert_eq!(square.value(corner), table.cell(row, column));
        }
        assert_eq!(square.kind(), kind);
    }
}

#[test]
fn kryptos_first_letter_squares() {
    let tables = kryptos_tables();
    let even = Square::build(letter('K'), tables.get(TableKind::Even).clone(), false);
    let mixed = Square::build(letter('K'), tables.get(TableKind::Mixed).clone(), false);
    assert_eq!(to_string(&even.values()), "HBFX");
    assert_eq!(to_string(&mixed.values()), "BSIP");
    assert_eq!(even.cipher_active(), None);
    assert_eq!(mixed.lacuna_active(), None);
}

#[test]
fn construction_marks_cipher_and_lacuna() {
    let tables = kryptos_tables();
    let mixed = Square::build(letter('O'), tables.get(TableKind::Mixed).clone(), false);
    assert_eq!(to_string(&mixed.values()), "GOEK");
    assert_eq!(mixed.cipher_active(), Some(Corner::TopRight));
    assert_eq!(mixed.lacuna_active(), Some(Corner::BottomLeft));
}

#[test]
fn alternating_occurrence_uses_replacement() {
    let tables = kryptos_tables();
    let table = tables.get(TableKind::Mixed).clone();
    let plain = Square::build(letter('K'), table.clone(), false);
    let alt = Square::build(letter('K'), table.clone(), true);
    assert!(!plain.mapped());
    assert!(alt.mapped());
    assert_eq!(alt.mapped_to(), letter('V'));
    let untouched = Square::build(letter('B'), table, true);
    assert!(!untouched.mapped());
}

#[test]
fn mark_lacuna_records_only_present_complements() {
    let tables = kryptos_tables();
    let mut even = Square::build(letter('P'), tables.get(TableKind::Even).clone(), false);
    assert_eq!(to_string(&even.values()), "HBVJ");
    assert_eq!(even.mark_lacuna(letter('P')), Some(Corner::BottomLeft));
    assert_eq!(even.mark_lacuna(Letter::A), None);
    assert_eq!(even.decoded_lacuna(), Some(Corner::BottomLeft));
    even.clear_markers();
    assert_eq!(even.decoded_lacuna(), None);
    assert_eq!(even.lacuna_active(), None);
}

#[test]
fn active_selects_a_corner() {
    let tables = kryptos_tables();
    let mut even = Square::build(letter('K'), tables.get(TableKind::Even).clone(), false);
    assert_eq!(even.active(Corner::BottomRight), letter('F'));
    assert_eq!(even.selected(), Some(Corner::BottomRight));
    assert_eq!(even.active_letter(letter('X')), Some(letter('X')));
    assert_eq!(even.selected(), Some(Corner::BottomLeft));
    assert_eq!(even.active_letter(letter('Q')), None);
    even.clear_active();
    assert_eq!(even.selected(), None);
}

#[test]
fn corner_geometry() {
    for corner in Corner::CLOCKWISE {
        assert_eq!(corner.opposite().opposite(), corner);
        assert_eq!(Corner::CLOCKWISE[corner.offset()], corner);
    }
    let window = Window::from_key_positions(9, 2, 4, 11);
    assert_eq!(window.coordinates(Corner::TopLeft), (4, 2));
    assert_eq!(window.coordinates(Corner::BottomRight), (11, 9));
}
