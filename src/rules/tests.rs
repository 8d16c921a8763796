use super::{Branch, Marker, RulesEngine};
use crate::alphabet::Letter;
use crate::character::{Activity, Character};
use crate::square::Corner;
use crate::table::{DistanceCache, TableKind, TablePair};

const K4: &str = "OBKRUOXOGHULBSOLIFBBWFLRVQQPRNGKSSOTWTQSJQSSEKZZWATJKLUDIAWINFBNYPVTTMZFPKWGDKZXTJCDIGKUHUAUEKCAR";

fn letters(text: &str) -> Vec<Letter> {
    text.chars().filter_map(Letter::from_char).collect()
}

fn letter(ch: char) -> Letter {
    Letter::from_char(ch).expect("alphabetic")
}

fn tables(text: &str) -> TablePair {
    TablePair::build(&letters(text), &DistanceCache::new())
}

fn corners() -> [Option<Corner>; 5] {
    [
        None,
        Some(Corner::TopLeft),
        Some(Corner::TopRight),
        Some(Corner::BottomRight),
        Some(Corner::BottomLeft),
    ]
}

#[test]
fn branch_follows_complete_activity() {
    let one = Activity::from_markers(Some(Corner::TopLeft), None);
    let both = Activity::from_markers(Some(Corner::TopLeft), Some(Corner::BottomRight));
    assert_eq!(Branch::select(Activity::None, Activity::None), Branch::Neither);
    assert_eq!(Branch::select(one, one), Branch::Neither);
    assert_eq!(Branch::select(both, one), Branch::Cipher);
    assert_eq!(Branch::select(Activity::None, both), Branch::Lacuna);
    assert_eq!(Branch::select(both, both), Branch::Both);
}

#[test]
fn kryptos_takes_the_neither_branch_throughout() {
    let tables = tables("KRYPTOS");
    for (offset, ch) in "KRYPTOS".chars().enumerate() {
        let character = Character::build(offset + 1, letter(ch), false, &tables);
        assert_eq!(RulesEngine::branch(&character), Branch::Neither);
    }
}

#[test]
fn k4_reaches_every_branch() {
    let tables = tables(K4);
    let cases = [
        (12, 'L', false, Branch::Lacuna),
        (18, 'F', false, Branch::Cipher),
        (47, 'Z', true, Branch::Both),
        (1, 'O', false, Branch::Neither),
    ];
    for (index, ch, use_alt, branch) in cases {
        assert_eq!(K4.chars().nth(index - 1), Some(ch));
        let mut character = Character::build(index, letter(ch), use_alt, &tables);
        assert_eq!(RulesEngine::branch(&character), branch, "position {index}");
        let intermediate = RulesEngine::apply(&mut character);
        assert_eq!(
            character.square(character.table()).value(character.position()),
            intermediate
        );
    }
}

#[test]
fn unpack_order_contribution_is_bounded() {
    let tables = tables(K4);
    let seeds = [
        Character::build(1, letter('O'), false, &tables),
        Character::build(2, letter('B'), false, &tables),
        Character::build(30, letter('N'), false, &tables),
        Character::build(47, letter('Z'), true, &tables),
    ];
    for seed in &seeds {
        for even in corners() {
            for mixed in corners() {
                for marker in [Marker::Cipher, Marker::Lacuna] {
                    let mut character = seed.clone();
                    let before = character.algorithm();
                    let _ = RulesEngine::unpack(&mut character, even, mixed, marker);
                    assert!(character.algorithm() - before < 4);
                }
            }
        }
    }
}

#[test]
fn unpack_overrides_for_markers_in_both_squares() {
    let tables = tables(K4);
    let odd = Character::build(1, letter('O'), false, &tables);

    let cases = [
        (Corner::TopLeft, Corner::BottomRight, Corner::TopLeft),
        (Corner::TopRight, Corner::BottomRight, Corner::BottomLeft),
        (Corner::BottomRight, Corner::TopRight, Corner::TopLeft),
        (Corner::BottomLeft, Corner::TopLeft, Corner::BottomLeft),
    ];
    for (even, mixed, expected) in cases {
        let mut character = odd.clone();
        let selected = RulesEngine::unpack(&mut character, Some(even), Some(mixed), Marker::Cipher);
        assert_eq!(selected, expected, "{even}{mixed}");
    }

    let mut alternate = Character::build(47, letter('Z'), true, &tables);
    let selected = RulesEngine::unpack(
        &mut alternate,
        Some(Corner::BottomLeft),
        Some(Corner::TopLeft),
        Marker::Lacuna,
    );
    assert_eq!(selected, Corner::TopRight);
}

#[test]
fn unpack_falls_through_for_other_pairs() {
    let tables = tables(K4);
    // Odd letter at an odd position: the top-left marker maps to bottom-right.
    let mut character = Character::build(1, letter('O'), false, &tables);
    let selected = RulesEngine::unpack(
        &mut character,
        Some(Corner::TopRight),
        Some(Corner::TopLeft),
        Marker::Cipher,
    );
    assert_eq!(selected, Corner::BottomRight);

    // No marker at all validates the current corner.
    let mut character = Character::build(2, letter('B'), false, &tables);
    character.position = Corner::BottomRight;
    let selected = RulesEngine::unpack(&mut character, None, None, Marker::Cipher);
    assert_eq!(selected, Corner::TopRight);
}

#[test]
fn five_minute_rule_forces_bottom_right() {
    let tables = tables(K4);
    // Odd position, letter index divisible by five, marker only in the even square.
    let mut character = Character::build(1, letter('O'), false, &tables);
    assert!(character.char_divisible(5));
    let selected = RulesEngine::unpack(&mut character, Some(Corner::TopLeft), None, Marker::Cipher);
    assert_eq!(selected, Corner::TopRight);
}

#[test]
fn unpack_flips_odd_letters() {
    let tables = tables(K4);
    let mut character = Character::build(1, letter('O'), false, &tables);
    character.table = TableKind::Even;
    let _ = RulesEngine::unpack(&mut character, None, Some(Corner::BottomRight), Marker::Cipher);
    assert_eq!(character.table(), TableKind::Mixed);

    let mut character = Character::build(2, letter('B'), false, &tables);
    character.table = TableKind::Even;
    let _ = RulesEngine::unpack(&mut character, Some(Corner::BottomRight), None, Marker::Cipher);
    assert_eq!(character.table(), TableKind::Mixed);
}

#[test]
fn every_residue_class_resolves() {
    // 390 covers the 2, 5 and 15 residues and the 26-letter replacement cycle.
    for text in [K4, "KRYPTOS", "BDFH"] {
        let tables = tables(text);
        for index in 1..=390 {
            for ch in Letter::all() {
                for use_alt in [false, true] {
                    let mut character = Character::build(index, ch, use_alt, &tables);
                    let resolution = character.finalize();
                    assert!(character.algorithm() < 4);
                    assert_eq!(u32::from(resolution.algorithm.index()), character.algorithm());
                    assert_eq!(
                        character.square(resolution.table).value(resolution.position),
                        resolution.intermediate,
                        "{text} position {index} letter {ch} alt {use_alt}"
                    );
                    assert_eq!(
                        character.transcribe(resolution.algorithm, resolution.intermediate),
                        resolution.letter
                    );
                }
            }
        }
    }
}
