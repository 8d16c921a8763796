//! Distance closure over a ciphertext and its lacuna text.
//!
//! Starting from the two seed strings, every unordered pair of known strings
//! is folded six times with [`distance_text`], recording each new
//! `(string, polarity)` entry in discovery order.  The outer loop runs at most
//! 26 passes and stops early once a pass discovers nothing new.  Because
//! `distance_to(x, y) = y - x`, every entry is a multiple of the ciphertext,
//! so the closure never holds more than 26 distinct strings.

use std::collections::HashSet;

use itertools::Itertools;

use crate::alphabet::{distance_text, Letter, Polarity};

/// Maximum number of outer passes over the known strings.
pub const CLOSURE_PASSES: usize = 26;

/// Folding rounds applied to every unordered pair.
pub const FOLD_ROUNDS: usize = 6;

/// Ordered `(string, polarity)` entries reachable from a seed pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceClosure {
    entries: Vec<(Vec<Letter>, Polarity)>,
}

impl DistanceClosure {
    /// Computes the closure of `start` and `end`.
    ///
    /// Both seeds are kept as the first two entries even when they coincide
    /// (a ciphertext made only of `M` and `Z` is its own lacuna).
    ///
    /// # Panics
    ///
    /// Panics when the seeds are empty or of different lengths; both are
    /// programming errors upstream of the engine.
    pub fn compute(start: &[Letter], end: &[Letter]) -> DistanceClosure {
        assert!(!start.is_empty(), "distance closure seeded with an empty string");
        assert_eq!(
            start.len(),
            end.len(),
            "distance closure seeds differ in length"
        );

        let mut entries = vec![
            (start.to_vec(), Polarity::classify(start)),
            (end.to_vec(), Polarity::classify(end)),
        ];
        let mut known: HashSet<Vec<Letter>> = entries.iter().map(|(s, _)| s.clone()).collect();
        let mut completed: HashSet<(Vec<Letter>, Vec<Letter>)> = HashSet::new();

        for _ in 0..CLOSURE_PASSES {
            let discovered_before = entries.len();
            let snapshot: Vec<Vec<Letter>> = entries.iter().map(|(s, _)| s.clone()).collect();
            for (first, second) in snapshot.iter().tuple_combinations() {
                let pair = (first.clone(), second.clone());
                if completed.contains(&pair) {
                    continue;
                }
                let mut current = first.clone();
                let mut next = second.clone();
                for _ in 0..FOLD_ROUNDS {
                    let folded = distance_text(&current, &next);
                    if known.insert(folded.clone()) {
                        let polarity = Polarity::classify(&folded);
                        entries.push((folded.clone(), polarity));
                    }
                    current = next;
                    next = folded;
                }
                completed.insert(pair);
            }
            if entries.len() == discovered_before {
                break;
            }
        }

        DistanceClosure { entries }
    }

    /// Entries in discovery order.
    pub fn entries(&self) -> &[(Vec<Letter>, Polarity)] {
        &self.entries
    }

    /// Strings of the requested polarity, in discovery order.
    pub fn of_polarity(&self, polarity: Polarity) -> impl Iterator<Item = &[Letter]> + '_ {
        self.entries
            .iter()
            .filter(move |(_, pole)| *pole == polarity)
            .map(|(text, _)| text.as_slice())
    }

    /// Number of entries, counting a duplicated seed twice.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a closure holds at least its two seeds.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::lacuna_text;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().filter_map(Letter::from_char).collect()
    }

    fn multiple(text: &[Letter], k: i64) -> Vec<Letter> {
        text.iter()
            .map(|letter| Letter::from_index(letter.index() as i64 * k))
            .collect()
    }

    #[test]
    fn seeds_lead_the_closure() {
        let text = letters("KRYPTOS");
        let closure = DistanceClosure::compute(&text, &lacuna_text(&text));
        assert_eq!(closure.entries()[0].0, text);
        assert_eq!(closure.entries()[1].0, lacuna_text(&text));
        assert_eq!(closure.entries()[0].1, Polarity::Mixed);
    }

    #[test]
    fn every_entry_is_a_multiple_of_the_seed() {
        let text = letters("OBKRUOXOGHULBSOLIFBBWFLRVQQPRNGKSSOTWTQSJQSSEKZZWATJKLUDIAWINFBNYPVTTMZFPKWGDKZXTJCDIGKUHUAUEKCAR");
        let closure = DistanceClosure::compute(&text, &lacuna_text(&text));
        assert!(closure.len() <= 26);
        for (entry, polarity) in closure.entries() {
            assert!((0..26).any(|k| multiple(&text, k) == *entry));
            assert_eq!(*polarity, Polarity::classify(entry));
        }
        let distinct: HashSet<_> = closure.entries().iter().map(|(s, _)| s.clone()).collect();
        assert_eq!(distinct.len(), closure.len());
    }

    #[test]
    fn doubled_lacuna_is_first_even_entry() {
        let text = letters("KRYPTOS");
        let closure = DistanceClosure::compute(&text, &lacuna_text(&text));
        let first_even = closure
            .of_polarity(Polarity::AllEven)
            .next()
            .expect("an even string always exists");
        assert_eq!(first_even, multiple(&text, -2).as_slice());
    }

    #[test]
    fn self_lacuna_seed_is_kept_twice() {
        let text = letters("ZMMZ");
        let closure = DistanceClosure::compute(&text, &lacuna_text(&text));
        assert_eq!(closure.entries()[0].0, closure.entries()[1].0);
        assert!(closure.len() >= 2);
    }
}
