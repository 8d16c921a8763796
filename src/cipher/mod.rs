//! Sequence driver.
//!
//! [`Cipher::new`] normalises the input, builds the even and mixed grid
//! tables once, and resolves every position in ascending order into an arena
//! of [`Character`]s.  Each position receives its alternation flag from a
//! per-letter toggle table before it is built; after it is finalised, every
//! square built so far is marked with the lacuna of its intermediate letter.
//! Resolution order is therefore significant and positions are never
//! resolved out of order or in parallel.

mod trace;

pub use trace::CharacterTrace;

use tracing::debug;

use crate::alphabet::{lacuna_text, to_string, Letter, ALPHABET_LEN};
use crate::character::{Character, Resolution};
use crate::config::CipherConfig;
use crate::table::{DistanceCache, TablePair};
use crate::{CipherError, CipherResult};

/// Per-letter alternation state.
///
/// Every letter starts unset.  Each occurrence takes the current flag and
/// toggles it; fixed alternates always take `true`.
#[derive(Debug, Clone)]
pub struct AlternationFlags {
    flags: [bool; ALPHABET_LEN as usize],
    fixed: Vec<Letter>,
}

impl AlternationFlags {
    pub fn new(fixed: Vec<Letter>) -> Self {
        AlternationFlags {
            flags: [false; ALPHABET_LEN as usize],
            fixed,
        }
    }

    /// Flag for the next occurrence of `letter`.
    pub fn assign(&mut self, letter: Letter) -> bool {
        let slot = &mut self.flags[letter.index() as usize - 1];
        let flag = *slot || self.fixed.contains(&letter);
        *slot = !*slot;
        flag
    }

    /// Flag of a first occurrence.
    pub fn initial(&self, letter: Letter) -> bool {
        self.fixed.contains(&letter)
    }
}

/// A fully resolved ciphertext.
#[derive(Debug, Clone)]
pub struct Cipher {
    config: CipherConfig,
    ciphertext: Vec<Letter>,
    lacuna: Vec<Letter>,
    tables: TablePair,
    characters: Vec<Character>,
    plaintext: Vec<Letter>,
}

impl Cipher {
    /// Decodes `text` under `config`, sharing distance closures through
    /// `cache`.
    pub fn new(text: &str, config: &CipherConfig, cache: &DistanceCache) -> CipherResult<Cipher> {
        config.validate()?;
        let letters = parse(text, config.skip_non_alphabetic)?;
        let mut ciphertext = letters;
        let mut lacuna = lacuna_text(&ciphertext);
        if config.invert {
            core::mem::swap(&mut ciphertext, &mut lacuna);
        }
        debug!(
            length = ciphertext.len(),
            invert = config.invert,
            "deciphering"
        );

        let tables = TablePair::build(&ciphertext, cache);
        let mut flags = AlternationFlags::new(config.fixed_alternate_letters()?);
        let mut characters: Vec<Character> = Vec::with_capacity(ciphertext.len());
        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for (offset, &letter) in ciphertext.iter().enumerate() {
            let use_alt = flags.assign(letter);
            let mut character = Character::build(offset + 1, letter, use_alt, &tables);
            let resolution = character.finalize();
            characters.push(character);
            plaintext.push(resolution.letter);
            for earlier in characters.iter_mut() {
                earlier.mark_lacuna(resolution.intermediate);
            }
        }

        debug!(plaintext = %to_string(&plaintext), "deciphered");
        Ok(Cipher {
            config: config.clone(),
            ciphertext,
            lacuna,
            tables,
            characters,
            plaintext,
        })
    }

    /// Ciphertext actually decoded (the lacuna text when inverted).
    pub fn ciphertext(&self) -> &[Letter] {
        &self.ciphertext
    }

    /// Lacuna of [`Cipher::ciphertext`].
    pub fn lacuna(&self) -> &[Letter] {
        &self.lacuna
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    pub fn tables(&self) -> &TablePair {
        &self.tables
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Character at 1-based `index`.
    pub fn get(&self, index: usize) -> Option<&Character> {
        index.checked_sub(1).and_then(|offset| self.characters.get(offset))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn plaintext_letters(&self) -> &[Letter] {
        &self.plaintext
    }

    pub fn plaintext(&self) -> String {
        to_string(&self.plaintext)
    }

    /// Plaintext split into rows of `width` letters.
    pub fn rows(&self, width: usize) -> Vec<String> {
        self.plaintext
            .chunks(width.max(1))
            .map(to_string)
            .collect()
    }

    /// Plaintext rows at the configured width.
    pub fn layout(&self) -> Vec<String> {
        self.rows(self.config.row_width)
    }

    /// Per-position records in index order.
    pub fn trace(&self) -> Vec<CharacterTrace> {
        self.characters
            .iter()
            .filter_map(CharacterTrace::capture)
            .collect()
    }

    /// Resolves position `index` from scratch, as if it were the first
    /// occurrence of its letter and nothing had been decoded before it.
    pub fn resolve_isolated(&self, index: usize) -> Option<Resolution> {
        let letter = *self.ciphertext.get(index.checked_sub(1)?)?;
        let flags = AlternationFlags::new(self.config.fixed_alternate_letters().ok()?);
        let mut character = Character::build(index, letter, flags.initial(letter), &self.tables);
        Some(character.finalize())
    }
}

fn parse(text: &str, skip_non_alphabetic: bool) -> CipherResult<Vec<Letter>> {
    let mut letters = Vec::with_capacity(text.len());
    for (offset, ch) in text.chars().enumerate() {
        match Letter::from_char(ch) {
            Some(letter) => letters.push(letter),
            None if skip_non_alphabetic => continue,
            None => {
                return Err(CipherError::InvalidCharacter {
                    position: offset + 1,
                    found: ch,
                })
            }
        }
    }
    if letters.is_empty() {
        return Err(CipherError::EmptyCiphertext);
    }
    Ok(letters)
}
