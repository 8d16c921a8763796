#![allow(dead_code)]

use once_cell::sync::Lazy;
use kryptos_lacuna::alphabet::Letter;
use kryptos_lacuna::cipher::Cipher;
use kryptos_lacuna::config::CipherConfig;
use kryptos_lacuna::table::DistanceCache;

pub const KRYPTOS: &str = "KRYPTOS";

pub const K4: &str = "OBKRUOXOGHULBSOLIFBBWFLRVQQPRNGKSSOTWTQSJQSSEKZZWATJKLUDIAWINFBNYPVTTMZFPKWGDKZXTJCDIGKUHUAUEKCAR";

/// Cache shared by every decode in a test binary.
pub static CACHE: Lazy<DistanceCache> = Lazy::new(DistanceCache::new);

pub static K4_CIPHER: Lazy<Cipher> = Lazy::new(|| decode(K4));

pub fn decode(text: &str) -> Cipher {
    decode_with(text, &CipherConfig::default())
}

pub fn decode_with(text: &str, config: &CipherConfig) -> Cipher {
    Cipher::new(text, config, &CACHE).expect("fixture ciphertext decodes")
}

pub fn k4() -> &'static Cipher {
    &K4_CIPHER
}

pub fn letters(text: &str) -> Vec<Letter> {
    text.chars().filter_map(Letter::from_char).collect()
}
