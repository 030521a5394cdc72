//! Static codebooks: ordered tables → short codes.
//!
//! Order is the wire format. Append new entries at the end; never reorder.

use combo_core::{Difficulty, CHARACTERS, COMMON_TAGS};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// 62-symbol alphabet for input codes.
pub const INPUT_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Code for inputs with no slot: unknown tokens and table overflow.
pub const INPUT_FALLBACK: char = 'X';

/// Character code for a missing or unknown character.
pub const CHARACTER_SENTINEL: &str = "z";

/// Canonical input tokens, most common first.
pub const INPUT_ORDER: &[&str] = &[
    // directions
    "6", "2", "4", "8", "1", "3", "7", "9", "5",
    // buttons
    "H", "M", "L", "S1", "S2", "T",
    // connectors
    "+", ">", "~",
    // movement
    "D", "BD",
    // modifiers
    "air", "delay", "whiff", "hold", "tag", "or",
    // jump cancels
    "7jc", "9jc", "jc",
    ",",
];

/// Bidirectional value ↔ code table.
#[derive(Debug, Clone, Default)]
pub struct Codebook {
    encode: HashMap<&'static str, String>,
    decode: HashMap<String, &'static str>,
}

impl Codebook {
    /// Code each entry by its index in base 36.
    pub fn base36(entries: &[&'static str]) -> Self {
        let mut book = Self::default();
        for (index, &value) in entries.iter().enumerate() {
            book.insert(value, to_base36(index as u64));
        }
        book
    }

    /// Code each entry by the alphabet symbol at its index; entries past the
    /// end of the alphabet all share `overflow`.
    pub fn alphabet(entries: &[&'static str], alphabet: &str, overflow: char) -> Self {
        let mut book = Self::default();
        let mut symbols = alphabet.chars();
        for &value in entries {
            let code = symbols.next().unwrap_or(overflow);
            book.insert(value, code.to_string());
        }
        book
    }

    fn insert(&mut self, value: &'static str, code: String) {
        self.decode.entry(code.clone()).or_insert(value);
        self.encode.insert(value, code);
    }

    pub fn encode(&self, value: &str) -> Option<&str> {
        self.encode.get(value).map(String::as_str)
    }

    pub fn decode(&self, code: &str) -> Option<&'static str> {
        self.decode.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }

    fn codes(&self) -> impl Iterator<Item = &str> {
        self.encode.values().map(String::as_str)
    }
}

pub static CHARACTER_CODES: LazyLock<Codebook> = LazyLock::new(|| {
    let ids: Vec<&'static str> = CHARACTERS.iter().map(|c| c.id).collect();
    Codebook::base36(&ids)
});

pub static INPUT_CODES: LazyLock<Codebook> =
    LazyLock::new(|| Codebook::alphabet(INPUT_ORDER, INPUT_ALPHABET, INPUT_FALLBACK));

pub static DIFFICULTY_CODES: LazyLock<Codebook> = LazyLock::new(|| {
    let names: Vec<&'static str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
    Codebook::base36(&names)
});

pub static TAG_CODES: LazyLock<Codebook> = LazyLock::new(|| Codebook::base36(COMMON_TAGS));

/// Lowercase base-36 rendering.
pub fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".into();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Report table problems: duplicate input codes, inputs that landed on the
/// fallback code, and a character index that collides with the sentinel.
pub fn validate_tables() -> Vec<String> {
    let mut issues = Vec::new();

    let codes: Vec<&str> = INPUT_CODES.codes().collect();
    let unique: HashSet<&str> = codes.iter().copied().collect();
    if codes.len() != unique.len() {
        issues.push("Input mapping collision detected".to_string());
    }

    let fallback = INPUT_FALLBACK.to_string();
    let unmapped: Vec<&str> = INPUT_ORDER
        .iter()
        .copied()
        .filter(|input| INPUT_CODES.encode(input).map_or(true, |c| c == fallback))
        .collect();
    if !unmapped.is_empty() {
        issues.push(format!("Unmapped inputs: {}", unmapped.join(", ")));
    }

    if let Some(id) = CHARACTER_CODES.decode(CHARACTER_SENTINEL) {
        issues.push(format!("Character {id} collides with the sentinel code"));
    }

    issues
}
