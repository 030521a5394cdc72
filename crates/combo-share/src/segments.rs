//! Per-segment coders. Each segment is compressed independently; table misses
//! pass through verbatim and are reported back to the caller.

use crate::codebook::{
    to_base36, CHARACTER_CODES, CHARACTER_SENTINEL, DIFFICULTY_CODES, INPUT_CODES, INPUT_FALLBACK,
    TAG_CODES,
};
use crate::error::{DecodeError, Result};
use combo_core::{ComboSequence, Difficulty, InputToken};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ---------- character ----------

pub fn encode_character(id: Option<&str>) -> String {
    id.and_then(|id| CHARACTER_CODES.encode(id))
        .unwrap_or(CHARACTER_SENTINEL)
        .to_string()
}

pub fn decode_character(code: &str, unmatched: &mut Vec<String>) -> Option<String> {
    if code.is_empty() || code == CHARACTER_SENTINEL {
        return None;
    }
    match CHARACTER_CODES.decode(code) {
        Some(id) => Some(id.to_string()),
        None => {
            unmatched.push(code.to_string());
            None
        }
    }
}

// ---------- inputs ----------

pub fn encode_inputs(inputs: &[InputToken]) -> String {
    inputs
        .iter()
        .map(|t| {
            INPUT_CODES
                .encode(t.canonical())
                .and_then(|c| c.chars().next())
                .unwrap_or(INPUT_FALLBACK)
        })
        .collect()
}

pub fn decode_inputs(codes: &str, unmatched: &mut Vec<String>) -> ComboSequence {
    let mut buf = [0u8; 4];
    codes
        .chars()
        .map(|c| {
            let code: &str = c.encode_utf8(&mut buf);
            match INPUT_CODES.decode(code) {
                Some(canonical) => InputToken::from_canonical(canonical),
                None => {
                    let token = InputToken::from_canonical(code);
                    if let InputToken::Other(_) = token {
                        unmatched.push(code.to_string());
                    }
                    token
                }
            }
        })
        .collect()
}

// ---------- difficulty ----------

pub fn encode_difficulty(difficulty: Option<Difficulty>) -> String {
    difficulty
        .and_then(|d| DIFFICULTY_CODES.encode(d.as_str()))
        .unwrap_or_default()
        .to_string()
}

pub fn decode_difficulty(code: &str, unmatched: &mut Vec<String>) -> Option<Difficulty> {
    if code.is_empty() {
        return None;
    }
    let difficulty = DIFFICULTY_CODES.decode(code).and_then(Difficulty::from_name);
    if difficulty.is_none() {
        unmatched.push(code.to_string());
    }
    difficulty
}

// ---------- damage ----------

pub fn encode_damage(damage: Option<u64>) -> String {
    damage.map(to_base36).unwrap_or_default()
}

pub fn decode_damage(text: &str) -> Result<Option<u64>> {
    if text.is_empty() {
        return Ok(None);
    }
    u64::from_str_radix(text, 36)
        .map(Some)
        .map_err(|_| DecodeError::Damage(text.to_string()))
}

// ---------- tags ----------

pub fn encode_tags(tags: &[String]) -> String {
    let joined = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| TAG_CODES.encode(t).unwrap_or(t))
        .collect::<Vec<_>>()
        .join(",");
    utf8_percent_encode(&joined, URI_COMPONENT).to_string()
}

pub fn decode_tags(text: &str, unmatched: &mut Vec<String>) -> Result<Vec<String>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let decoded = percent_decode_str(text)
        .decode_utf8()
        .map_err(|source| DecodeError::Percent { segment: "tags", source })?;
    Ok(decoded
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| match TAG_CODES.decode(t) {
            Some(tag) => tag.to_string(),
            None => {
                unmatched.push(t.to_string());
                t.to_string()
            }
        })
        .collect())
}

// ---------- name ----------

pub fn encode_name(name: Option<&str>) -> String {
    name.map(|n| utf8_percent_encode(n, URI_COMPONENT).to_string())
        .unwrap_or_default()
}

pub fn decode_name(text: &str) -> Result<Option<String>> {
    if text.is_empty() {
        return Ok(None);
    }
    percent_decode_str(text)
        .decode_utf8()
        .map(|n| Some(n.into_owned()))
        .map_err(|source| DecodeError::Percent { segment: "name", source })
}
