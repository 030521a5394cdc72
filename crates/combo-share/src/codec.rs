//! Share codec: packs a combo plus metadata into one URL-safe string.
//!
//! Layout before base64: six `|`-separated segments in fixed order
//! `character | inputs | difficulty | damage | tags | name`.

use crate::error::{DecodeError, Result};
use crate::segments;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use combo_core::{ComboRecord, ComboSequence, Decoded, Difficulty};
use serde::{Deserialize, Serialize};

const SEGMENTS: usize = 6;

/// Everything a share link carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SharePayload {
    pub character_id: Option<String>,
    pub inputs: ComboSequence,
    pub difficulty: Option<Difficulty>,
    pub damage: Option<u64>,
    pub tags: Vec<String>,
    pub name: Option<String>,
}

impl SharePayload {
    pub fn new(inputs: ComboSequence) -> Self {
        Self { inputs, ..Self::default() }
    }

    /// Split a comma-separated tag list as typed into a form field.
    pub fn with_tags_str(mut self, tags: &str) -> Self {
        self.tags = tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        self
    }
}

impl From<&ComboRecord> for SharePayload {
    fn from(record: &ComboRecord) -> Self {
        Self {
            character_id: Some(record.character_id.clone()),
            inputs: record.inputs.clone(),
            difficulty: record.difficulty,
            damage: record.damage,
            tags: record.tags.clone(),
            name: record.name.clone(),
        }
    }
}

/// Compress a payload into an opaque URL-safe string.
pub fn compress(payload: &SharePayload) -> String {
    let parts = [
        segments::encode_character(payload.character_id.as_deref()),
        segments::encode_inputs(&payload.inputs),
        segments::encode_difficulty(payload.difficulty),
        segments::encode_damage(payload.damage),
        segments::encode_tags(&payload.tags),
        segments::encode_name(payload.name.as_deref().filter(|n| !n.is_empty())),
    ];
    let joined = parts.join("|");
    tracing::trace!(raw = %joined, "compressed share payload");
    URL_SAFE_NO_PAD.encode(joined.as_bytes())
}

/// Reverse [`compress`]. Table misses are passed through, not rejected.
pub fn decompress(encoded: &str) -> Result<SharePayload> {
    decompress_detailed(encoded).map(Decoded::into_value)
}

/// Like [`decompress`], but reports which codes missed their tables.
pub fn decompress_detailed(encoded: &str) -> Result<Decoded<SharePayload>> {
    decode_segments(encoded)
        .inspect_err(|e| tracing::warn!(error = %e, "invalid share payload"))
}

fn decode_segments(encoded: &str) -> Result<Decoded<SharePayload>> {
    // Accept standard-alphabet and padded input as well.
    let normalized: String = encoded
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;
    let text = String::from_utf8(bytes)?;

    let parts: Vec<&str> = text.split('|').collect();
    if parts.len() != SEGMENTS {
        return Err(DecodeError::SegmentCount { found: parts.len() });
    }

    let mut unmatched = Vec::new();
    let payload = SharePayload {
        character_id: segments::decode_character(parts[0], &mut unmatched),
        inputs: segments::decode_inputs(parts[1], &mut unmatched),
        difficulty: segments::decode_difficulty(parts[2], &mut unmatched),
        damage: segments::decode_damage(parts[3])?,
        tags: segments::decode_tags(parts[4], &mut unmatched)?,
        name: segments::decode_name(parts[5])?,
    };

    if !unmatched.is_empty() {
        tracing::debug!(?unmatched, "share payload decoded with passthrough codes");
    }
    Ok(Decoded::new(payload, unmatched))
}
