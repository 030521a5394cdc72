//! Combo share codec: a combo and its metadata packed into one URL-safe string.
//!
//! Segments:
//! 1. Character: base-36 roster index, `z` when absent
//! 2. Inputs: one alphabet symbol per token, `X` for anything unmapped
//! 3. Difficulty: base-36 index, empty when absent
//! 4. Damage: base-36 number, empty when absent
//! 5. Tags: common tags as base-36 indices, others verbatim, percent-encoded
//! 6. Name: percent-encoded, empty when absent
//!
//! The joined segments are base64url-encoded without padding.

pub mod codebook;
pub mod codec;
pub mod error;
pub mod segments;
pub mod url;

pub use codebook::{validate_tables, Codebook};
pub use codec::{compress, decompress, decompress_detailed, SharePayload};
pub use error::{DecodeError, Result};
pub use url::{decode_share_url, share_param, share_url};
