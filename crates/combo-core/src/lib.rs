//! Core types for combo notation: the input token vocabulary, combo sequences,
//! rosters, persisted records, validation limits and configuration.

pub mod config;
pub mod decoded;
pub mod error;
pub mod limits;
pub mod roster;
pub mod sequence;
pub mod token;
pub mod types;

pub use config::{ComboConfig, LimitsConfig, NotationConfig, ShareConfig};
pub use decoded::Decoded;
pub use error::{ComboError, Result};
pub use limits::{validate_combo_inputs, validate_user_combo_limit};
pub use roster::{find_character, Character, Difficulty, CHARACTERS, COMMON_TAGS};
pub use sequence::ComboSequence;
pub use token::{
    Button, Connector, Direction, Freeform, InputToken, JumpCancel, Modifier, Movement, TokenClass,
};
pub use types::ComboRecord;

#[cfg(test)]
mod tests;
