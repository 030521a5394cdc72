//! Combo notation codec: token sequences ↔ compact human-readable text.
//!
//! ```
//! use combo_core::ComboSequence;
//! use combo_notation::{parse, serialize};
//!
//! let tokens = ComboSequence::from_canonical(["air", "6", "H", ">", "2", "M"]);
//! assert_eq!(serialize(&tokens), "j.6H > 2M");
//! assert_eq!(parse("j.6H > 2M"), tokens);
//! ```

pub mod parser;
pub mod serializer;

pub use parser::{import, parse, parse_detailed, parse_strict, parse_with};
pub use serializer::serialize;
