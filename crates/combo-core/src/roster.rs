//! Static rosters: playable characters, difficulty levels and common tags.
//!
//! Table order is load-bearing: the share codec encodes each entry by its index.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
}

pub const CHARACTERS: &[Character] = &[
    Character { id: "ahri", slug: "ahri", name: "Ahri" },
    Character { id: "blitzcrank", slug: "blitzcrank", name: "Blitzcrank" },
    Character { id: "braum", slug: "braum", name: "Braum" },
    Character { id: "darius", slug: "darius", name: "Darius" },
    Character { id: "ekko", slug: "ekko", name: "Ekko" },
    Character { id: "illaoi", slug: "illaoi", name: "Illaoi" },
    Character { id: "jinx", slug: "jinx", name: "Jinx" },
    Character { id: "vi", slug: "vi", name: "Vi" },
    Character { id: "yasuo", slug: "yasuo", name: "Yasuo" },
];

pub fn find_character(slug: &str) -> Option<&'static Character> {
    CHARACTERS.iter().find(|c| c.slug == slug)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == name)
    }
}

/// Common tags, most frequent first.
pub const COMMON_TAGS: &[&str] = &[
    "BnB", "Midscreen", "Corner", "Combo", "Punish",
    "Anti-air", "Setup", "Mixup", "Overhead", "Low",
];
