use crate::roster::Difficulty;
use crate::sequence::ComboSequence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted combo record. `inputs` serializes as a plain list of canonical
/// token strings, which is exactly what the parser and serializer round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComboRecord {
    pub id: Uuid,
    pub character_id: String,
    pub user_id: String,
    pub inputs: ComboSequence,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub damage: Option<u64>,
}

impl ComboRecord {
    pub fn new(
        character_id: impl Into<String>,
        user_id: impl Into<String>,
        inputs: ComboSequence,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            character_id: character_id.into(),
            user_id: user_id.into(),
            inputs,
            difficulty: None,
            tags: Vec::new(),
            created_at: Utc::now(),
            name: None,
            completed: None,
            damage: None,
        }
    }
}
