use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboConfig {
    pub notation: NotationConfig,
    pub limits: LimitsConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotationConfig {
    /// Reject notation containing unrecognized text instead of passing it through.
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_combos_per_user: usize,
    /// A combo needs strictly more inputs than this.
    pub min_inputs: usize,
    /// A combo must contain at least one `>`.
    pub require_then: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub query_param: String,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_combos_per_user: 100,
            min_inputs: 5,
            require_then: true,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self { query_param: "s".into() }
    }
}

impl ComboConfig {
    /// Parse a JSON config; missing sections and fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
