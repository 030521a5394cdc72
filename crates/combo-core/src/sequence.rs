use crate::token::InputToken;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Ordered list of input tokens. Empty means "no combo yet"; order matters and
/// duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComboSequence(Vec<InputToken>);

impl ComboSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from canonical token strings (`"6"`, `"S1"`, `"air"`, ...).
    pub fn from_canonical<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items.into_iter().map(|s| InputToken::from_canonical(s.as_ref())).collect()
    }

    /// Append one token.
    pub fn push(&mut self, token: InputToken) {
        self.0.push(token);
    }

    /// Remove and return the most recently appended token.
    pub fn undo(&mut self) -> Option<InputToken> {
        self.0.pop()
    }

    pub fn reset(&mut self) {
        self.0.clear();
    }

    /// Replace the whole sequence, e.g. after an import.
    pub fn replace_with(&mut self, other: ComboSequence) {
        self.0 = other.0;
    }

    pub fn as_slice(&self) -> &[InputToken] {
        &self.0
    }

    pub fn to_canonical(&self) -> Vec<String> {
        self.0.iter().map(|t| t.canonical().to_string()).collect()
    }

    pub fn into_inner(self) -> Vec<InputToken> {
        self.0
    }
}

impl Deref for ComboSequence {
    type Target = [InputToken];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<InputToken>> for ComboSequence {
    fn from(tokens: Vec<InputToken>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<InputToken> for ComboSequence {
    fn from_iter<T: IntoIterator<Item = InputToken>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<InputToken> for ComboSequence {
    fn extend<T: IntoIterator<Item = InputToken>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ComboSequence {
    type Item = InputToken;
    type IntoIter = std::vec::IntoIter<InputToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ComboSequence {
    type Item = &'a InputToken;
    type IntoIter = std::slice::Iter<'a, InputToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
