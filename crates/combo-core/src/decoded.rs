/// Outcome of a lenient decode: either every piece matched a table entry, or
/// some pieces were passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    Exact(T),
    Fallback { value: T, unmatched: Vec<String> },
}

impl<T> Decoded<T> {
    pub fn new(value: T, unmatched: Vec<String>) -> Self {
        if unmatched.is_empty() {
            Self::Exact(value)
        } else {
            Self::Fallback { value, unmatched }
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Exact(v) | Self::Fallback { value: v, .. } => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Exact(v) | Self::Fallback { value: v, .. } => v,
        }
    }

    /// Verbatim pieces that missed every table. Empty for `Exact`.
    pub fn unmatched(&self) -> &[String] {
        match self {
            Self::Exact(_) => &[],
            Self::Fallback { unmatched, .. } => unmatched,
        }
    }
}
