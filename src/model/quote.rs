use serde::{Deserialize, Serialize};

/// A saved quote. No lifecycle beyond create/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Store-assigned ID like `Q-007`
    pub id: String,
    /// Quote text
    pub text: String,
    /// Attribution
    pub author: String,
}

/// Shown by `bz quote list` when the collection is empty.
pub const FALLBACK_QUOTE: (&str, &str) = (
    "The only way to do great work is to love what you do.",
    "Steve Jobs",
);
