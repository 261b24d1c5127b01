use serde::{Deserialize, Serialize};

/// A banked idea. No lifecycle beyond create/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    /// Store-assigned ID like `I-004`
    pub id: String,
    /// Idea title
    pub title: String,
    /// Free-form details (may be empty)
    #[serde(default)]
    pub description: String,
}
