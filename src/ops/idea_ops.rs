use crate::model::idea::Idea;
use crate::ops::ids::next_id;

/// ID prefix for the idea collection
pub const ID_PREFIX: &str = "I";

/// Error type for idea operations
#[derive(Debug, thiserror::Error)]
pub enum IdeaError {
    #[error("idea not found: {0}")]
    NotFound(String),
    #[error("idea title must not be empty")]
    EmptyTitle,
}

/// Add an idea. Returns the assigned ID.
pub fn add_idea(ideas: &mut Vec<Idea>, title: &str, description: &str) -> Result<String, IdeaError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(IdeaError::EmptyTitle);
    }
    let id = next_id(ideas.iter().map(|i| i.id.as_str()), ID_PREFIX);
    ideas.push(Idea {
        id: id.clone(),
        title: title.to_string(),
        description: description.trim().to_string(),
    });
    Ok(id)
}

/// Remove an idea from the store, returning it for reporting.
pub fn delete_idea(ideas: &mut Vec<Idea>, idea_id: &str) -> Result<Idea, IdeaError> {
    let idx = ideas
        .iter()
        .position(|i| i.id == idea_id)
        .ok_or_else(|| IdeaError::NotFound(idea_id.into()))?;
    Ok(ideas.remove(idx))
}
