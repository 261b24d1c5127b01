use chrono::{Datelike, NaiveDate};

use crate::model::quote::{FALLBACK_QUOTE, Quote};
use crate::ops::ids::next_id;

/// ID prefix for the quote collection
pub const ID_PREFIX: &str = "Q";

/// Error type for quote operations
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("quote not found: {0}")]
    NotFound(String),
    #[error("quote text must not be empty")]
    EmptyText,
}

/// Add a quote. Returns the assigned ID.
pub fn add_quote(quotes: &mut Vec<Quote>, text: &str, author: &str) -> Result<String, QuoteError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QuoteError::EmptyText);
    }
    let id = next_id(quotes.iter().map(|q| q.id.as_str()), ID_PREFIX);
    quotes.push(Quote {
        id: id.clone(),
        text: text.to_string(),
        author: author.trim().to_string(),
    });
    Ok(id)
}

/// Remove a quote from the store, returning it for reporting.
pub fn delete_quote(quotes: &mut Vec<Quote>, quote_id: &str) -> Result<Quote, QuoteError> {
    let idx = quotes
        .iter()
        .position(|q| q.id == quote_id)
        .ok_or_else(|| QuoteError::NotFound(quote_id.into()))?;
    Ok(quotes.remove(idx))
}

/// Pick the quote for a given day, rotating through the collection by
/// day-of-year. Falls back to the built-in quote when none are stored.
pub fn quote_of_the_day(quotes: &[Quote], today: NaiveDate) -> (&str, &str) {
    if quotes.is_empty() {
        return FALLBACK_QUOTE;
    }
    let idx = today.ordinal0() as usize % quotes.len();
    (&quotes[idx].text, &quotes[idx].author)
}
