//! Keyword list parsing and validation.

use crate::error::SearchTrendsError;

/// Splits comma-separated keyword input (`"fashion, style"`) into trimmed,
/// non-empty keywords. Order and duplicates are preserved.
#[must_use]
pub fn split_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Trims each keyword and checks the list is usable as a query.
///
/// # Errors
///
/// Returns [`SearchTrendsError::InvalidInput`] if the list is empty or any
/// keyword is blank after trimming.
pub fn validate_keywords(keywords: &[String]) -> Result<Vec<String>, SearchTrendsError> {
    if keywords.is_empty() {
        return Err(SearchTrendsError::InvalidInput(
            "keywords must be a non-empty list".to_string(),
        ));
    }

    keywords
        .iter()
        .enumerate()
        .map(|(idx, keyword)| {
            let trimmed = keyword.trim();
            if trimmed.is_empty() {
                Err(SearchTrendsError::InvalidInput(format!(
                    "keyword at position {idx} is blank"
                )))
            } else {
                Ok(trimmed.to_owned())
            }
        })
        .collect()
}
