//! Query value object

use crate::text::escape_html;
use thiserror::Error;

/// Upper bound on the raw query length, counted in characters before
/// sanitization.
pub const MAX_QUERY_CHARS: usize = 5000;

/// Reasons a raw query is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query cannot be empty")]
    Empty,

    #[error("Query is {len} characters long (max {max})")]
    TooLong { len: usize, max: usize },
}

/// A caller query that passed validation and was sanitized once (Value Object)
///
/// The sanitized text is what every backend sees, and it is reused verbatim
/// as the search term when augmentation triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    content: String,
}

impl Query {
    /// Validate a raw query and sanitize it.
    ///
    /// The length check runs on the raw input, so a query of exactly
    /// [`MAX_QUERY_CHARS`] characters is accepted even if escaping makes it
    /// longer.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        if raw.is_empty() {
            return Err(QueryError::Empty);
        }
        let len = raw.chars().count();
        if len > MAX_QUERY_CHARS {
            return Err(QueryError::TooLong {
                len,
                max: MAX_QUERY_CHARS,
            });
        }
        Ok(Self {
            content: escape_html(raw),
        })
    }

    /// Get the sanitized query text
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sanitizes() {
        let q = Query::parse("<b>bold</b> & \"quoted\"").unwrap();
        assert_eq!(
            q.content(),
            "&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;"
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Query::parse(""), Err(QueryError::Empty));
    }

    #[test]
    fn test_whitespace_only_is_accepted() {
        // Only the empty string is rejected; blank text still reaches the model.
        assert!(Query::parse("   ").is_ok());
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(Query::parse(&"a".repeat(MAX_QUERY_CHARS)).is_ok());
    }

    #[test]
    fn test_over_limit_rejected() {
        let err = Query::parse(&"a".repeat(MAX_QUERY_CHARS + 1)).unwrap_err();
        assert_eq!(
            err,
            QueryError::TooLong {
                len: 5001,
                max: 5000
            }
        );
    }

    #[test]
    fn test_limit_counts_raw_characters() {
        // 5000 ampersands expand to 25000 bytes once escaped.
        let q = Query::parse(&"&".repeat(MAX_QUERY_CHARS)).unwrap();
        assert_eq!(q.content().len(), MAX_QUERY_CHARS * 5);
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        // 'あ' is 3 bytes; 5000 of them is still within the limit.
        assert!(Query::parse(&"あ".repeat(MAX_QUERY_CHARS)).is_ok());
    }
}
