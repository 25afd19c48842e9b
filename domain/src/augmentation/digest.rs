//! Search digest and enriched prompt value objects.

use crate::core::query::Query;

/// Text returned in place of a digest when the search found nothing.
pub const NO_SEARCH_RESULTS: &str = "No search results";

/// Separator placed between the original query and the digest.
pub const SEARCH_RESULTS_HEADER: &str = "\n\nSearch results:\n";

/// Most hits a digest will carry.
pub const MAX_DIGEST_ENTRIES: usize = 5;

/// One search hit as reported by the search backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHit {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    fn render(&self) -> String {
        format!(
            "{}: {}",
            self.title.as_deref().unwrap_or(""),
            self.content.as_deref().unwrap_or("")
        )
    }
}

/// Formatted search results handed back to the model (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDigest {
    text: String,
    hits: usize,
}

impl SearchDigest {
    /// Format hits as `title: content` lines in backend order.
    ///
    /// At most [`MAX_DIGEST_ENTRIES`] hits are kept. No hits yields
    /// [`NO_SEARCH_RESULTS`].
    pub fn from_hits(hits: impl IntoIterator<Item = SearchHit>) -> Self {
        let lines: Vec<String> = hits
            .into_iter()
            .take(MAX_DIGEST_ENTRIES)
            .map(|hit| hit.render())
            .collect();

        if lines.is_empty() {
            return Self::empty();
        }

        Self {
            hits: lines.len(),
            text: lines.join("\n"),
        }
    }

    /// The "no results" digest
    pub fn empty() -> Self {
        Self {
            text: NO_SEARCH_RESULTS.to_string(),
            hits: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of hits rendered into the digest
    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.hits == 0
    }
}

impl std::fmt::Display for SearchDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The original query followed by search results, sent for the second model call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedQuery {
    content: String,
}

impl EnrichedQuery {
    pub fn new(query: &Query, digest: &SearchDigest) -> Self {
        Self {
            content: format!(
                "{}{}{}",
                query.content(),
                SEARCH_RESULTS_HEADER,
                digest.text()
            ),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hits_in_order() {
        let digest = SearchDigest::from_hits(vec![
            SearchHit::new("Rust 1.85", "Edition 2024 is stable"),
            SearchHit::new("Release notes", "Async closures"),
        ]);
        assert_eq!(
            digest.text(),
            "Rust 1.85: Edition 2024 is stable\nRelease notes: Async closures"
        );
        assert_eq!(digest.hit_count(), 2);
    }

    #[test]
    fn caps_at_five_entries() {
        let hits = (0..8).map(|i| SearchHit::new(format!("t{i}"), format!("c{i}")));
        let digest = SearchDigest::from_hits(hits);
        assert_eq!(digest.hit_count(), MAX_DIGEST_ENTRIES);
        assert_eq!(digest.text().lines().count(), 5);
        assert!(digest.text().ends_with("t4: c4"));
    }

    #[test]
    fn no_hits_is_sentinel() {
        let digest = SearchDigest::from_hits(Vec::new());
        assert_eq!(digest.text(), NO_SEARCH_RESULTS);
        assert!(digest.is_empty());
        assert_eq!(digest, SearchDigest::empty());
    }

    #[test]
    fn missing_fields_render_blank() {
        let digest = SearchDigest::from_hits(vec![SearchHit {
            title: None,
            content: Some("body".to_string()),
        }]);
        assert_eq!(digest.text(), ": body");
    }

    #[test]
    fn enriched_query_layout() {
        let query = Query::parse("who won?").unwrap();
        let digest = SearchDigest::from_hits(vec![SearchHit::new("Match report", "Team A won")]);
        let enriched = EnrichedQuery::new(&query, &digest);
        assert_eq!(
            enriched.content(),
            "who won?\n\nSearch results:\nMatch report: Team A won"
        );
    }

    #[test]
    fn enriched_query_with_empty_digest() {
        let query = Query::parse("q").unwrap();
        let enriched = EnrichedQuery::new(&query, &SearchDigest::empty());
        assert_eq!(enriched.content(), "q\n\nSearch results:\nNo search results");
    }
}
