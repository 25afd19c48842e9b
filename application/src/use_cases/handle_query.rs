//! Handle Query use case.
//!
//! Answers one caller query with the selected model, and when the reply
//! disclaims knowledge, searches the web with the original query and asks
//! the same model once more with the results appended.
//!
//! ```text
//! raw query ─▶ validate ─▶ sanitize ─▶ model ─▶ should_augment?
//!                                                 │ no ─▶ reply
//!                                                 │ yes
//!                                                 ▼
//!                                    search(query) ─▶ model(enriched) ─▶ reply
//! ```
//!
//! Model failures never escape: they arrive as diagnostic text and are
//! returned like any other answer. Search failures do escape, as
//! [`HandleQueryError::Search`].

use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::model_client::ModelClients;
use crate::ports::search_client::{SearchClient, SearchError};
use relay_domain::util::{LOG_PREVIEW_CHARS, preview};
use relay_domain::{
    DomainError, EnrichedQuery, ModelSelector, Query, escape_html, should_augment,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Final text when the form names a model the gateway does not serve.
pub const UNKNOWN_MODEL_TEXT: &str = "Unknown model selected";

/// Final text when the re-query after a search comes back empty.
pub const EMPTY_REQUERY_FALLBACK: &str = "Search completed, but no additional response from model.";

/// Errors that can occur while handling a query.
#[derive(Error, Debug)]
pub enum HandleQueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl HandleQueryError {
    /// Check if the caller sent bad input (as opposed to a backend failure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HandleQueryError::InvalidInput(_))
    }
}

/// Raw form fields for the [`HandleQueryUseCase`].
#[derive(Debug, Clone)]
pub struct HandleQueryInput {
    /// Model selector as submitted (trimmed before parsing).
    pub model: String,
    /// Query text as submitted, before sanitization.
    pub query: String,
}

impl HandleQueryInput {
    pub fn new(model: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            query: query.into(),
        }
    }

    /// Check the raw fields and build the sanitized query.
    fn validate(&self) -> Result<(ModelSelector, Query), DomainError> {
        let model = self.model.trim();
        if model.is_empty() {
            return Err(DomainError::MissingModel);
        }
        let query = Query::parse(&self.query)?;
        let Ok(selector) = model.parse::<ModelSelector>();
        Ok((selector, query))
    }
}

/// Outcome of a handled query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    /// Final text, HTML-escaped for the response body.
    pub text: String,
    /// The selector the caller asked for.
    pub selector: ModelSelector,
    /// Whether a search and second model call took place.
    pub augmented: bool,
}

/// Use case for answering one caller query.
#[derive(Clone)]
pub struct HandleQueryUseCase {
    models: ModelClients,
    search: Arc<dyn SearchClient>,
    exchange_logger: Arc<dyn ExchangeLogger>,
}

impl HandleQueryUseCase {
    pub fn new(models: ModelClients, search: Arc<dyn SearchClient>) -> Self {
        Self {
            models,
            search,
            exchange_logger: Arc::new(NoExchangeLogger),
        }
    }

    /// Create with an exchange logger.
    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.exchange_logger = logger;
        self
    }

    /// Answer a query.
    ///
    /// Returns [`HandleQueryError::InvalidInput`] before any backend is
    /// contacted if the model field is blank or the query is empty or too
    /// long.
    pub async fn execute(&self, input: HandleQueryInput) -> Result<QueryAnswer, HandleQueryError> {
        let (selector, query) = input.validate()?;

        let Some(client) = self.models.get(&selector) else {
            info!("Unknown model: {}", selector);
            self.exchange_logger.log(ExchangeEvent::new(
                "unknown_model",
                serde_json::json!({ "model": selector.as_str() }),
            ));
            return Ok(QueryAnswer {
                text: escape_html(UNKNOWN_MODEL_TEXT),
                selector,
                augmented: false,
            });
        };

        info!("Selected model: {}", selector.label());
        self.exchange_logger.log(ExchangeEvent::new(
            "model_selected",
            serde_json::json!({
                "model": selector.as_str(),
                "query": query.content(),
            }),
        ));

        let reply = client.invoke(query.content()).await;
        debug!(
            "{} replied ({} bytes): {}",
            selector.label(),
            reply.len(),
            preview(&reply, LOG_PREVIEW_CHARS)
        );
        self.exchange_logger.log(ExchangeEvent::new(
            "model_reply",
            serde_json::json!({
                "model": selector.as_str(),
                "bytes": reply.len(),
                "text": reply,
            }),
        ));

        if !should_augment(&reply) {
            return Ok(QueryAnswer {
                text: escape_html(&reply),
                selector,
                augmented: false,
            });
        }

        info!(
            "Search triggered by response: {}",
            preview(&reply, LOG_PREVIEW_CHARS)
        );
        self.exchange_logger.log(ExchangeEvent::new(
            "search_triggered",
            serde_json::json!({ "search_query": query.content() }),
        ));

        // The search term is the sanitized query, never the model's reply.
        let digest = self.search.search(query.content()).await?;
        debug!("Search returned {} hits", digest.hit_count());
        self.exchange_logger.log(ExchangeEvent::new(
            "search_digest",
            serde_json::json!({
                "hits": digest.hit_count(),
                "text": digest.text(),
            }),
        ));

        let enriched = EnrichedQuery::new(&query, &digest);
        let requery = client.invoke(enriched.content()).await;
        debug!(
            "Re-query result ({} bytes): {}",
            requery.len(),
            preview(&requery, LOG_PREVIEW_CHARS)
        );
        self.exchange_logger.log(ExchangeEvent::new(
            "requery_reply",
            serde_json::json!({
                "model": selector.as_str(),
                "prompt": enriched.content(),
                "bytes": requery.len(),
                "text": requery,
            }),
        ));

        let final_text = if requery.is_empty() {
            EMPTY_REQUERY_FALLBACK
        } else {
            requery.as_str()
        };

        Ok(QueryAnswer {
            text: escape_html(final_text),
            selector,
            augmented: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::model_client::ModelClient;
    use async_trait::async_trait;
    use relay_domain::{MAX_QUERY_CHARS, NO_SEARCH_RESULTS, QueryError, SearchDigest, SearchHit};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Mocks ====================

    struct MockModel {
        replies: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockModel {
        fn new(replies: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ModelClient for MockModel {
        async fn invoke(&self, prompt: &str) -> String {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies.lock().unwrap().pop_front().unwrap_or_default()
        }
    }

    enum SearchBehavior {
        Hits(Vec<SearchHit>),
        Fail,
    }

    struct MockSearch {
        behavior: SearchBehavior,
        queries: Mutex<Vec<String>>,
    }

    impl MockSearch {
        fn hits(hits: Vec<SearchHit>) -> Arc<Self> {
            Arc::new(Self {
                behavior: SearchBehavior::Hits(hits),
                queries: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                behavior: SearchBehavior::Fail,
                queries: Mutex::new(Vec::new()),
            })
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchClient for MockSearch {
        async fn search(&self, query: &str) -> Result<SearchDigest, SearchError> {
            self.queries.lock().unwrap().push(query.to_string());
            match &self.behavior {
                SearchBehavior::Hits(hits) => Ok(SearchDigest::from_hits(hits.clone())),
                SearchBehavior::Fail => Err(SearchError::Status { status: 502 }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ExchangeLogger for RecordingLogger {
        fn log(&self, event: ExchangeEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    struct Harness {
        primary: Arc<MockModel>,
        secondary: Arc<MockModel>,
        search: Arc<MockSearch>,
        use_case: HandleQueryUseCase,
    }

    fn harness(primary: &[&str], secondary: &[&str], search: Arc<MockSearch>) -> Harness {
        let primary = MockModel::new(primary);
        let secondary = MockModel::new(secondary);
        let use_case = HandleQueryUseCase::new(
            ModelClients::new(primary.clone(), secondary.clone()),
            search.clone(),
        );
        Harness {
            primary,
            secondary,
            search,
            use_case,
        }
    }

    fn no_hits() -> Arc<MockSearch> {
        MockSearch::hits(Vec::new())
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_empty_query_is_invalid_input() {
        let h = harness(&["unused"], &[], no_hits());
        let err = h
            .use_case
            .execute(HandleQueryInput::new("claude", ""))
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(h.primary.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_query_is_invalid_input() {
        let h = harness(&["unused"], &[], no_hits());
        let raw = "a".repeat(MAX_QUERY_CHARS + 1);
        let err = h
            .use_case
            .execute(HandleQueryInput::new("claude", raw))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HandleQueryError::InvalidInput(DomainError::InvalidQuery(QueryError::TooLong { .. }))
        ));
        assert!(h.primary.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_blank_model_is_invalid_input() {
        let h = harness(&[], &[], no_hits());
        let err = h
            .use_case
            .execute(HandleQueryInput::new("   ", "hello"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HandleQueryError::InvalidInput(DomainError::MissingModel)
        ));
    }

    // ==================== Model selection ====================

    #[tokio::test]
    async fn test_unknown_model_makes_no_backend_calls() {
        let h = harness(&["don't know"], &["don't know"], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("unknown", "hello"))
            .await
            .unwrap();

        assert_eq!(answer.text, "Unknown model selected");
        assert!(!answer.augmented);
        assert_eq!(answer.selector, ModelSelector::Unknown("unknown".to_string()));
        assert!(h.primary.prompts().is_empty());
        assert!(h.secondary.prompts().is_empty());
        assert!(h.search.queries().is_empty());
    }

    #[tokio::test]
    async fn test_plain_answer_is_returned() {
        let h = harness(&["Paris is the capital of France."], &[], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("claude", "Capital of France?"))
            .await
            .unwrap();

        assert_eq!(answer.text, "Paris is the capital of France.");
        assert!(!answer.augmented);
        assert_eq!(h.primary.prompts(), vec!["Capital of France?".to_string()]);
        assert!(h.search.queries().is_empty());
    }

    #[tokio::test]
    async fn test_secondary_model_is_used() {
        let h = harness(&[], &["42"], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new(" deepseek ", "meaning of life"))
            .await
            .unwrap();

        assert_eq!(answer.text, "42");
        assert_eq!(answer.selector, ModelSelector::Secondary);
        assert!(h.primary.prompts().is_empty());
        assert_eq!(h.secondary.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_model_sees_sanitized_query() {
        let h = harness(&["ok"], &[], no_hits());
        h.use_case
            .execute(HandleQueryInput::new("claude", "a < b && \"c\""))
            .await
            .unwrap();

        assert_eq!(
            h.primary.prompts(),
            vec!["a &lt; b &amp;&amp; &quot;c&quot;".to_string()]
        );
    }

    #[tokio::test]
    async fn test_output_is_escaped() {
        let h = harness(&["<script>alert(1)</script>"], &[], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("claude", "<script>"))
            .await
            .unwrap();

        assert!(!answer.text.contains("<script>"));
        assert_eq!(answer.text, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[tokio::test]
    async fn test_empty_reply_without_trigger_is_empty_text() {
        let h = harness(&[""], &[], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("claude", "hello"))
            .await
            .unwrap();

        assert_eq!(answer.text, "");
        assert!(!answer.augmented);
    }

    #[tokio::test]
    async fn test_diagnostic_reply_is_returned_as_text() {
        let h = harness(&["DeepSeek API key missing or undefined"], &[], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("claude", "hello"))
            .await
            .unwrap();

        assert_eq!(answer.text, "DeepSeek API key missing or undefined");
    }

    // ==================== Augmentation ====================

    #[tokio::test]
    async fn test_trigger_searches_with_original_query_and_requeries() {
        let search = MockSearch::hits(vec![SearchHit::new("Weather", "Sunny, 21C")]);
        let h = harness(
            &[
                "I don't have access to real-time data",
                "It is sunny and 21C today.",
            ],
            &[],
            search,
        );
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("claude", "weather in Oslo"))
            .await
            .unwrap();

        assert!(answer.augmented);
        assert_eq!(answer.text, "It is sunny and 21C today.");
        assert_eq!(h.search.queries(), vec!["weather in Oslo".to_string()]);
        assert_eq!(
            h.primary.prompts(),
            vec![
                "weather in Oslo".to_string(),
                "weather in Oslo\n\nSearch results:\nWeather: Sunny, 21C".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_term_is_sanitized_query() {
        let h = harness(&["can't find it", "found"], &[], no_hits());
        h.use_case
            .execute(HandleQueryInput::new("claude", "<tag>"))
            .await
            .unwrap();

        assert_eq!(h.search.queries(), vec!["&lt;tag&gt;".to_string()]);
    }

    #[tokio::test]
    async fn test_zero_results_still_requeries() {
        let h = harness(&[], &["No data available", "Best guess: 7"], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("deepseek", "q"))
            .await
            .unwrap();

        assert_eq!(answer.text, "Best guess: 7");
        let prompts = h.secondary.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(
            prompts[1],
            format!("q\n\nSearch results:\n{}", NO_SEARCH_RESULTS)
        );
    }

    #[tokio::test]
    async fn test_empty_requery_uses_fallback() {
        let h = harness(&["I don't know", ""], &[], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("claude", "q"))
            .await
            .unwrap();

        assert!(answer.augmented);
        assert_eq!(
            answer.text,
            "Search completed, but no additional response from model."
        );
    }

    #[tokio::test]
    async fn test_augmentation_runs_at_most_once() {
        let h = harness(&["don't know", "still don't know", "never asked"], &[], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("claude", "q"))
            .await
            .unwrap();

        assert_eq!(answer.text, "still don't know");
        assert_eq!(h.primary.prompts().len(), 2);
        assert_eq!(h.search.queries().len(), 1);
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let h = harness(&["I cannot browse the web"], &[], MockSearch::failing());
        let err = h
            .use_case
            .execute(HandleQueryInput::new("claude", "q"))
            .await
            .unwrap_err();

        assert!(!err.is_invalid_input());
        assert!(matches!(
            err,
            HandleQueryError::Search(SearchError::Status { status: 502 })
        ));
        assert_eq!(h.primary.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_requery_output_is_escaped() {
        let h = harness(&["search: rust", "Use <Vec<T>> & friends"], &[], no_hits());
        let answer = h
            .use_case
            .execute(HandleQueryInput::new("claude", "q"))
            .await
            .unwrap();

        assert_eq!(answer.text, "Use &lt;Vec&lt;T&gt;&gt; &amp; friends");
    }

    // ==================== Exchange log ====================

    #[tokio::test]
    async fn test_exchange_events_for_augmented_request() {
        let logger = Arc::new(RecordingLogger::default());
        let h = harness(&["unable to provide", "answer"], &[], no_hits());
        let use_case = h.use_case.clone().with_exchange_logger(logger.clone());

        use_case
            .execute(HandleQueryInput::new("claude", "q"))
            .await
            .unwrap();

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec![
                "model_selected",
                "model_reply",
                "search_triggered",
                "search_digest",
                "requery_reply",
            ]
        );
    }

    #[tokio::test]
    async fn test_exchange_event_for_unknown_model() {
        let logger = Arc::new(RecordingLogger::default());
        let h = harness(&[], &[], no_hits());
        let use_case = h.use_case.clone().with_exchange_logger(logger.clone());

        use_case
            .execute(HandleQueryInput::new("gemini", "q"))
            .await
            .unwrap();

        assert_eq!(*logger.events.lock().unwrap(), vec!["unknown_model"]);
    }
}
