//! Query execution boundary.
//!
//! The workbench hands SQL text to a [`QueryBackend`] and later receives
//! rows. [`MockBackend`] fakes that round trip with a fixed delay and canned
//! tables; a real execution service would implement the same trait.

use std::time::Duration;

use crate::error::WarehouseResult;
use crate::results::{CUSTOM_RESULT_ID, ResultSet, mock_results};

/// Default simulated latency of [`MockBackend`].
pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

/// One submission to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Predefined query id, or `None` for free-form SQL.
    pub query_id: Option<String>,
    /// The text shown to the user.
    pub sql: String,
}

impl QueryRequest {
    /// A free-form (custom or generated) query.
    pub fn custom(sql: impl Into<String>) -> Self {
        Self {
            query_id: None,
            sql: sql.into(),
        }
    }

    /// A predefined query.
    pub fn predefined(id: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            query_id: Some(id.into()),
            sql: sql.into(),
        }
    }

    /// Id of the result table this request maps to.
    pub fn result_id(&self) -> &str {
        self.query_id.as_deref().unwrap_or(CUSTOM_RESULT_ID)
    }
}

/// Something that turns submitted SQL into rows.
#[async_trait::async_trait]
pub trait QueryBackend: Send + Sync {
    async fn execute(&self, request: &QueryRequest) -> WarehouseResult<ResultSet>;
}

/// Canned-result backend with a fixed artificial delay.
#[derive(Debug, Clone)]
pub struct MockBackend {
    delay: Duration,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}

impl MockBackend {
    /// Create a backend with the default delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the simulated latency.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Respond immediately.
    pub fn no_delay(mut self) -> Self {
        self.delay = Duration::ZERO;
        self
    }

    pub fn delay_duration(&self) -> Duration {
        self.delay
    }
}

#[async_trait::async_trait]
impl QueryBackend for MockBackend {
    async fn execute(&self, request: &QueryRequest) -> WarehouseResult<ResultSet> {
        let id = request.result_id();
        tracing::info!(
            target: "bookhive.backend",
            query_id = id,
            delay_ms = self.delay.as_millis() as u64,
            "simulating query execution"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = match mock_results(id) {
            Some(rs) => rs,
            None => {
                tracing::warn!(target: "bookhive.backend", query_id = id, "no canned rows for query");
                ResultSet::default()
            }
        };

        tracing::info!(
            target: "bookhive.backend",
            query_id = id,
            rows = result.len(),
            "query finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn custom_request_gets_custom_table() {
        let backend = MockBackend::new().no_delay();
        let rs = backend
            .execute(&QueryRequest::custom("SELECT * FROM dim_books;"))
            .await
            .unwrap();
        assert_eq!(rs, mock_results(CUSTOM_RESULT_ID).unwrap());
    }

    #[tokio::test]
    async fn predefined_request_gets_its_table() {
        let backend = MockBackend::new().no_delay();
        let rs = backend
            .execute(&QueryRequest::predefined("seasonal_trends", "SELECT ..."))
            .await
            .unwrap();
        assert_eq!(rs.columns, vec!["season", "loan_count"]);
        assert_eq!(rs.len(), 4);
    }

    #[tokio::test]
    async fn predefined_without_table_is_empty() {
        let backend = MockBackend::new().no_delay();
        let rs = backend
            .execute(&QueryRequest::predefined("quarterly_trends", "SELECT ..."))
            .await
            .unwrap();
        assert!(rs.is_empty());
        assert!(rs.columns.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn default_delay_is_observed() {
        let backend = MockBackend::new();
        assert_eq!(backend.delay_duration(), DEFAULT_DELAY);

        let start = tokio::time::Instant::now();
        backend
            .execute(&QueryRequest::custom("SELECT 1;"))
            .await
            .unwrap();
        assert!(start.elapsed() >= DEFAULT_DELAY);
    }
}
