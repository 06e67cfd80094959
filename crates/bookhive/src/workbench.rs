//! Host-owned state of the query workbench page.
//!
//! A [`Workbench`] holds what the page shows: the active tab, the query text
//! on display, and the last result table. Every run replaces the previous
//! result wholesale. Nothing here is global; each host owns its own value.

use serde::Serialize;

use crate::backend::{MockBackend, QueryBackend, QueryRequest};
use crate::catalog::find_predefined;
use crate::config::QueryConfiguration;
use crate::error::WarehouseResult;
use crate::generate::generate_query;
use crate::results::ResultSet;

#[cfg(test)]
mod tests;

/// Which query panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Custom,
    Predefined,
}

/// Query workbench state plus the backend that fills in results.
#[derive(Debug)]
pub struct Workbench<B = MockBackend> {
    backend: B,
    active_tab: Tab,
    custom_query: String,
    selected_query: Option<String>,
    query_to_display: String,
    results: ResultSet,
    is_loading: bool,
}

impl Default for Workbench<MockBackend> {
    fn default() -> Self {
        Self::new(MockBackend::default())
    }
}

impl<B: QueryBackend> Workbench<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active_tab: Tab::Custom,
            custom_query: String::new(),
            selected_query: None,
            query_to_display: String::new(),
            results: ResultSet::default(),
            is_loading: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn custom_query(&self) -> &str {
        &self.custom_query
    }

    /// Replace the free-form editor contents.
    pub fn set_custom_query(&mut self, sql: impl Into<String>) {
        self.custom_query = sql.into();
    }

    pub fn selected_query(&self) -> Option<&str> {
        self.selected_query.as_deref()
    }

    pub fn query_to_display(&self) -> &str {
        &self.query_to_display
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn result_columns(&self) -> &[String] {
        &self.results.columns
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Run the query builder and put its text in the editor and on display.
    pub fn apply_generated(&mut self, config: &QueryConfiguration) -> &str {
        let sql = generate_query(config);
        self.custom_query = sql.clone();
        self.query_to_display = sql;
        &self.query_to_display
    }

    /// Run the free-form editor contents.
    ///
    /// Returns `Ok(false)` without touching state when the editor is blank.
    pub async fn execute_custom(&mut self) -> WarehouseResult<bool> {
        if self.custom_query.trim().is_empty() {
            return Ok(false);
        }

        let request = QueryRequest::custom(self.custom_query.clone());
        self.run(request).await?;
        Ok(true)
    }

    /// Run a predefined query by id.
    ///
    /// Returns `Ok(false)` without touching state when `id` is empty or not
    /// in the catalog.
    pub async fn execute_predefined(&mut self, id: &str) -> WarehouseResult<bool> {
        if id.is_empty() {
            return Ok(false);
        }
        let Some(query) = find_predefined(id) else {
            tracing::warn!(target: "bookhive.workbench", query_id = id, "unknown predefined query");
            return Ok(false);
        };

        self.selected_query = Some(query.id.to_string());
        self.run(QueryRequest::predefined(query.id, query.sql)).await?;
        Ok(true)
    }

    async fn run(&mut self, request: QueryRequest) -> WarehouseResult<()> {
        self.is_loading = true;
        self.query_to_display = request.sql.clone();

        let outcome = self.backend.execute(&request).await;
        self.is_loading = false;

        self.results = outcome?;
        Ok(())
    }
}
