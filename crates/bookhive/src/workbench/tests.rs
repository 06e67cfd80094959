use super::*;
use crate::error::WarehouseError;
use crate::options::{SourceSystem, TimeFrame};
use crate::results::{CUSTOM_RESULT_ID, mock_results};
use std::sync::Mutex;

fn workbench() -> Workbench {
    Workbench::new(MockBackend::new().no_delay())
}

/// Records requests and always fails.
#[derive(Default)]
struct FailingBackend {
    seen: Mutex<Vec<QueryRequest>>,
}

#[async_trait::async_trait]
impl QueryBackend for FailingBackend {
    async fn execute(&self, request: &QueryRequest) -> WarehouseResult<ResultSet> {
        self.seen.lock().unwrap().push(request.clone());
        Err(WarehouseError::backend("service unavailable"))
    }
}

#[test]
fn test_initial_state() {
    let wb: Workbench = Workbench::default();
    assert_eq!(wb.active_tab(), Tab::Custom);
    assert!(wb.custom_query().is_empty());
    assert!(wb.query_to_display().is_empty());
    assert!(wb.results().is_empty());
    assert!(!wb.is_loading());
}

#[test]
fn test_apply_generated_sets_editor_and_display() {
    let mut wb = workbench();
    let cfg = QueryConfiguration::popular_books()
        .time_frame(TimeFrame::CustomYear)
        .custom_year(2022)
        .source_system(SourceSystem::UWindsorLibrary);

    let shown = wb.apply_generated(&cfg).to_string();
    assert_eq!(shown, generate_query(&cfg));
    assert_eq!(wb.custom_query(), shown);
    assert_eq!(wb.query_to_display(), shown);
    // Generating does not run anything.
    assert!(wb.results().is_empty());
}

#[tokio::test]
async fn test_blank_custom_query_is_noop() {
    let mut wb = workbench();
    wb.set_custom_query("   \n");
    assert!(!wb.execute_custom().await.unwrap());
    assert!(wb.query_to_display().is_empty());
    assert!(wb.results().is_empty());
}

#[tokio::test]
async fn test_execute_custom_loads_custom_table() {
    let mut wb = workbench();
    wb.apply_generated(&QueryConfiguration::active_members().limit(25));

    assert!(wb.execute_custom().await.unwrap());
    assert!(!wb.is_loading());
    assert!(wb.query_to_display().ends_with("LIMIT 25;"));
    assert_eq!(wb.results(), &mock_results(CUSTOM_RESULT_ID).unwrap());
    assert_eq!(
        wb.result_columns(),
        &["book_key", "title", "author", "source_system"]
    );
}

#[tokio::test]
async fn test_execute_predefined_shows_its_sql_and_rows() {
    let mut wb = workbench();
    wb.set_active_tab(Tab::Predefined);

    assert!(wb.execute_predefined("source_comparison").await.unwrap());
    assert_eq!(wb.selected_query(), Some("source_comparison"));
    assert_eq!(
        wb.query_to_display(),
        find_predefined("source_comparison").unwrap().sql
    );
    assert_eq!(wb.result_columns(), &["source_system", "record_count"]);
    assert_eq!(wb.results().len(), 2);
}

#[tokio::test]
async fn test_unknown_or_empty_predefined_is_noop() {
    let mut wb = workbench();
    assert!(!wb.execute_predefined("").await.unwrap());
    assert!(!wb.execute_predefined("does_not_exist").await.unwrap());
    assert_eq!(wb.selected_query(), None);
    assert!(wb.query_to_display().is_empty());
}

#[tokio::test]
async fn test_last_run_replaces_results() {
    let mut wb = workbench();
    wb.execute_predefined("popular_books").await.unwrap();
    assert_eq!(wb.results().len(), 5);

    // A predefined query with no canned table clears the previous rows.
    wb.execute_predefined("quarterly_trends").await.unwrap();
    assert!(wb.results().is_empty());
    assert!(wb.result_columns().is_empty());
    assert!(wb.query_to_display().contains("d.quarter"));
}

#[tokio::test]
async fn test_backend_error_clears_loading_and_propagates() {
    let mut wb = Workbench::new(FailingBackend::default());
    wb.set_custom_query("SELECT 1;");

    let err = wb.execute_custom().await.unwrap_err();
    assert!(matches!(err, WarehouseError::Backend(_)));
    assert!(!wb.is_loading());
    assert_eq!(wb.query_to_display(), "SELECT 1;");

    let seen = wb.backend().seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].query_id, None);
}
