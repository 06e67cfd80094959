//! # bookhive
//!
//! Query workbench for a demonstration library data warehouse.
//!
//! ## Features
//!
//! - **Query builder**: turn a handful of form choices into SQL text with [`generate_query`]
//! - **Pure generation**: the same [`QueryConfiguration`] always yields the same text
//! - **Predefined queries**: a fixed catalog of analytical queries with canned results
//! - **Pluggable execution**: [`QueryBackend`] separates "text in" from "rows out";
//!   [`MockBackend`] fakes it with a delay and static tables
//! - **Presence checks**: typed validation for the data-entry forms
//!
//! Nothing here talks to a database. Generated SQL is displayed, never run.
//!
//! ## Usage
//!
//! ```ignore
//! use bookhive::{QueryConfiguration, SourceSystem, TimeFrame, Workbench};
//!
//! let mut wb = Workbench::default();
//! wb.apply_generated(
//!     &QueryConfiguration::loan_trends()
//!         .time_frame(TimeFrame::ByQuarter)
//!         .source_system(SourceSystem::UWindsorLibrary),
//! );
//! wb.execute_custom().await?;
//! println!("{}", wb.query_to_display());
//! ```

pub mod backend;
pub mod catalog;
pub mod changeset;
pub mod config;
pub mod error;
pub mod generate;
pub mod options;
pub mod results;
pub mod schema;
pub mod statement;
pub mod workbench;

pub use backend::{DEFAULT_DELAY, MockBackend, QueryBackend, QueryRequest};
pub use catalog::{PredefinedQuery, find_predefined, predefined_queries, require_predefined};
pub use changeset::{
    BookEntry, DataEntry, MemberEntry, TransactionEntry, ValidationCode,
    ValidationError, ValidationErrors, validate_sql_entry,
};
pub use config::QueryConfiguration;
pub use error::{WarehouseError, WarehouseResult};
pub use generate::{generate_query, time_predicate};
pub use options::{QueryKind, SourceSystem, TimeFrame};
pub use results::{CUSTOM_RESULT_ID, ResultSet, mock_results};
pub use schema::{SourceDatabase, TableSchema, database_schema};
pub use statement::SelectText;
pub use workbench::{Tab, Workbench};
