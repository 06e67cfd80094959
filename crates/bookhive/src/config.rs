//! The query builder's form state as one immutable value.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::changeset::{ValidationCode, ValidationError, ValidationErrors};
use crate::options::{QueryKind, SourceSystem, TimeFrame};

/// Everything the generator reads.
///
/// The custom year/month/quarter fields hold raw form text. They are
/// substituted into the generated SQL verbatim, so empty or malformed values
/// show up as-is in the output rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfiguration {
    pub kind: QueryKind,
    pub time_frame: TimeFrame,
    pub custom_year: String,
    pub custom_month: String,
    pub custom_quarter: String,
    pub source_system: SourceSystem,
    pub limit: u32,
    pub include_author: bool,
    pub include_genre: bool,
    pub include_publisher: bool,
}

impl Default for QueryConfiguration {
    fn default() -> Self {
        Self {
            kind: QueryKind::PopularBooks,
            time_frame: TimeFrame::AllTime,
            custom_year: String::new(),
            custom_month: "1".to_string(),
            custom_quarter: "1".to_string(),
            source_system: SourceSystem::All,
            limit: 10,
            include_author: false,
            include_genre: false,
            include_publisher: false,
        }
    }
}

impl QueryConfiguration {
    /// Defaults for the given query kind.
    ///
    /// Loan trends start on the monthly granularity, the other kinds on
    /// all-time.
    pub fn new(kind: QueryKind) -> Self {
        let time_frame = match kind {
            QueryKind::LoanTrends => TimeFrame::ByMonth,
            _ => TimeFrame::AllTime,
        };
        Self {
            kind,
            time_frame,
            ..Self::default()
        }
    }

    pub fn popular_books() -> Self {
        Self::new(QueryKind::PopularBooks)
    }

    pub fn active_members() -> Self {
        Self::new(QueryKind::ActiveMembers)
    }

    pub fn loan_trends() -> Self {
        Self::new(QueryKind::LoanTrends)
    }

    pub fn kind(mut self, kind: QueryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn time_frame(mut self, time_frame: TimeFrame) -> Self {
        self.time_frame = time_frame;
        self
    }

    pub fn custom_year(mut self, year: impl Display) -> Self {
        self.custom_year = year.to_string();
        self
    }

    pub fn custom_month(mut self, month: impl Display) -> Self {
        self.custom_month = month.to_string();
        self
    }

    pub fn custom_quarter(mut self, quarter: impl Display) -> Self {
        self.custom_quarter = quarter.to_string();
        self
    }

    pub fn source_system(mut self, source: SourceSystem) -> Self {
        self.source_system = source;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn include_author(mut self, on: bool) -> Self {
        self.include_author = on;
        self
    }

    pub fn include_genre(mut self, on: bool) -> Self {
        self.include_genre = on;
        self
    }

    pub fn include_publisher(mut self, on: bool) -> Self {
        self.include_publisher = on;
        self
    }

    /// Presence checks for the fields the selected kind and frame read.
    ///
    /// The generator never calls this; hosts that want to block a submission
    /// can.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.kind != QueryKind::LoanTrends {
            if self.time_frame.uses_custom_year() && self.custom_year.trim().is_empty() {
                errors.push(ValidationError::required("custom_year", "Please enter a year"));
            }
            if self.time_frame == TimeFrame::CustomMonth && self.custom_month.trim().is_empty() {
                errors.push(ValidationError::required("custom_month", "Please select a month"));
            }
            if self.time_frame == TimeFrame::CustomQuarter && self.custom_quarter.trim().is_empty()
            {
                errors.push(ValidationError::required(
                    "custom_quarter",
                    "Please select a quarter",
                ));
            }
        }

        if self.kind.uses_limit() && self.limit == 0 {
            errors.push(ValidationError::new(
                "limit",
                ValidationCode::Range,
                "Result limit must be at least 1",
            ));
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form() {
        let cfg = QueryConfiguration::default();
        assert_eq!(cfg.kind, QueryKind::PopularBooks);
        assert_eq!(cfg.time_frame, TimeFrame::AllTime);
        assert_eq!(cfg.source_system, SourceSystem::All);
        assert_eq!(cfg.limit, 10);
        assert_eq!(cfg.custom_month, "1");
        assert_eq!(cfg.custom_quarter, "1");
        assert!(!cfg.include_author && !cfg.include_genre && !cfg.include_publisher);
    }

    #[test]
    fn loan_trends_defaults_to_monthly() {
        assert_eq!(QueryConfiguration::loan_trends().time_frame, TimeFrame::ByMonth);
    }

    #[test]
    fn custom_fields_accept_numbers_and_text() {
        let cfg = QueryConfiguration::default()
            .custom_year(2022)
            .custom_quarter("3");
        assert_eq!(cfg.custom_year, "2022");
        assert_eq!(cfg.custom_quarter, "3");
    }

    #[test]
    fn validate_custom_year_missing() {
        let cfg = QueryConfiguration::default().time_frame(TimeFrame::CustomQuarter);
        let errors = cfg.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.items[0].field, "custom_year");
    }

    #[test]
    fn validate_ignores_fields_not_in_use() {
        let cfg = QueryConfiguration::loan_trends().limit(0).custom_month("");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_zero_limit() {
        let errors = QueryConfiguration::active_members()
            .limit(0)
            .validate()
            .unwrap_err();
        assert_eq!(errors.items[0].code, ValidationCode::Range);
    }

    #[test]
    fn deserialize_partial_toml() {
        let cfg: QueryConfiguration = toml::from_str(
            r#"
kind = "popular_books"
time_frame = "custom_year"
custom_year = "2022"
include_genre = true
"#,
        )
        .unwrap();
        assert_eq!(cfg.time_frame, TimeFrame::CustomYear);
        assert_eq!(cfg.custom_year, "2022");
        assert!(cfg.include_genre);
        assert_eq!(cfg.limit, 10);
    }
}
