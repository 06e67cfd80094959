//! Canned result tables shown after a simulated run.
//!
//! Tables are keyed by predefined query id. Free-form queries always show
//! the [`CUSTOM_RESULT_ID`] table.

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Result table id used for free-form and generated queries.
pub const CUSTOM_RESULT_ID: &str = "custom";

/// Rows with a column list.
///
/// Rows are JSON objects whose key order follows the column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

impl ResultSet {
    /// Build a result set, deriving columns from the first row's keys.
    pub fn from_rows(rows: Vec<Map<String, Value>>) -> Self {
        let columns = rows
            .first()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Cell text for display; missing cells render empty.
    pub fn cell(&self, row: usize, column: &str) -> String {
        match self.rows.get(row).and_then(|r| r.get(column)) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

fn table(rows: Value) -> ResultSet {
    let rows = match rows {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    ResultSet::from_rows(rows)
}

/// The canned table for `id`, if one exists.
pub fn mock_results(id: &str) -> Option<ResultSet> {
    let rows = match id {
        "popular_books" => json!([
            { "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "loan_count": 42 },
            { "title": "To Kill a Mockingbird", "author": "Harper Lee", "loan_count": 38 },
            { "title": "1984", "author": "George Orwell", "loan_count": 35 },
            { "title": "Pride and Prejudice", "author": "Jane Austen", "loan_count": 33 },
            { "title": "The Catcher in the Rye", "author": "J.D. Salinger", "loan_count": 29 },
        ]),
        "active_members" => json!([
            { "first_name": "John", "last_name": "Smith", "checkout_count": 23 },
            { "first_name": "Emma", "last_name": "Johnson", "checkout_count": 19 },
            { "first_name": "Michael", "last_name": "Williams", "checkout_count": 17 },
            { "first_name": "Sophia", "last_name": "Brown", "checkout_count": 15 },
            { "first_name": "William", "last_name": "Jones", "checkout_count": 14 },
        ]),
        "monthly_loans" => json!([
            { "month": 1, "year": 2023, "loan_count": 156 },
            { "month": 2, "year": 2023, "loan_count": 142 },
            { "month": 3, "year": 2023, "loan_count": 168 },
            { "month": 4, "year": 2023, "loan_count": 175 },
            { "month": 5, "year": 2023, "loan_count": 189 },
        ]),
        "source_comparison" => json!([
            { "source_system": "UWindsor_Library", "record_count": 2345 },
            { "source_system": "Windsor_PLibrary", "record_count": 3127 },
        ]),
        "overdue_books" => json!([
            { "title": "The Hobbit", "author": "J.R.R. Tolkien", "first_name": "Robert", "last_name": "Johnson", "days_overdue": 45 },
            { "title": "Harry Potter and the Sorcerer's Stone", "author": "J.K. Rowling", "first_name": "Sarah", "last_name": "Williams", "days_overdue": 32 },
            { "title": "The Da Vinci Code", "author": "Dan Brown", "first_name": "Thomas", "last_name": "Anderson", "days_overdue": 28 },
            { "title": "The Alchemist", "author": "Paulo Coelho", "first_name": "Jennifer", "last_name": "Smith", "days_overdue": 21 },
            { "title": "The Hunger Games", "author": "Suzanne Collins", "first_name": "David", "last_name": "Brown", "days_overdue": 18 },
        ]),
        "genre_popularity" => json!([
            { "genre": "Fiction", "loan_count": 1245 },
            { "genre": "Mystery", "loan_count": 876 },
            { "genre": "Science Fiction", "loan_count": 743 },
            { "genre": "Romance", "loan_count": 652 },
            { "genre": "Biography", "loan_count": 521 },
            { "genre": "History", "loan_count": 498 },
        ]),
        "seasonal_trends" => json!([
            { "season": "Summer", "loan_count": 1876 },
            { "season": "Winter", "loan_count": 1654 },
            { "season": "Fall", "loan_count": 1432 },
            { "season": "Spring", "loan_count": 1298 },
        ]),
        "library_comparison" => json!([
            { "source_system": "UWindsor_Library", "unique_books": 12500, "unique_members": 3200, "total_transactions": 28450 },
            { "source_system": "Windsor_PLibrary", "unique_books": 18700, "unique_members": 5400, "total_transactions": 42680 },
        ]),
        "loan_duration" => json!([
            { "source_system": "UWindsor_Library", "avg_days_borrowed": 12.7 },
            { "source_system": "Windsor_PLibrary", "avg_days_borrowed": 14.3 },
        ]),
        CUSTOM_RESULT_ID => json!([
            { "book_key": 1001, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "source_system": "UWindsor_Library" },
            { "book_key": 1002, "title": "To Kill a Mockingbird", "author": "Harper Lee", "source_system": "Windsor_PLibrary" },
            { "book_key": 1003, "title": "1984", "author": "George Orwell", "source_system": "UWindsor_Library" },
        ]),
        _ => return None,
    };
    Some(table(rows))
}
