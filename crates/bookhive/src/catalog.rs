//! Predefined analytical queries offered next to the custom builder.

use serde::Serialize;

use crate::error::{WarehouseError, WarehouseResult};

/// A named query with fixed SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredefinedQuery {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
}

const PREDEFINED: &[PredefinedQuery] = &[
    PredefinedQuery {
        id: "popular_books",
        name: "Most Popular Books",
        description: "Shows the top 10 most frequently borrowed books",
        sql: "SELECT b.title, b.author, COUNT(*) as loan_count\nFROM fact_loans fl\nJOIN dim_books b ON fl.book_key = b.book_key\nGROUP BY b.title, b.author\nORDER BY loan_count DESC\nLIMIT 10;",
    },
    PredefinedQuery {
        id: "active_members",
        name: "Most Active Members",
        description: "Lists the top 10 members with the most checkouts",
        sql: "SELECT m.first_name, m.last_name, COUNT(*) as checkout_count\nFROM fact_loans fl\nJOIN dim_members m ON fl.member_key = m.member_key\nGROUP BY m.first_name, m.last_name\nORDER BY checkout_count DESC\nLIMIT 10;",
    },
    PredefinedQuery {
        id: "monthly_loans",
        name: "Monthly Loan Trends",
        description: "Shows the number of loans per month over time",
        sql: "SELECT d.month, d.year, COUNT(*) as loan_count\nFROM fact_loans fl\nJOIN dim_date d ON fl.loan_date = d.date_key\nGROUP BY d.month, d.year\nORDER BY d.year, d.month;",
    },
    PredefinedQuery {
        id: "source_comparison",
        name: "Source System Comparison",
        description: "Compares the number of records from each source system",
        sql: "SELECT source_system, COUNT(*) as record_count\nFROM fact_loans\nGROUP BY source_system;",
    },
    PredefinedQuery {
        id: "overdue_books",
        name: "Overdue Books",
        description: "Lists all books that are overdue (more than 14 days since checkout)",
        sql: "SELECT b.title, b.author, m.first_name, m.last_name, \nDATEDIFF(CURRENT_DATE, fl.loan_date) as days_overdue\nFROM fact_loans fl\nJOIN dim_books b ON fl.book_key = b.book_key\nJOIN dim_members m ON fl.member_key = m.member_key\nWHERE fl.return_date IS NULL\nAND DATEDIFF(CURRENT_DATE, fl.loan_date) > 14\nORDER BY days_overdue DESC;",
    },
    PredefinedQuery {
        id: "genre_popularity",
        name: "Genre Popularity",
        description: "Shows which book genres are most popular based on checkout frequency",
        sql: "SELECT b.genre, COUNT(*) as loan_count\nFROM fact_loans fl\nJOIN dim_books b ON fl.book_key = b.book_key\nGROUP BY b.genre\nORDER BY loan_count DESC;",
    },
    PredefinedQuery {
        id: "seasonal_trends",
        name: "Seasonal Borrowing Trends",
        description: "Analyzes borrowing patterns across different seasons",
        sql: "SELECT \n  CASE \n    WHEN d.month IN (12, 1, 2) THEN 'Winter'\n    WHEN d.month IN (3, 4, 5) THEN 'Spring'\n    WHEN d.month IN (6, 7, 8) THEN 'Summer'\n    ELSE 'Fall'\n  END as season,\n  COUNT(*) as loan_count\nFROM fact_loans fl\nJOIN dim_date d ON fl.loan_date = d.date_key\nGROUP BY season\nORDER BY loan_count DESC;",
    },
    PredefinedQuery {
        id: "library_comparison",
        name: "Library System Comparison",
        description: "Compares the two library systems by books, members, and transaction volume",
        sql: "SELECT \n  source_system,\n  COUNT(DISTINCT book_key) as unique_books,\n  COUNT(DISTINCT member_key) as unique_members,\n  COUNT(*) as total_transactions\nFROM fact_loans\nGROUP BY source_system;",
    },
    PredefinedQuery {
        id: "loan_duration",
        name: "Average Loan Duration",
        description: "Calculates the average number of days books are kept before being returned",
        sql: "SELECT \n  source_system,\n  AVG(loan_duration_days) as avg_days_borrowed\nFROM fact_loans\nWHERE return_date IS NOT NULL\nGROUP BY source_system;",
    },
    PredefinedQuery {
        id: "author_popularity",
        name: "Most Popular Authors",
        description: "Shows the top 10 most popular authors based on book checkouts",
        sql: "SELECT a.author_name, COUNT(*) as loan_count\nFROM fact_loans fl\nJOIN dim_books b ON fl.book_key = b.book_key\nJOIN dim_authors a ON b.author_key = a.author_key\nGROUP BY a.author_name\nORDER BY loan_count DESC\nLIMIT 10;",
    },
    PredefinedQuery {
        id: "publisher_analysis",
        name: "Publisher Analysis",
        description: "Analyzes which publishers have the most books and loans",
        sql: "SELECT p.publisher_name, COUNT(DISTINCT b.book_key) as book_count, COUNT(*) as loan_count\nFROM fact_loans fl\nJOIN dim_books b ON fl.book_key = b.book_key\nJOIN dim_publishers p ON b.publisher_key = p.publisher_key\nGROUP BY p.publisher_name\nORDER BY loan_count DESC\nLIMIT 10;",
    },
    PredefinedQuery {
        id: "member_demographics",
        name: "Member Demographics",
        description: "Shows member distribution by years of membership and source system",
        sql: "SELECT \n  YEAR(CURRENT_DATE) - YEAR(join_date) as membership_years,\n  COUNT(*) as member_count,\n  source_system\nFROM dim_members\nGROUP BY membership_years, source_system\nORDER BY membership_years;",
    },
    PredefinedQuery {
        id: "weekend_vs_weekday",
        name: "Weekend vs Weekday Loans",
        description: "Compares loan patterns between weekends and weekdays",
        sql: "SELECT \n  CASE WHEN d.is_weekend = 1 THEN 'Weekend' ELSE 'Weekday' END as day_type,\n  COUNT(*) as loan_count,\n  source_system\nFROM fact_loans fl\nJOIN dim_date d ON fl.loan_date = d.date_key\nGROUP BY day_type, source_system;",
    },
    PredefinedQuery {
        id: "book_age_analysis",
        name: "Book Age Analysis",
        description: "Analyzes book popularity by age in decades",
        sql: "SELECT \n  FLOOR((YEAR(CURRENT_DATE) - publication_year) / 10) * 10 as decade_age,\n  COUNT(*) as book_count,\n  AVG(loan_duration_days) as avg_loan_duration\nFROM fact_loans fl\nJOIN dim_books b ON fl.book_key = b.book_key\nWHERE publication_year IS NOT NULL\nGROUP BY decade_age\nORDER BY decade_age;",
    },
    PredefinedQuery {
        id: "quarterly_trends",
        name: "Quarterly Loan Trends",
        description: "Shows loan trends by quarter with unique member counts",
        sql: "SELECT \n  d.year,\n  d.quarter,\n  COUNT(*) as loan_count,\n  COUNT(DISTINCT fl.member_key) as unique_members\nFROM fact_loans fl\nJOIN dim_date d ON fl.loan_date = d.date_key\nGROUP BY d.year, d.quarter\nORDER BY d.year, d.quarter;",
    },
    PredefinedQuery {
        id: "genre_by_library",
        name: "Genre Popularity by Library",
        description: "Compares genre popularity between the two library systems",
        sql: "SELECT \n  g.genre_name,\n  fl.source_system,\n  COUNT(*) as loan_count\nFROM fact_loans fl\nJOIN dim_books b ON fl.book_key = b.book_key\nJOIN dim_genres g ON b.genre_key = g.genre_key\nGROUP BY g.genre_name, fl.source_system\nORDER BY g.genre_name, loan_count DESC;",
    },
];

/// All predefined queries in menu order.
pub fn predefined_queries() -> &'static [PredefinedQuery] {
    PREDEFINED
}

/// Look up a predefined query by id.
pub fn find_predefined(id: &str) -> Option<&'static PredefinedQuery> {
    PREDEFINED.iter().find(|q| q.id == id)
}

/// Like [`find_predefined`], failing with [`WarehouseError::UnknownQuery`].
pub fn require_predefined(id: &str) -> WarehouseResult<&'static PredefinedQuery> {
    find_predefined(id).ok_or_else(|| WarehouseError::UnknownQuery(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = predefined_queries().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), predefined_queries().len());
    }

    #[test]
    fn every_query_is_terminated() {
        for q in predefined_queries() {
            assert!(q.sql.starts_with("SELECT"), "{}", q.id);
            assert!(q.sql.ends_with(';'), "{}", q.id);
        }
    }

    #[test]
    fn find_by_id() {
        let q = find_predefined("monthly_loans").unwrap();
        assert_eq!(q.name, "Monthly Loan Trends");
        assert!(find_predefined("nope").is_none());
        assert!(find_predefined("").is_none());
    }

    #[test]
    fn require_unknown_id() {
        assert_eq!(require_predefined("overdue_books").unwrap().id, "overdue_books");
        assert!(require_predefined("nope").unwrap_err().is_unknown_query());
    }
}
