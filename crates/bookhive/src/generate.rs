//! SQL text generation from a [`QueryConfiguration`].
//!
//! Generation is a pure function of the configuration: no clock, no
//! randomness, no I/O. "Current" time frames are emitted as literal
//! `YEAR(CURRENT_DATE)`-style tokens for whatever engine would run the text.
//!
//! ```ignore
//! use bookhive::{generate_query, QueryConfiguration, TimeFrame};
//!
//! let sql = generate_query(
//!     &QueryConfiguration::popular_books()
//!         .time_frame(TimeFrame::CustomYear)
//!         .custom_year(2022)
//!         .include_author(true),
//! );
//! assert!(sql.contains("WHERE d.year = 2022"));
//! ```

use crate::config::QueryConfiguration;
use crate::options::{QueryKind, TimeFrame};
use crate::statement::SelectText;


const FACT_LOANS: &str = "fact_loans fl";
const LOAN_COUNT: &str = "COUNT(*) as loan_count";
const CHECKOUT_COUNT: &str = "COUNT(*) as checkout_count";
const SOURCE_COLUMN: &str = "fl.source_system";

// Loan trend period columns and their ordering.
const BY_MONTH: &[&str] = &["d.month", "d.year"];
const BY_MONTH_ORDER: &[&str] = &["d.year", "d.month"];
const BY_QUARTER: &[&str] = &["d.quarter", "d.year"];
const BY_QUARTER_ORDER: &[&str] = &["d.year", "d.quarter"];
const BY_YEAR: &[&str] = &["d.year"];

/// An optional dimension joined onto `dim_books` for the popularity query.
struct BookDimension {
    column: &'static str,
    table: &'static str,
    on: &'static str,
}

const AUTHOR: BookDimension = BookDimension {
    column: "a.author_name",
    table: "dim_authors a",
    on: "b.author_key = a.author_key",
};

const GENRE: BookDimension = BookDimension {
    column: "g.genre_name",
    table: "dim_genres g",
    on: "b.genre_key = g.genre_key",
};

const PUBLISHER: BookDimension = BookDimension {
    column: "p.publisher_name",
    table: "dim_publishers p",
    on: "b.publisher_key = p.publisher_key",
};

/// Build the SQL text for `config`.
///
/// Fields the selected kind does not read are ignored. Custom year, month,
/// and quarter are substituted without escaping or range checks.
pub fn generate_query(config: &QueryConfiguration) -> String {
    let sql = match config.kind {
        QueryKind::PopularBooks => popular_books(config),
        QueryKind::ActiveMembers => active_members(config),
        QueryKind::LoanTrends => loan_trends(config),
    };

    tracing::debug!(
        target: "bookhive.sql",
        kind = %config.kind,
        time_frame = %config.time_frame,
        source = %config.source_system,
        sql = %sql,
        "generated query"
    );

    sql
}

/// Author, genre, publisher, in that order, filtered by the include flags.
///
/// The same order feeds SELECT, JOIN, and GROUP BY so the three lists line
/// up positionally.
fn selected_dimensions(config: &QueryConfiguration) -> Vec<&'static BookDimension> {
    [
        (config.include_author, &AUTHOR),
        (config.include_genre, &GENRE),
        (config.include_publisher, &PUBLISHER),
    ]
    .into_iter()
    .filter_map(|(on, dim)| on.then_some(dim))
    .collect()
}

fn popular_books(config: &QueryConfiguration) -> String {
    let dims = selected_dimensions(config);

    let mut st = SelectText::new(FACT_LOANS);
    st.column("b.title");
    for dim in &dims {
        st.column(dim.column);
    }
    st.column(LOAN_COUNT);

    st.join("dim_books b", "fl.book_key = b.book_key");
    for dim in &dims {
        st.join(dim.table, dim.on);
    }
    st.join("dim_date d", "fl.loan_date = d.date_key");

    apply_filters(&mut st, config);

    st.group_by("b.title");
    for dim in &dims {
        st.group_by(dim.column);
    }

    st.order_by("loan_count DESC").limit(config.limit);
    st.to_sql()
}

fn active_members(config: &QueryConfiguration) -> String {
    let mut st = SelectText::new(FACT_LOANS);
    st.columns(&["m.first_name", "m.last_name", CHECKOUT_COUNT])
        .join("dim_members m", "fl.member_key = m.member_key")
        .join("dim_date d", "fl.loan_date = d.date_key");

    apply_filters(&mut st, config);

    st.group_by_cols(&["m.first_name", "m.last_name"])
        .order_by("checkout_count DESC")
        .limit(config.limit);
    st.to_sql()
}

/// Loan counts per period.
///
/// The source system is handled differently from the ranking queries: with
/// every system selected it becomes a grouped column, with one system
/// selected it is echoed back as a string literal and left out of GROUP BY.
fn loan_trends(config: &QueryConfiguration) -> String {
    let (period, order) = match config.time_frame {
        TimeFrame::ByQuarter => (BY_QUARTER, BY_QUARTER_ORDER),
        TimeFrame::ByYear => (BY_YEAR, BY_YEAR),
        _ => (BY_MONTH, BY_MONTH_ORDER),
    };

    let mut st = SelectText::new(FACT_LOANS);
    st.columns(period).column(LOAN_COUNT);

    let filter = config.source_system.filter();
    match filter {
        Some(system) => st.column(&format!("'{}' as source", system)),
        None => st.column(SOURCE_COLUMN),
    };

    st.join("dim_date d", "fl.loan_date = d.date_key");

    if let Some(system) = filter {
        st.and_where(&source_predicate(system));
    }

    st.group_by_cols(period);
    if filter.is_none() {
        st.group_by(SOURCE_COLUMN);
    }

    for item in order {
        st.order_by(item);
    }
    st.to_sql()
}

/// Time-frame predicate, then the source filter, as WHERE conditions.
fn apply_filters(st: &mut SelectText, config: &QueryConfiguration) {
    let time = time_predicate(config);
    st.and_where_opt(time.as_deref());
    if let Some(system) = config.source_system.filter() {
        st.and_where(&source_predicate(system));
    }
}

fn source_predicate(system: &str) -> String {
    format!("{} = '{}'", SOURCE_COLUMN, system)
}

/// The date-dimension predicate for a ranking query's time frame.
///
/// `None` only for all-time. Every other frame opens a WHERE clause; the
/// trend granularities have no condition, so the clause is left empty.
pub fn time_predicate(config: &QueryConfiguration) -> Option<String> {
    let year = &config.custom_year;
    let predicate = match config.time_frame {
        TimeFrame::AllTime => return None,
        TimeFrame::ByMonth | TimeFrame::ByQuarter | TimeFrame::ByYear => String::new(),
        TimeFrame::CurrentYear => "d.year = YEAR(CURRENT_DATE)".to_string(),
        TimeFrame::CurrentMonth => {
            "d.year = YEAR(CURRENT_DATE) AND d.month = MONTH(CURRENT_DATE)".to_string()
        }
        TimeFrame::CurrentQuarter => {
            "d.year = YEAR(CURRENT_DATE) AND d.quarter = QUARTER(CURRENT_DATE)".to_string()
        }
        TimeFrame::CustomYear => format!("d.year = {}", year),
        TimeFrame::CustomMonth => format!("d.year = {} AND d.month = {}", year, config.custom_month),
        TimeFrame::CustomQuarter => {
            format!("d.year = {} AND d.quarter = {}", year, config.custom_quarter)
        }
    };
    Some(predicate)
}
