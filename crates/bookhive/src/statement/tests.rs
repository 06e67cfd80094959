use super::*;

#[test]
fn test_simple_select() {
    let mut st = SelectText::new("fact_loans");
    st.column("*");
    assert_eq!(st.to_sql(), "SELECT *\nFROM fact_loans;");
}

#[test]
fn test_columns_and_join() {
    let mut st = SelectText::new("fact_loans fl");
    st.columns(&["b.title", "COUNT(*) as loan_count"])
        .join("dim_books b", "fl.book_key = b.book_key");
    assert_eq!(
        st.to_sql(),
        "SELECT b.title, COUNT(*) as loan_count\nFROM fact_loans fl\nJOIN dim_books b ON fl.book_key = b.book_key;"
    );
}

#[test]
fn test_where_conditions_one_per_line() {
    let mut st = SelectText::new("fact_loans fl");
    st.column("*")
        .and_where("d.year = 2022 AND d.month = 4")
        .and_where("fl.source_system = 'UWindsor_Library'");
    assert_eq!(
        st.to_sql(),
        "SELECT *\nFROM fact_loans fl\nWHERE d.year = 2022 AND d.month = 4\nAND fl.source_system = 'UWindsor_Library';"
    );
}

#[test]
fn test_and_where_opt_none_is_noop() {
    let mut st = SelectText::new("t");
    st.column("a").and_where_opt(None);
    assert_eq!(st.to_sql(), "SELECT a\nFROM t;");
}

#[test]
fn test_group_order_limit() {
    let mut st = SelectText::new("t");
    st.column("a")
        .group_by_cols(&["a", "b"])
        .order_by("a DESC")
        .order_by("b")
        .limit(5);
    assert_eq!(
        st.to_sql(),
        "SELECT a\nFROM t\nGROUP BY a, b\nORDER BY a DESC, b\nLIMIT 5;"
    );
}

#[test]
fn test_limit_is_verbatim_text() {
    let mut st = SelectText::new("t");
    st.column("a").limit("");
    assert_eq!(st.to_sql(), "SELECT a\nFROM t\nLIMIT ;");
}

#[test]
fn test_display_matches_to_sql() {
    let mut st = SelectText::new("t");
    st.column("a");
    assert_eq!(st.to_string(), st.to_sql());
}
