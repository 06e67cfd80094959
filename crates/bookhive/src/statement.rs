//! Textual SELECT statement assembly.
//!
//! [`SelectText`] collects clause fragments and renders them one clause per
//! line, terminated by `;`. Fragments are spliced in verbatim: there are no
//! bind parameters and nothing is quoted or escaped.

#[cfg(test)]
mod tests;

/// Structured SELECT text builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectText {
    /// SELECT columns
    select_cols: Vec<String>,
    /// FROM expression
    from: String,
    /// JOIN lines (without the JOIN keyword)
    joins: Vec<String>,
    /// WHERE conditions (without leading AND)
    where_conditions: Vec<String>,
    /// GROUP BY columns
    group_by: Vec<String>,
    /// ORDER BY items
    order_by: Vec<String>,
    /// LIMIT, kept as text
    limit: Option<String>,
}

impl SelectText {
    /// Create a builder selecting from `from` (e.g. `"fact_loans fl"`).
    pub fn new(from: &str) -> Self {
        Self {
            from: from.to_string(),
            ..Self::default()
        }
    }

    /// Append one SELECT column.
    pub fn column(&mut self, col: &str) -> &mut Self {
        self.select_cols.push(col.to_string());
        self
    }

    /// Append multiple SELECT columns.
    pub fn columns(&mut self, cols: &[&str]) -> &mut Self {
        for col in cols {
            self.column(col);
        }
        self
    }

    /// Add an inner JOIN line.
    pub fn join(&mut self, table: &str, on: &str) -> &mut Self {
        self.joins.push(format!("{} ON {}", table, on));
        self
    }

    /// Add a raw WHERE condition.
    ///
    /// A condition may itself contain `AND`; it stays on one line.
    pub fn and_where(&mut self, condition: &str) -> &mut Self {
        self.where_conditions.push(condition.to_string());
        self
    }

    /// Add a WHERE condition when one is given.
    pub fn and_where_opt(&mut self, condition: Option<&str>) -> &mut Self {
        if let Some(c) = condition {
            self.and_where(c);
        }
        self
    }

    /// Append one GROUP BY column.
    pub fn group_by(&mut self, col: &str) -> &mut Self {
        self.group_by.push(col.to_string());
        self
    }

    /// Append multiple GROUP BY columns.
    pub fn group_by_cols(&mut self, cols: &[&str]) -> &mut Self {
        for col in cols {
            self.group_by(col);
        }
        self
    }

    /// Append one ORDER BY item (e.g. `"loan_count DESC"`).
    pub fn order_by(&mut self, item: &str) -> &mut Self {
        self.order_by.push(item.to_string());
        self
    }

    /// Set LIMIT. Any displayable value is emitted as-is.
    pub fn limit(&mut self, limit: impl std::fmt::Display) -> &mut Self {
        self.limit = Some(limit.to_string());
        self
    }

    /// Render the statement.
    pub fn to_sql(&self) -> String {
        let mut lines = Vec::with_capacity(4 + self.joins.len() + self.where_conditions.len());

        lines.push(format!("SELECT {}", self.select_cols.join(", ")));
        lines.push(format!("FROM {}", self.from));

        for join in &self.joins {
            lines.push(format!("JOIN {}", join));
        }

        for (i, cond) in self.where_conditions.iter().enumerate() {
            let keyword = if i == 0 { "WHERE" } else { "AND" };
            lines.push(format!("{} {}", keyword, cond));
        }

        if !self.group_by.is_empty() {
            lines.push(format!("GROUP BY {}", self.group_by.join(", ")));
        }

        if !self.order_by.is_empty() {
            lines.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }

        if let Some(ref limit) = self.limit {
            lines.push(format!("LIMIT {}", limit));
        }

        let mut sql = lines.join("\n");
        sql.push(';');
        sql
    }
}

impl std::fmt::Display for SelectText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sql())
    }
}
