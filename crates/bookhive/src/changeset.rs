//! Presence-check validation for the data-entry forms.
//!
//! The checks only ask whether required fields were filled in. Values that
//! are present pass through unchecked, so a valid submission behaves exactly
//! as it would without validation.

use serde::{Deserialize, Serialize};

/// A machine-friendly validation code.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationCode {
    Required,
    Range,
    Custom(String),
}

impl ValidationCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::Range => "range",
            Self::Custom(s) => s.as_str(),
        }
    }
}

impl Serialize for ValidationCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub code: ValidationCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationCode::Required, message)
    }
}

/// A collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub items: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, err: ValidationError) {
        self.items.push(err);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.items.iter()
    }

    /// The message a form would show in its blocking alert.
    ///
    /// Forms report one summary message per failed submission, so this is the
    /// first error's message.
    pub fn alert_message(&self) -> Option<&str> {
        self.items.first().map(|e| e.message.as_str())
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Form fields count as missing only when empty; whitespace is a value.
fn require(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if value.is_empty() {
        errors.push(ValidationError::required(field, message));
    }
}

const BOOK_FIELDS_MESSAGE: &str = "Please fill in all required book fields";
const MEMBER_FIELDS_MESSAGE: &str = "Please fill in all required member fields";
const TRANSACTION_FIELDS_MESSAGE: &str = "Please fill in all required transaction fields";
const SQL_MESSAGE: &str = "Please enter a SQL query";

/// A new catalog item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: String,
    pub genre: String,
    pub publisher: String,
}

impl BookEntry {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "title", &self.title, BOOK_FIELDS_MESSAGE);
        require(&mut errors, "author", &self.author, BOOK_FIELDS_MESSAGE);
        require(&mut errors, "isbn", &self.isbn, BOOK_FIELDS_MESSAGE);
        errors.into_result()
    }
}

/// A new library member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberEntry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl MemberEntry {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "name", &self.name, MEMBER_FIELDS_MESSAGE);
        require(&mut errors, "email", &self.email, MEMBER_FIELDS_MESSAGE);
        errors.into_result()
    }
}

/// A checkout record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionEntry {
    pub book_id: String,
    pub member_id: String,
    pub loan_date: String,
    pub due_date: String,
}

impl TransactionEntry {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "book_id", &self.book_id, TRANSACTION_FIELDS_MESSAGE);
        require(&mut errors, "member_id", &self.member_id, TRANSACTION_FIELDS_MESSAGE);
        require(&mut errors, "loan_date", &self.loan_date, TRANSACTION_FIELDS_MESSAGE);
        require(&mut errors, "due_date", &self.due_date, TRANSACTION_FIELDS_MESSAGE);
        errors.into_result()
    }
}

/// One submission from the manual data-entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "table", rename_all = "snake_case")]
pub enum DataEntry {
    Books(BookEntry),
    Members(MemberEntry),
    Transactions(TransactionEntry),
}

impl DataEntry {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::Books(b) => b.validate(),
            Self::Members(m) => m.validate(),
            Self::Transactions(t) => t.validate(),
        }
    }
}

/// Presence check for a raw SQL submission.
pub fn validate_sql_entry(sql: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require(&mut errors, "sql", sql.trim(), SQL_MESSAGE);
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_requires_title_author_isbn() {
        let entry = BookEntry {
            title: "Dune".into(),
            ..Default::default()
        };
        let errors = entry.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["author", "isbn"]);
        assert_eq!(errors.alert_message(), Some(BOOK_FIELDS_MESSAGE));
    }

    #[test]
    fn book_optional_fields_may_be_empty() {
        let entry = BookEntry {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            isbn: "978-0441013593".into(),
            ..Default::default()
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn member_empty_name_is_missing() {
        let entry = MemberEntry {
            email: "a@example.com".into(),
            ..Default::default()
        };
        let errors = entry.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.items[0].field, "name");
        assert_eq!(errors.items[0].code, ValidationCode::Required);
    }

    #[test]
    fn whitespace_form_fields_are_accepted() {
        let member = MemberEntry {
            name: "   ".into(),
            email: " ".into(),
            ..Default::default()
        };
        assert!(member.validate().is_ok());

        let book = BookEntry {
            title: "   ".into(),
            author: "\t".into(),
            isbn: " ".into(),
            ..Default::default()
        };
        assert!(book.validate().is_ok());
    }

    #[test]
    fn transaction_dispatch_through_data_entry() {
        let entry = DataEntry::Transactions(TransactionEntry {
            book_id: "1001".into(),
            member_id: "42".into(),
            loan_date: "2024-01-02".into(),
            due_date: String::new(),
        });
        let errors = entry.validate().unwrap_err();
        assert_eq!(errors.alert_message(), Some(TRANSACTION_FIELDS_MESSAGE));
    }

    #[test]
    fn sql_entry_presence() {
        assert!(validate_sql_entry("SELECT 1;").is_ok());
        let errors = validate_sql_entry("\n  ").unwrap_err();
        assert_eq!(errors.alert_message(), Some(SQL_MESSAGE));
    }

    #[test]
    fn validation_code_serializes_as_str() {
        let err = ValidationError::required("title", "missing");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "required");
    }
}
