//! Mock table layouts for the two source libraries and the warehouse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WarehouseError;

/// One of the databases the workbench can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceDatabase {
    UwindsorLibrary,
    WindsorPlibrary,
    DataWarehouse,
}

impl SourceDatabase {
    pub const ALL: &'static [SourceDatabase] = &[
        Self::UwindsorLibrary,
        Self::WindsorPlibrary,
        Self::DataWarehouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UwindsorLibrary => "uwindsor_library",
            Self::WindsorPlibrary => "windsor_plibrary",
            Self::DataWarehouse => "data_warehouse",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UwindsorLibrary => "UWindsor Library",
            Self::WindsorPlibrary => "Windsor Public Library",
            Self::DataWarehouse => "Data Warehouse",
        }
    }
}

impl fmt::Display for SourceDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceDatabase {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|db| db.as_str() == s)
            .ok_or_else(|| WarehouseError::unknown_option("database", s))
    }
}

/// A table name with its column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

const UWINDSOR: &[TableSchema] = &[
    TableSchema {
        table: "books",
        columns: &["book_id", "title", "author", "isbn", "publication_year", "status"],
    },
    TableSchema {
        table: "members",
        columns: &["member_id", "first_name", "last_name", "email", "join_date"],
    },
    TableSchema {
        table: "loans",
        columns: &["loan_id", "book_id", "member_id", "loan_date", "return_date"],
    },
];

const WINDSOR_PUBLIC: &[TableSchema] = &[
    TableSchema {
        table: "inventory",
        columns: &["item_id", "title", "creator", "type", "acquisition_date", "status"],
    },
    TableSchema {
        table: "patrons",
        columns: &["patron_id", "name", "address", "phone", "registration_date"],
    },
    TableSchema {
        table: "checkouts",
        columns: &["checkout_id", "item_id", "patron_id", "checkout_date", "due_date"],
    },
];

const WAREHOUSE: &[TableSchema] = &[
    TableSchema {
        table: "dim_books",
        columns: &[
            "book_key",
            "source_id",
            "title",
            "author",
            "isbn",
            "publication_year",
            "source_system",
        ],
    },
    TableSchema {
        table: "dim_members",
        columns: &[
            "member_key",
            "source_id",
            "first_name",
            "last_name",
            "email",
            "join_date",
            "source_system",
        ],
    },
    TableSchema {
        table: "fact_loans",
        columns: &[
            "loan_key",
            "book_key",
            "member_key",
            "loan_date",
            "return_date",
            "loan_duration_days",
            "source_system",
        ],
    },
    TableSchema {
        table: "dim_date",
        columns: &["date_key", "full_date", "day", "month", "year", "quarter", "is_weekend"],
    },
];

/// Tables of `db` in display order.
pub fn database_schema(db: SourceDatabase) -> &'static [TableSchema] {
    match db {
        SourceDatabase::UwindsorLibrary => UWINDSOR,
        SourceDatabase::WindsorPlibrary => WINDSOR_PUBLIC,
        SourceDatabase::DataWarehouse => WAREHOUSE,
    }
}
