//! Selector enumerations offered by the query builder form.
//!
//! Each selector has a stable wire name (`as_str`) used by config files, the
//! CLI, and the generated SQL where a value is emitted literally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WarehouseError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            /// All values in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = WarehouseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(WarehouseError::unknown_option($kind, other)),
                }
            }
        }
    };
}

wire_enum! {
    /// Which analytical template to fill in.
    QueryKind, "query kind" {
        PopularBooks => "popular_books",
        ActiveMembers => "active_members",
        LoanTrends => "loan_trends",
    }
}

wire_enum! {
    /// Temporal filter for the ranking queries, or the aggregation
    /// granularity for loan trends.
    ///
    /// Both share one selector because the form keeps a single radio value
    /// and swaps the choices shown when the query kind changes.
    TimeFrame, "time frame" {
        AllTime => "all_time",
        CurrentYear => "current_year",
        CurrentMonth => "current_month",
        CurrentQuarter => "current_quarter",
        CustomYear => "custom_year",
        CustomMonth => "custom_month",
        CustomQuarter => "custom_quarter",
        ByMonth => "by_month",
        ByQuarter => "by_quarter",
        ByYear => "by_year",
    }
}

wire_enum! {
    /// Library catalog a record originated from.
    SourceSystem, "source system" {
        All => "all",
        UWindsorLibrary => "UWindsor_Library",
        WindsorPublicLibrary => "Windsor_PLibrary",
    }
}

impl Default for QueryKind {
    fn default() -> Self {
        Self::PopularBooks
    }
}

impl QueryKind {
    /// Human label shown in the query type picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PopularBooks => "Most Popular Books",
            Self::ActiveMembers => "Most Active Members",
            Self::LoanTrends => "Loan Trends Analysis",
        }
    }

    /// Whether the template ends in a `LIMIT` clause.
    pub fn uses_limit(&self) -> bool {
        !matches!(self, Self::LoanTrends)
    }
}

impl Default for TimeFrame {
    fn default() -> Self {
        Self::AllTime
    }
}

impl TimeFrame {
    /// Filter choices offered for the ranking queries.
    pub const FILTERS: &'static [TimeFrame] = &[
        Self::AllTime,
        Self::CurrentYear,
        Self::CurrentMonth,
        Self::CurrentQuarter,
        Self::CustomYear,
        Self::CustomMonth,
        Self::CustomQuarter,
    ];

    /// Aggregation choices offered for loan trends.
    pub const GRANULARITIES: &'static [TimeFrame] = &[Self::ByMonth, Self::ByQuarter, Self::ByYear];

    pub fn is_granularity(&self) -> bool {
        matches!(self, Self::ByMonth | Self::ByQuarter | Self::ByYear)
    }

    /// Whether the frame reads the custom year field.
    pub fn uses_custom_year(&self) -> bool {
        matches!(
            self,
            Self::CustomYear | Self::CustomMonth | Self::CustomQuarter
        )
    }
}

impl Default for SourceSystem {
    fn default() -> Self {
        Self::All
    }
}

impl SourceSystem {
    /// Human label shown in the source picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Systems",
            Self::UWindsorLibrary => "UWindsor Library",
            Self::WindsorPublicLibrary => "Windsor Public Library",
        }
    }

    /// The system name when a single system is selected.
    pub fn filter(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            other => Some(other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_back() {
        for kind in QueryKind::ALL {
            assert_eq!(kind.as_str().parse::<QueryKind>().unwrap(), *kind);
        }
        for frame in TimeFrame::ALL {
            assert_eq!(frame.to_string().parse::<TimeFrame>().unwrap(), *frame);
        }
        assert_eq!(
            "Windsor_PLibrary".parse::<SourceSystem>().unwrap(),
            SourceSystem::WindsorPublicLibrary
        );
    }

    #[test]
    fn unknown_value_names_selector() {
        let err = "weekly".parse::<TimeFrame>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown time frame: 'weekly'");
    }

    #[test]
    fn source_filter_is_none_for_all() {
        assert_eq!(SourceSystem::All.filter(), None);
        assert_eq!(
            SourceSystem::UWindsorLibrary.filter(),
            Some("UWindsor_Library")
        );
    }

    #[test]
    fn frame_groups_do_not_overlap() {
        for frame in TimeFrame::FILTERS {
            assert!(!frame.is_granularity());
        }
        for frame in TimeFrame::GRANULARITIES {
            assert!(frame.is_granularity());
        }
        assert_eq!(
            TimeFrame::FILTERS.len() + TimeFrame::GRANULARITIES.len(),
            TimeFrame::ALL.len()
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&SourceSystem::UWindsorLibrary).unwrap();
        assert_eq!(json, "\"UWindsor_Library\"");
        let kind: QueryKind = serde_json::from_str("\"loan_trends\"").unwrap();
        assert_eq!(kind, QueryKind::LoanTrends);
    }
}
