//! User-facing timeframe labels and their provider window codes.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchTrendsError;

/// Trailing window for an interest-over-time query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Timeframe {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
    AllTime,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Monthly,
        Timeframe::Quarterly,
        Timeframe::Yearly,
        Timeframe::AllTime,
    ];

    /// Parses a user-facing label such as `"Monthly"` or `"All Time"`.
    ///
    /// Matching ignores ASCII case and treats `-`, `_` and spaces alike, so
    /// `"all-time"` and `"ALL_TIME"` are accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`SearchTrendsError::UnknownTimeframe`] for any other label.
    pub fn from_label(label: &str) -> Result<Self, SearchTrendsError> {
        let folded: String = label
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            "alltime" => Ok(Self::AllTime),
            _ => Err(SearchTrendsError::UnknownTimeframe(label.to_string())),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
            Self::AllTime => "All Time",
        }
    }

    /// Window code understood by the search-trends provider.
    #[must_use]
    pub fn provider_code(self) -> &'static str {
        match self {
            Self::Monthly => "today 1-m",
            Self::Quarterly => "today 3-m",
            Self::Yearly => "today 12-m",
            Self::AllTime => "all",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = SearchTrendsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}
