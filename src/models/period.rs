//! Report period selectors
//!
//! A `Period` names a relative time window that ends at "now". An
//! `ExportPeriod` is the narrower selector accepted by the raw CSV export.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A relative time window ending at "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Same calendar day as now
    Daily,
    /// The last seven days
    Weekly,
    /// Since the same day one calendar month ago
    Monthly,
    /// Since the same day one calendar year ago
    Yearly,
}

impl Period {
    /// All periods in ascending window length
    pub fn all() -> &'static [Period] {
        &[Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly]
    }

    /// Lowercase token used on the command line and in settings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Parse a period token
    ///
    /// Accepts `daily`, `weekly`, `monthly`, `yearly` and the short forms
    /// `day`, `week`, `month`, `year` (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            _ => Err(PeriodParseError::UnknownPeriod(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Period selector for the raw CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportPeriod {
    Week,
    Month,
}

impl ExportPeriod {
    /// Token used in the download file name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// The rolling window this export filters with
    pub fn window(&self) -> Period {
        match self {
            Self::Week => Period::Weekly,
            Self::Month => Period::Monthly,
        }
    }

    /// Download file name, e.g. `week-expenses.csv`
    pub fn file_name(&self) -> String {
        format!("{}-expenses.csv", self.as_str())
    }

    /// Parse an export period token (`week` or `month`, long forms accepted)
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        match Period::parse(s)? {
            Period::Weekly => Ok(Self::Week),
            Period::Monthly => Ok(Self::Month),
            _ => Err(PeriodParseError::NotExportable(s.to_string())),
        }
    }
}

impl fmt::Display for ExportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    UnknownPeriod(String),
    NotExportable(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::UnknownPeriod(s) => write!(f, "Unknown period: {}", s),
            PeriodParseError::NotExportable(s) => {
                write!(f, "Period cannot be exported: {} (use week or month)", s)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}
