//! Expense identifiers
//!
//! Expense ids are integer surrogate keys handed out by the store in
//! increasing order. The newtype keeps them from being mixed up with amounts
//! or counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

const DISPLAY_PREFIX: &str = "exp-";

/// Identifier of a stored expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The first id a fresh store assigns
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
