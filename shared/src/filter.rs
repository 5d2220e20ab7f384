//! Client-side filtering and ordering of the transaction table.

use crate::models::{Transaction, TransactionType};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Type filter offered by the table's select box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 3] = [TypeFilter::All, TypeFilter::Income, TypeFilter::Expense];

    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionType::Income,
            TypeFilter::Expense => kind == TransactionType::Expense,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Income => "income",
            TypeFilter::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Income => "Income",
            TypeFilter::Expense => "Expense",
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type filter: {0}")]
pub struct ParseTypeFilterError(String);

impl FromStr for TypeFilter {
    type Err = ParseTypeFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            other => Err(ParseTypeFilterError(other.to_string())),
        }
    }
}

/// Criteria picked by the user for the transaction table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionQuery {
    pub type_filter: TypeFilter,
    pub search: String,
}

impl TransactionQuery {
    pub fn new(type_filter: TypeFilter, search: impl Into<String>) -> Self {
        Self {
            type_filter,
            search: search.into(),
        }
    }

    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    fn matches(&self, transaction: &Transaction, needle: &str) -> bool {
        if !self.type_filter.matches(transaction.kind) {
            return false;
        }
        if needle.is_empty() {
            return true;
        }
        format!("{} {}", transaction.description, transaction.category)
            .to_lowercase()
            .contains(needle)
    }

    /// Filtered view of `transactions`, newest first.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let needle = self.needle();
        let mut rows: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.matches(t, &needle))
            .cloned()
            .collect();
        rows.sort_by(newest_first);
        rows
    }
}

/// Date descending, then id descending. Same-day entries show the most
/// recently stored one first.
pub fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
}
