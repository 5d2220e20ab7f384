//! Refresh triggers and stale-response detection.

use crate::models::{Summary, Transaction};
use std::fmt;

/// User or system events that re-run the whole fetch-and-render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Startup,
    FormSubmitted,
    FilterChanged,
    SearchChanged,
    DateChanged,
    TransactionDeleted,
    DemoSeeded,
}

impl fmt::Display for RefreshTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RefreshTrigger::Startup => "startup",
            RefreshTrigger::FormSubmitted => "form submitted",
            RefreshTrigger::FilterChanged => "filter changed",
            RefreshTrigger::SearchChanged => "search changed",
            RefreshTrigger::DateChanged => "date changed",
            RefreshTrigger::TransactionDeleted => "transaction deleted",
            RefreshTrigger::DemoSeeded => "demo data seeded",
        };
        f.write_str(name)
    }
}

/// Identifies one issued refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshToken(u64);

impl RefreshToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Hands out increasing tokens; only the latest one may apply its results.
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    latest: u64,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RefreshToken {
        self.latest += 1;
        RefreshToken(self.latest)
    }

    pub fn is_current(&self, token: RefreshToken) -> bool {
        token.0 == self.latest
    }

    pub fn latest(&self) -> Option<RefreshToken> {
        (self.latest > 0).then_some(RefreshToken(self.latest))
    }
}

/// Data shown by the page, as of the most recent refresh that completed in
/// issue order
#[derive(Debug)]
pub struct RefreshState {
    sequencer: RefreshSequencer,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub loading: bool,
}

impl RefreshState {
    /// Nothing loaded yet; the first refresh is about to start.
    pub fn new() -> Self {
        Self {
            sequencer: RefreshSequencer::new(),
            transactions: Vec::new(),
            summary: Summary::default(),
            loading: true,
        }
    }

    pub fn begin(&mut self) -> RefreshToken {
        self.loading = true;
        self.sequencer.issue()
    }

    /// Apply a finished refresh. Returns `false`, leaving everything as it
    /// was, when a newer refresh has been issued since `token`.
    pub fn finish(
        &mut self,
        token: RefreshToken,
        transactions: Vec<Transaction>,
        summary: Summary,
    ) -> bool {
        if !self.sequencer.is_current(token) {
            log::debug!(
                "Dropping stale refresh #{} (latest #{:?})",
                token.value(),
                self.sequencer.latest().map(|t| t.value())
            );
            return false;
        }
        self.transactions = transactions;
        self.summary = summary;
        self.loading = false;
        true
    }
}

impl Default for RefreshState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionId, TransactionType};
    use chrono::NaiveDate;

    fn tx(id: i64) -> Transaction {
        Transaction {
            id: TransactionId::from(id),
            kind: TransactionType::Income,
            amount: 10.0,
            category: "Salary".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn test_tokens_increase() {
        let mut sequencer = RefreshSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(second > first);
        assert_eq!(sequencer.latest(), Some(second));
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut sequencer = RefreshSequencer::new();
        let stale = sequencer.issue();
        let fresh = sequencer.issue();

        assert!(!sequencer.is_current(stale));
        assert!(sequencer.is_current(fresh));
    }

    #[test]
    fn test_fresh_sequencer_has_no_latest() {
        assert_eq!(RefreshSequencer::new().latest(), None);
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(RefreshTrigger::DateChanged.to_string(), "date changed");
    }

    #[test]
    fn test_state_applies_current_refresh() {
        let mut state = RefreshState::new();
        assert!(state.loading);

        let token = state.begin();
        assert!(state.finish(token, vec![tx(1)], Summary::default()));

        assert!(!state.loading);
        assert_eq!(state.transactions, vec![tx(1)]);
    }

    #[test]
    fn test_state_ignores_older_token() {
        let mut state = RefreshState::new();
        let older = state.begin();
        let newer = state.begin();

        assert!(state.finish(newer, vec![tx(2)], Summary::default()));

        let mut stale_summary = Summary::default();
        stale_summary.lifetime.balance = 99.0;
        assert!(!state.finish(older, vec![tx(1)], stale_summary));

        assert_eq!(state.transactions, vec![tx(2)]);
        assert_eq!(state.summary, Summary::default());
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_finish_keeps_loading_flag() {
        let mut state = RefreshState::new();
        let older = state.begin();
        let _newer = state.begin();

        assert!(!state.finish(older, Vec::new(), Summary::default()));
        assert!(state.loading);
    }
}
