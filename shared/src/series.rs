//! Daily income/expense series for the history chart.

use crate::currency::round_currency;
use crate::models::{Transaction, TransactionType};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Number of days shown by the chart, ending at the viewed date.
pub const CHART_WINDOW_DAYS: usize = 7;

/// Three aligned columns: one date, one income total and one expense total per day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySeries {
    pub dates: Vec<NaiveDate>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Largest value in either column, used to scale the y axis.
    pub fn max_value(&self) -> f64 {
        self.income
            .iter()
            .chain(self.expense.iter())
            .copied()
            .fold(0.0, f64::max)
    }

    pub fn total_income(&self) -> f64 {
        self.income.iter().sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.expense.iter().sum()
    }
}

/// The 7-day series ending at `anchor`.
pub fn daily_series(transactions: &[Transaction], anchor: NaiveDate) -> DailySeries {
    series_for_window(transactions, anchor, CHART_WINDOW_DAYS)
}

/// Per-day income and expense sums for `days` consecutive dates ending at
/// `anchor`. Transactions are bucketed in one pass; rounding happens once per
/// summed value.
pub fn series_for_window(
    transactions: &[Transaction],
    anchor: NaiveDate,
    days: usize,
) -> DailySeries {
    let dates: Vec<NaiveDate> = (0..days)
        .rev()
        .filter_map(|offset| anchor.checked_sub_signed(Duration::days(offset as i64)))
        .collect();

    let Some(&first) = dates.first() else {
        return DailySeries::default();
    };

    let mut buckets: HashMap<NaiveDate, (f64, f64)> = HashMap::with_capacity(dates.len());
    for tx in transactions.iter().filter(|t| t.date >= first && t.date <= anchor) {
        let bucket = buckets.entry(tx.date).or_insert((0.0, 0.0));
        match tx.kind {
            TransactionType::Income => bucket.0 += tx.amount,
            TransactionType::Expense => bucket.1 += tx.amount,
        }
    }

    let mut series = DailySeries {
        dates: Vec::with_capacity(dates.len()),
        income: Vec::with_capacity(dates.len()),
        expense: Vec::with_capacity(dates.len()),
    };
    for date in dates {
        let (income, expense) = buckets.get(&date).copied().unwrap_or((0.0, 0.0));
        series.dates.push(date);
        series.income.push(round_currency(income));
        series.expense.push(round_currency(expense));
    }

    log::debug!(
        "Built {}-day series ending {}: income {:.2}, expense {:.2}",
        series.len(),
        anchor,
        series.total_income(),
        series.total_expense()
    );
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn tx(id: i64, date_str: &str, kind: TransactionType, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId::from(id),
            kind,
            amount,
            category: kind.label().to_string(),
            date: date(date_str),
            description: String::new(),
        }
    }

    #[test]
    fn test_window_shape() {
        let series = daily_series(&[], date("2024-03-01"));

        assert_eq!(series.len(), CHART_WINDOW_DAYS);
        assert_eq!(series.dates.first(), Some(&date("2024-02-24")));
        assert_eq!(series.dates.last(), Some(&date("2024-03-01")));
        assert!(series.income.iter().all(|v| *v == 0.0));
        assert!(series.expense.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_crosses_leap_day() {
        let series = daily_series(&[], date("2024-03-02"));
        assert!(series.dates.contains(&date("2024-02-29")));
    }

    #[test]
    fn test_sums_by_day_and_type() {
        let transactions = vec![
            tx(1, "2024-03-10", TransactionType::Income, 100.0),
            tx(2, "2024-03-10", TransactionType::Income, 25.5),
            tx(3, "2024-03-10", TransactionType::Expense, 40.0),
            tx(4, "2024-03-08", TransactionType::Expense, 12.0),
            tx(5, "2024-03-04", TransactionType::Income, 7.0),
            // outside the window on both ends
            tx(6, "2024-03-03", TransactionType::Income, 999.0),
            tx(7, "2024-03-11", TransactionType::Expense, 999.0),
        ];

        let series = daily_series(&transactions, date("2024-03-10"));

        assert_eq!(series.income, vec![7.0, 0.0, 0.0, 0.0, 0.0, 0.0, 125.5]);
        assert_eq!(series.expense, vec![0.0, 0.0, 0.0, 0.0, 12.0, 0.0, 40.0]);
    }

    #[test]
    fn test_rounds_summed_value() {
        let transactions = vec![tx(1, "2024-03-10", TransactionType::Expense, 33.333)];
        let series = daily_series(&transactions, date("2024-03-10"));
        assert_eq!(series.expense[6], 33.33);
    }

    #[test]
    fn test_rounding_applies_after_summing() {
        // 0.004 + 0.004 rounds to 0.01 only when summed first
        let transactions = vec![
            tx(1, "2024-03-10", TransactionType::Income, 0.004),
            tx(2, "2024-03-10", TransactionType::Income, 0.004),
        ];
        let series = daily_series(&transactions, date("2024-03-10"));
        assert_eq!(series.income[6], 0.01);
    }

    #[test]
    fn test_max_value() {
        let transactions = vec![
            tx(1, "2024-03-09", TransactionType::Income, 80.0),
            tx(2, "2024-03-10", TransactionType::Expense, 120.0),
        ];
        let series = daily_series(&transactions, date("2024-03-10"));
        assert_eq!(series.max_value(), 120.0);
    }

    #[test]
    fn test_zero_length_window() {
        let series = series_for_window(&[], date("2024-03-10"), 0);
        assert!(series.is_empty());
    }
}
