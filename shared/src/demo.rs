use crate::models::{TransactionDraft, TransactionType};
use chrono::{Duration, NaiveDate};

/// Sample transactions for an empty store, dated relative to `today`.
pub fn demo_drafts(today: NaiveDate) -> Vec<TransactionDraft> {
    let days_ago = |days: i64| today.checked_sub_signed(Duration::days(days)).unwrap_or(today);
    let draft = |kind, amount, category: &str, date, description: &str| TransactionDraft {
        kind,
        amount,
        category: category.to_string(),
        date,
        description: description.to_string(),
    };

    vec![
        draft(TransactionType::Income, 5000.0, "Salary", today, "Monthly salary"),
        draft(TransactionType::Expense, 120.0, "Food", today, "Lunch"),
        draft(TransactionType::Expense, 350.0, "Groceries", today, "Vegetables"),
        draft(TransactionType::Expense, 200.0, "Transport", days_ago(1), "Taxi"),
        draft(TransactionType::Income, 1500.0, "Freelance", days_ago(2), "Project part"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_drafts_are_valid_and_recent() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let drafts = demo_drafts(today);

        assert_eq!(drafts.len(), 5);
        assert!(drafts.iter().all(|d| d.amount > 0.0));
        assert!(drafts.iter().all(|d| !d.category.is_empty()));
        assert_eq!(drafts[3].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(drafts[4].date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
    }
}
