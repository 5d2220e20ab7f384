use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Store-assigned transaction identifier.
///
/// The backend may hand out numeric or string ids, so both are accepted on the
/// wire. The client never creates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<i64> {
        self.0.parse::<i64>().ok()
    }

    fn sort_key(&self) -> (bool, Option<i64>, &str) {
        let numeric = self.numeric();
        (numeric.is_none(), numeric, &self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric ids compare as numbers and rank below every non-numeric id, which
/// compare as strings.
impl Ord for TransactionId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for TransactionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(Self(n.to_string())),
            RawId::Text(s) if s.trim().is_empty() => {
                Err(serde::de::Error::custom("transaction id is empty"))
            }
            RawId::Text(s) => Ok(Self(s)),
        }
    }
}

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Category used when the form leaves it blank; also the table label.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(DraftError::InvalidType(other.to_string())),
        }
    }
}

/// A single dated income or expense record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// A transaction that has not been stored yet; the body of a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub description: String,
}

impl TransactionDraft {
    /// Attach a store-assigned id, producing the stored entity.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description,
        }
    }
}

/// Form validation errors, rejected before anything is sent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("Enter a valid amount > 0")]
    InvalidAmount(String),
    #[error("Enter a valid amount > 0")]
    AmountNotPositive,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unknown transaction type: {0}")]
    InvalidType(String),
}

/// Raw values of the transaction form, exactly as typed
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub kind: TransactionType,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl TransactionForm {
    /// Empty form with the date set to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Income,
            amount: String::new(),
            category: String::new(),
            date: today.format(iso_date::FORMAT).to_string(),
            description: String::new(),
        }
    }

    /// Turn the form into a draft, applying the type-based category default.
    pub fn validate(&self, today: NaiveDate) -> Result<TransactionDraft, DraftError> {
        let amount_input = self.amount.trim();
        let amount = amount_input
            .parse::<f64>()
            .map_err(|_| DraftError::InvalidAmount(amount_input.to_string()))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DraftError::AmountNotPositive);
        }

        let date_input = self.date.trim();
        let date = if date_input.is_empty() {
            today
        } else {
            iso_date::parse(date_input)
                .ok_or_else(|| DraftError::InvalidDate(date_input.to_string()))?
        };

        let category = match self.category.trim() {
            "" => self.kind.label().to_string(),
            category => category.to_string(),
        };

        Ok(TransactionDraft {
            kind: self.kind,
            amount,
            category,
            date,
            description: self.description.trim().to_string(),
        })
    }

    /// Settle a submission once the create call has answered. A stored
    /// transaction resets the form to `today`; a failure keeps every typed
    /// value so the user can retry.
    pub fn settle(&mut self, created: Option<&Transaction>, today: NaiveDate) -> SubmitOutcome {
        match created {
            Some(_) => {
                *self = Self::new(today);
                SubmitOutcome::Saved
            }
            None => SubmitOutcome::Failed,
        }
    }
}

/// How a settled submission should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; reload the page data.
    Saved,
    /// Not stored; tell the user.
    Failed,
}

/// Acknowledgment body of a delete call
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub ok: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySummary {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceSummary {
    #[serde(default)]
    pub balance: f64,
}

/// Server-computed totals for a viewed date. `Default` is all zeros, which is
/// also what the UI shows when the summary cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub daily: DailySummary,
    pub month: BalanceSummary,
    pub lifetime: BalanceSummary,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `YYYY-MM-DD` dates. Decoding also accepts a full RFC 3339 timestamp and
/// keeps only its date part.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    /// A bare date, or a date followed by a `T` time part.
    pub fn parse(input: &str) -> Option<NaiveDate> {
        let input = input.trim();
        let date_part = input.get(..10)?;
        let rest = &input[10..];
        if !rest.is_empty() && !rest.starts_with('T') {
            return None;
        }
        NaiveDate::parse_from_str(date_part, FORMAT).ok()
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn form(amount: &str) -> TransactionForm {
        TransactionForm {
            kind: TransactionType::Expense,
            amount: amount.to_string(),
            category: String::new(),
            date: "2024-03-10".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_transaction_decodes_numeric_and_string_ids() {
        let json = r#"[
            {"id": 7, "type": "income", "amount": 10.5, "category": "Salary",
             "date": "2024-01-02", "description": "pay"},
            {"id": "65a1f", "type": "expense", "amount": 3, "category": "Food",
             "date": "2024-01-03T09:30:00.000Z"}
        ]"#;

        let transactions: Vec<Transaction> = serde_json::from_str(json).unwrap();

        assert_eq!(transactions[0].id.as_str(), "7");
        assert_eq!(transactions[0].kind, TransactionType::Income);
        assert_eq!(transactions[1].id.as_str(), "65a1f");
        assert_eq!(transactions[1].date, date("2024-01-03"));
        assert_eq!(transactions[1].description, "");
    }

    #[test]
    fn test_transaction_decodes_null_description() {
        let json = r#"{"id": 1, "type": "expense", "amount": 1, "category": "X",
            "date": "2024-01-01", "description": null}"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.description, "");
    }

    #[test]
    fn test_transaction_rejects_bad_date() {
        let json = r#"{"id": 1, "type": "expense", "amount": 1, "category": "X",
            "date": "yesterday"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_iso_date_rejects_trailing_garbage() {
        assert_eq!(iso_date::parse("2024-03-10"), Some(date("2024-03-10")));
        assert_eq!(iso_date::parse("2024-03-10T23:59:59Z"), Some(date("2024-03-10")));
        assert_eq!(iso_date::parse("2024-03-10garbage"), None);
        assert_eq!(iso_date::parse("2024-03-10 12:00"), None);
        assert_eq!(iso_date::parse("2024-03"), None);
    }

    #[test]
    fn test_id_ordering_is_numeric() {
        assert!(TransactionId::from(10) > TransactionId::from(9));
        assert!(TransactionId::from("10") > TransactionId::from("9"));
        assert!(TransactionId::from("b") > TransactionId::from("a"));
    }

    #[test]
    fn test_id_ordering_is_transitive_for_mixed_ids() {
        let two = TransactionId::from("2");
        let ten = TransactionId::from("10");
        let text = TransactionId::from("1a");

        assert!(ten > two);
        assert!(text > ten);
        assert!(text > two);
        assert!(TransactionId::from("007") != TransactionId::from("7"));
        assert_ne!(TransactionId::from("007").cmp(&TransactionId::from("7")), Ordering::Equal);
    }

    #[test]
    fn test_draft_serializes_wire_shape() {
        let draft = form("12.5").validate(date("2024-03-10")).unwrap();
        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "type": "expense",
                "amount": 12.5,
                "category": "Expense",
                "date": "2024-03-10",
                "description": ""
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_amounts() {
        let today = date("2024-03-10");
        assert_eq!(form("0").validate(today), Err(DraftError::AmountNotPositive));
        assert_eq!(form("-5").validate(today), Err(DraftError::AmountNotPositive));
        assert!(matches!(form("abc").validate(today), Err(DraftError::InvalidAmount(_))));
        assert!(matches!(form("").validate(today), Err(DraftError::InvalidAmount(_))));
        assert!(matches!(form("NaN").validate(today), Err(DraftError::AmountNotPositive)));
    }

    #[test]
    fn test_validate_error_message() {
        assert_eq!(DraftError::AmountNotPositive.to_string(), "Enter a valid amount > 0");
    }

    #[test]
    fn test_validate_defaults_category_and_date() {
        let today = date("2024-05-01");
        let mut input = form("20");
        input.kind = TransactionType::Income;
        input.date = String::new();
        input.description = "  bonus ".to_string();

        let draft = input.validate(today).unwrap();

        assert_eq!(draft.category, "Income");
        assert_eq!(draft.date, today);
        assert_eq!(draft.description, "bonus");
    }

    #[test]
    fn test_validate_keeps_explicit_category() {
        let mut input = form("20");
        input.category = "Groceries".to_string();
        let draft = input.validate(date("2024-05-01")).unwrap();
        assert_eq!(draft.category, "Groceries");
        assert_eq!(draft.date, date("2024-03-10"));
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let mut input = form("20");
        input.date = "10/03/2024".to_string();
        assert!(matches!(input.validate(date("2024-05-01")), Err(DraftError::InvalidDate(_))));
    }

    #[test]
    fn test_new_form_defaults_to_today() {
        let input = TransactionForm::new(date("2024-02-29"));
        assert_eq!(input.date, "2024-02-29");
        assert!(input.amount.is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let mut input = form("25");
        input.category = "Food".to_string();
        input.description = "lunch".to_string();
        let before = input.clone();

        let outcome = input.settle(None, date("2024-05-01"));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(input, before);
    }

    #[test]
    fn test_saved_submit_resets_form_to_today() {
        let today = date("2024-05-01");
        let mut input = form("25");
        input.kind = TransactionType::Expense;
        let created = input.validate(today).unwrap().into_transaction(TransactionId::from(3));

        let outcome = input.settle(Some(&created), today);

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(input, TransactionForm::new(today));
        assert_eq!(input.date, "2024-05-01");
        assert_eq!(input.kind, TransactionType::Income);
    }

    #[test]
    fn test_summary_default_is_zero() {
        let summary = Summary::default();
        assert_eq!(summary.daily.income, 0.0);
        assert_eq!(summary.daily.expense, 0.0);
        assert_eq!(summary.daily.balance, 0.0);
        assert_eq!(summary.month.balance, 0.0);
        assert_eq!(summary.lifetime.balance, 0.0);
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("expense".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }
}
