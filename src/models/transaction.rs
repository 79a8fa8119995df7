//! Transaction model and submit-time validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AccountId, CategoryId, TransactionId, TransactionKind};

/// Reasons a transaction payload is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The amount is zero.
    #[error("amount must be a positive number")]
    NonPositiveAmount,
    /// An income or expense has no category.
    #[error("income and expense transactions need a category")]
    MissingCategory,
    /// A transfer lacks its source or destination account.
    #[error("transfers need both a source and a destination account")]
    MissingAccounts,
    /// A transfer moves money from an account to itself.
    #[error("transfer source and destination must differ")]
    SameAccount,
}

/// A recorded income, expense, or transfer.
///
/// Income and expense carry `category_id`; transfers carry
/// `from_account_id` and `to_account_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Transaction kind.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Amount in Toman (always > 0 once stored).
    pub amount_toman: u64,
    /// Booking date (yyyy-MM-dd).
    pub date: NaiveDate,
    /// Category for income and expense.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Source account for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_account_id: Option<AccountId>,
    /// Destination account for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A transaction payload without an identifier, as submitted by the
/// entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// Transaction kind.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Amount in Toman.
    pub amount_toman: u64,
    /// Booking date.
    pub date: NaiveDate,
    /// Category for income and expense.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Source account for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_account_id: Option<AccountId>,
    /// Destination account for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewTransaction {
    /// Creates an income or expense payload.
    #[inline]
    #[must_use]
    pub const fn categorized(
        kind: TransactionKind,
        amount_toman: u64,
        date: NaiveDate,
        category_id: CategoryId,
    ) -> Self {
        Self {
            kind,
            amount_toman,
            date,
            category_id: Some(category_id),
            from_account_id: None,
            to_account_id: None,
            note: None,
        }
    }

    /// Creates a transfer payload.
    #[inline]
    #[must_use]
    pub const fn transfer(
        amount_toman: u64,
        date: NaiveDate,
        from_account_id: AccountId,
        to_account_id: AccountId,
    ) -> Self {
        Self {
            kind: TransactionKind::Transfer,
            amount_toman,
            date,
            category_id: None,
            from_account_id: Some(from_account_id),
            to_account_id: Some(to_account_id),
            note: None,
        }
    }

    /// Attaches a note.
    #[inline]
    #[must_use]
    pub fn with_note<T: Into<String>>(mut self, note: T) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Checks the kind-specific requirements.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: a zero amount, a
    /// missing category, missing transfer accounts, or a transfer from an
    /// account to itself.
    #[inline]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount_toman == 0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        match self.kind {
            TransactionKind::Income | TransactionKind::Expense => {
                if self.category_id.is_none() {
                    return Err(ValidationError::MissingCategory);
                }
            }
            TransactionKind::Transfer => {
                let (Some(from), Some(to)) = (&self.from_account_id, &self.to_account_id) else {
                    return Err(ValidationError::MissingAccounts);
                };
                if from == to {
                    return Err(ValidationError::SameAccount);
                }
            }
        }
        Ok(())
    }

    /// Attaches an identifier.
    #[inline]
    #[must_use]
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount_toman: self.amount_toman,
            date: self.date,
            category_id: self.category_id,
            from_account_id: self.from_account_id,
            to_account_id: self.to_account_id,
            note: self.note,
        }
    }
}

impl Transaction {
    /// Returns the payload of this transaction without its identifier.
    #[inline]
    #[must_use]
    pub fn to_payload(&self) -> NewTransaction {
        NewTransaction {
            kind: self.kind,
            amount_toman: self.amount_toman,
            date: self.date,
            category_id: self.category_id.clone(),
            from_account_id: self.from_account_id.clone(),
            to_account_id: self.to_account_id.clone(),
            note: self.note.clone(),
        }
    }

    /// Returns `true` if either side of the transaction is `account`.
    #[inline]
    #[must_use]
    pub fn involves_account(&self, account: &AccountId) -> bool {
        self.from_account_id.as_ref() == Some(account) || self.to_account_id.as_ref() == Some(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    #[test]
    fn deserialize_expense() {
        let json = r#"{
            "id": "t1",
            "type": "expense",
            "amountToman": 45000,
            "date": "2026-02-19",
            "categoryId": "c_exp_food"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, TransactionId::from("t1"));
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount_toman, 45_000);
        assert_eq!(tx.date, date());
        assert_eq!(tx.category_id, Some(CategoryId::from("c_exp_food")));
        assert!(tx.from_account_id.is_none());
        assert!(tx.note.is_none());
    }

    #[test]
    fn deserialize_transfer() {
        let json = r#"{
            "id": "t4",
            "type": "transfer",
            "amountToman": 250000,
            "date": "2026-02-16",
            "fromAccountId": "a_cash",
            "toAccountId": "a_iman",
            "note": "rent share"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Transfer);
        assert!(tx.involves_account(&AccountId::from("a_iman")));
        assert!(!tx.involves_account(&AccountId::from("a_gold")));
        assert_eq!(tx.note.as_deref(), Some("rent share"));
    }

    #[test]
    fn serialize_skips_absent_references() {
        let tx = NewTransaction::categorized(
            TransactionKind::Income,
            1_890_000,
            date(),
            CategoryId::from("c_inc_salary"),
        )
        .into_transaction(TransactionId::from("t3"));
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["amountToman"], 1_890_000);
        assert_eq!(json["date"], "2026-02-19");
        assert!(json.get("fromAccountId").is_none());
        assert!(json.get("note").is_none());
    }

    #[test]
    fn validate_accepts_complete_payloads() {
        let expense = NewTransaction::categorized(
            TransactionKind::Expense,
            45_000,
            date(),
            CategoryId::from("c_exp_food"),
        );
        assert_eq!(expense.validate(), Ok(()));

        let transfer = NewTransaction::transfer(
            250_000,
            date(),
            AccountId::from("a_cash"),
            AccountId::from("a_iman"),
        );
        assert_eq!(transfer.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_amount() {
        let tx = NewTransaction::categorized(
            TransactionKind::Expense,
            0,
            date(),
            CategoryId::from("c_exp_food"),
        );
        assert_eq!(tx.validate(), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn validate_rejects_missing_category() {
        let mut tx = NewTransaction::categorized(
            TransactionKind::Income,
            10,
            date(),
            CategoryId::from("c"),
        );
        tx.category_id = None;
        assert_eq!(tx.validate(), Err(ValidationError::MissingCategory));
    }

    #[test]
    fn validate_rejects_bad_transfers() {
        let mut tx = NewTransaction::transfer(
            10,
            date(),
            AccountId::from("a_cash"),
            AccountId::from("a_cash"),
        );
        assert_eq!(tx.validate(), Err(ValidationError::SameAccount));
        tx.to_account_id = None;
        assert_eq!(tx.validate(), Err(ValidationError::MissingAccounts));
    }

    #[test]
    fn payload_round_trip_keeps_fields() {
        let payload = NewTransaction::transfer(
            5,
            date(),
            AccountId::from("a"),
            AccountId::from("b"),
        )
        .with_note("x");
        let tx = payload.clone().into_transaction(TransactionId::from("id"));
        assert_eq!(tx.to_payload(), payload);
    }
}
