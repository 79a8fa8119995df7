//! Built-in categories, accounts and sample data, plus JSON seed files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::models::{
    Account, AccountId, Category, CategoryId, CategoryKind, NewTransaction, Transaction,
    TransactionId, TransactionKind,
};

/// Builds a category entry.
fn category(id: &str, kind: CategoryKind, title: &str, icon: &str, popular: bool) -> Category {
    Category {
        id: CategoryId::from(id),
        kind,
        title: title.to_owned(),
        icon: Some(icon.to_owned()),
        popular,
    }
}

/// Builds an account entry without an opening balance.
fn account(id: &str, title: &str) -> Account {
    Account {
        id: AccountId::from(id),
        title: title.to_owned(),
        opening_balance_toman: None,
    }
}

/// Calendar date for the sample rows.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Default expense and income categories.
#[inline]
#[must_use]
pub fn default_categories() -> Vec<Category> {
    use CategoryKind::{Expense, Income};
    vec![
        category("c_exp_food", Expense, "خوراک", "🍴", true),
        category("c_exp_transport", Expense, "حمل\u{200c}ونقل", "🚗", true),
        category("c_exp_bills", Expense, "قبوض", "🧾", true),
        category("c_exp_shop", Expense, "خرید", "🛍\u{fe0f}", false),
        category("c_exp_debt", Expense, "قرض", "📄", false),
        category("c_inc_salary", Income, "حقوق", "🎁", true),
        category("c_inc_freelance", Income, "فریلنس", "💻", true),
        category("c_inc_sale", Income, "فروش", "🏷\u{fe0f}", true),
    ]
}

/// Default money accounts.
#[inline]
#[must_use]
pub fn default_accounts() -> Vec<Account> {
    vec![
        account("a_cash", "موجودی نقدی"),
        account("a_gold", "صندوق طلا"),
        account("a_iman", "حساب ایمان"),
        account("a_saving", "پس\u{200c}انداز"),
    ]
}

/// Four sample transactions, newest first.
#[inline]
#[must_use]
pub fn sample_transactions() -> Vec<Transaction> {
    let categorized = |id: &str, kind, amount, date, category: &str| {
        NewTransaction::categorized(kind, amount, date, CategoryId::from(category))
            .into_transaction(TransactionId::from(id))
    };
    vec![
        categorized("t1", TransactionKind::Expense, 45_000, ymd(2026, 2, 19), "c_exp_food"),
        categorized("t2", TransactionKind::Expense, 120_000, ymd(2026, 2, 18), "c_exp_shop"),
        categorized("t3", TransactionKind::Income, 1_890_000, ymd(2026, 2, 17), "c_inc_salary"),
        NewTransaction::transfer(
            250_000,
            ymd(2026, 2, 16),
            AccountId::from("a_cash"),
            AccountId::from("a_iman"),
        )
        .into_transaction(TransactionId::from("t4")),
    ]
}

/// Initial ledger contents.
///
/// Every field defaults to empty, so a seed file may list only the
/// collections it cares about:
///
/// ```json
/// { "accounts": [{ "id": "a_cash", "title": "Cash" }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    /// Categories to register.
    pub categories: Vec<Category>,
    /// Accounts to register.
    pub accounts: Vec<Account>,
    /// Transactions, newest first.
    pub transactions: Vec<Transaction>,
}

impl Seed {
    /// The built-in catalog with the sample transactions.
    #[inline]
    #[must_use]
    pub fn sample() -> Self {
        Self {
            categories: default_categories(),
            accounts: default_accounts(),
            transactions: sample_transactions(),
        }
    }

    /// The built-in catalog without any transactions.
    #[inline]
    #[must_use]
    pub fn catalog_only() -> Self {
        Self {
            categories: default_categories(),
            accounts: default_accounts(),
            transactions: Vec::new(),
        }
    }

    /// Reads a seed from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file cannot be read, or
    /// [`LedgerError::Serialization`] if it is not a valid seed.
    #[inline]
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let seed = serde_json::from_str(&contents)?;
        Ok(seed)
    }

    /// Checks every transaction against the rules the entry form
    /// enforces, so stored amounts stay positive and references complete.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Invalid`] for the first rejected
    /// transaction.
    #[inline]
    pub fn validate(&self) -> Result<()> {
        for tx in &self.transactions {
            tx.to_payload().validate().map_err(|err| {
                tracing::warn!(id = %tx.id, error = %err, "seed transaction rejected");
                LedgerError::Invalid(err)
            })?;
        }
        Ok(())
    }
}
