//! High-level ledger combining validation and storage.
//!
//! [`Ledger`] is the entry point for recording and reading transactions.
//! It validates payloads, assigns identifiers, keeps the list
//! newest-first, and builds the views the dashboard and history screens
//! need.
//!
//! # Example
//!
//! ```rust
//! use toman_ledger::catalog::Seed;
//! use toman_ledger::dashboard::Period;
//! use toman_ledger::ledger::Ledger;
//! use toman_ledger::models::{CategoryId, NaiveDate, NewTransaction, TransactionKind};
//! use toman_ledger::storage::InMemoryStorage;
//!
//! # fn main() -> toman_ledger::error::Result<()> {
//! let ledger = Ledger::builder().storage(InMemoryStorage::new()).build()?;
//! ledger.seed(Seed::sample())?;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
//! let tx = ledger.add_transaction(NewTransaction::categorized(
//!     TransactionKind::Expense,
//!     80_000,
//!     today,
//!     CategoryId::from("c_exp_transport"),
//! ))?;
//! assert_eq!(ledger.recent(1)?[0].id, tx.id);
//!
//! let summary = ledger.dashboard(Period::Month, today)?;
//! assert_eq!(summary.expense.value, 245_000);
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;

use crate::catalog::Seed;
use crate::dashboard::{self, DashboardSummary, Period, RECENT_LIMIT};
use crate::error::{LedgerError, Result};
use crate::filter::TransactionFilter;
use crate::labels;
use crate::models::{
    Account, AccountId, Category, CategoryId, NewTransaction, Transaction, TransactionId,
};
use crate::storage::Storage;

/// Builder for constructing a [`Ledger`].
#[derive(Debug)]
pub struct LedgerBuilder<S: Storage> {
    /// Storage backend.
    storage: Option<S>,
    /// Rows in the dashboard's recent list.
    recent_limit: usize,
}

impl<S: Storage> LedgerBuilder<S> {
    /// Sets the storage backend.
    #[inline]
    #[must_use]
    pub fn storage(mut self, storage: S) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Overrides how many transactions the dashboard lists.
    #[inline]
    #[must_use]
    pub const fn recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Builds the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Config`] if no storage was provided.
    #[inline]
    pub fn build(self) -> Result<Ledger<S>> {
        let storage = self.storage.ok_or_else(|| LedgerError::Config {
            key: "storage",
            message: "storage backend is required".to_owned(),
        })?;
        Ok(Ledger {
            storage,
            recent_limit: self.recent_limit,
        })
    }
}

/// Personal finance ledger over a [`Storage`] backend.
#[derive(Debug)]
pub struct Ledger<S: Storage> {
    /// Storage backend.
    storage: S,
    /// Rows in the dashboard's recent list.
    recent_limit: usize,
}

impl<S: Storage> Ledger<S> {
    /// Creates a new builder for configuring the ledger.
    #[inline]
    #[must_use]
    pub const fn builder() -> LedgerBuilder<S> {
        LedgerBuilder {
            storage: None,
            recent_limit: RECENT_LIMIT,
        }
    }

    /// Returns a reference to the storage backend.
    #[inline]
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Rows shown in the dashboard's recent list.
    #[inline]
    #[must_use]
    pub const fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    /// Loads categories, accounts and transactions from a seed.
    ///
    /// Nothing is stored if any seed transaction fails validation.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Invalid`] for the first rejected
    /// transaction, or a storage error if writing fails.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn seed(&self, seed: Seed) -> Result<()> {
        tracing::debug!(
            categories = seed.categories.len(),
            accounts = seed.accounts.len(),
            transactions = seed.transactions.len(),
            "seeding ledger"
        );
        seed.validate()?;
        if !seed.categories.is_empty() {
            self.storage.upsert_categories(seed.categories)?;
        }
        if !seed.accounts.is_empty() {
            self.storage.upsert_accounts(seed.accounts)?;
        }
        if !seed.transactions.is_empty() {
            self.storage.upsert_transactions(seed.transactions)?;
        }
        Ok(())
    }

    /// Returns all transactions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        self.storage.transactions()
    }

    /// Returns all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn categories(&self) -> Result<Vec<Category>> {
        self.storage.categories()
    }

    /// Returns all accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn accounts(&self) -> Result<Vec<Account>> {
        self.storage.accounts()
    }

    /// Looks up a transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn find_transaction(&self, id: &TransactionId) -> Result<Option<Transaction>> {
        let txs = self.storage.transactions()?;
        Ok(txs.into_iter().find(|tx| tx.id == *id))
    }

    /// Validates a payload and records it as the newest transaction.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Invalid`] if the payload is rejected, or a
    /// storage error if writing fails.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn add_transaction(&self, payload: NewTransaction) -> Result<Transaction> {
        check(&payload)?;
        let tx = payload.into_transaction(TransactionId::generate());
        self.storage.upsert_transactions(vec![tx.clone()])?;
        tracing::debug!(id = %tx.id, kind = ?tx.kind, amount = tx.amount_toman, "transaction added");
        Ok(tx)
    }

    /// Replaces an existing transaction in place, keeping its ID and
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Invalid`] if the payload is rejected,
    /// [`LedgerError::NotFound`] if no transaction has this ID, or a
    /// storage error.
    #[inline]
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub fn update_transaction(
        &self,
        id: &TransactionId,
        payload: NewTransaction,
    ) -> Result<Transaction> {
        check(&payload)?;
        let tx = payload.into_transaction(id.clone());
        if !self.storage.replace_transaction(tx.clone())? {
            return Err(not_found(id));
        }
        tracing::debug!("transaction updated");
        Ok(tx)
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotFound`] if no transaction has this ID,
    /// or a storage error.
    #[inline]
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub fn delete_transaction(&self, id: &TransactionId) -> Result<()> {
        if self.storage.remove_transactions(core::slice::from_ref(id))? == 0 {
            return Err(not_found(id));
        }
        tracing::debug!("transaction deleted");
        Ok(())
    }

    /// Returns transactions matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn filter_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let txs = self.storage.transactions()?;
        Ok(txs.into_iter().filter(|tx| filter.matches(tx)).collect())
    }

    /// Returns the first `limit` transactions in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn recent(&self, limit: usize) -> Result<Vec<Transaction>> {
        let mut txs = self.storage.transactions()?;
        txs.truncate(limit);
        Ok(txs)
    }

    /// Builds the dashboard for `period` around `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn dashboard(&self, period: Period, today: NaiveDate) -> Result<DashboardSummary> {
        let txs = self.storage.transactions()?;
        Ok(dashboard::summarize(&txs, period, today, self.recent_limit))
    }

    /// Title of a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn category_title(&self, id: &CategoryId) -> Result<Option<String>> {
        let categories = self.storage.categories()?;
        Ok(labels::category_title(&categories, id).map(str::to_owned))
    }

    /// Title of an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn account_title(&self, id: &AccountId) -> Result<Option<String>> {
        let accounts = self.storage.accounts()?;
        Ok(labels::account_title(&accounts, id).map(str::to_owned))
    }

    /// Dashboard row title for a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn row_label(&self, tx: &Transaction) -> Result<String> {
        let categories = self.storage.categories()?;
        let accounts = self.storage.accounts()?;
        Ok(labels::row_label(tx, &categories, &accounts))
    }

    /// History row title for a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    #[inline]
    pub fn history_title(&self, tx: &Transaction) -> Result<String> {
        let categories = self.storage.categories()?;
        let accounts = self.storage.accounts()?;
        Ok(labels::history_title(tx, &categories, &accounts))
    }
}

/// Builds the error for an unknown transaction ID.
fn not_found(id: &TransactionId) -> LedgerError {
    tracing::warn!(id = %id, "unknown transaction");
    LedgerError::NotFound { id: id.to_string() }
}

/// Validates a payload, logging rejections.
fn check(payload: &NewTransaction) -> Result<()> {
    payload.validate().map_err(|err| {
        tracing::warn!(kind = ?payload.kind, error = %err, "transaction rejected");
        LedgerError::Invalid(err)
    })
}
