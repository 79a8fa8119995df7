//! In-memory storage backend.
//!
//! Provides [`InMemoryStorage`], a thread-safe in-memory implementation of
//! [`Storage`]. This is the ledger's only backend: state lives as long as
//! the process.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use super::Storage;
use crate::error::{LedgerError, Result};
use crate::models::{Account, Category, Transaction, TransactionId};

/// Thread-safe in-memory storage.
///
/// # Upsert semantics
///
/// Items with a matching ID are replaced where they stand; new items are
/// prepended in the order given, so the most recently added transaction
/// comes first.
///
/// # Example
///
/// ```rust
/// use toman_ledger::storage::{InMemoryStorage, Storage};
///
/// let storage = InMemoryStorage::new();
/// assert!(storage.transactions().unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// All state behind a single mutex for thread-safe interior mutability.
    inner: Mutex<Inner>,
}

/// Inner mutable state.
#[derive(Debug, Default)]
struct Inner {
    /// Stored transactions, newest first.
    transactions: Vec<Transaction>,
    /// Stored categories.
    categories: Vec<Category>,
    /// Stored accounts.
    accounts: Vec<Account>,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Inner) -> R,
    {
        let mut inner = self.inner.lock().map_err(|err| lock_error(&err))?;
        Ok(f(&mut inner))
    }
}

/// Merges `new_items` into `existing` by key.
///
/// Existing keys are replaced in place; unseen keys are prepended,
/// keeping their relative order. A later duplicate within `new_items`
/// wins.
fn upsert_by_key<T, K, F>(existing: &mut Vec<T>, new_items: Vec<T>, key_fn: F)
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut fresh: Vec<T> = Vec::new();
    for item in new_items {
        let key = key_fn(&item);
        let target = match existing.iter().position(|old| key_fn(old) == key) {
            Some(pos) => existing.get_mut(pos),
            None => fresh
                .iter()
                .position(|old| key_fn(old) == key)
                .and_then(|pos| fresh.get_mut(pos)),
        };
        match target {
            Some(slot) => *slot = item,
            None => fresh.push(item),
        }
    }
    if !fresh.is_empty() {
        fresh.append(existing);
        *existing = fresh;
    }
}

/// Overwrites the transaction sharing `item`'s ID, if any.
fn replace_by_id(existing: &mut [Transaction], item: Transaction) -> bool {
    match existing.iter_mut().find(|old| old.id == item.id) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Removes transactions whose ID is in `ids`, returning the count removed.
fn remove_by_id(existing: &mut Vec<Transaction>, ids: &[TransactionId]) -> usize {
    let id_set: HashSet<&TransactionId> = ids.iter().collect();
    let before = existing.len();
    existing.retain(|item| !id_set.contains(&item.id));
    before - existing.len()
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &PoisonError<T>) -> LedgerError {
    LedgerError::Storage(err.to_string().into())
}

impl Storage for InMemoryStorage {
    #[inline]
    fn transactions(&self) -> Result<Vec<Transaction>> {
        self.with_lock(|inner| inner.transactions.clone())
    }

    #[inline]
    fn categories(&self) -> Result<Vec<Category>> {
        self.with_lock(|inner| inner.categories.clone())
    }

    #[inline]
    fn accounts(&self) -> Result<Vec<Account>> {
        self.with_lock(|inner| inner.accounts.clone())
    }

    #[inline]
    fn upsert_transactions(&self, items: Vec<Transaction>) -> Result<()> {
        self.with_lock(|inner| upsert_by_key(&mut inner.transactions, items, |t| t.id.clone()))
    }

    #[inline]
    fn replace_transaction(&self, item: Transaction) -> Result<bool> {
        self.with_lock(|inner| replace_by_id(&mut inner.transactions, item))
    }

    #[inline]
    fn remove_transactions(&self, ids: &[TransactionId]) -> Result<usize> {
        self.with_lock(|inner| remove_by_id(&mut inner.transactions, ids))
    }

    #[inline]
    fn upsert_categories(&self, items: Vec<Category>) -> Result<()> {
        self.with_lock(|inner| upsert_by_key(&mut inner.categories, items, |c| c.id.clone()))
    }

    #[inline]
    fn upsert_accounts(&self, items: Vec<Account>) -> Result<()> {
        self.with_lock(|inner| upsert_by_key(&mut inner.accounts, items, |a| a.id.clone()))
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_lock(|inner| *inner = Inner::default())
    }
}
