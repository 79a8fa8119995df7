//! Pluggable storage backends for ledger state.
//!
//! The ledger keeps everything in transient memory; the [`Storage`] trait
//! is the seam a UI shell or test double plugs into.

mod memory;

pub use memory::InMemoryStorage;

use crate::error::Result;
use crate::models::{Account, Category, Transaction, TransactionId};

/// Storage backend for transactions, categories and accounts.
///
/// All methods take `&self`; implementations should use interior
/// mutability (e.g. `Mutex`) for thread-safe mutation.
///
/// Transactions are kept newest-first: upserting an unknown id puts it at
/// the front, upserting a known id replaces it in place.
pub trait Storage: core::fmt::Debug + Send + Sync {
    /// Returns all stored transactions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    fn transactions(&self) -> Result<Vec<Transaction>>;

    /// Returns all stored categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    fn categories(&self) -> Result<Vec<Category>>;

    /// Returns all stored accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to read.
    fn accounts(&self) -> Result<Vec<Account>>;

    /// Inserts or updates transactions (matched by ID).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn upsert_transactions(&self, items: Vec<Transaction>) -> Result<()>;

    /// Replaces the stored transaction with the same ID, keeping its
    /// position. Returns `false` and stores nothing if the ID is unknown.
    ///
    /// The lookup and the write must happen as one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn replace_transaction(&self, item: Transaction) -> Result<bool>;

    /// Removes transactions by their IDs and returns how many were
    /// removed; unknown IDs are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn remove_transactions(&self, ids: &[TransactionId]) -> Result<usize>;

    /// Inserts or updates categories (matched by ID).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn upsert_categories(&self, items: Vec<Category>) -> Result<()>;

    /// Inserts or updates accounts (matched by ID).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn upsert_accounts(&self, items: Vec<Account>) -> Result<()>;

    /// Removes all stored data.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails to write.
    fn clear(&self) -> Result<()>;
}
