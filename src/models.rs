//! Data models for the ledger.
//!
//! Strongly-typed transactions, categories and accounts, newtype ID
//! wrappers, and kind enumerations. Field names serialize in camelCase so
//! JSON seed files read like the mobile app's own records.

mod account;
mod category;
mod enums;
mod ids;
mod transaction;

pub use account::Account;
pub use category::Category;
pub use chrono::NaiveDate;
pub use enums::{CategoryKind, TransactionKind};
pub use ids::{AccountId, CategoryId, TransactionId};
pub use transaction::{NewTransaction, Transaction, ValidationError};
