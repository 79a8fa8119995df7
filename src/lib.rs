//! Toman amount formatting and an in-memory personal finance ledger.
//!
//! The crate has two layers:
//!
//! - Pure helpers for Iranian money input: grouping raw text as it is
//!   typed ([`amount`]), spelling amounts in Persian words ([`words`]),
//!   and Jalali date labels ([`calendar`]).
//! - A small ledger of incomes, expenses and transfers ([`ledger`]) over a
//!   pluggable [`storage`] backend, with history filtering ([`filter`]),
//!   period dashboards ([`dashboard`]) and entry-form state ([`draft`]).
//!
//! ```rust
//! use toman_ledger::{amount, words};
//!
//! assert_eq!(amount::normalize_input("1250000"), "1,250,000");
//! assert_eq!(words::to_words(45_000), "چهل و پنج هزار تومان");
//! ```

pub mod amount;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod draft;
pub mod error;
pub mod filter;
pub mod labels;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod words;
