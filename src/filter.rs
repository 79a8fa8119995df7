//! Transaction history filtering.

use chrono::NaiveDate;

use crate::models::{AccountId, CategoryId, Transaction, TransactionKind};

/// Filter criteria for querying stored transactions.
///
/// All fields are optional. When multiple fields are set, they are
/// combined with AND logic. An empty filter matches all transactions,
/// which is the history screen's "all" chip.
///
/// # Example
///
/// ```rust
/// use toman_ledger::filter::TransactionFilter;
/// use toman_ledger::models::{AccountId, NaiveDate, TransactionKind};
///
/// let filter = TransactionFilter::new()
///     .kind(TransactionKind::Transfer)
///     .date_range(
///         NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
///     )
///     .account(AccountId::from("a_cash"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Transaction kind.
    pub kind: Option<TransactionKind>,
    /// Start date (inclusive).
    pub date_from: Option<NaiveDate>,
    /// End date (inclusive).
    pub date_to: Option<NaiveDate>,
    /// Category ID.
    pub category: Option<CategoryId>,
    /// Account ID (matches either side of a transfer).
    pub account: Option<AccountId>,
    /// Minimum amount (inclusive).
    pub min_amount: Option<u64>,
    /// Maximum amount (inclusive).
    pub max_amount: Option<u64>,
    /// Note substring (case-insensitive).
    pub note: Option<String>,
}

impl TransactionFilter {
    /// Creates an empty filter that matches all transactions.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one transaction kind.
    #[inline]
    #[must_use]
    pub const fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts to transactions within the given date range (inclusive).
    #[inline]
    #[must_use]
    pub const fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Restricts to transactions in the given category.
    #[inline]
    #[must_use]
    pub fn category(mut self, id: CategoryId) -> Self {
        self.category = Some(id);
        self
    }

    /// Restricts to transfers touching the given account.
    #[inline]
    #[must_use]
    pub fn account(mut self, id: AccountId) -> Self {
        self.account = Some(id);
        self
    }

    /// Restricts to transactions with amounts in `[min, max]`.
    #[inline]
    #[must_use]
    pub const fn amount_range(mut self, min: u64, max: u64) -> Self {
        self.min_amount = Some(min);
        self.max_amount = Some(max);
        self
    }

    /// Restricts to transactions whose note contains the given substring
    /// (case-insensitive).
    #[inline]
    #[must_use]
    pub fn note<T: Into<String>>(mut self, text: T) -> Self {
        self.note = Some(text.into());
        self
    }

    /// Returns `true` if the transaction satisfies all set criteria.
    #[inline]
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.matches_kind(tx)
            && self.matches_date(tx)
            && self.matches_category(tx)
            && self.matches_account(tx)
            && self.matches_amount(tx)
            && self.matches_note(tx)
    }

    /// Checks kind criteria.
    fn matches_kind(&self, tx: &Transaction) -> bool {
        self.kind.is_none_or(|kind| tx.kind == kind)
    }

    /// Checks date range criteria.
    fn matches_date(&self, tx: &Transaction) -> bool {
        self.date_from.is_none_or(|from| tx.date >= from)
            && self.date_to.is_none_or(|to| tx.date <= to)
    }

    /// Checks category criteria.
    fn matches_category(&self, tx: &Transaction) -> bool {
        self.category
            .as_ref()
            .is_none_or(|id| tx.category_id.as_ref() == Some(id))
    }

    /// Checks account criteria.
    fn matches_account(&self, tx: &Transaction) -> bool {
        self.account
            .as_ref()
            .is_none_or(|id| tx.involves_account(id))
    }

    /// Checks amount criteria.
    fn matches_amount(&self, tx: &Transaction) -> bool {
        self.min_amount.is_none_or(|min| tx.amount_toman >= min)
            && self.max_amount.is_none_or(|max| tx.amount_toman <= max)
    }

    /// Checks note criteria.
    fn matches_note(&self, tx: &Transaction) -> bool {
        self.note.as_ref().is_none_or(|needle| {
            let needle_lower = needle.to_lowercase();
            tx.note
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(&needle_lower))
        })
    }
}
