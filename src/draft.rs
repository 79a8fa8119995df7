//! Add/edit form state for a single transaction.
//!
//! [`TransactionDraft`] holds exactly what the entry sheet holds: the
//! amount as grouped text, the selected references, and a free-form note.
//! It knows whether it can be submitted and which hint to show when it
//! cannot.

use chrono::NaiveDate;

use crate::amount::{normalize_input, parse_amount};
use crate::calendar::add_days;
use crate::models::{
    AccountId, Category, CategoryId, CategoryKind, NewTransaction, Transaction, TransactionKind,
    ValidationError,
};
use crate::words::to_words;

/// Hint shown when the amount is missing or zero.
pub const INVALID_AMOUNT_HINT: &str = "مبلغ باید عدد مثبت باشد.";

/// Hint shown when the amount is fine but a required field is empty.
pub const INCOMPLETE_HINT: &str = "فیلدهای لازم را کامل کن.";

/// Number of quick-pick category chips.
const POPULAR_LIMIT: usize = 3;

/// Mutable state of the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(
    clippy::partial_pub_fields,
    reason = "amount text is only set through `set_amount_input`, which keeps it grouped"
)]
pub struct TransactionDraft {
    /// Selected kind.
    pub kind: TransactionKind,
    /// Amount as typed, kept in grouped form (`1,250,000`).
    amount_input: String,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-form note, trimmed on submit.
    pub note: String,
    /// Selected category for income and expense.
    pub category_id: Option<CategoryId>,
    /// Selected source account for transfers.
    pub from_account_id: Option<AccountId>,
    /// Selected destination account for transfers.
    pub to_account_id: Option<AccountId>,
}

impl TransactionDraft {
    /// An empty expense draft dated `today`.
    #[inline]
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount_input: String::new(),
            date: today,
            note: String::new(),
            category_id: None,
            from_account_id: None,
            to_account_id: None,
        }
    }

    /// A draft pre-filled from an existing transaction for editing.
    #[inline]
    #[must_use]
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            kind: tx.kind,
            amount_input: normalize_input(&tx.amount_toman.to_string()),
            date: tx.date,
            note: tx.note.clone().unwrap_or_default(),
            category_id: tx.category_id.clone(),
            from_account_id: tx.from_account_id.clone(),
            to_account_id: tx.to_account_id.clone(),
        }
    }

    /// The amount field as displayed.
    #[inline]
    #[must_use]
    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Replaces the amount field, regrouping whatever digits it contains.
    #[inline]
    pub fn set_amount_input(&mut self, raw: &str) {
        self.amount_input = normalize_input(raw);
    }

    /// Numeric amount in Toman.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> u64 {
        parse_amount(&self.amount_input)
    }

    /// Returns `true` when the amount is positive.
    #[inline]
    #[must_use]
    pub fn has_valid_amount(&self) -> bool {
        self.amount() > 0
    }

    /// The amount spelled out, or `None` while it is invalid.
    #[inline]
    #[must_use]
    pub fn amount_words(&self) -> Option<String> {
        self.has_valid_amount().then(|| to_words(self.amount()))
    }

    /// Moves the date by `delta` days.
    #[inline]
    pub fn shift_date(&mut self, delta: i64) {
        self.date = add_days(self.date, delta);
    }

    /// Categories offered for the current kind. Transfers fall back to the
    /// expense list.
    #[inline]
    #[must_use]
    pub fn categories_for_kind<'a>(&self, categories: &'a [Category]) -> Vec<&'a Category> {
        let wanted = self.kind.category_kind().unwrap_or(CategoryKind::Expense);
        categories.iter().filter(|c| c.kind == wanted).collect()
    }

    /// The first three popular categories for the current kind.
    #[inline]
    #[must_use]
    pub fn popular_categories<'a>(&self, categories: &'a [Category]) -> Vec<&'a Category> {
        self.categories_for_kind(categories)
            .into_iter()
            .filter(|c| c.popular)
            .take(POPULAR_LIMIT)
            .collect()
    }

    /// Builds the payload without checking it.
    fn payload(&self) -> NewTransaction {
        let trimmed = self.note.trim();
        let note = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        let (category_id, from_account_id, to_account_id) = match self.kind {
            TransactionKind::Transfer => {
                (None, self.from_account_id.clone(), self.to_account_id.clone())
            }
            TransactionKind::Income | TransactionKind::Expense => {
                (self.category_id.clone(), None, None)
            }
        };
        NewTransaction {
            kind: self.kind,
            amount_toman: self.amount(),
            date: self.date,
            category_id,
            from_account_id,
            to_account_id,
            note,
        }
    }

    /// Returns `true` when the draft would pass validation.
    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.payload().validate().is_ok()
    }

    /// Hint explaining why the draft cannot be submitted yet.
    #[inline]
    #[must_use]
    pub fn validation_hint(&self) -> Option<&'static str> {
        match self.payload().validate() {
            Ok(()) => None,
            Err(ValidationError::NonPositiveAmount) => Some(INVALID_AMOUNT_HINT),
            Err(
                ValidationError::MissingCategory
                | ValidationError::MissingAccounts
                | ValidationError::SameAccount,
            ) => Some(INCOMPLETE_HINT),
        }
    }

    /// Produces the payload to store, carrying only the references its
    /// kind uses.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] that blocks submission.
    #[inline]
    pub fn submit(&self) -> Result<NewTransaction, ValidationError> {
        let payload = self.payload();
        payload.validate()?;
        Ok(payload)
    }
}
