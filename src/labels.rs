//! Display titles for transaction rows.

use crate::models::{Account, AccountId, Category, CategoryId, Transaction, TransactionKind};

/// Row title for an income or expense whose category is unknown.
pub const UNCATEGORIZED: &str = "بدون دسته\u{200c}بندی";

/// Placeholder for an unknown category or account in history rows.
pub const MISSING: &str = "\u{2014}";

/// Looks up a category title by ID.
#[inline]
#[must_use]
pub fn category_title<'a>(categories: &'a [Category], id: &CategoryId) -> Option<&'a str> {
    categories
        .iter()
        .find(|category| category.id == *id)
        .map(|category| category.title.as_str())
}

/// Looks up an account title by ID.
#[inline]
#[must_use]
pub fn account_title<'a>(accounts: &'a [Account], id: &AccountId) -> Option<&'a str> {
    accounts
        .iter()
        .find(|account| account.id == *id)
        .map(|account| account.title.as_str())
}

/// Title of a dashboard row.
///
/// Transfers read `جابجایی: <from> → <to>`, or a bare `جابجایی` if either
/// account is unknown. Income and expense rows show the category title,
/// falling back to the kind label without a category and to
/// [`UNCATEGORIZED`] for an unknown one.
#[inline]
#[must_use]
pub fn row_label(tx: &Transaction, categories: &[Category], accounts: &[Account]) -> String {
    if tx.kind == TransactionKind::Transfer {
        let source = tx
            .from_account_id
            .as_ref()
            .and_then(|id| account_title(accounts, id));
        let destination = tx
            .to_account_id
            .as_ref()
            .and_then(|id| account_title(accounts, id));
        return match (source, destination) {
            (Some(from), Some(to)) => format!("{}: {from} \u{2192} {to}", tx.kind.label()),
            _ => tx.kind.label().to_owned(),
        };
    }
    let Some(category_id) = tx.category_id.as_ref() else {
        return tx.kind.label().to_owned();
    };
    category_title(categories, category_id)
        .unwrap_or(UNCATEGORIZED)
        .to_owned()
}

/// Title of a history row: `<from> → <to>` for transfers, the category
/// title otherwise, with [`MISSING`] standing in for unknown references.
#[inline]
#[must_use]
pub fn history_title(tx: &Transaction, categories: &[Category], accounts: &[Account]) -> String {
    let account = |maybe_id: Option<&AccountId>| {
        maybe_id
            .and_then(|id| account_title(accounts, id))
            .unwrap_or(MISSING)
    };
    if tx.kind == TransactionKind::Transfer {
        return format!(
            "{} \u{2192} {}",
            account(tx.from_account_id.as_ref()),
            account(tx.to_account_id.as_ref())
        );
    }
    tx.category_id
        .as_ref()
        .and_then(|id| category_title(categories, id))
        .unwrap_or(MISSING)
        .to_owned()
}
