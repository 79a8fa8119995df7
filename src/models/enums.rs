//! Enumeration types for transaction and category kinds.

use serde::{Deserialize, Serialize};

/// Kind of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in, booked against an income category.
    Income,
    /// Money going out, booked against an expense category.
    Expense,
    /// Money moved between two of the user's accounts.
    Transfer,
}

impl TransactionKind {
    /// All kinds in display order.
    pub const ALL: [Self; 3] = [Self::Income, Self::Expense, Self::Transfer];

    /// Persian label used on kind chips and fallback row titles.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "درآمد",
            Self::Expense => "هزینه",
            Self::Transfer => "جابجایی",
        }
    }

    /// Category kind used by this transaction kind, if any.
    #[inline]
    #[must_use]
    pub const fn category_kind(self) -> Option<CategoryKind> {
        match self {
            Self::Income => Some(CategoryKind::Income),
            Self::Expense => Some(CategoryKind::Expense),
            Self::Transfer => None,
        }
    }
}

/// Kind of a category; transfers have no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Income category (salary, freelance, ...).
    Income,
    /// Expense category (food, transport, ...).
    Expense,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_kind_serde_roundtrip() {
        let variants = [
            (TransactionKind::Income, r#""income""#),
            (TransactionKind::Expense, r#""expense""#),
            (TransactionKind::Transfer, r#""transfer""#),
        ];
        for (variant, expected_json) in variants {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, expected_json);
            let deserialized: TransactionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, variant);
        }
    }

    #[test]
    fn category_kind_serde() {
        let kind: CategoryKind = serde_json::from_str(r#""expense""#).unwrap();
        assert_eq!(kind, CategoryKind::Expense);
        assert!(serde_json::from_str::<CategoryKind>(r#""transfer""#).is_err());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(TransactionKind::Income.label(), "درآمد");
        assert_eq!(TransactionKind::Expense.label(), "هزینه");
        assert_eq!(TransactionKind::Transfer.label(), "جابجایی");
    }

    #[test]
    fn transfer_has_no_category_kind() {
        assert_eq!(TransactionKind::Transfer.category_kind(), None);
        assert_eq!(
            TransactionKind::Income.category_kind(),
            Some(CategoryKind::Income)
        );
    }
}
