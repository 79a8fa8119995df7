//! Newtype wrappers for entity identifiers.
//!
//! These prevent accidentally passing a category id where an account id
//! is expected.

use serde::{Deserialize, Serialize};

/// Defines a string-backed identifier that serializes as a bare string.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// The identifier as stored in seed files.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_string_id! {
    /// Unique identifier for a transaction.
    TransactionId
}

define_string_id! {
    /// Unique identifier for an income or expense category.
    CategoryId
}

define_string_id! {
    /// Unique identifier for a money account (cash, bank, savings fund).
    AccountId
}

impl TransactionId {
    /// Generates a fresh random identifier (UUID v4).
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}
