//! Runtime configuration read from the environment.
//!
//! | Variable             | Meaning                                     |
//! |----------------------|---------------------------------------------|
//! | `TOMAN_TODAY`        | Reference date (`YYYY-MM-DD`) for "today"   |
//! | `TOMAN_SEED`         | Path to a JSON seed file                    |
//! | `TOMAN_RECENT_LIMIT` | Rows in the dashboard's recent list         |
//!
//! Empty values count as unset.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::calendar::{self, parse_iso_date};
use crate::dashboard::RECENT_LIMIT;
use crate::error::{LedgerError, Result};

/// Environment variable overriding today's date.
pub const TODAY_ENV: &str = "TOMAN_TODAY";

/// Environment variable naming a seed file.
pub const SEED_ENV: &str = "TOMAN_SEED";

/// Environment variable overriding the recent-list length.
pub const RECENT_LIMIT_ENV: &str = "TOMAN_RECENT_LIMIT";

/// Ledger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Fixed reference date; `None` means the local clock.
    pub today: Option<NaiveDate>,
    /// Seed file to load instead of the built-in sample data.
    pub seed: Option<PathBuf>,
    /// Number of rows in the dashboard's recent list.
    pub recent_limit: usize,
}

impl Default for LedgerConfig {
    #[inline]
    fn default() -> Self {
        Self {
            today: None,
            seed: None,
            recent_limit: RECENT_LIMIT,
        }
    }
}

impl LedgerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidDate`] for a malformed `TOMAN_TODAY`
    /// and [`LedgerError::Config`] for a non-numeric
    /// `TOMAN_RECENT_LIMIT`.
    #[inline]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`LedgerConfig::from_env`].
    #[inline]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let today = value(TODAY_ENV)
            .map(|raw| parse_iso_date(&raw))
            .transpose()?;
        let seed = value(SEED_ENV).map(PathBuf::from);
        let recent_limit = match value(RECENT_LIMIT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|err| LedgerError::Config {
                    key: RECENT_LIMIT_ENV,
                    message: err.to_string(),
                })?,
            None => RECENT_LIMIT,
        };
        tracing::debug!(?today, ?seed, recent_limit, "configuration loaded");
        Ok(Self {
            today,
            seed,
            recent_limit,
        })
    }

    /// The configured date, or the local date when unset.
    #[inline]
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(calendar::today)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = LedgerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.recent_limit, 8);
    }

    #[test]
    fn reads_all_keys() {
        let config = LedgerConfig::from_lookup(lookup(&[
            (TODAY_ENV, "2026-02-19"),
            (SEED_ENV, "/tmp/seed.json"),
            (RECENT_LIMIT_ENV, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 2, 19));
        assert_eq!(config.seed, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
    }

    #[test]
    fn blank_values_are_unset() {
        let config =
            LedgerConfig::from_lookup(lookup(&[(TODAY_ENV, "  "), (SEED_ENV, "")])).unwrap();
        assert_eq!(config.today, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn invalid_date_is_rejected() {
        let err = LedgerConfig::from_lookup(lookup(&[(TODAY_ENV, "19/02/2026")])).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDate { .. }));
    }

    #[test]
    fn invalid_limit_is_rejected() {
        let err = LedgerConfig::from_lookup(lookup(&[(RECENT_LIMIT_ENV, "many")])).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Config {
                key: RECENT_LIMIT_ENV,
                ..
            }
        ));
    }
}
