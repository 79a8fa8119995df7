//! Money account model.

use serde::{Deserialize, Serialize};

use super::AccountId;

/// A place money is kept: cash, a bank account, a savings fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Display name.
    pub title: String,
    /// Balance when tracking started, in Toman.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_balance_toman: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_account() {
        let json = r#"{"id": "a_cash", "title": "موجودی نقدی", "openingBalanceToman": 500000}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, AccountId::from("a_cash"));
        assert_eq!(account.opening_balance_toman, Some(500_000));
    }

    #[test]
    fn serialize_omits_missing_balance() {
        let account = Account {
            id: AccountId::from("a_gold"),
            title: "صندوق طلا".to_owned(),
            opening_balance_toman: None,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("openingBalanceToman"));
    }
}
