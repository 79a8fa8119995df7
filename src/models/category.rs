//! Transaction category model.

use serde::{Deserialize, Serialize};

use super::{CategoryId, CategoryKind};

/// An income or expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Whether this is an income or expense category.
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    /// Display name.
    pub title: String,
    /// Emoji icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the category is offered as a quick-pick chip.
    #[serde(default)]
    pub popular: bool,
}

impl Category {
    /// Label for pickers: icon and title, e.g. `🍴 خوراک`.
    #[inline]
    #[must_use]
    pub fn picker_label(&self) -> String {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => format!("{icon} {}", self.title),
            _ => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_without_optional_fields() {
        let json = r#"{"id": "c_exp_shop", "type": "expense", "title": "خرید"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.kind, CategoryKind::Expense);
        assert!(category.icon.is_none());
        assert!(!category.popular);
    }

    #[test]
    fn picker_label_with_and_without_icon() {
        let mut category = Category {
            id: CategoryId::from("c_exp_food"),
            kind: CategoryKind::Expense,
            title: "خوراک".to_owned(),
            icon: Some("🍴".to_owned()),
            popular: true,
        };
        assert_eq!(category.picker_label(), "🍴 خوراک");
        category.icon = None;
        assert_eq!(category.picker_label(), "خوراک");
    }
}
