//! Report payloads.

use serde::{Deserialize, Serialize};

/// Input data for a report.
///
/// One shape covers every report kind; each generator requires only
/// the fields its report reads and reports the first one missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Free-text period label shown on sales reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<Vec<Sale>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<InventoryItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses: Option<f64>,
}

/// A single sale line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub product: String,
    pub amount: f64,
}

/// A stocked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    /// Signed so stock adjustments can be negative.
    pub quantity: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl InventoryItem {
    /// Label used when an item has no category.
    pub const DEFAULT_CATEGORY: &'static str = "General";

    /// The item's category, or [`Self::DEFAULT_CATEGORY`].
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(Self::DEFAULT_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_defaults_to_general() {
        let item: InventoryItem =
            serde_json::from_str(r#"{"name": "Cable", "quantity": 3}"#).unwrap();
        assert_eq!(item.category(), "General");
    }

    #[test]
    fn negative_quantity_is_accepted() {
        let item: InventoryItem =
            serde_json::from_str(r#"{"name": "Returns", "quantity": -3}"#).unwrap();
        assert_eq!(item.quantity, -3);
    }

    #[test]
    fn payload_fields_default_to_absent() {
        let data: ReportData = serde_json::from_str(r#"{"income": 10.0}"#).unwrap();
        assert_eq!(data.income, Some(10.0));
        assert!(data.expenses.is_none());
        assert!(data.sales.is_none());
        assert!(data.items.is_none());
    }
}
