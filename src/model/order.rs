//! Orders, customers, and the messages built for them.

use serde::{Deserialize, Serialize};

/// A customer and the contact points they can be reached on.
///
/// Only `name` is always present. Each sender reads the one contact
/// field its channel needs and fails if it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

/// A confirmed order awaiting customer notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer: Customer,
    pub total: f64,
}

/// What a message strategy produces for a sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Present only for channels that carry one (email).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    pub body: String,
}

impl Message {
    /// A body-only message.
    pub fn short(body: String) -> Self {
        Self {
            subject: None,
            body,
        }
    }
}

/// Render an order total the way customers see it in messages.
///
/// Shortest round-trip decimal, always with a fractional part:
/// `150.5`, `75.0`.
pub fn display_total(total: f64) -> String {
    let text = total.to_string();
    if text.contains('.') || !total.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_keeps_significant_fraction() {
        assert_eq!(display_total(150.50), "150.5");
        assert_eq!(display_total(19.99), "19.99");
    }

    #[test]
    fn whole_total_gets_trailing_zero() {
        assert_eq!(display_total(75.0), "75.0");
        assert_eq!(display_total(0.0), "0.0");
    }

    #[test]
    fn extreme_totals_render_without_exponent() {
        assert_eq!(display_total(1e16), "10000000000000000.0");
        assert_eq!(display_total(1e-7), "0.0000001");
    }

    #[test]
    fn customer_contact_fields_are_optional() {
        let customer: Customer = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(customer.name, "Ana");
        assert!(customer.email.is_none());
        assert!(customer.phone.is_none());
        assert!(customer.device_id.is_none());
    }

    #[test]
    fn order_parses_from_json() {
        let order: Order = serde_json::from_str(
            r#"{
                "order_id": "ORD-001",
                "customer": {"name": "Ana", "email": "a@x.com", "phone": "+1", "device_id": "D1"},
                "total": 150.50
            }"#,
        )
        .unwrap();
        assert_eq!(order.order_id, "ORD-001");
        assert_eq!(order.customer.device_id.as_deref(), Some("D1"));
        assert!((order.total - 150.5).abs() < f64::EPSILON);
    }
}
