//! Message strategies: how an order confirmation reads on each channel.

use crate::model::{Message, display_total};

/// Builds the message for an order.
pub trait MessageStrategy {
    fn create_message(&self, order_id: &str, customer_name: &str, total: f64) -> Message;
}

/// Full confirmation with a subject line.
#[derive(Debug, Clone, Copy)]
pub struct EmailMessage;

impl MessageStrategy for EmailMessage {
    fn create_message(&self, order_id: &str, customer_name: &str, total: f64) -> Message {
        let total = display_total(total);
        Message {
            subject: Some(format!("Order Confirmation #{order_id}")),
            body: format!(
                "Dear {customer_name}, your order #{order_id} for ${total} has been confirmed."
            ),
        }
    }
}

/// Body only, sized for SMS and push.
#[derive(Debug, Clone, Copy)]
pub struct ShortMessage;

impl MessageStrategy for ShortMessage {
    fn create_message(&self, order_id: &str, _customer_name: &str, total: f64) -> Message {
        let total = display_total(total);
        Message::short(format!(
            "Order #{order_id} confirmed. Total: ${total}. Thank you for your purchase!"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_message_has_subject_and_details() {
        let msg = EmailMessage.create_message("ORD-001", "Ana", 150.50);
        assert_eq!(msg.subject.as_deref(), Some("Order Confirmation #ORD-001"));
        assert_eq!(
            msg.body,
            "Dear Ana, your order #ORD-001 for $150.5 has been confirmed."
        );
    }

    #[test]
    fn short_message_has_no_subject() {
        let msg = ShortMessage.create_message("ORD-002", "Carlos", 75.0);
        assert!(msg.subject.is_none());
        assert_eq!(
            msg.body,
            "Order #ORD-002 confirmed. Total: $75.0. Thank you for your purchase!"
        );
    }

    #[test]
    fn strategies_are_deterministic() {
        let strategies: [&dyn MessageStrategy; 2] = [&EmailMessage, &ShortMessage];
        for strategy in strategies {
            let first = strategy.create_message("ORD-9", "Bo", 12.25);
            let second = strategy.create_message("ORD-9", "Bo", 12.25);
            assert_eq!(first, second);
        }
    }
}
