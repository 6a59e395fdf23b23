//! Senders: one per channel, each reading a single contact field.
//!
//! Sending is a stub. The observable effect is a `tracing` event and the
//! record handed back for the history.

use jiff::Timestamp;
use tracing::info;

use crate::error::{Result, require};
use crate::model::{Channel, Customer, Message, NotificationRecord};

/// Subject shown when a message carries none.
const DEFAULT_SUBJECT: &str = "Notification";

/// Delivers a message to a customer over one channel.
pub trait Sender {
    /// Send `message`, returning what was sent and to whom.
    ///
    /// Fails with [`MissingField`](crate::error::Error::MissingField) when
    /// the customer has no contact point for this channel.
    fn send(
        &self,
        customer: &Customer,
        message: &Message,
        sent_at: Timestamp,
    ) -> Result<NotificationRecord>;
}

#[derive(Debug, Clone, Copy)]
pub struct EmailSender;

impl Sender for EmailSender {
    fn send(
        &self,
        customer: &Customer,
        message: &Message,
        sent_at: Timestamp,
    ) -> Result<NotificationRecord> {
        let email = require(customer.email.as_deref(), "email")?;
        let subject = message.subject.as_deref().unwrap_or(DEFAULT_SUBJECT);
        info!(to = email, subject, body = %message.body, "email sent");
        Ok(record(Channel::Email, email, message, sent_at))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SmsSender;

impl Sender for SmsSender {
    fn send(
        &self,
        customer: &Customer,
        message: &Message,
        sent_at: Timestamp,
    ) -> Result<NotificationRecord> {
        let phone = require(customer.phone.as_deref(), "phone")?;
        info!(to = phone, body = %message.body, "sms sent");
        Ok(record(Channel::Sms, phone, message, sent_at))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PushSender;

impl Sender for PushSender {
    fn send(
        &self,
        customer: &Customer,
        message: &Message,
        sent_at: Timestamp,
    ) -> Result<NotificationRecord> {
        let device = require(customer.device_id.as_deref(), "device_id")?;
        info!(device, body = %message.body, "push sent");
        Ok(record(Channel::Push, device, message, sent_at))
    }
}

fn record(
    channel: Channel,
    recipient: &str,
    message: &Message,
    sent_at: Timestamp,
) -> NotificationRecord {
    NotificationRecord {
        channel,
        recipient: recipient.to_string(),
        message: message.body.clone(),
        sent_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::clock::{Clock, FixedClock};
    use crate::error::Error;

    fn customer() -> Customer {
        Customer {
            name: "Ana".into(),
            email: Some("a@x.com".into()),
            phone: Some("+1".into()),
            device_id: Some("D1".into()),
        }
    }

    fn message() -> Message {
        Message::short("hello".into())
    }

    #[test]
    fn each_sender_reads_its_own_field() {
        let now = FixedClock::sample().now();
        let cases: [(&dyn Sender, Channel, &str); 3] = [
            (&EmailSender, Channel::Email, "a@x.com"),
            (&SmsSender, Channel::Sms, "+1"),
            (&PushSender, Channel::Push, "D1"),
        ];
        for (sender, channel, recipient) in cases {
            let record = sender.send(&customer(), &message(), now).unwrap();
            assert_eq!(record.channel, channel);
            assert_eq!(record.recipient, recipient);
            assert_eq!(record.message, "hello");
            assert_eq!(record.sent_at, now);
        }
    }

    #[test]
    fn missing_contact_field_is_named() {
        let now = FixedClock::sample().now();
        let bare = Customer {
            name: "Ana".into(),
            email: None,
            phone: None,
            device_id: None,
        };

        let cases: [(&dyn Sender, &str); 3] = [
            (&EmailSender, "email"),
            (&SmsSender, "phone"),
            (&PushSender, "device_id"),
        ];
        for (sender, field) in cases {
            let err = sender.send(&bare, &message(), now).unwrap_err();
            assert_eq!(err, Error::MissingField { field });
        }
    }

    #[test]
    fn sender_ignores_unrelated_missing_fields() {
        let now = FixedClock::sample().now();
        let phone_only = Customer {
            name: "Ana".into(),
            email: None,
            phone: Some("+1".into()),
            device_id: None,
        };
        let record = SmsSender.send(&phone_only, &message(), now).unwrap();
        assert_eq!(record.recipient, "+1");
    }
}
