//! Notification lookup tables.
//!
//! Two tables, two policies: an unknown sender tag is an error, an
//! unknown strategy tag falls back to the short message.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Channel;

use super::message::{EmailMessage, MessageStrategy, ShortMessage};
use super::sender::{EmailSender, PushSender, Sender, SmsSender};

static EMAIL_SENDER: EmailSender = EmailSender;
static SMS_SENDER: SmsSender = SmsSender;
static PUSH_SENDER: PushSender = PushSender;

static EMAIL_MESSAGE: EmailMessage = EmailMessage;
static SHORT_MESSAGE: ShortMessage = ShortMessage;

/// Resolve the sender for a channel tag.
///
/// Fails with [`Error::UnsupportedType`] for tags outside `email`, `sms`, `push`.
pub fn sender(tag: &str) -> Result<&'static dyn Sender> {
    match Channel::parse(tag) {
        Some(Channel::Email) => Ok(&EMAIL_SENDER),
        Some(Channel::Sms) => Ok(&SMS_SENDER),
        Some(Channel::Push) => Ok(&PUSH_SENDER),
        None => Err(Error::unsupported(tag)),
    }
}

/// Resolve the message strategy for a channel tag. Never fails.
pub fn strategy(tag: &str) -> &'static dyn MessageStrategy {
    match Channel::parse(tag) {
        Some(Channel::Email) => &EMAIL_MESSAGE,
        Some(Channel::Sms | Channel::Push) => &SHORT_MESSAGE,
        None => {
            debug!(tag, "unknown channel, using short message");
            &SHORT_MESSAGE
        }
    }
}
