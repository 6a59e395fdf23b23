//! History records: one per completed pipeline action.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Channel;

/// A notification that was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub channel: Channel,

    /// The contact point the message went to: address, phone, or device.
    pub recipient: String,

    /// The message body as sent.
    pub message: String,

    pub sent_at: Timestamp,
}

/// A report that was generated and delivered.
///
/// Format and delivery are the tags the caller asked for, even when an
/// unknown tag fell back to the default capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub report_type: String,
    pub format: String,
    pub delivery: String,
    pub generated_at: Timestamp,
}
