//! Delivery channels: where a finished report goes.
//!
//! Delivery is a stub that reports its destination. It returns a
//! `Result` because a real channel crosses the network.

use std::fmt;

use jiff::Timestamp;
use tracing::info;

use crate::error::Result;
use crate::model::ReportKind;

/// What a delivery channel knows about the report it carries.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryMeta<'a> {
    pub report_type: ReportKind,

    /// The format tag as requested, used for file extensions.
    pub format: &'a str,

    pub generated_at: Timestamp,
}

/// Where a report ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Email { recipient: String },
    Download { filename: String },
    Cloud { url: String },
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email { recipient } => write!(f, "emailed to {recipient}"),
            Self::Download { filename } => write!(f, "available for download as {filename}"),
            Self::Cloud { url } => write!(f, "uploaded to {url}"),
        }
    }
}

/// Sends a formatted document somewhere.
pub trait DeliveryChannel {
    fn deliver(&self, document: &str, meta: &DeliveryMeta<'_>) -> Result<Delivery>;
}

#[derive(Debug, Clone)]
pub struct EmailDelivery {
    pub recipient: String,
}

impl DeliveryChannel for EmailDelivery {
    fn deliver(&self, document: &str, meta: &DeliveryMeta<'_>) -> Result<Delivery> {
        info!(
            recipient = %self.recipient,
            report = %meta.report_type,
            bytes = document.len(),
            "report emailed"
        );
        Ok(Delivery::Email {
            recipient: self.recipient.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DownloadDelivery;

impl DeliveryChannel for DownloadDelivery {
    fn deliver(&self, document: &str, meta: &DeliveryMeta<'_>) -> Result<Delivery> {
        let filename = format!(
            "report_{}_{}.{}",
            meta.report_type,
            meta.generated_at.strftime("%Y%m%d_%H%M%S"),
            meta.format
        );
        info!(%filename, bytes = document.len(), "report available for download");
        Ok(Delivery::Download { filename })
    }
}

#[derive(Debug, Clone)]
pub struct CloudDelivery {
    pub base_url: String,
}

impl DeliveryChannel for CloudDelivery {
    fn deliver(&self, document: &str, meta: &DeliveryMeta<'_>) -> Result<Delivery> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            meta.report_type
        );
        info!(%url, bytes = document.len(), "report uploaded");
        Ok(Delivery::Cloud { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::clock::{Clock, FixedClock};

    fn meta(format: &str) -> DeliveryMeta<'_> {
        DeliveryMeta {
            report_type: ReportKind::Sales,
            format,
            generated_at: FixedClock::sample().now(),
        }
    }

    #[test]
    fn email_goes_to_configured_recipient() {
        let channel = EmailDelivery {
            recipient: "ops@example.com".into(),
        };
        let delivery = channel.deliver("doc", &meta("pdf")).unwrap();
        assert_eq!(
            delivery,
            Delivery::Email {
                recipient: "ops@example.com".into()
            }
        );
        assert_eq!(delivery.to_string(), "emailed to ops@example.com");
    }

    #[test]
    fn download_name_uses_type_time_and_requested_format() {
        let delivery = DownloadDelivery.deliver("doc", &meta("docx")).unwrap();
        assert_eq!(
            delivery,
            Delivery::Download {
                filename: "report_sales_20240115_093000.docx".into()
            }
        );
    }

    #[test]
    fn cloud_url_joins_base_and_type() {
        for base in ["https://cloud.example.com/reports", "https://cloud.example.com/reports/"] {
            let channel = CloudDelivery {
                base_url: base.into(),
            };
            let delivery = channel.deliver("doc", &meta("pdf")).unwrap();
            assert_eq!(
                delivery,
                Delivery::Cloud {
                    url: "https://cloud.example.com/reports/sales".into()
                }
            );
        }
    }
}
