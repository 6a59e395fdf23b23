//! Report lookup tables.
//!
//! Each table has its own policy for an unknown tag: generators resolve
//! to nothing, formatters fall back to HTML, deliveries fall back to
//! download.

use tracing::debug;

use crate::config::Config;
use crate::model::{DeliveryMethod, OutputFormat, ReportKind};

use super::deliver::{CloudDelivery, DeliveryChannel, DownloadDelivery, EmailDelivery};
use super::format::{ExcelFormatter, HtmlFormatter, PdfFormatter, ReportFormatter};
use super::generate::{ContentGenerator, FinancialReport, InventoryReport, SalesReport};

static SALES: SalesReport = SalesReport;
static INVENTORY: InventoryReport = InventoryReport;
static FINANCIAL: FinancialReport = FinancialReport;

static PDF: PdfFormatter = PdfFormatter;
static EXCEL: ExcelFormatter = ExcelFormatter;
static HTML: HtmlFormatter = HtmlFormatter;

/// Resolve the generator for a report tag, or `None` if there is none.
pub fn generator(tag: &str) -> Option<(ReportKind, &'static dyn ContentGenerator)> {
    let kind = ReportKind::parse(tag)?;
    let generator: &'static dyn ContentGenerator = match kind {
        ReportKind::Sales => &SALES,
        ReportKind::Inventory => &INVENTORY,
        ReportKind::Financial => &FINANCIAL,
    };
    Some((kind, generator))
}

/// Resolve the formatter for a format tag. Unknown tags get HTML.
pub fn formatter(tag: &str) -> &'static dyn ReportFormatter {
    match OutputFormat::parse(tag) {
        Some(OutputFormat::Pdf) => &PDF,
        Some(OutputFormat::Excel) => &EXCEL,
        Some(OutputFormat::Html) => &HTML,
        None => {
            debug!(tag, "unknown format, using html");
            &HTML
        }
    }
}

/// Builds delivery channels from configured destinations.
#[derive(Debug, Clone)]
pub struct Deliveries {
    recipient: String,
    cloud_base_url: String,
}

impl Deliveries {
    pub fn new(config: &Config) -> Self {
        Self {
            recipient: config.report_recipient.clone(),
            cloud_base_url: config.cloud_base_url.clone(),
        }
    }

    /// Resolve the channel for a delivery tag. Unknown tags get download.
    pub fn channel(&self, tag: &str) -> Box<dyn DeliveryChannel> {
        match DeliveryMethod::parse(tag) {
            Some(DeliveryMethod::Email) => Box::new(EmailDelivery {
                recipient: self.recipient.clone(),
            }),
            Some(DeliveryMethod::Cloud) => Box::new(CloudDelivery {
                base_url: self.cloud_base_url.clone(),
            }),
            Some(DeliveryMethod::Download) => Box::new(DownloadDelivery),
            None => {
                debug!(tag, "unknown delivery method, using download");
                Box::new(DownloadDelivery)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::clock::{Clock, FixedClock};
    use crate::report::deliver::{Delivery, DeliveryMeta};

    #[test]
    fn known_report_tags_resolve() {
        for (tag, kind) in [
            ("sales", ReportKind::Sales),
            ("inventory", ReportKind::Inventory),
            ("financial", ReportKind::Financial),
        ] {
            let (resolved, _) = generator(tag).unwrap();
            assert_eq!(resolved, kind);
        }
    }

    #[test]
    fn unknown_report_tag_resolves_to_none() {
        assert!(generator("marketing").is_none());
        assert!(generator("Sales").is_none());
    }

    #[test]
    fn formatter_falls_back_to_html() {
        assert_eq!(formatter("pdf").format("x"), PdfFormatter.format("x"));
        assert_eq!(formatter("excel").format("x"), ExcelFormatter.format("x"));
        assert_eq!(formatter("docx").format("x"), HtmlFormatter.format("x"));
    }

    #[test]
    fn delivery_falls_back_to_download() {
        let deliveries = Deliveries::new(&Config::default());
        let meta = DeliveryMeta {
            report_type: ReportKind::Sales,
            format: "pdf",
            generated_at: FixedClock::sample().now(),
        };

        let fallback = deliveries.channel("carrier-pigeon").deliver("d", &meta).unwrap();
        assert!(matches!(fallback, Delivery::Download { .. }));

        let email = deliveries.channel("email").deliver("d", &meta).unwrap();
        assert_eq!(
            email,
            Delivery::Email {
                recipient: "admin@company.com".into()
            }
        );

        let cloud = deliveries.channel("cloud").deliver("d", &meta).unwrap();
        assert_eq!(
            cloud,
            Delivery::Cloud {
                url: "https://cloud.company.com/reports/sales".into()
            }
        );
    }
}
