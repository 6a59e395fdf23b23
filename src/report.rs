//! Report generation: generate, format, deliver, record.
//!
//! The pipeline is fixed. An unknown report type is a no-op rather than
//! an error; unknown format and delivery tags fall back to HTML and
//! download. A missing payload field aborts before anything is
//! delivered or recorded.

mod deliver;
mod format;
mod generate;
mod registry;

pub use deliver::Delivery;

use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::history::History;
use crate::model::{ReportData, ReportRecord};

use deliver::DeliveryMeta;
use registry::Deliveries;

/// A finished report and where it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub document: String,
    pub delivery: Delivery,
}

/// Generates reports and keeps a history of what was produced.
#[derive(Debug)]
pub struct Reporter<C = SystemClock> {
    clock: C,
    deliveries: Deliveries,
    history: History<ReportRecord>,
}

impl Reporter {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Reporter<C> {
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            clock,
            deliveries: Deliveries::new(config),
            history: History::new(),
        }
    }

    /// Run the report pipeline once.
    ///
    /// Returns `Ok(None)` without touching the history when `report_type`
    /// has no generator. The history records `format` and `delivery` as
    /// given, even when they fell back to a default.
    pub fn generate_report(
        &mut self,
        report_type: &str,
        data: &ReportData,
        format: &str,
        delivery: &str,
    ) -> Result<Option<Report>> {
        let Some((kind, generator)) = registry::generator(report_type) else {
            warn!(report_type, "no generator for report type, nothing produced");
            return Ok(None);
        };
        let formatter = registry::formatter(format);
        let channel = self.deliveries.channel(delivery);

        let generated_at = self.clock.now();
        let content = generator.generate(data, generated_at)?;
        let document = formatter.format(&content);

        let meta = DeliveryMeta {
            report_type: kind,
            format,
            generated_at,
        };
        let receipt = channel.deliver(&document, &meta)?;

        self.history.append(ReportRecord {
            report_type: report_type.to_string(),
            format: format.to_string(),
            delivery: delivery.to_string(),
            generated_at,
        });
        info!(report_type, format, delivery, "report generated");

        Ok(Some(Report {
            document,
            delivery: receipt,
        }))
    }

    /// Every report produced so far, oldest first.
    pub fn history(&self) -> &History<ReportRecord> {
        &self.history
    }
}
