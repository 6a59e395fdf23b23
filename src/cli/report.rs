//! Report command: run the report pipeline once.

use std::path::Path;

use crate::config::Config;
use crate::model::ReportData;
use crate::report::Reporter;

use super::read_json;

pub(super) fn cmd_report(
    config: &Config,
    report_type: &str,
    data_path: &Path,
    format: &str,
    delivery: &str,
) -> Result<(), String> {
    let data: ReportData = read_json(data_path)?;

    let mut reporter = Reporter::new(config);
    let report = reporter
        .generate_report(report_type, &data, format, delivery)
        .map_err(|e| format!("{report_type} report: {e}"))?;

    match report {
        Some(report) => {
            println!("{}", report.document);
            eprintln!("Report {}", report.delivery);
        }
        None => eprintln!("No report generated: unknown report type '{report_type}'"),
    }

    Ok(())
}
