//! Formatters: wrap report text in a format envelope.

use tracing::info;

/// Wraps raw report text for one output format. Never fails.
pub trait ReportFormatter {
    fn format(&self, text: &str) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct PdfFormatter;

impl ReportFormatter for PdfFormatter {
    fn format(&self, text: &str) -> String {
        info!("rendering report as pdf");
        format!("[PDF FORMAT]\n{text}\n[END PDF]")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExcelFormatter;

impl ReportFormatter for ExcelFormatter {
    fn format(&self, text: &str) -> String {
        info!("rendering report as excel");
        format!("[EXCEL FORMAT]\n{text}\n[END EXCEL]")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlFormatter;

impl ReportFormatter for HtmlFormatter {
    fn format(&self, text: &str) -> String {
        info!("rendering report as html");
        format!("<html><body><pre>{text}</pre></body></html>")
    }
}
