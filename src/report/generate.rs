//! Content generators: turn a payload into report text.
//!
//! Every report opens with the same banner and generation time, then
//! the body for its kind. Detail lines follow input order.

use std::collections::BTreeSet;

use jiff::Timestamp;

use crate::error::{Error, Result, require};
use crate::model::{InventoryItem, ReportData, Sale};

const WIDTH: usize = 60;

/// Produces the raw text of one kind of report.
pub trait ContentGenerator {
    /// Fails with [`Error::MissingField`] naming the first required
    /// field absent from `data`.
    fn generate(&self, data: &ReportData, generated_at: Timestamp) -> Result<String>;
}

#[derive(Debug, Clone, Copy)]
pub struct SalesReport;

impl ContentGenerator for SalesReport {
    fn generate(&self, data: &ReportData, generated_at: Timestamp) -> Result<String> {
        let sales = require(data.sales.as_deref(), "sales")?;

        let mut lines = header("SALES REPORT", generated_at);
        if let Some(period) = &data.period {
            lines.push(format!("Period: {period}"));
        }
        let total: f64 = sales.iter().map(|s| s.amount).sum();
        lines.push(format!("Total sales: ${total:.2}"));
        lines.push(format!("Transactions: {}", sales.len()));
        lines.push(String::new());

        lines.push("Sales detail:".to_string());
        lines.push("-".repeat(WIDTH));
        lines.extend(sales.iter().map(|Sale { product, amount }| {
            format!("  - Product: {product} - ${amount:.2}")
        }));

        Ok(render(lines))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InventoryReport;

impl ContentGenerator for InventoryReport {
    fn generate(&self, data: &ReportData, generated_at: Timestamp) -> Result<String> {
        let items = require(data.items.as_deref(), "items")?;

        let mut lines = header("INVENTORY REPORT", generated_at);
        // Widened so no realistic item count can overflow.
        let units: i128 = items.iter().map(|i| i128::from(i.quantity)).sum();
        let categories: BTreeSet<&str> = items.iter().map(InventoryItem::category).collect();
        lines.push(format!("Total units: {units}"));
        lines.push(format!("Categories: {}", categories.len()));
        lines.push(String::new());

        lines.push("Current stock:".to_string());
        lines.push("-".repeat(WIDTH));
        lines.extend(items.iter().map(|item| {
            format!(
                "  - {} ({}): {} units",
                item.name,
                item.category(),
                item.quantity
            )
        }));

        Ok(render(lines))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FinancialReport;

impl ContentGenerator for FinancialReport {
    fn generate(&self, data: &ReportData, generated_at: Timestamp) -> Result<String> {
        let income = data.income.ok_or(Error::MissingField { field: "income" })?;
        let expenses = data
            .expenses
            .ok_or(Error::MissingField { field: "expenses" })?;

        let mut lines = header("FINANCIAL REPORT", generated_at);
        lines.push(format!("Income: ${income:.2}"));
        lines.push(format!("Expenses: ${expenses:.2}"));
        lines.push(format!("Balance: ${:.2}", income - expenses));

        Ok(render(lines))
    }
}

fn header(title: &str, generated_at: Timestamp) -> Vec<String> {
    vec![
        "=".repeat(WIDTH),
        format!("           {title}"),
        "=".repeat(WIDTH),
        format!("Generated: {}", generated_at.strftime("%Y-%m-%d %H:%M:%S")),
        String::new(),
    ]
}

fn render(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
