//! Demo command: the sample orders and reports, end to end.

use serde::Serialize;

use crate::config::Config;
use crate::history::History;
use crate::model::{
    Customer, InventoryItem, NotificationRecord, Order, ReportData, ReportRecord, Sale,
};
use crate::notify::Dispatcher;
use crate::report::Reporter;

use super::print_json;

#[derive(Serialize)]
struct DemoHistory<'a> {
    notifications: &'a History<NotificationRecord>,
    reports: &'a History<ReportRecord>,
}

pub(super) fn cmd_demo(config: &Config) -> Result<(), String> {
    let mut dispatcher = Dispatcher::new();
    for (order, channels) in sample_orders() {
        dispatcher
            .process_order(&order, channels)
            .map_err(|e| format!("order {}: {e}", order.order_id))?;
        eprintln!(
            "Notifications sent so far: {}",
            dispatcher.history().len()
        );
    }

    let mut reporter = Reporter::new(config);
    for (report_type, data, format, delivery) in sample_reports() {
        let report = reporter
            .generate_report(report_type, &data, format, delivery)
            .map_err(|e| format!("{report_type} report: {e}"))?;
        if let Some(report) = report {
            eprintln!("{}\n\nReport {}\n", report.document, report.delivery);
        }
    }

    print_json(&DemoHistory {
        notifications: dispatcher.history(),
        reports: reporter.history(),
    })
}

fn sample_orders() -> Vec<(Order, &'static [&'static str])> {
    vec![
        (
            Order {
                order_id: "ORD-001".into(),
                customer: Customer {
                    name: "Ana Garcia".into(),
                    email: Some("ana.garcia@email.com".into()),
                    phone: Some("+34-600-123-456".into()),
                    device_id: Some("DEVICE-ABC-123".into()),
                },
                total: 150.50,
            },
            &["email", "sms", "push"],
        ),
        (
            Order {
                order_id: "ORD-002".into(),
                customer: Customer {
                    name: "Carlos Ruiz".into(),
                    email: Some("carlos.ruiz@email.com".into()),
                    phone: Some("+34-600-789-012".into()),
                    device_id: Some("DEVICE-XYZ-789".into()),
                },
                total: 75.00,
            },
            &["email"],
        ),
    ]
}

fn sample_reports() -> Vec<(&'static str, ReportData, &'static str, &'static str)> {
    let sales = ReportData {
        period: Some("January 2024".into()),
        sales: Some(vec![
            sale("HP Laptop", 899.99),
            sale("Logitech Mouse", 25.50),
            sale("Mechanical Keyboard", 120.00),
            sale("LG Monitor 24\"", 199.99),
        ]),
        ..ReportData::default()
    };

    let inventory = ReportData {
        items: Some(vec![
            item("HP Laptop", "Computers", 15),
            item("Logitech Mouse", "Accessories", 50),
            item("Mechanical Keyboard", "Accessories", 30),
            item("LG Monitor", "Displays", 20),
        ]),
        ..ReportData::default()
    };

    let financial = ReportData {
        income: Some(50_000.00),
        expenses: Some(32_000.00),
        ..ReportData::default()
    };

    vec![
        ("sales", sales, "pdf", "email"),
        ("inventory", inventory, "excel", "download"),
        ("financial", financial, "html", "cloud"),
    ]
}

fn sale(product: &str, amount: f64) -> Sale {
    Sale {
        product: product.into(),
        amount,
    }
}

fn item(name: &str, category: &str, quantity: i64) -> InventoryItem {
    InventoryItem {
        name: name.into(),
        quantity,
        category: Some(category.into()),
    }
}
