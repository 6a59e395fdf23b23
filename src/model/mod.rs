//! Core data model for Courier.
//!
//! These types flow through both pipelines: orders and their customers,
//! report payloads, the closed tag sets that select capabilities, and the
//! records appended to each orchestrator's history.

mod order;
mod record;
mod report;
mod tag;

pub use order::{Customer, Message, Order, display_total};
pub use record::{NotificationRecord, ReportRecord};
pub use report::{InventoryItem, ReportData, Sale};
pub use tag::{Channel, DeliveryMethod, OutputFormat, ReportKind};
