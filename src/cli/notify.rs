//! Notify command: dispatch one order over the requested channels.

use std::path::Path;

use crate::model::{Channel, Order};
use crate::notify::Dispatcher;

use super::{print_json, read_json};

pub(super) fn cmd_notify(order_path: &Path, channels: Vec<String>) -> Result<(), String> {
    let order: Order = read_json(order_path)?;
    let channels = if channels.is_empty() {
        vec![Channel::Email.as_str().to_string()]
    } else {
        channels
    };

    let mut dispatcher = Dispatcher::new();
    let outcome = dispatcher.process_order(&order, &channels);

    // Whatever went out before a failure is still reported.
    print_json(dispatcher.history())?;

    let sent = outcome.map_err(|e| format!("order {}: {e}", order.order_id))?;
    eprintln!("Sent {sent} notification(s) for order {}", order.order_id);
    Ok(())
}
