//! Notification dispatch: tell a customer their order went through.
//!
//! For each requested channel, in order: resolve the sender (unknown
//! channels fail), resolve the message strategy (unknown channels fall
//! back), build the message, send it, and record the result.

mod message;
mod registry;
mod sender;

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::history::History;
use crate::model::{NotificationRecord, Order};

/// Sends order notifications and keeps a history of what was sent.
#[derive(Debug)]
pub struct Dispatcher<C = SystemClock> {
    clock: C,
    history: History<NotificationRecord>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Dispatcher<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            history: History::new(),
        }
    }

    /// Notify the order's customer on each channel, in the order given.
    ///
    /// Stops at the first failure. Notifications sent before it stay in
    /// the history. Returns how many were sent.
    pub fn process_order<S: AsRef<str>>(&mut self, order: &Order, channels: &[S]) -> Result<usize> {
        let customer = &order.customer;
        info!(
            order = %order.order_id,
            customer = %customer.name,
            total = order.total,
            "processing order"
        );

        for tag in channels {
            let tag = tag.as_ref();
            let sender = registry::sender(tag)?;
            let strategy = registry::strategy(tag);

            let message = strategy.create_message(&order.order_id, &customer.name, order.total);
            let record = sender.send(customer, &message, self.clock.now())?;
            self.history.append(record);
        }

        Ok(channels.len())
    }

    /// Everything sent so far, oldest first.
    pub fn history(&self) -> &History<NotificationRecord> {
        &self.history
    }
}
