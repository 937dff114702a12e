//! Core worker utilities and types.

use crate::events::{Event, EventType, StateUpdate};
use crate::logging::LogLevel;
use crate::product::NewProduct;
use tokio::sync::mpsc;

/// User actions dispatched from the UI to the worker side.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Re-fetch the full product collection.
    Refresh,
    /// Create a product from validated form input.
    AddProduct(NewProduct),
    /// Top up one product's stock. The worker computes the absolute new
    /// quantity from the snapshot taken when the user confirmed.
    AddStock {
        product_id: String,
        current_quantity: u32,
        add_amount: u32,
    },
}

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send an event carrying a state transition for the reducer.
    pub async fn send_update(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
        update: StateUpdate,
    ) {
        let _ = self
            .sender
            .send(Event::with_update(message, event_type, log_level, update))
            .await;
    }
}
