//! Event System
//!
//! Events flow from the worker tasks to the UI over a channel. Each event is
//! an activity-log entry; most also carry a state transition the dashboard
//! reducer applies. State never changes any other way.

use crate::logging::{LogLevel, should_log_with_env};
use crate::product::Product;
use chrono::Local;
use std::fmt::Display;

/// The two mutating actions, each with its own independent busy flag.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Mutation {
    /// Creating a new product from the form.
    AddProduct,
    /// Topping up stock for one product.
    AddStock { product_id: String },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// State transition carried by an event, applied by the dashboard reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    /// Replace the product collection wholesale.
    RefreshOk { products: Vec<Product> },
    /// Keep the stale collection; record the failure in the error slot.
    RefreshFailed { message: String },
    /// Clear the error slot and raise the mutation's busy flag.
    MutationStarted { mutation: Mutation },
    /// Lower the busy flag and reset the mutation's input.
    MutationOk { mutation: Mutation },
    /// Lower the busy flag, leave inputs untouched, record the failure.
    MutationFailed { mutation: Mutation, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// State transition carried by this event, if any.
    pub update: Option<StateUpdate>,
}

impl Event {
    pub fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            update: None,
        }
    }

    pub fn with_update(
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
        update: StateUpdate,
    ) -> Self {
        Self {
            update: Some(update),
            ..Self::new(msg, event_type, log_level)
        }
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_always_display() {
        let event = Event::new(
            "Fetched 3 products".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_format_includes_type_and_message() {
        let event = Event::new(
            "Adding product...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("Adding product..."));
    }
}
