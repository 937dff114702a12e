//! Dashboard state update logic
//!
//! Drains queued worker events and applies their state transitions. This is
//! the only place dashboard state changes in response to the API; input
//! editing elsewhere never touches the collection, busy flags or error slot.

use super::state::DashboardState;
use crate::events::{Event as WorkerEvent, Mutation, StateUpdate};

impl DashboardState {
    /// Advance one frame: bump the tick and process all queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            if event.should_display() {
                self.add_to_activity_log(event.clone());
            }
            self.process_event(&event);
        }
    }

    fn process_event(&mut self, event: &WorkerEvent) {
        if let Some(update) = &event.update {
            self.apply(update.clone());
        }
    }

    /// The reducer. Every API outcome arrives here as a [`StateUpdate`].
    pub fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::RefreshOk { products } => {
                // Replace wholesale; the server is the source of truth.
                self.products = products;
                self.clamp_selection();
            }
            StateUpdate::RefreshFailed { message } => {
                // Stale-but-present: the previous collection stays.
                self.error = Some(message);
            }
            StateUpdate::MutationStarted { mutation } => {
                // Each mutation clears the single error slot when it starts.
                self.error = None;
                match mutation {
                    Mutation::AddProduct => self.adding_product = true,
                    Mutation::AddStock { product_id } => self.set_updating(&product_id, true),
                }
            }
            StateUpdate::MutationOk { mutation } => match mutation {
                Mutation::AddProduct => {
                    self.adding_product = false;
                    self.form.clear();
                }
                Mutation::AddStock { product_id } => {
                    self.set_updating(&product_id, false);
                    self.reset_add_amount(&product_id);
                }
            },
            StateUpdate::MutationFailed { mutation, message } => {
                // Inputs stay populated so the user can retry; only the busy
                // flag and the error slot change.
                match mutation {
                    Mutation::AddProduct => self.adding_product = false,
                    Mutation::AddStock { product_id } => self.set_updating(&product_id, false),
                }
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::product::{Category, Product};
    use crate::ui::dashboard::ProductForm;
    use std::time::Instant;

    fn product(id: &str, name: &str, quantity: u32, threshold: u32) -> Product {
        Product {
            product_id: id.to_string(),
            product_name: name.to_string(),
            category: Category::Stationery,
            price: 10.0,
            threshold,
            quantity,
        }
    }

    fn state() -> DashboardState {
        DashboardState::new(None, Environment::Local, Instant::now())
    }

    fn filled_form() -> ProductForm {
        ProductForm {
            product_name: "Pen".to_string(),
            category: Some(Category::Stationery),
            price: "10".to_string(),
            threshold: "5".to_string(),
            quantity: "2".to_string(),
        }
    }

    #[test]
    /// A successful refresh replaces the collection wholesale.
    fn test_refresh_ok_replaces_collection() {
        let mut state = state();
        state.products = vec![product("old", "Old", 1, 1)];

        state.apply(StateUpdate::RefreshOk {
            products: vec![product("p-1", "Pen", 2, 5), product("p-2", "Soap", 9, 5)],
        });

        assert_eq!(state.products.len(), 2);
        assert_eq!(state.products[0].product_id, "p-1");
    }

    #[test]
    /// A failed refresh keeps the stale collection and fills the error slot.
    fn test_refresh_failure_keeps_stale_collection() {
        let mut state = state();
        state.products = vec![product("p-1", "Pen", 2, 5)];

        state.apply(StateUpdate::RefreshFailed {
            message: "Failed to fetch products".to_string(),
        });

        assert_eq!(state.products.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch products"));
    }

    #[test]
    /// The error slot holds one message; a new error overwrites the old one.
    fn test_error_slot_overwrites() {
        let mut state = state();
        state.apply(StateUpdate::RefreshFailed {
            message: "first".to_string(),
        });
        state.apply(StateUpdate::RefreshFailed {
            message: "second".to_string(),
        });
        assert_eq!(state.error.as_deref(), Some("second"));
    }

    #[test]
    /// Starting a mutation clears the error slot and raises its busy flag.
    fn test_mutation_start_clears_error_and_sets_busy() {
        let mut state = state();
        state.error = Some("stale error".to_string());

        state.apply(StateUpdate::MutationStarted {
            mutation: Mutation::AddProduct,
        });

        assert_eq!(state.error, None);
        assert!(state.adding_product);
    }

    #[test]
    /// A successful create clears the form and the busy flag.
    fn test_add_product_ok_clears_form() {
        let mut state = state();
        state.form = filled_form();
        state.adding_product = true;

        state.apply(StateUpdate::MutationOk {
            mutation: Mutation::AddProduct,
        });

        assert!(!state.adding_product);
        assert_eq!(state.form, ProductForm::default());
    }

    #[test]
    /// A failed create leaves the form populated; only the error slot and
    /// the busy flag change.
    fn test_add_product_failure_keeps_form() {
        let mut state = state();
        state.products = vec![product("p-1", "Pen", 2, 5)];
        state.form = filled_form();
        state.adding_product = true;

        state.apply(StateUpdate::MutationFailed {
            mutation: Mutation::AddProduct,
            message: "name taken".to_string(),
        });

        assert!(!state.adding_product);
        assert_eq!(state.form, filled_form());
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.error.as_deref(), Some("name taken"));
    }

    #[test]
    /// Stock-update busy flags are per product and independent.
    fn test_stock_busy_flags_are_independent() {
        let mut state = state();
        state.apply(StateUpdate::MutationStarted {
            mutation: Mutation::AddStock {
                product_id: "p-1".to_string(),
            },
        });
        state.apply(StateUpdate::MutationStarted {
            mutation: Mutation::AddStock {
                product_id: "p-2".to_string(),
            },
        });

        assert!(state.is_updating("p-1"));
        assert!(state.is_updating("p-2"));

        state.apply(StateUpdate::MutationOk {
            mutation: Mutation::AddStock {
                product_id: "p-1".to_string(),
            },
        });
        assert!(!state.is_updating("p-1"));
        assert!(state.is_updating("p-2"));
    }

    #[test]
    /// Topping up 3 onto 7/10 ends with the refreshed quantity at the
    /// threshold and the pending input reset to zero.
    fn test_add_stock_round_trip_reaches_threshold() {
        let mut state = state();
        state.products = vec![product("p-1", "Pen", 7, 10)];
        state.adjust_selected_add_amount(3);
        assert_eq!(state.add_amount("p-1"), 3);

        let mutation = Mutation::AddStock {
            product_id: "p-1".to_string(),
        };
        state.apply(StateUpdate::MutationStarted {
            mutation: mutation.clone(),
        });
        state.apply(StateUpdate::MutationOk { mutation });
        state.apply(StateUpdate::RefreshOk {
            products: vec![product("p-1", "Pen", 10, 10)],
        });

        assert_eq!(state.add_amount("p-1"), 0);
        assert_eq!(state.products[0].quantity, 10);
        assert!(!state.products[0].is_low_stock());
    }

    #[test]
    /// A failed stock update keeps the pending amount for a retry.
    fn test_add_stock_failure_keeps_pending_amount() {
        let mut state = state();
        state.products = vec![product("p-1", "Pen", 7, 10)];
        state.adjust_selected_add_amount(2);

        let mutation = Mutation::AddStock {
            product_id: "p-1".to_string(),
        };
        state.apply(StateUpdate::MutationStarted {
            mutation: mutation.clone(),
        });
        state.apply(StateUpdate::MutationFailed {
            mutation,
            message: "Failed to update stock".to_string(),
        });

        assert_eq!(state.add_amount("p-1"), 2);
        assert_eq!(state.error.as_deref(), Some("Failed to update stock"));
        assert!(!state.is_updating("p-1"));
    }

    #[test]
    /// Creating a low-stock product shows up in the aggregates after refresh.
    fn test_created_low_stock_product_is_counted() {
        let mut state = state();
        state.apply(StateUpdate::RefreshOk {
            products: vec![product("p-1", "Pen", 2, 5)],
        });
        assert_eq!(state.low_stock_count(), 1);
        assert!(state.products[0].is_low_stock());
    }

    #[test]
    /// Queued events are drained in order on the next frame.
    fn test_update_drains_pending_events() {
        use crate::events::{Event, EventType};
        use crate::logging::LogLevel;

        let mut state = state();
        state.add_event(Event::with_update(
            "Fetched 1 products".to_string(),
            EventType::Success,
            LogLevel::Info,
            StateUpdate::RefreshOk {
                products: vec![product("p-1", "Pen", 2, 5)],
            },
        ));

        state.update();

        assert!(state.pending_events.is_empty());
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.activity_logs.len(), 1);
    }
}
