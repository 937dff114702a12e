//! Command dispatch.
//!
//! Receives [`Command`]s from the UI and runs each on its own task, reporting
//! progress back as events. Within one command the order is fixed: the
//! mutation completes (or fails) before its follow-up refresh is issued.
//! Commands for different products may be in flight at the same time; each
//! holds its own busy flag in the dashboard state.

use super::core::{Command, EventSender};
use crate::api::InventoryApi;
use crate::events::{EventType, Mutation, StateUpdate};
use crate::logging::{LogLevel, classify_api_error};
use crate::product::NewProduct;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Spawns the dispatch loop. Runs until shutdown is signalled or the command
/// channel closes.
pub fn start_dispatcher(
    api: Arc<dyn InventoryApi>,
    mut command_rx: mpsc::Receiver<Command>,
    event_sender: EventSender,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                maybe_command = command_rx.recv() => match maybe_command {
                    Some(command) => {
                        let api = api.clone();
                        let events = event_sender.clone();
                        tokio::spawn(async move {
                            handle_command(api.as_ref(), &events, command).await;
                        });
                    }
                    None => break,
                },
            }
        }
    })
}

pub(crate) async fn handle_command(
    api: &dyn InventoryApi,
    events: &EventSender,
    command: Command,
) {
    match command {
        Command::Refresh => refresh(api, events).await,
        Command::AddProduct(input) => add_product(api, events, input).await,
        Command::AddStock {
            product_id,
            current_quantity,
            add_amount,
        } => add_stock(api, events, product_id, current_quantity, add_amount).await,
    }
}

/// Fetches the collection. On failure the previous (stale) collection stays
/// in place; only the error slot changes.
async fn refresh(api: &dyn InventoryApi, events: &EventSender) {
    match api.list_products().await {
        Ok(products) => {
            events
                .send_update(
                    format!("Fetched {} products", products.len()),
                    EventType::Success,
                    LogLevel::Info,
                    StateUpdate::RefreshOk { products },
                )
                .await;
        }
        Err(e) => {
            let message = e.to_string();
            events
                .send_update(
                    message.clone(),
                    EventType::Error,
                    classify_api_error(&e),
                    StateUpdate::RefreshFailed { message },
                )
                .await;
        }
    }
}

async fn add_product(api: &dyn InventoryApi, events: &EventSender, input: NewProduct) {
    events
        .send_update(
            format!("Adding product {}...", input.product_name),
            EventType::Refresh,
            LogLevel::Info,
            StateUpdate::MutationStarted {
                mutation: Mutation::AddProduct,
            },
        )
        .await;

    match api.create_product(input).await {
        Ok(product) => {
            events
                .send_update(
                    format!("Added product {}", product.product_name),
                    EventType::Success,
                    LogLevel::Info,
                    StateUpdate::MutationOk {
                        mutation: Mutation::AddProduct,
                    },
                )
                .await;
            // Refresh only once the create has been confirmed.
            refresh(api, events).await;
        }
        Err(e) => {
            let message = e.to_string();
            events
                .send_update(
                    message.clone(),
                    EventType::Error,
                    classify_api_error(&e),
                    StateUpdate::MutationFailed {
                        mutation: Mutation::AddProduct,
                        message,
                    },
                )
                .await;
        }
    }
}

async fn add_stock(
    api: &dyn InventoryApi,
    events: &EventSender,
    product_id: String,
    current_quantity: u32,
    add_amount: u32,
) {
    // Adding nothing is a no-op: no request is sent.
    if add_amount == 0 {
        return;
    }

    // The server replaces the quantity wholesale, so send the absolute value.
    let new_quantity = current_quantity + add_amount;
    let mutation = Mutation::AddStock {
        product_id: product_id.clone(),
    };

    events
        .send_update(
            format!("Updating stock for {} to {}...", product_id, new_quantity),
            EventType::Refresh,
            LogLevel::Info,
            StateUpdate::MutationStarted {
                mutation: mutation.clone(),
            },
        )
        .await;

    match api.update_stock(&product_id, new_quantity).await {
        Ok(product) => {
            events
                .send_update(
                    format!(
                        "Stock for {} is now {}",
                        product.product_name, product.quantity
                    ),
                    EventType::Success,
                    LogLevel::Info,
                    StateUpdate::MutationOk { mutation },
                )
                .await;
            refresh(api, events).await;
        }
        Err(e) => {
            let message = e.to_string();
            events
                .send_update(
                    message.clone(),
                    EventType::Error,
                    classify_api_error(&e),
                    StateUpdate::MutationFailed { mutation, message },
                )
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockInventoryApi;
    use crate::api::error::ApiError;
    use crate::events::Event;
    use crate::product::{Category, Product};
    use mockall::predicate::eq;

    fn pen(quantity: u32) -> Product {
        Product {
            product_id: "p-1".to_string(),
            product_name: "Pen".to_string(),
            category: Category::Stationery,
            price: 10.0,
            threshold: 5,
            quantity,
        }
    }

    fn pen_input() -> NewProduct {
        NewProduct {
            product_name: "Pen".to_string(),
            category: Category::Stationery,
            price: 10.0,
            threshold: 5,
            quantity: 2,
        }
    }

    fn channel() -> (EventSender, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(32);
        (EventSender::new(tx), rx)
    }

    fn updates(events: &mut mpsc::Receiver<Event>) -> Vec<StateUpdate> {
        let mut collected = Vec::new();
        while let Ok(event) = events.try_recv() {
            if let Some(update) = event.update {
                collected.push(update);
            }
        }
        collected
    }

    #[tokio::test]
    /// A successful refresh replaces the collection.
    async fn test_refresh_sends_full_collection() {
        let mut api = MockInventoryApi::new();
        api.expect_list_products()
            .times(1)
            .returning(|| Ok(vec![pen(2)]));

        let (sender, mut rx) = channel();
        handle_command(&api, &sender, Command::Refresh).await;

        assert_eq!(
            updates(&mut rx),
            vec![StateUpdate::RefreshOk {
                products: vec![pen(2)]
            }]
        );
    }

    #[tokio::test]
    /// A failed refresh reports the generic fetch message and nothing else.
    async fn test_refresh_failure_reports_error() {
        let mut api = MockInventoryApi::new();
        api.expect_list_products()
            .times(1)
            .returning(|| Err(ApiError::Fetch { status: Some(500) }));

        let (sender, mut rx) = channel();
        handle_command(&api, &sender, Command::Refresh).await;

        assert_eq!(
            updates(&mut rx),
            vec![StateUpdate::RefreshFailed {
                message: "Failed to fetch products".to_string()
            }]
        );
    }

    #[tokio::test]
    /// A successful create is followed by a refresh, in that order.
    async fn test_add_product_refreshes_after_create() {
        let mut api = MockInventoryApi::new();
        api.expect_create_product()
            .with(eq(pen_input()))
            .times(1)
            .returning(|_| Ok(pen(2)));
        api.expect_list_products()
            .times(1)
            .returning(|| Ok(vec![pen(2)]));

        let (sender, mut rx) = channel();
        handle_command(&api, &sender, Command::AddProduct(pen_input())).await;

        assert_eq!(
            updates(&mut rx),
            vec![
                StateUpdate::MutationStarted {
                    mutation: Mutation::AddProduct
                },
                StateUpdate::MutationOk {
                    mutation: Mutation::AddProduct
                },
                StateUpdate::RefreshOk {
                    products: vec![pen(2)]
                },
            ]
        );
    }

    #[tokio::test]
    /// A failed create surfaces the server's text and does not refresh.
    async fn test_add_product_failure_skips_refresh() {
        let mut api = MockInventoryApi::new();
        api.expect_create_product()
            .times(1)
            .returning(|_| Err(ApiError::create(Some(400), "name taken".to_string())));
        api.expect_list_products().times(0);

        let (sender, mut rx) = channel();
        handle_command(&api, &sender, Command::AddProduct(pen_input())).await;

        assert_eq!(
            updates(&mut rx),
            vec![
                StateUpdate::MutationStarted {
                    mutation: Mutation::AddProduct
                },
                StateUpdate::MutationFailed {
                    mutation: Mutation::AddProduct,
                    message: "name taken".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    /// The update call sends the absolute new quantity, not the delta.
    async fn test_add_stock_sends_absolute_quantity() {
        let mut api = MockInventoryApi::new();
        api.expect_update_stock()
            .with(eq("p-1"), eq(7u32))
            .times(1)
            .returning(|_, _| Ok(pen(7)));
        api.expect_list_products()
            .times(1)
            .returning(|| Ok(vec![pen(7)]));

        let (sender, mut rx) = channel();
        handle_command(
            &api,
            &sender,
            Command::AddStock {
                product_id: "p-1".to_string(),
                current_quantity: 2,
                add_amount: 5,
            },
        )
        .await;

        let mutation = Mutation::AddStock {
            product_id: "p-1".to_string(),
        };
        assert_eq!(
            updates(&mut rx),
            vec![
                StateUpdate::MutationStarted {
                    mutation: mutation.clone()
                },
                StateUpdate::MutationOk { mutation },
                StateUpdate::RefreshOk {
                    products: vec![pen(7)]
                },
            ]
        );
    }

    #[tokio::test]
    /// Adding zero stock is a no-op: no request, no events.
    async fn test_add_stock_of_zero_sends_nothing() {
        let mut api = MockInventoryApi::new();
        api.expect_update_stock().times(0);
        api.expect_list_products().times(0);

        let (sender, mut rx) = channel();
        handle_command(
            &api,
            &sender,
            Command::AddStock {
                product_id: "p-1".to_string(),
                current_quantity: 7,
                add_amount: 0,
            },
        )
        .await;

        assert!(updates(&mut rx).is_empty());
    }

    #[tokio::test]
    /// A failed stock update keeps the per-product input untouched; only the
    /// error slot changes.
    async fn test_add_stock_failure_reports_error() {
        let mut api = MockInventoryApi::new();
        api.expect_update_stock()
            .times(1)
            .returning(|_, _| Err(ApiError::update(Some(500), String::new())));
        api.expect_list_products().times(0);

        let (sender, mut rx) = channel();
        handle_command(
            &api,
            &sender,
            Command::AddStock {
                product_id: "p-1".to_string(),
                current_quantity: 7,
                add_amount: 3,
            },
        )
        .await;

        let mutation = Mutation::AddStock {
            product_id: "p-1".to_string(),
        };
        assert_eq!(
            updates(&mut rx),
            vec![
                StateUpdate::MutationStarted {
                    mutation: mutation.clone()
                },
                StateUpdate::MutationFailed {
                    mutation,
                    message: "Failed to update stock".to_string()
                },
            ]
        );
    }
}
