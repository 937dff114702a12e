//! Inventory API Client
//!
//! A thin client for the inventory service, wrapping the three remote
//! operations (list, create, update stock) behind [`InventoryApi`]. Every
//! request obtains a fresh bearer token from the session provider and carries
//! a JSON content-type marker.

use crate::api::InventoryApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::product::{NewProduct, Product};
use crate::session::SessionProvider;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::Serialize;
use std::sync::Arc;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("shelfwatch/", env!("CARGO_PKG_VERSION"));

/// Wire format of the stock update call. The quantity is the absolute new
/// value, not a delta; the caller computes `current + added` beforehand.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStockRequest<'a> {
    product_id: &'a str,
    quantity: u32,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
    session: Arc<dyn SessionProvider>,
}

impl ApiClient {
    pub fn new(environment: Environment, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(cli_consts::connect_timeout())
                .timeout(cli_consts::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            session,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Attaches the current credential and the standard headers.
    ///
    /// An absent session produces an empty Authorization value; the request
    /// is sent regardless and any rejection surfaces as a transport error.
    async fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.session.current_token().await;
        builder
            .header("Authorization", token)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
    }
}

#[async_trait::async_trait]
impl InventoryApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Fetch the full product collection.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.client.get(self.build_url("products"));
        let response = self
            .with_headers(request)
            .await
            .send()
            .await
            .map_err(|e| ApiError::Fetch {
                status: e.status().map(|s| s.as_u16()),
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Fetch {
                status: Some(response.status().as_u16()),
            });
        }

        response.json::<Vec<Product>>().await.map_err(|e| {
            ApiError::Fetch {
                status: e.status().map(|s| s.as_u16()),
            }
        })
    }

    /// Persist a new product server-side. The server assigns the product ID.
    async fn create_product(&self, input: NewProduct) -> Result<Product, ApiError> {
        let request = self.client.post(self.build_url("products")).json(&input);
        let response = self
            .with_headers(request)
            .await
            .send()
            .await
            .map_err(|e| {
                ApiError::create(e.status().map(|s| s.as_u16()), String::new())
            })?;

        if !response.status().is_success() {
            return Err(ApiError::create_from_response(response).await);
        }

        response.json::<Product>().await.map_err(|e| {
            ApiError::create(e.status().map(|s| s.as_u16()), String::new())
        })
    }

    /// Overwrite a product's quantity with an absolute new value.
    async fn update_stock(
        &self,
        product_id: &str,
        new_quantity: u32,
    ) -> Result<Product, ApiError> {
        let body = UpdateStockRequest {
            product_id,
            quantity: new_quantity,
        };
        let request = self.client.put(self.build_url("stock")).json(&body);
        let response = self
            .with_headers(request)
            .await
            .send()
            .await
            .map_err(|e| {
                ApiError::update(e.status().map(|s| s.as_u16()), String::new())
            })?;

        if !response.status().is_success() {
            return Err(ApiError::update_from_response(response).await);
        }

        response.json::<Product>().await.map_err(|e| {
            ApiError::update(e.status().map(|s| s.as_u16()), String::new())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MockSessionProvider;

    fn client_with_token(environment: Environment, token: &str) -> ApiClient {
        let mut session = MockSessionProvider::new();
        let token = token.to_string();
        session
            .expect_current_token()
            .returning(move || token.clone());
        ApiClient::new(environment, Arc::new(session))
    }

    #[test]
    fn test_build_url_joins_without_duplicate_slashes() {
        let client = client_with_token(Environment::Local, "t");
        assert_eq!(client.build_url("products"), "http://localhost:3000/products");
        assert_eq!(client.build_url("/stock"), "http://localhost:3000/stock");
    }

    #[test]
    fn test_update_stock_request_wire_format() {
        let body = UpdateStockRequest {
            product_id: "p-1",
            quantity: 7,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["productId"], "p-1");
        assert_eq!(value["quantity"], 7);
    }
}

#[cfg(test)]
/// These are ignored by default since they require a live inventory API.
mod live_api_tests {
    use super::*;
    use crate::product::Category;
    use crate::session::FileSessionProvider;

    fn live_client() -> ApiClient {
        let config_path = crate::config::get_config_path().expect("config path");
        let session = Arc::new(FileSessionProvider::new(config_path));
        ApiClient::new(Environment::Production, session)
    }

    #[tokio::test]
    #[ignore] // This test requires a live inventory API and a saved login.
    /// Should list the product collection.
    async fn test_list_products() {
        match live_client().list_products().await {
            Ok(products) => println!("Got {} products", products.len()),
            Err(e) => panic!("Failed to list products: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live inventory API and a saved login.
    /// Should create a product and report it back with a server-assigned ID.
    async fn test_create_product() {
        let input = NewProduct {
            product_name: "Test Pen".to_string(),
            category: Category::Stationery,
            price: 10.0,
            threshold: 5,
            quantity: 2,
        };
        match live_client().create_product(input).await {
            Ok(product) => {
                println!("Created product: {}", product);
                assert!(!product.product_id.is_empty());
            }
            Err(e) => panic!("Failed to create product: {}", e),
        }
    }
}
