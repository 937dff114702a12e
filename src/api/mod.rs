use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::product::{NewProduct, Product};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait InventoryApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the full product collection.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Persist a new product server-side. The server assigns the product ID.
    async fn create_product(&self, input: NewProduct) -> Result<Product, ApiError>;

    /// Overwrite a product's quantity with an absolute new value.
    async fn update_stock(
        &self,
        product_id: &str,
        new_quantity: u32,
    ) -> Result<Product, ApiError>;
}
