//! Dashboard UI module
//!
//! The dashboard is the main screen: aggregate statistics, the add-product
//! form, the filter bar, the product table and the activity log.

pub mod components;
mod renderer;
mod state;
mod updaters;

pub use renderer::render_dashboard;
pub use state::{DashboardState, FilterState, Focus, FormField, ProductForm};
