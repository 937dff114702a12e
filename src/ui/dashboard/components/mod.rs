//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod filters;
pub mod footer;
pub mod form;
pub mod header;
pub mod logs;
pub mod products;
pub mod stats;
