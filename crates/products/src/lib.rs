//! Products domain module.
//!
//! This crate contains the product model, its field validation, the list query
//! (filter + sort) and the in-memory [`ProductStore`] that owns every product.
//! It knows nothing about HTTP.

pub mod product;
pub mod query;
pub mod store;

pub use product::{NewProduct, Price, Product, ProductId, ProductName, ProductNameUpdate, ProductUpdate};
pub use query::{ListQuery, SortDirection, SortKey, SortSpec};
pub use store::ProductStore;
