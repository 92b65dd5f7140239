use axum::Router;

pub mod products;
pub mod system;

/// Router for every resource endpoint.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
