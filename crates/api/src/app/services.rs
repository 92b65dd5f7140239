use catalog_products::ProductStore;

use crate::config::ApiConfig;

/// State shared by every handler.
#[derive(Debug)]
pub struct AppServices {
    products: ProductStore,
}

impl AppServices {
    pub fn new(products: ProductStore) -> Self {
        Self { products }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let products = if config.seed {
            ProductStore::seeded()
        } else {
            ProductStore::new()
        };
        tracing::info!(products = products.len(), "product store ready");
        Self::new(products)
    }

    pub fn products(&self) -> &ProductStore {
        &self.products
    }
}
