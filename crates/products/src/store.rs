//! In-memory product store.
//!
//! One `RwLock` guards the whole collection. Every mutation holds the write
//! lock from its first check to its last write, so a failed operation leaves
//! nothing behind and readers never see half an update.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use catalog_core::{DomainError, DomainResult, Entity};

use crate::product::{NewProduct, Price, Product, ProductId, ProductName, ProductNameUpdate, ProductUpdate};
use crate::query::ListQuery;

pub(crate) const NOT_FOUND_BY_ID: &str = "Product not found by given Id";
pub(crate) const NOT_FOUND: &str = "Product Not Found";
pub(crate) const ID_MISMATCH: &str = "Id was not match";
pub(crate) const NAME_NOT_UNIQUE: &str = "Name must be unique";

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    /// Highest id ever held; never decreases, so deleted ids are not handed out again.
    last_id: Option<ProductId>,
}

impl Inner {
    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.has_id(id))
    }

    fn name_taken(&self, name: &ProductName, except: Option<ProductId>) -> bool {
        self.products
            .iter()
            .any(|p| Some(p.id()) != except && p.name().eq_ignore_case(name))
    }

    fn next_id(&self) -> DomainResult<ProductId> {
        match self.last_id {
            Some(last) => last.next(),
            None => Ok(ProductId::new(1)),
        }
    }

    fn push(&mut self, product: Product) {
        let id = product.id();
        self.last_id = Some(self.last_id.map_or(id, |last| last.max(id)));
        self.products.push(product);
    }

    /// Shared preamble of both update flavours: ids agree, target exists, new
    /// name is free. Returns the index of the product to mutate.
    fn check_update(&self, route_id: ProductId, body_id: ProductId, name: &ProductName) -> DomainResult<usize> {
        if route_id != body_id {
            return Err(DomainError::validation(ID_MISMATCH));
        }
        let idx = self
            .position(route_id)
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        if self.name_taken(name, Some(route_id)) {
            return Err(DomainError::conflict(NAME_NOT_UNIQUE));
        }
        Ok(idx)
    }
}

/// The in-memory owner of every [`Product`].
#[derive(Debug, Default)]
pub struct ProductStore {
    inner: RwLock<Inner>,
}

impl ProductStore {
    /// An empty store. The first product created gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the default catalog (ids 1-4).
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        for (id, name, price) in [
            (1, "Computer", 40_000),
            (2, "Printer", 5_000),
            (3, "Tablet", 10_000),
            (4, "Monitor", 7_000),
        ] {
            inner.push(Product::new(
                ProductId::new(id),
                ProductName(name.to_string()),
                Price(Decimal::from(price)),
            ));
        }
        Self { inner: RwLock::new(inner) }
    }

    pub fn len(&self) -> usize {
        self.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Products matching `query`, in insertion order unless the query sorts them.
    pub fn list(&self, query: &ListQuery) -> Vec<Product> {
        query.apply(&self.read().products)
    }

    pub fn get(&self, id: ProductId) -> DomainResult<Product> {
        self.read()
            .products
            .iter()
            .find(|p| p.has_id(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found(NOT_FOUND_BY_ID))
    }

    pub fn create(&self, new: NewProduct) -> DomainResult<Product> {
        let mut inner = self.write();
        if inner.name_taken(&new.name, None) {
            return Err(DomainError::conflict(NAME_NOT_UNIQUE));
        }

        let product = Product::new(inner.next_id()?, new.name, new.price);
        inner.push(product.clone());
        debug!(id = %product.id(), name = %product.name(), "product created");
        Ok(product)
    }

    /// Replace name and price of the product at `route_id`.
    pub fn update(&self, route_id: ProductId, update: ProductUpdate) -> DomainResult<Product> {
        let mut inner = self.write();
        let idx = inner.check_update(route_id, update.id, &update.name)?;

        let product = &mut inner.products[idx];
        product.rename(update.name);
        product.reprice(update.price);
        debug!(id = %route_id, "product updated");
        Ok(product.clone())
    }

    /// Rename the product at `route_id`; its price is left as is.
    pub fn update_name(&self, route_id: ProductId, update: ProductNameUpdate) -> DomainResult<Product> {
        let mut inner = self.write();
        let idx = inner.check_update(route_id, update.id, &update.name)?;

        let product = &mut inner.products[idx];
        product.rename(update.name);
        debug!(id = %route_id, "product renamed");
        Ok(product.clone())
    }

    pub fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut inner = self.write();
        let idx = inner
            .position(id)
            .ok_or_else(|| DomainError::not_found(NOT_FOUND_BY_ID))?;
        inner.products.remove(idx);
        debug!(id = %id, "product deleted");
        Ok(())
    }

    // No operation panics while holding the lock, so a poisoned guard still
    // protects a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| {
            warn!("product store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| {
            warn!("product store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}
