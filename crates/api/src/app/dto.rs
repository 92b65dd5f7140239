use rust_decimal::Decimal;
use serde::Deserialize;

use catalog_core::{DomainError, DomainResult};
use catalog_products::{NewProduct, Price, ProductId, ProductName, ProductNameUpdate, ProductUpdate};

pub const ID_REQUIRED: &str = "The Id field is required.";
pub const PRICE_REQUIRED: &str = "The Price field is required.";

// -------------------------
// Request DTOs
// -------------------------
//
// Every field is optional at the JSON level so that a missing field turns
// into the same `{ "errorMessage": ... }` response as an invalid one, rather
// than a deserializer error. Prices are read from the JSON text as exact
// decimals, never through `f64`.

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductNameRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

// -------------------------
// Validation into domain inputs
// -------------------------

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = DomainError;

    fn try_from(body: CreateProductRequest) -> DomainResult<Self> {
        Ok(NewProduct {
            name: name(body.name)?,
            price: price(body.price)?,
        })
    }
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = DomainError;

    fn try_from(body: UpdateProductRequest) -> DomainResult<Self> {
        Ok(ProductUpdate {
            id: id(body.id)?,
            name: name(body.name)?,
            price: price(body.price)?,
        })
    }
}

impl TryFrom<UpdateProductNameRequest> for ProductNameUpdate {
    type Error = DomainError;

    fn try_from(body: UpdateProductNameRequest) -> DomainResult<Self> {
        Ok(ProductNameUpdate {
            id: id(body.id)?,
            name: name(body.name)?,
        })
    }
}

fn id(raw: Option<i32>) -> DomainResult<ProductId> {
    raw.map(ProductId::new)
        .ok_or_else(|| DomainError::validation(ID_REQUIRED))
}

// A missing name reads the same as an empty one.
fn name(raw: Option<String>) -> DomainResult<ProductName> {
    ProductName::parse(raw.unwrap_or_default())
}

fn price(raw: Option<Decimal>) -> DomainResult<Price> {
    let amount = raw.ok_or_else(|| DomainError::validation(PRICE_REQUIRED))?;
    Price::new(amount)
}
