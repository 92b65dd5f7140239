use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ValueObject};

pub(crate) const NAME_REQUIRED: &str = "The field Name is cannot be null or empty";
pub(crate) const PRICE_OUT_OF_RANGE: &str = "The field Price must be between 0 and 1000000000000.";

/// Product identifier, assigned by the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl ProductId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// The id directly after this one.
    pub(crate) fn next(self) -> DomainResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::conflict("product id space exhausted"))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(Self)
            .map_err(|e| DomainError::validation(format!("invalid product id `{s}`: {e}")))
    }
}

/// A non-blank product name.
///
/// Kept exactly as supplied; only blankness is checked. Uniqueness is a store
/// concern and is compared case-insensitively through [`ProductName::eq_ignore_case`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductName(pub(crate) String);

impl ProductName {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::validation(NAME_REQUIRED));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn eq_ignore_case(&self, other: &ProductName) -> bool {
        self.0 == other.0 || self.folded() == other.folded()
    }

    /// Whether `needle` occurs anywhere in the name, ignoring case.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.folded().contains(&needle.to_lowercase())
    }

    pub(crate) fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl ValueObject for ProductName {}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A price in the inclusive range `[0, 1_000_000_000_000]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] pub(crate) Decimal);

impl Price {
    pub fn max() -> Decimal {
        Decimal::from(1_000_000_000_000_i64)
    }

    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount < Decimal::ZERO || amount > Self::max() {
            return Err(DomainError::validation(PRICE_OUT_OF_RANGE));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

/// A product record as owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    price: Price,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: ProductName, price: Price) -> Self {
        Self { id, name, price }
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub(crate) fn rename(&mut self, name: ProductName) {
        self.name = name;
    }

    pub(crate) fn reprice(&mut self, price: Price) {
        self.price = price;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Input for creating a product. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: Price,
}

/// Input for replacing a product's name and price.
///
/// `id` is the id the caller claims to be updating; it must agree with the id
/// the request was routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
}

/// Input for renaming a product, leaving its price untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductNameUpdate {
    pub id: ProductId,
    pub name: ProductName,
}
