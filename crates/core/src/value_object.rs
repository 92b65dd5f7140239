//! Value object trait: equality by value, not identity.
//!
//! A value object has no identity of its own. Two product names spelled the same
//! way are the same name; two prices of `5000` are the same price.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. Their constructors are the
/// only place where field-level validation happens: once a value object exists,
/// it is known to be well-formed, so the layers above never re-check it.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Sku(String);
///
/// impl Sku {
///     fn parse(raw: &str) -> DomainResult<Self> {
///         if raw.trim().is_empty() {
///             return Err(DomainError::validation("sku cannot be empty"));
///         }
///         Ok(Self(raw.to_string()))
///     }
/// }
///
/// impl ValueObject for Sku {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
