//! List query: name filter + sort spec.
//!
//! A sort spec is a plain string such as `price_desc`. Its prefix picks the key
//! (`id`, `name`, `price`) and an `_desc` ending flips the direction. A prefix
//! that names no known key leaves the filtered list in insertion order.

use core::cmp::Ordering;

use catalog_core::Entity;

use crate::product::Product;

/// Query-string parameters accepted by the list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub name: Option<String>,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `key=value` pairs. The first `name` and first `sort`
    /// win; repeats and unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut query.name,
                "sort" => &mut query.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// The name filter, if one was given and is not blank.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort.as_deref().and_then(SortSpec::parse)
    }

    /// Filter then sort a snapshot of the collection.
    pub(crate) fn apply<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<Product> {
        let mut items: Vec<Product> = match self.name_filter() {
            Some(needle) => products
                .into_iter()
                .filter(|p| p.name().contains_ignore_case(needle))
                .cloned()
                .collect(),
            None => products.into_iter().cloned().collect(),
        };

        if let Some(spec) = self.sort_spec() {
            spec.sort(&mut items);
        }
        items
    }
}

/// Which product attribute to order by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Price,
    /// The spec named no known key; ordering is left alone.
    Unsorted,
}

impl SortKey {
    fn from_prefix(spec: &str) -> Self {
        if spec.starts_with("id") {
            Self::Id
        } else if spec.starts_with("name") {
            Self::Name
        } else if spec.starts_with("price") {
            Self::Price
        } else {
            Self::Unsorted
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Id => a.id().cmp(&b.id()),
            Self::Name => a
                .name()
                .folded()
                .cmp(&b.name().folded())
                .then_with(|| a.name().as_str().cmp(b.name().as_str())),
            Self::Price => a.price().cmp(&b.price()),
            Self::Unsorted => Ordering::Equal,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A parsed sort spec.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse a raw sort string. Blank input means "no sort requested".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        let direction = if raw.ends_with("_desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Some(Self { key: SortKey::from_prefix(raw), direction })
    }

    /// Stable in both directions: equal keys keep their relative order.
    pub fn sort(&self, items: &mut [Product]) {
        if self.key == SortKey::Unsorted {
            return;
        }
        let key = self.key;
        match self.direction {
            SortDirection::Ascending => items.sort_by(|a, b| key.compare(a, b)),
            SortDirection::Descending => items.sort_by(|a, b| key.compare(a, b).reverse()),
        }
    }
}
