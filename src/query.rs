//! Client-side list query: search filter plus sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::Product;

/// Column a product list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Code,
    #[default]
    Name,
    Price,
    Stock,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Code => "code",
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Stock => "stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseSortError {
    #[error("Unknown sort key: {0}")]
    UnknownKey(String),
    #[error("Unknown sort order: {0}")]
    UnknownOrder(String),
}

impl FromStr for SortKey {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(SortKey::Code),
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "stock" => Ok(SortKey::Stock),
            _ => Err(ParseSortError::UnknownKey(s.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ParseSortError::UnknownOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search term and ordering applied to a product list.
///
/// The default matches a freshly opened list screen: no search, sorted by
/// name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, sort_key: SortKey, sort_order: SortOrder) -> Self {
        Self {
            search: search.into(),
            sort_key,
            sort_order,
        }
    }

    /// Returns `true` when `product` passes the search filter.
    ///
    /// The name is matched case-insensitively; the code is matched against its
    /// decimal text as-is, so `"99"` finds code `199`.
    pub fn matches(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            || product.code.to_string().contains(&self.search)
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.sort_key {
            SortKey::Code => a.code.cmp(&b.code),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Stock => a.stock.cmp(&b.stock),
        };
        match self.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Filters and orders `products` for display. The input is left untouched.
///
/// The sort is stable, so products that compare equal keep their input order.
pub fn query(products: &[Product], query: &ListQuery) -> Vec<Product> {
    let mut view: Vec<Product> = products
        .iter()
        .filter(|product| query.matches(product))
        .cloned()
        .collect();
    view.sort_by(|a, b| query.compare(a, b));
    view
}
