//! Browse query builder.

use crate::browse::Filter;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort keys for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Sort by product name.
    #[default]
    Name,
    /// Sort by price.
    Price,
    /// Sort by rating.
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "price" => Some(SortKey::Price),
            "rating" => Some(SortKey::Rating),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Rating => "Rating",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// A browse query over the catalog.
///
/// Filters are AND-ed; the sort is stable, so equal keys keep catalog
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrowseQuery {
    /// Filters to apply.
    pub filters: Vec<Filter>,
    /// Sort key.
    pub sort: SortKey,
    /// Sort direction.
    pub order: SortOrder,
}

impl BrowseQuery {
    /// Create a new browse query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text filter. Empty queries are ignored.
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.filters.push(Filter::Text(query));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort key and direction.
    pub fn with_sort(mut self, sort: SortKey, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    /// Apply the query to a product slice.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .collect();

        matched.sort_by(|a, b| {
            let ordering = match self.sort {
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Price => a.price.amount_minor.cmp(&b.price.amount_minor),
                SortKey::Rating => a
                    .rating
                    .partial_cmp(&b.rating)
                    .unwrap_or(Ordering::Equal),
            };
            match self.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        matched
    }
}
