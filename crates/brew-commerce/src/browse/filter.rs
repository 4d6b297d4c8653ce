//! Browse filter types.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A browse filter, evaluated directly against catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by category.
    Category(CategoryId),
    /// Case-insensitive substring match on name and tagline.
    Text(String),
    /// Filter by price range, inclusive at both ends.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Filter by minimum rating.
    MinRating(f64),
}

impl Filter {
    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a minimum-rating filter.
    pub fn min_rating(min: f64) -> Self {
        Filter::MinRating(min)
    }

    /// Check whether a product passes this filter.
    ///
    /// Price bounds in a different currency than the product never match.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(id) => &product.category == id,
            Filter::Text(query) => {
                let query = query.to_lowercase();
                product.name.to_lowercase().contains(&query)
                    || product.tagline.to_lowercase().contains(&query)
            }
            Filter::PriceRange { min, max } => {
                if let Some(min) = min {
                    if min.currency != product.price.currency
                        || product.price.amount_minor < min.amount_minor
                    {
                        return false;
                    }
                }
                if let Some(max) = max {
                    if max.currency != product.price.currency
                        || product.price.amount_minor > max.amount_minor
                    {
                        return false;
                    }
                }
                true
            }
            Filter::MinRating(min) => product.rating >= *min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn lager() -> Product {
        Product::new("1", "Golden Lager", "lager", Money::from_major(299, Currency::INR))
            .with_tagline("Crisp and easy-drinking")
            .with_rating(4.5, 128)
    }

    #[test]
    fn test_category_filter() {
        assert!(Filter::category("lager").matches(&lager()));
        assert!(!Filter::category("ipa").matches(&lager()));
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        assert!(Filter::text("golden").matches(&lager()));
        assert!(Filter::text("CRISP").matches(&lager()));
        assert!(!Filter::text("stout").matches(&lager()));
    }

    #[test]
    fn test_price_range_filter() {
        let inr = |major| Money::from_major(major, Currency::INR);

        assert!(Filter::price_range(Some(inr(250)), Some(inr(300))).matches(&lager()));
        assert!(!Filter::price_range(Some(inr(300)), None).matches(&lager()));
        assert!(!Filter::price_range(None, Some(inr(200))).matches(&lager()));
        assert!(Filter::price_range(None, None).matches(&lager()));
    }

    #[test]
    fn test_price_range_foreign_currency_never_matches() {
        let filter = Filter::price_range(Some(Money::from_major(1, Currency::USD)), None);
        assert!(!filter.matches(&lager()));
    }

    #[test]
    fn test_min_rating_filter() {
        assert!(Filter::min_rating(4.0).matches(&lager()));
        assert!(!Filter::min_rating(4.6).matches(&lager()));
    }
}
