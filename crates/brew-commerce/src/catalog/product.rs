//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Catalog items are read-only records; the cart copies the fields it
/// needs at add-time and never reads them back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// One-line description for listings.
    pub tagline: String,
    /// Image URL.
    pub image: String,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Unit price.
    pub price: Money,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Serving volume display string (e.g., "650 ml").
    pub volume: String,
    /// Alcohol content display string (e.g., "4.8% ABV").
    pub abv: String,
}

impl Product {
    /// Create a new product with empty display metadata.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<CategoryId>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tagline: String::new(),
            image: String::new(),
            category: category.into(),
            price,
            rating: 0.0,
            reviews: 0,
            volume: String::new(),
            abv: String::new(),
        }
    }

    /// Set the listing tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Set the pour details (volume and alcohol content).
    pub fn with_pour(mut self, volume: impl Into<String>, abv: impl Into<String>) -> Self {
        self.volume = volume.into();
        self.abv = abv.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_builder() {
        let product = Product::new("1", "Golden Lager", "lager", Money::from_major(299, Currency::INR))
            .with_tagline("Crisp and easy-drinking")
            .with_rating(4.5, 128)
            .with_pour("650 ml", "4.8% ABV");

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.category.as_str(), "lager");
        assert_eq!(product.price.amount_minor, 29900);
        assert_eq!(product.reviews, 128);
        assert_eq!(product.volume, "650 ml");
    }
}
