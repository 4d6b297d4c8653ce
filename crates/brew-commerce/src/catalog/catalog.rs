//! The product catalog container.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::{Currency, Money};

/// The product catalog: a read-only list of products and categories.
///
/// Catalogs are built once at startup and never mutated afterwards; all
/// lookups borrow.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from products and categories.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Get a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Get a product by id, or fail with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category's display name.
    pub fn category_name(&self, id: &CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The built-in BrewDash product list.
    pub fn demo() -> Self {
        let inr = |major| Money::from_major(major, Currency::INR);
        let image = |slug: &str| format!("https://images.brewdash.app/{slug}.png");

        let categories = vec![
            Category::new("lager", "Lager"),
            Category::new("ipa", "IPA"),
            Category::new("wheat", "Wheat"),
            Category::new("stout", "Stout"),
        ];

        let products = vec![
            Product::new("1", "Golden Lager", "lager", inr(299))
                .with_tagline("Crisp and easy-drinking")
                .with_image(image("golden-lager"))
                .with_rating(4.5, 128)
                .with_pour("650 ml", "4.8% ABV"),
            Product::new("2", "Hoppy Trails IPA", "ipa", inr(349))
                .with_tagline("Pine and grapefruit up front")
                .with_image(image("hoppy-trails"))
                .with_rating(4.7, 203)
                .with_pour("500 ml", "6.2% ABV"),
            Product::new("3", "Midnight Stout", "stout", inr(329))
                .with_tagline("Roasted malt, espresso finish")
                .with_image(image("midnight-stout"))
                .with_rating(4.3, 87)
                .with_pour("500 ml", "5.6% ABV"),
            Product::new("4", "Wheat Cloud", "wheat", inr(279))
                .with_tagline("Hazy, soft, banana and clove")
                .with_image(image("wheat-cloud"))
                .with_rating(4.1, 64)
                .with_pour("650 ml", "4.9% ABV"),
            Product::new("5", "Citrus Haze", "ipa", inr(365))
                .with_tagline("Juicy New England style")
                .with_image(image("citrus-haze"))
                .with_rating(4.8, 241)
                .with_pour("500 ml", "6.5% ABV"),
            Product::new("6", "Amber Harvest", "lager", inr(315))
                .with_tagline("Toasty caramel session lager")
                .with_image(image("amber-harvest"))
                .with_rating(4.0, 52)
                .with_pour("650 ml", "5.0% ABV"),
            Product::new("7", "Velvet Porter", "stout", inr(339))
                .with_tagline("Chocolate-forward and smooth")
                .with_image(image("velvet-porter"))
                .with_rating(4.4, 95)
                .with_pour("500 ml", "5.8% ABV"),
            Product::new("8", "Summer Witbier", "wheat", inr(289))
                .with_tagline("Orange peel and coriander")
                .with_image(image("summer-witbier"))
                .with_rating(4.2, 73)
                .with_pour("650 ml", "4.7% ABV"),
            Product::new("9", "Royal Pilsner", "lager", inr(305))
                .with_tagline("Noble hops, clean bitter snap")
                .with_image(image("royal-pilsner"))
                .with_rating(4.6, 156)
                .with_pour("650 ml", "5.1% ABV"),
            Product::new("10", "Mango Milkshake IPA", "ipa", inr(385))
                .with_tagline("Lactose-smooth with ripe mango")
                .with_image(image("mango-milkshake"))
                .with_rating(4.5, 118)
                .with_pour("500 ml", "6.0% ABV"),
            Product::new("11", "Coffee Nitro Stout", "stout", inr(355))
                .with_tagline("Cold brew on a nitro pour")
                .with_image(image("coffee-nitro"))
                .with_rating(4.9, 310)
                .with_pour("500 ml", "6.8% ABV"),
            Product::new("12", "Monsoon Hefeweizen", "wheat", inr(295))
                .with_tagline("Bavarian yeast, rainy-day body")
                .with_image(image("monsoon-hefe"))
                .with_rating(3.9, 41)
                .with_pour("650 ml", "5.2% ABV"),
        ];

        Self::new(products, categories)
    }
}
