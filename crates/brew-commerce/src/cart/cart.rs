//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 99;

/// One product's presence in the active cart.
///
/// Lines are keyed by product id; a product appears at most once. The
/// display metadata and unit price are copied from the catalog item at
/// add-time and never refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product this line holds.
    pub product_id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Image URL at add-time.
    pub image: String,
    /// Unit price at add-time.
    pub unit_price: Money,
    /// Quantity, always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Total for this line (unit price × quantity), checked.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_mul(i64::from(self.quantity))
    }
}

/// The active, unsubmitted cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add a catalog item to the cart.
    ///
    /// If a line for the same product already exists, its quantity is
    /// increased by `quantity_delta`; the existing line's price and
    /// display metadata are kept (first add wins). Otherwise a new line
    /// is appended.
    ///
    /// Returns an error if:
    /// - `quantity_delta` is zero
    /// - the line would exceed `MAX_QUANTITY_PER_LINE`
    /// - the product is priced in a different currency than the cart
    pub fn add(&mut self, product: &Product, quantity_delta: u32) -> Result<(), CommerceError> {
        if quantity_delta == 0 {
            return Err(CommerceError::InvalidQuantity(quantity_delta));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity_delta)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity_delta > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity_delta,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        self.lines.push(CartLine::from_product(product, quantity_delta));
        Ok(())
    }

    /// Decrease a line's quantity by one, removing the line at quantity 1.
    ///
    /// A line is never left at quantity zero. Returns `false` if no line
    /// matches the id.
    pub fn remove_one(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.lines.iter().position(|l| &l.product_id == id) else {
            return false;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        true
    }

    /// Remove an entire line regardless of quantity.
    ///
    /// Returns `false` if no line matches the id.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != id);
        self.lines.len() < len_before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Calculate the cart subtotal, checked.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let line_totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(line_totals.iter(), self.currency)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == id)
    }

    /// All lines, in add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Move all lines out, leaving the cart empty. Used by order placement.
    pub(crate) fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;

    fn product(id: &str, name: &str, major: i64) -> Product {
        Product::new(id, name, CategoryId::new("lager"), Money::from_major(major, Currency::INR))
            .with_image(format!("https://images.brewdash.app/{id}.png"))
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 1).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);
        let line = cart.get(&ProductId::new("1")).unwrap();
        assert_eq!(line.name, "Golden Lager");
        assert_eq!(line.unit_price.amount_minor, 29900);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 1).unwrap();
        cart.add(&product("1", "Golden Lager", 299), 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_first_add_wins_on_price_and_metadata() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 1).unwrap();

        // Same id, different price and name; the existing line is kept.
        cart.add(&product("1", "Golden Lager (new label)", 399), 1)
            .unwrap();

        let line = cart.get(&ProductId::new("1")).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.name, "Golden Lager");
        assert_eq!(line.unit_price.amount_minor, 29900);
    }

    #[test]
    fn test_add_zero_quantity_is_rejected() {
        let mut cart = Cart::new(Currency::INR);
        let result = cart.add(&product("1", "Golden Lager", 299), 0);
        assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_over_limit_is_rejected() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), MAX_QUANTITY_PER_LINE)
            .unwrap();

        let result = cart.add(&product("1", "Golden Lager", 299), 1);
        assert!(matches!(
            result,
            Err(CommerceError::QuantityExceedsLimit(_, MAX_QUANTITY_PER_LINE))
        ));
        assert_eq!(cart.item_count(), u64::from(MAX_QUANTITY_PER_LINE));
    }

    #[test]
    fn test_add_currency_mismatch_is_rejected() {
        let mut cart = Cart::new(Currency::INR);
        let foreign = Product::new("1", "Import", "lager", Money::new(999, Currency::USD));
        assert!(matches!(
            cart.add(&foreign, 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_remove_one_decrements() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 3).unwrap();

        assert!(cart.remove_one(&ProductId::new("1")));
        assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_one_at_quantity_one_removes_line() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 1).unwrap();

        assert!(cart.remove_one(&ProductId::new("1")));
        assert!(cart.is_empty());
        assert!(cart.get(&ProductId::new("1")).is_none());
    }

    #[test]
    fn test_remove_one_unknown_id_is_noop() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 1).unwrap();
        let before = cart.clone();

        assert!(!cart.remove_one(&ProductId::new("404")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_whole_line() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 5).unwrap();
        cart.add(&product("2", "Hoppy Trails IPA", 349), 1).unwrap();

        assert!(cart.remove(&ProductId::new("1")));
        assert_eq!(cart.len(), 1);
        assert!(!cart.remove(&ProductId::new("1")));
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 2).unwrap();
        cart.add(&product("2", "Hoppy Trails IPA", 349), 1).unwrap();

        let subtotal = cart.subtotal().unwrap();
        assert_eq!(subtotal.amount_minor, 2 * 29900 + 34900);
    }

    #[test]
    fn test_subtotal_empty_cart_is_zero() {
        let cart = Cart::new(Currency::INR);
        assert!(cart.subtotal().unwrap().is_zero());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product("1", "Golden Lager", 299), 2).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }
}
