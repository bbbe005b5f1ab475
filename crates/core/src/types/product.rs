//! Inventory products.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Errors that can occur when validating a product.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The name is empty or only whitespace.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The price is below zero.
    #[error("product price cannot be negative (got {0})")]
    NegativePrice(Price),
}

/// A product held in the shop's inventory.
///
/// The `id` is assigned by the inventory store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Units on hand. Zero means out of stock.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image reference. Carried through storage but not otherwise used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Product data supplied by the caller before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Stock availability as shown in the customer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock(u32),
    OutOfStock,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InStock(quantity) => write!(f, "In Stock ({quantity})"),
            Self::OutOfStock => f.write_str("Out of Stock"),
        }
    }
}

fn validate_fields(name: &str, price: Price) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    if price.is_negative() {
        return Err(ProductError::NegativePrice(price));
    }
    Ok(())
}

impl NewProduct {
    /// Create product data with no description or image.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            description: None,
            image: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Check the name and price constraints.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::EmptyName` for a blank name and
    /// `ProductError::NegativePrice` for a price below zero.
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_fields(&self.name, self.price)
    }

    /// Attach an id, producing a stored product.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
            image: self.image,
        }
    }
}

impl Product {
    /// Check the name and price constraints.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::EmptyName` for a blank name and
    /// `ProductError::NegativePrice` for a price below zero.
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_fields(&self.name, self.price)
    }

    #[must_use]
    pub const fn availability(&self) -> Availability {
        if self.quantity == 0 {
            Availability::OutOfStock
        } else {
            Availability::InStock(self.quantity)
        }
    }

    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Case-insensitive substring match against the name or description.
    ///
    /// `query` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(query))
    }

    /// Case-insensitive substring match against the name or description.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn coffee() -> Product {
        NewProduct::new("Coffee", Price::from_cents(399), 100)
            .with_description("Freshly brewed coffee")
            .into_product(ProductId::new("1"))
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let product = NewProduct::new("   ", Price::from_cents(100), 1);
        assert_eq!(product.validate(), Err(ProductError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let product = NewProduct::new("Tea", Price::from_cents(-1), 1);
        assert!(matches!(
            product.validate(),
            Err(ProductError::NegativePrice(_))
        ));
    }

    #[test]
    fn test_validate_accepts_free_items() {
        assert!(NewProduct::new("Water", Price::ZERO, 0).validate().is_ok());
    }

    #[test]
    fn test_matches_name_and_description_case_insensitively() {
        let product = coffee();
        assert!(product.matches("COF"));
        assert!(product.matches("brewed"));
        assert!(!product.matches("bagel"));
    }

    #[test]
    fn test_matches_without_description() {
        let mut product = coffee();
        product.description = None;
        assert!(!product.matches("brewed"));
        assert!(product.matches("fee"));
    }

    #[test]
    fn test_availability() {
        let mut product = coffee();
        assert_eq!(product.availability().to_string(), "In Stock (100)");
        product.quantity = 0;
        assert_eq!(product.availability(), Availability::OutOfStock);
        assert_eq!(product.availability().to_string(), "Out of Stock");
    }

    #[test]
    fn test_stored_product_validates_like_new_product() {
        let mut product = coffee();
        assert!(product.validate().is_ok());

        product.name = "\t".to_string();
        assert_eq!(product.validate(), Err(ProductError::EmptyName));

        product.name = "Coffee".to_string();
        product.price = Price::from_cents(-50);
        assert_eq!(
            product.validate(),
            Err(ProductError::NegativePrice(Price::from_cents(-50)))
        );
    }

    #[test]
    fn test_image_is_carried_into_product() {
        let product = NewProduct::new("Tea", Price::from_cents(250), 1)
            .with_image("https://img.example/tea.png")
            .into_product(ProductId::new("7"));
        assert_eq!(product.image.as_deref(), Some("https://img.example/tea.png"));
        assert_eq!(product.description, None);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["image"], "https://img.example/tea.png");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["quantity"], 100);
        assert_eq!(json["description"], "Freshly brewed coffee");
        assert!(json.get("image").is_none());
    }
}
