//! Fallback catalog used when nothing has been persisted yet.

use openclose_core::{NewProduct, Price, Product, ProductId};

/// The three starter products, in display order.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        NewProduct::new("Coffee", Price::from_cents(399), 100)
            .with_description("Freshly brewed coffee")
            .into_product(ProductId::new("1")),
        NewProduct::new("Bagel", Price::from_cents(249), 30)
            .with_description("Freshly baked bagel")
            .into_product(ProductId::new("2")),
        NewProduct::new("Sandwich", Price::from_cents(699), 15)
            .with_description("Ham and cheese sandwich")
            .into_product(ProductId::new("3")),
    ]
}
