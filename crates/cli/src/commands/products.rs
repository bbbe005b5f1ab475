//! Product catalog commands.

use std::io::Write;

use openclose_core::{NewProduct, Price, Product, ProductId};
use openclose_store::InventoryError;

use super::App;
use crate::error::CliError;

/// Field changes for `products update`. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub quantity: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ProductChanges {
    fn apply(self, mut product: Product) -> Product {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(description) = self.description {
            product.description = (!description.is_empty()).then_some(description);
        }
        if let Some(image) = self.image {
            product.image = (!image.is_empty()).then_some(image);
        }
        product
    }
}

fn write_row(out: &mut impl Write, product: &Product) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<36}  {:<20}  {:>9}  {:<16}  {}",
        product.id,
        product.name,
        product.price.display(),
        product.availability().to_string(),
        product.description.as_deref().unwrap_or("")
    )
}

/// Print products matching `search` (all products when absent or blank).
///
/// # Errors
///
/// Returns `CliError::Io` if output cannot be written.
pub fn list(app: &App, search: Option<&str>, out: &mut impl Write) -> Result<usize, CliError> {
    let products = app.inventory.search_products(search.unwrap_or(""));
    if products.is_empty() {
        writeln!(out, "No products found")?;
        return Ok(0);
    }

    writeln!(
        out,
        "{:<36}  {:<20}  {:>9}  {:<16}  DESCRIPTION",
        "ID", "NAME", "PRICE", "STOCK"
    )?;
    for product in &products {
        write_row(out, product)?;
    }
    Ok(products.len())
}

/// Add a product. Admin only.
///
/// # Errors
///
/// Returns `CliError::NotAuthenticated` without an admin session, or
/// `CliError::Inventory` if the product is invalid or cannot be saved.
pub fn add(app: &mut App, product: NewProduct, out: &mut impl Write) -> Result<Product, CliError> {
    app.require_admin()?;
    let product = app.inventory.add_product(product)?;
    writeln!(out, "{}", product.id)?;
    Ok(product)
}

/// Change fields of an existing product. Admin only.
///
/// # Errors
///
/// Returns `CliError::NotAuthenticated` without an admin session, or
/// `CliError::Inventory` if the product does not exist, the result is
/// invalid, or it cannot be saved.
pub fn update(
    app: &mut App,
    id: &ProductId,
    changes: ProductChanges,
    out: &mut impl Write,
) -> Result<Product, CliError> {
    app.require_admin()?;
    let current = app
        .inventory
        .product(id)
        .cloned()
        .ok_or_else(|| InventoryError::ProductNotFound(id.clone()))?;

    let updated = changes.apply(current);
    app.inventory.update_product(updated.clone())?;
    write_row(out, &updated)?;
    Ok(updated)
}

/// Remove a product. Admin only.
///
/// # Errors
///
/// Returns `CliError::NotAuthenticated` without an admin session, or
/// `CliError::Inventory` if the catalog cannot be saved.
pub fn delete(
    app: &mut App,
    id: &ProductId,
    out: &mut impl Write,
) -> Result<Option<Product>, CliError> {
    app.require_admin()?;
    let removed = app.inventory.delete_product(id)?;
    if removed.is_none() {
        writeln!(out, "No product with id {id}")?;
    }
    Ok(removed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{admin_app, app, output};

    #[test]
    fn test_list_shows_customer_columns() {
        let (app, _storage, _sink) = app();
        let mut buf = Vec::new();
        assert_eq!(list(&app, None, &mut buf).unwrap(), 3);

        let text = output(buf);
        assert!(text.contains("Coffee"));
        assert!(text.contains("$3.99"));
        assert!(text.contains("In Stock (100)"));
        assert!(text.contains("Ham and cheese sandwich"));
    }

    #[test]
    fn test_list_filters_by_search() {
        let (app, _storage, _sink) = app();
        let mut buf = Vec::new();
        assert_eq!(list(&app, Some("bagel"), &mut buf).unwrap(), 1);
        assert!(!output(buf).contains("Coffee"));

        let mut buf = Vec::new();
        assert_eq!(list(&app, Some("pizza"), &mut buf).unwrap(), 0);
        assert_eq!(output(buf), "No products found\n");
    }

    #[test]
    fn test_writes_require_admin() {
        let (mut app, _storage, _sink) = app();
        let id = ProductId::new("1");

        assert!(matches!(
            add(&mut app, NewProduct::new("Tea", Price::from_cents(250), 1), &mut Vec::new()),
            Err(CliError::NotAuthenticated)
        ));
        assert!(matches!(
            update(&mut app, &id, ProductChanges::default(), &mut Vec::new()),
            Err(CliError::NotAuthenticated)
        ));
        assert!(matches!(
            delete(&mut app, &id, &mut Vec::new()),
            Err(CliError::NotAuthenticated)
        ));
        assert_eq!(app.inventory.products().len(), 3);
    }

    #[tokio::test]
    async fn test_add_prints_new_id() {
        let (mut app, _storage, _sink) = admin_app().await;
        let mut buf = Vec::new();
        let product = add(
            &mut app,
            NewProduct::new("Tea", Price::from_cents(250), 1),
            &mut buf,
        )
        .unwrap();
        assert_eq!(output(buf), format!("{}\n", product.id));
        assert_eq!(app.inventory.products().len(), 4);
    }

    #[tokio::test]
    async fn test_update_applies_only_given_fields() {
        let (mut app, _storage, _sink) = admin_app().await;
        let changes = ProductChanges {
            quantity: Some(0),
            description: Some(String::new()),
            ..ProductChanges::default()
        };

        let updated = update(&mut app, &ProductId::new("3"), changes, &mut Vec::new()).unwrap();
        assert_eq!(updated.name, "Sandwich");
        assert_eq!(updated.price, Price::from_cents(699));
        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.description, None);
        assert_eq!(app.inventory.product(&ProductId::new("3")), Some(&updated));
    }

    #[tokio::test]
    async fn test_update_sets_and_clears_image() {
        let (mut app, _storage, _sink) = admin_app().await;
        let id = ProductId::new("2");
        let changes = ProductChanges {
            image: Some("bagel.jpg".to_string()),
            ..ProductChanges::default()
        };
        let updated = update(&mut app, &id, changes, &mut Vec::new()).unwrap();
        assert_eq!(updated.image.as_deref(), Some("bagel.jpg"));
        assert_eq!(updated.description.as_deref(), Some("Freshly baked bagel"));

        let changes = ProductChanges {
            image: Some(String::new()),
            ..ProductChanges::default()
        };
        let updated = update(&mut app, &id, changes, &mut Vec::new()).unwrap();
        assert_eq!(updated.image, None);
    }

    #[tokio::test]
    async fn test_update_unknown_product_fails() {
        let (mut app, _storage, _sink) = admin_app().await;
        let result = update(
            &mut app,
            &ProductId::new("missing"),
            ProductChanges::default(),
            &mut Vec::new(),
        );
        assert!(matches!(
            result,
            Err(CliError::Inventory(InventoryError::ProductNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_product() {
        let (mut app, _storage, _sink) = admin_app().await;
        let mut buf = Vec::new();
        assert!(delete(&mut app, &ProductId::new("9"), &mut buf).unwrap().is_none());
        assert_eq!(output(buf), "No product with id 9\n");

        let removed = delete(&mut app, &ProductId::new("1"), &mut Vec::new()).unwrap();
        assert_eq!(removed.unwrap().name, "Coffee");
    }
}
