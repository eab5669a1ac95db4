//! # Product Catalog
//!
//! Fixed list of products, read-only after construction.
//!
//! A missing product is an absent result (`None`), never an error; turning
//! that into `NotFound` is the caller's decision.

use std::collections::HashSet;

use basket_core::validation::{validate_price_cents, validate_product_name};
use basket_core::{CoreResult, Money, Product, ProductId, ValidationError};

/// The products sold by the mock storefront, in display order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", Money::from_major_minor(1200, 0)),
        Product::new(2, "Mouse", Money::from_major_minor(25, 50)),
        Product::new(3, "Keyboard", Money::from_major_minor(75, 0)),
        Product::new(4, "Monitor", Money::from_major_minor(300, 75)),
        Product::new(5, "Webcam", Money::from_major_minor(50, 0)),
    ]
}

/// Read-only product lookup.
///
/// ## Usage
/// ```rust
/// use basket_store::ProductCatalog;
///
/// let catalog = ProductCatalog::seeded()?;
/// assert_eq!(catalog.get(2).map(|p| p.name.as_str()), Some("Mouse"));
/// assert!(!catalog.exists(999));
/// # Ok::<(), basket_core::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Builds a catalog from `products`, keeping their order.
    ///
    /// ## Rules
    /// - Product ids are unique
    /// - Names are non-empty, prices non-negative
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product_name(&product.name)?;
            validate_price_cents(product.price.cents())?;

            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
        }

        Ok(ProductCatalog { products })
    }

    /// The catalog seeded at process start, validated like any other.
    /// See [`seed_products`].
    pub fn seeded() -> CoreResult<Self> {
        Self::new(seed_products())
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Checks whether `product_id` is in the catalog.
    pub fn exists(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// All products, in seed order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::CoreError;

    #[test]
    fn test_seeded_catalog() {
        let catalog = ProductCatalog::seeded().unwrap();

        assert_eq!(catalog.list_all().len(), 5);
        assert_eq!(catalog.get(1).unwrap().price, Money::from_cents(120_000));
        assert_eq!(catalog.get(4).unwrap().price, Money::from_cents(30_075));
        assert!(catalog.exists(5));
        assert!(catalog.get(999).is_none());
        assert!(!catalog.exists(0));
    }

    #[test]
    fn test_list_all_keeps_seed_order() {
        let catalog = ProductCatalog::seeded().unwrap();
        let names: Vec<_> = catalog.list_all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Mouse", "Keyboard", "Monitor", "Webcam"]);
    }

    #[test]
    fn test_seeded_matches_seed_products() {
        let catalog = ProductCatalog::seeded().unwrap();
        assert_eq!(catalog.list_all(), seed_products().as_slice());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let products = vec![
            Product::new(1, "Laptop", Money::from_cents(100)),
            Product::new(1, "Tablet", Money::from_cents(200)),
        ];

        let err = ProductCatalog::new(products).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidArgument(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_new_rejects_invalid_products() {
        let blank = ProductCatalog::new(vec![Product::new(1, "  ", Money::zero())]);
        assert!(matches!(
            blank,
            Err(CoreError::InvalidArgument(ValidationError::Required { .. }))
        ));

        let long_name = "x".repeat(201);
        let too_long = ProductCatalog::new(vec![Product::new(1, long_name, Money::zero())]);
        assert!(matches!(
            too_long,
            Err(CoreError::InvalidArgument(ValidationError::TooLong { max: 200, .. }))
        ));

        let negative = ProductCatalog::new(vec![Product::new(1, "Cable", Money::from_cents(-1))]);
        assert!(matches!(
            negative,
            Err(CoreError::InvalidArgument(ValidationError::MustNotBeNegative { .. }))
        ));
    }
}
