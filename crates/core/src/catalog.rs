//! The product catalog.
//!
//! The catalog is an immutable, insertion-ordered list of products built once
//! at startup. Everything downstream - the cart, the variant picker, the
//! order composer - only ever reads from it.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image path (served from `/static`).
    pub image: String,
    /// Category label (e.g., "Men", "Shoes").
    pub category: String,
    /// Available size labels, in display order. Empty when the product has
    /// no size axis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    /// Available color labels, in display order. Empty when the product has
    /// no color axis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    /// Featured in the New Arrivals section.
    #[serde(default)]
    pub is_new: bool,
    /// Featured in the Bestsellers section.
    #[serde(default)]
    pub is_bestseller: bool,
}

impl Product {
    /// Create a product with no variant axes and no feature flags.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category: category.into(),
            sizes: Vec::new(),
            colors: Vec::new(),
            is_new: false,
            is_bestseller: false,
        }
    }

    /// Set the size axis.
    #[must_use]
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the color axis.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Mark as a new arrival.
    #[must_use]
    pub const fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Mark as a bestseller.
    #[must_use]
    pub const fn bestseller(mut self) -> Self {
        self.is_bestseller = true;
        self
    }

    /// Whether the product has at least one size or color option.
    ///
    /// Products with options go through the variant picker before the cart;
    /// products without are added directly.
    #[must_use]
    pub fn has_options(&self) -> bool {
        !self.sizes.is_empty() || !self.colors.is_empty()
    }
}

/// The immutable product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list, preserving order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in the given category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products flagged as new arrivals.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Products flagged as bestsellers.
    #[must_use]
    pub fn bestsellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_bestseller).collect()
    }

    /// Distinct category labels in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(
                "tee-logo",
                "Logo Tee",
                Price::from_minor_units(5000, CurrencyCode::GHS),
                "/static/images/products/tee-logo.jpg",
                "Men",
            )
            .with_sizes(["S", "M", "L"])
            .new_arrival(),
            Product::new(
                "tote-canvas",
                "Canvas Tote",
                Price::from_minor_units(3000, CurrencyCode::GHS),
                "/static/images/products/tote-canvas.jpg",
                "Accessories",
            ),
            Product::new(
                "sneaker-court",
                "Court Sneaker",
                Price::from_minor_units(22000, CurrencyCode::GHS),
                "/static/images/products/sneaker-court.jpg",
                "Shoes",
            )
            .with_sizes(["42", "43"])
            .with_colors(["White", "Black"])
            .bestseller(),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let catalog = catalog();
        let product = catalog.get(&"tote-canvas".into()).unwrap();
        assert_eq!(product.name, "Canvas Tote");
        assert!(catalog.get(&"missing".into()).is_none());
    }

    #[test]
    fn test_by_category() {
        let catalog = catalog();
        let shoes = catalog.by_category("Shoes");
        assert_eq!(shoes.len(), 1);
        assert_eq!(shoes[0].id.as_str(), "sneaker-court");
        assert!(catalog.by_category("Kids").is_empty());
    }

    #[test]
    fn test_flag_filters() {
        let catalog = catalog();
        assert_eq!(catalog.new_arrivals().len(), 1);
        assert_eq!(catalog.bestsellers().len(), 1);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = catalog();
        assert_eq!(catalog.categories(), vec!["Men", "Accessories", "Shoes"]);
    }

    #[test]
    fn test_has_options() {
        let catalog = catalog();
        assert!(catalog.get(&"tee-logo".into()).unwrap().has_options());
        assert!(catalog.get(&"sneaker-court".into()).unwrap().has_options());
        assert!(!catalog.get(&"tote-canvas".into()).unwrap().has_options());
    }
}
