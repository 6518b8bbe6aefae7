//! The shop's product catalog.
//!
//! Products are seeded in code: the catalog is small, curated by hand, and
//! read-only at runtime. Categories match the storefront tabs (Men, Women,
//! Shoes, Accessories).

use mmbm_core::{Catalog, CurrencyCode, Price, Product};

/// Shorthand for a GHS price from pesewas.
fn ghs(minor_units: i64) -> Price {
    Price::from_minor_units(minor_units, CurrencyCode::GHS)
}

/// Build the seeded product catalog.
#[must_use]
pub fn seed() -> Catalog {
    Catalog::new(vec![
        // Men
        Product::new(
            "men-oxford-shirt",
            "Classic Oxford Shirt",
            ghs(18000),
            "/static/images/products/men-oxford-shirt.jpg",
            "Men",
        )
        .with_sizes(["S", "M", "L", "XL"])
        .with_colors(["White", "Sky Blue"])
        .bestseller(),
        Product::new(
            "men-chino-trousers",
            "Slim Chino Trousers",
            ghs(22000),
            "/static/images/products/men-chino-trousers.jpg",
            "Men",
        )
        .with_sizes(["30", "32", "34", "36"])
        .with_colors(["Khaki", "Navy", "Black"]),
        Product::new(
            "men-kente-shirt",
            "Kente Accent Shirt",
            ghs(25000),
            "/static/images/products/men-kente-shirt.jpg",
            "Men",
        )
        .with_sizes(["M", "L", "XL"])
        .new_arrival(),
        Product::new(
            "men-logo-tee",
            "MMBM Logo Tee",
            ghs(9000),
            "/static/images/products/men-logo-tee.jpg",
            "Men",
        )
        .with_sizes(["S", "M", "L", "XL"])
        .with_colors(["Black", "White"])
        .bestseller(),
        // Women
        Product::new(
            "women-linen-dress",
            "Linen Midi Dress",
            ghs(28000),
            "/static/images/products/women-linen-dress.jpg",
            "Women",
        )
        .with_sizes(["XS", "S", "M", "L"])
        .with_colors(["Sand", "Terracotta"])
        .new_arrival(),
        Product::new(
            "women-ankara-skirt",
            "Ankara Print Skirt",
            ghs(16000),
            "/static/images/products/women-ankara-skirt.jpg",
            "Women",
        )
        .with_sizes(["S", "M", "L"])
        .bestseller(),
        Product::new(
            "women-silk-blouse",
            "Silk Camisole Blouse",
            ghs(19500),
            "/static/images/products/women-silk-blouse.jpg",
            "Women",
        )
        .with_sizes(["XS", "S", "M", "L"])
        .with_colors(["Ivory", "Emerald"]),
        Product::new(
            "women-wrap-top",
            "Tie-Front Wrap Top",
            ghs(12500),
            "/static/images/products/women-wrap-top.jpg",
            "Women",
        )
        .with_sizes(["S", "M", "L"])
        .with_colors(["Burnt Orange", "Black"])
        .new_arrival(),
        // Shoes
        Product::new(
            "shoes-court-sneaker",
            "Court Leather Sneaker",
            ghs(32000),
            "/static/images/products/shoes-court-sneaker.jpg",
            "Shoes",
        )
        .with_sizes(["40", "41", "42", "43", "44", "45"])
        .with_colors(["White", "Black"])
        .bestseller(),
        Product::new(
            "shoes-leather-sandal",
            "Handmade Leather Sandal",
            ghs(15000),
            "/static/images/products/shoes-leather-sandal.jpg",
            "Shoes",
        )
        .with_sizes(["39", "40", "41", "42", "43"]),
        Product::new(
            "shoes-mule-heel",
            "Block Mule Heel",
            ghs(26000),
            "/static/images/products/shoes-mule-heel.jpg",
            "Shoes",
        )
        .with_sizes(["37", "38", "39", "40"])
        .with_colors(["Tan", "Black"])
        .new_arrival(),
        // Accessories (no variant axes: these add to the cart directly)
        Product::new(
            "acc-canvas-tote",
            "Canvas Tote Bag",
            ghs(7500),
            "/static/images/products/acc-canvas-tote.jpg",
            "Accessories",
        ),
        Product::new(
            "acc-bead-bracelet",
            "Krobo Bead Bracelet",
            ghs(4000),
            "/static/images/products/acc-bead-bracelet.jpg",
            "Accessories",
        )
        .bestseller(),
        Product::new(
            "acc-bucket-hat",
            "Reversible Bucket Hat",
            ghs(8500),
            "/static/images/products/acc-bucket-hat.jpg",
            "Accessories",
        )
        .with_colors(["Olive", "Cream"])
        .new_arrival(),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = seed();
        let ids: HashSet<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_seed_covers_all_storefront_categories() {
        let catalog = seed();
        let categories = catalog.categories();
        for expected in ["Men", "Women", "Shoes", "Accessories"] {
            assert!(categories.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_seed_prices_positive() {
        for product in seed().all() {
            assert!(
                product.price.amount > rust_decimal::Decimal::ZERO,
                "{} has a non-positive price",
                product.id
            );
        }
    }

    #[test]
    fn test_seed_has_featured_products() {
        let catalog = seed();
        assert!(!catalog.new_arrivals().is_empty());
        assert!(!catalog.bestsellers().is_empty());
    }

    #[test]
    fn test_seed_has_direct_add_products() {
        // at least one product must skip the variant picker
        assert!(seed().all().iter().any(|p| !p.has_options()));
    }
}
