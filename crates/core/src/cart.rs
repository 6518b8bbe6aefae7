//! Session cart state.
//!
//! The cart is an insertion-ordered list of line items. A line is identified
//! by the (product, size, color) triple: adding a product that matches an
//! existing line on all three increments that line instead of appending a
//! duplicate. Aggregates (`count`, `total`) are recomputed from the lines on
//! every read so they can never drift from the line data.
//!
//! The whole value is serde-serializable: the storefront keeps one `Cart`
//! per browsing session inside the session store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{CurrencyCode, Price, ProductId};

/// One (product, size, color) combination with a quantity.
///
/// Display fields (name, price, image, category) are snapshotted from the
/// catalog at add-time, so a line stays renderable even if the catalog
/// changes between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog product this line references.
    pub product_id: ProductId,
    /// Display name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub price: Price,
    /// Image path at add-time.
    pub image: String,
    /// Category label at add-time.
    pub category: String,
    /// Selected size, if the product has a size axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Selected color, if the product has a color axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Quantity, always >= 1. A quantity update to zero or below removes
    /// the line instead.
    pub quantity: u32,
}

impl CartLine {
    /// Whether this line has the given identity. "No selection" (`None`) is
    /// distinct from every label, so a sized line never merges with an
    /// unsized add of the same product.
    fn is_same_line(&self, product_id: &ProductId, size: Option<&str>, color: Option<&str>) -> bool {
        &self.product_id == product_id
            && self.size.as_deref() == size
            && self.color.as_deref() == color
    }

    /// Line subtotal: unit price x quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// The "size, color" qualifier for display and order messages.
    ///
    /// `None` when neither axis is set; otherwise the set axes comma-joined
    /// with the unset axis omitted (e.g. "M", "Black", or "M, Black").
    #[must_use]
    pub fn variant_label(&self) -> Option<String> {
        match (self.size.as_deref(), self.color.as_deref()) {
            (None, None) => None,
            (Some(size), None) => Some(size.to_owned()),
            (None, Some(color)) => Some(color.to_owned()),
            (Some(size), Some(color)) => Some(format!("{size}, {color}")),
        }
    }
}

/// The session cart: an insertion-ordered collection of [`CartLine`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product with the given variant selection.
    ///
    /// If a line with the same (product, size, color) identity exists, its
    /// quantity is incremented; otherwise a new line is appended with
    /// quantity 1, snapshotting the product's display fields. Always
    /// succeeds.
    pub fn add(&mut self, product: &Product, size: Option<String>, color: Option<String>) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.is_same_line(&product.id, size.as_deref(), color.as_deref()))
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            size,
            color,
            quantity: 1,
        });
    }

    /// Set the quantity of the first line matching `product_id`.
    ///
    /// A quantity of zero or below removes the line (quantities are never
    /// stored negative). No-op when no line matches.
    ///
    /// Note the lookup is by product id only: when the same product sits in
    /// the cart under two variants, only the first line is touched. `remove`
    /// deliberately acts on all variants instead; this mismatch is preserved
    /// from the observed storefront behavior rather than resolved here.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i32) {
        let Some(index) = self.lines.iter().position(|l| &l.product_id == product_id) else {
            return;
        };

        if quantity <= 0 {
            self.lines.remove(index);
        } else if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity.unsigned_abs();
        }
    }

    /// Remove every line for `product_id`, regardless of variant.
    ///
    /// Removal acts at product granularity even though `add` merges at
    /// variant granularity: one remove clears all sizes/colors of the
    /// product at once.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|l| &l.product_id != product_id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum over lines of unit price x quantity.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.price.amount * Decimal::from(l.quantity))
            .sum()
    }

    /// The total as a [`Price`], using the first line's currency (the
    /// catalog is single-currency; an empty cart totals zero cedis).
    #[must_use]
    pub fn total_price(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |l| l.price.currency_code);
        Price::new(self.total(), currency)
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
