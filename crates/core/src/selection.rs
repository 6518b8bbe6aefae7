//! The variant-picker state machine.
//!
//! Reserving a product either goes straight to the cart (no size or color
//! axes) or through a picker dialog. The picker is per product card and
//! memoryless: each open recomputes defaults from the product, and closing
//! one card's picker never affects another's.
//!
//! States: *Idle* (no picker value exists), *AwaitingSelection* (a
//! [`VariantPicker`] value is live), *Resolved* ([`VariantPicker::confirm`]
//! consumed the picker and produced a [`Selection`]). [`VariantPicker::cancel`]
//! consumes the picker back to Idle with no cart call.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::ProductId;

/// Outcome of opening the picker for a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The product has neither sizes nor colors: add to the cart immediately
    /// with no variant selection.
    Direct,
    /// The product has at least one option axis: a selection step is
    /// required before the cart call.
    Picker(VariantPicker),
}

/// A confirmed (or skipped-through) variant selection, ready for
/// [`crate::Cart::add`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Chosen size, `None` when the product has no size axis.
    pub size: Option<String>,
    /// Chosen color, `None` when the product has no color axis.
    pub color: Option<String>,
}

/// An open size/color picker for one product (the *AwaitingSelection* state).
///
/// Defaults to the first available label on each axis, so confirming without
/// touching anything is always a valid selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPicker {
    product_id: ProductId,
    sizes: Vec<String>,
    colors: Vec<String>,
    size: Option<String>,
    color: Option<String>,
}

impl VariantPicker {
    /// Open the picker for a product.
    ///
    /// Returns [`Resolution::Direct`] when the product has no options (the
    /// Idle -> Resolved shortcut) and [`Resolution::Picker`] otherwise, with
    /// the first size and first color preselected (an axis with no options
    /// stays unselected).
    #[must_use]
    pub fn open(product: &Product) -> Resolution {
        if !product.has_options() {
            return Resolution::Direct;
        }

        Resolution::Picker(Self {
            product_id: product.id.clone(),
            size: product.sizes.first().cloned(),
            color: product.colors.first().cloned(),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
        })
    }

    /// The product this picker was opened for.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// The size labels offered, in display order.
    #[must_use]
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// The color labels offered, in display order.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Currently chosen size.
    #[must_use]
    pub fn selected_size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Currently chosen color.
    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Choose a size. Returns `false` (keeping the current choice) when the
    /// label is not one the product offers.
    pub fn select_size(&mut self, label: &str) -> bool {
        if self.sizes.iter().any(|s| s == label) {
            self.size = Some(label.to_owned());
            true
        } else {
            false
        }
    }

    /// Choose a color. Returns `false` (keeping the current choice) when the
    /// label is not one the product offers.
    pub fn select_color(&mut self, label: &str) -> bool {
        if self.colors.iter().any(|c| c == label) {
            self.color = Some(label.to_owned());
            true
        } else {
            false
        }
    }

    /// Confirm the current choices (possibly still the defaults), consuming
    /// the picker. The returned [`Selection`] goes to [`crate::Cart::add`].
    #[must_use]
    pub fn confirm(self) -> Selection {
        Selection {
            size: self.size,
            color: self.color,
        }
    }

    /// Cancel the picker, consuming it with no cart call and no residual
    /// state. A later [`Self::open`] recomputes defaults from the product.
    pub fn cancel(self) {
        drop(self);
    }
}
