//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session; every mutation loads it, applies
//! the change through the core cart, and writes it back.
//!
//! `POST /cart/add` doubles as the selection step: a product with size or
//! color options and no submitted selection gets the variant-picker fragment
//! back instead of a cart mutation. Closing the picker is purely client-side
//! (no request), so a cancelled selection leaves no state behind.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use mmbm_core::{Cart, CartLine, ProductId, Resolution, Selection, VariantPicker};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session::{load_cart, save_cart};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub variant: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "GH₵ 0.00".to_owned(),
            item_count: 0,
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.total_price().display(),
            item_count: cart.count(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.name.clone(),
            category: line.category.clone(),
            variant: line.variant_label(),
            quantity: line.quantity,
            price: line.price.display(),
            line_price: line.subtotal().display(),
            image: line.image.clone(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data. `size`/`color` are absent on the first press of
/// "Reserve Now" and present once the picker confirms.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Treat empty or whitespace-only form values as "not submitted".
fn normalize(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Variant picker fragment template (for HTMX).
///
/// Rendered with the first size and first color preselected; confirming
/// without touching anything submits those defaults.
#[derive(Template, WebTemplate)]
#[template(path = "partials/variant_picker.html")]
pub struct VariantPickerTemplate {
    pub product_id: String,
    pub product_name: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub selected_size: String,
    pub selected_color: String,
}

impl VariantPickerTemplate {
    fn from_picker(product_name: &str, picker: &VariantPicker) -> Self {
        Self {
            product_id: picker.product_id().to_string(),
            product_name: product_name.to_owned(),
            sizes: picker.sizes().to_vec(),
            colors: picker.colors().to_vec(),
            selected_size: picker.selected_size().unwrap_or_default().to_owned(),
            selected_color: picker.selected_color().unwrap_or_default().to_owned(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let cart = load_cart(&session).await?;

    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
    }
    .into_response())
}

/// Add item to cart (HTMX).
///
/// Runs the selection step first: option-free products add directly, and a
/// submitted size/color is validated against the product's axes. When the
/// product needs a selection and none was submitted, the variant picker
/// fragment is returned instead and the cart is untouched.
///
/// On a cart mutation, returns the count badge with an HTMX trigger so
/// other cart elements refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = ProductId::from(form.product_id.as_str());
    let Some(product) = state.catalog().get(&product_id) else {
        return Err(AppError::NotFound(format!("product {product_id}")));
    };

    let size = normalize(form.size);
    let color = normalize(form.color);

    let selection = match VariantPicker::open(product) {
        Resolution::Direct => Selection {
            size: None,
            color: None,
        },
        Resolution::Picker(mut picker) => {
            if size.is_none() && color.is_none() {
                // Awaiting selection: send the picker back, defaults chosen
                return Ok((
                    AppendHeaders([("HX-Retarget", "#dialog"), ("HX-Reswap", "innerHTML")]),
                    VariantPickerTemplate::from_picker(&product.name, &picker),
                )
                    .into_response());
            }

            if let Some(label) = &size {
                if !picker.select_size(label) {
                    return Err(AppError::BadRequest(format!("unknown size: {label}")));
                }
            }
            if let Some(label) = &color {
                if !picker.select_color(label) {
                    return Err(AppError::BadRequest(format!("unknown color: {label}")));
                }
            }
            picker.confirm()
        }
    };

    let mut cart = load_cart(&session).await?;
    cart.add(product, selection.size, selection.color);
    save_cart(&session, &cart).await?;

    tracing::debug!(product = %product_id, count = cart.count(), "Added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.count(),
        },
    )
        .into_response())
}

/// Update cart item quantity (HTMX).
///
/// A quantity of zero or below removes the line. Lines are matched by
/// product id (first match), mirroring the core cart semantics.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.update_quantity(&ProductId::from(form.product_id.as_str()), form.quantity);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove item from cart (HTMX).
///
/// Removes every line for the product, regardless of variant.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.remove(&ProductId::from(form.product_id.as_str()));
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Response> {
    let cart = load_cart(&session).await?;

    Ok(CartCountTemplate {
        count: cart.count(),
    }
    .into_response())
}
