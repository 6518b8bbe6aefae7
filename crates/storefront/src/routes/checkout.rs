//! Checkout route handlers.
//!
//! The checkout page never renders for an empty cart - both handlers
//! redirect to `/cart` first, which is the order composer's precondition.
//! A valid submission clears the session cart and shows the receipt with
//! the WhatsApp hand-off link; the hand-off itself is fire-and-forget.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use mmbm_core::{CheckoutForm, DeliveryMethod, Order, PaymentMethod, handoff};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session::{load_cart, save_cart};
use crate::routes::cart::{CartItemView, CartView};
use crate::state::AppState;

/// Checkout form values echoed back into the template, so a failed
/// validation re-renders with everything the buyer already typed.
#[derive(Clone)]
pub struct CheckoutFormView {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// "pickup" or "delivery" - matched against radio values in the template.
    pub delivery: String,
    /// "cash" or "momo" - matched against radio values in the template.
    pub payment: String,
    pub notes: String,
}

impl Default for CheckoutFormView {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            delivery: "pickup".to_owned(),
            payment: "cash".to_owned(),
            notes: String::new(),
        }
    }
}

impl From<&CheckoutForm> for CheckoutFormView {
    fn from(form: &CheckoutForm) -> Self {
        Self {
            name: form.name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            address: form.address.clone(),
            delivery: match form.delivery_method {
                DeliveryMethod::Pickup => "pickup".to_owned(),
                DeliveryMethod::Delivery => "delivery".to_owned(),
            },
            payment: match form.payment_method {
                PaymentMethod::Cash => "cash".to_owned(),
                PaymentMethod::MobileMoney => "momo".to_owned(),
            },
            notes: form.notes.clone(),
        }
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub error: Option<String>,
    pub form: CheckoutFormView,
}

/// Reservation receipt template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmed.html")]
pub struct ReceiptTemplate {
    pub order_id: String,
    pub items: Vec<CartItemView>,
    pub total: String,
    pub message: String,
    pub whatsapp_url: String,
}

/// Display the checkout form.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    Ok(CheckoutTemplate {
        cart: CartView::from(&cart),
        error: None,
        form: CheckoutFormView::default(),
    }
    .into_response())
}

/// Place the reservation.
///
/// Validation failures re-render the form with the message and the buyer's
/// input intact. On success the session cart is cleared and the receipt is
/// rendered with the hand-off link.
#[instrument(skip(state, session, form), fields(delivery = ?form.delivery_method))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    if cart.is_empty() {
        // Composer precondition: never reached with an empty cart
        return Ok(Redirect::to("/cart").into_response());
    }

    let order = match Order::place(&cart, &form) {
        Ok(order) => order,
        Err(e) => {
            tracing::warn!(error = %e, "Checkout validation failed");
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutTemplate {
                    cart: CartView::from(&cart),
                    error: Some(e.to_string()),
                    form: CheckoutFormView::from(&form),
                },
            )
                .into_response());
        }
    };

    let whatsapp_url = state
        .channel()
        .order_url(&order)
        .map_err(|e| AppError::Internal(format!("hand-off URL: {e}")))?;

    // Reservation placed: the cart's job is done
    cart.clear();
    save_cart(&session, &cart).await?;

    tracing::info!(order_id = %order.id, total = %order.total, "Reservation placed");

    let message = handoff::compose_message(&order);

    Ok(ReceiptTemplate {
        order_id: order.id.to_string(),
        items: order.lines.iter().map(CartItemView::from).collect(),
        total: order.total.display(),
        message,
        whatsapp_url: whatsapp_url.to_string(),
    }
    .into_response())
}
