//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /catalog                - Catalog with ?category= filter tabs
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart, or return the variant picker
//!                                when the product needs a selection
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout form (redirects to /cart when empty)
//! POST /checkout               - Place the reservation, render the receipt
//!
//! # Pages
//! GET  /contact                - Contact page
//! GET  /logo-tools             - Logo background-removal tool
//! POST /logo-tools/remove      - Upload an image, download the processed PNG
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod logo_tools;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the logo-tools routes router.
///
/// Uploads get a raised body limit: logos up to 20 MB are accepted.
pub fn logo_tools_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(logo_tools::show))
        .route("/remove", post(logo_tools::remove))
        .route_layer(DefaultBodyLimit::max(logo_tools::MAX_UPLOAD_BYTES))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/catalog", get(catalog::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::submit))
        // Contact page
        .route("/contact", get(contact::show))
        // Logo tools
        .nest("/logo-tools", logo_tools_routes())
}
