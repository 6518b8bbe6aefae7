//! Session-stored cart state.
//!
//! The whole [`Cart`] value lives in the session: created empty on first
//! read, written back after every mutation, and gone when the session
//! expires. Nothing is shared across sessions, tabs are only as synchronized
//! as their shared cookie, and no server-side copy outlives the session.

use mmbm_core::Cart;
use tower_sessions::Session;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the session cart.
    pub const CART: &str = "cart";
}

/// Load the session cart, defaulting to an empty one.
///
/// # Errors
///
/// Returns an error if the session store fails to load.
pub async fn load_cart(session: &Session) -> Result<Cart, tower_sessions::session::Error> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Write the cart back to the session.
///
/// # Errors
///
/// Returns an error if the session store fails to persist.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}
