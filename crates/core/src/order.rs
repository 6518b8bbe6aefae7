//! Reservation orders: validation and construction.
//!
//! An [`Order`] is a point-in-time snapshot built from the session cart and
//! the checkout form. It exists only to compose the outbound message and the
//! on-screen receipt - nothing is persisted, and there is no retry state.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartLine};
use crate::types::{Email, EmailError, OrderId, Phone, PhoneError, Price};

/// How the buyer receives the reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Collect in store; no address needed.
    #[default]
    Pickup,
    /// Deliver to an address supplied at checkout.
    Delivery,
}

impl DeliveryMethod {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pickup => "Pickup",
            Self::Delivery => "Delivery",
        }
    }
}

/// How the buyer pays on pickup or delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on pickup/delivery.
    #[default]
    Cash,
    /// Mobile money on pickup/delivery. The form value is "momo".
    #[serde(rename = "momo")]
    MobileMoney,
}

impl PaymentMethod {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::MobileMoney => "Mobile Money",
        }
    }
}

/// Raw checkout form input, exactly as submitted.
///
/// Empty strings mean "not provided"; validation happens in
/// [`Order::place`], not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    /// Buyer's full name. Required.
    #[serde(default)]
    pub name: String,
    /// Buyer's phone number. Required.
    #[serde(default)]
    pub phone: String,
    /// Buyer's email. Optional.
    #[serde(default)]
    pub email: String,
    /// Delivery address. Required only for [`DeliveryMethod::Delivery`].
    #[serde(default)]
    pub address: String,
    /// Pickup or delivery.
    #[serde(default)]
    pub delivery_method: DeliveryMethod,
    /// Cash or mobile money.
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Free-text notes. Optional, unvalidated.
    #[serde(default)]
    pub notes: String,
}

/// Validation failures when placing an order.
///
/// Each failure blocks submission: no identifier is generated and no message
/// is composed until the form is corrected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The cart was empty at call time. The checkout flow redirects away
    /// from an empty cart before reaching the composer, so hitting this
    /// variant indicates a caller bug, not a user-recoverable condition.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
    /// The buyer name is missing.
    #[error("name is required")]
    MissingName,
    /// The phone number is missing or malformed.
    #[error(transparent)]
    InvalidPhone(#[from] PhoneError),
    /// An email was supplied but does not parse.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
    /// Delivery was chosen without an address.
    #[error("delivery address is required for delivery orders")]
    MissingAddress,
}

/// Validated buyer contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: Phone,
    /// Email, when provided.
    pub email: Option<Email>,
}

/// Validated fulfilment choice: the address exists exactly when the buyer
/// chose delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fulfilment {
    /// Collect in store.
    Pickup,
    /// Deliver to the given address.
    Delivery {
        /// Street address supplied at checkout.
        address: String,
    },
}

impl Fulfilment {
    /// The underlying delivery method.
    #[must_use]
    pub const fn method(&self) -> DeliveryMethod {
        match self {
            Self::Pickup => DeliveryMethod::Pickup,
            Self::Delivery { .. } => DeliveryMethod::Delivery,
        }
    }
}

/// A placed reservation: the cart snapshot plus validated buyer input and a
/// generated identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Generated order identifier (e.g. "MMBM-MB3K2F1A").
    pub id: OrderId,
    /// Buyer contact details.
    pub contact: Contact,
    /// Pickup or delivery-with-address.
    pub fulfilment: Fulfilment,
    /// Payment method, collected on pickup/delivery.
    pub payment: PaymentMethod,
    /// Free-text notes, when provided.
    pub notes: Option<String>,
    /// The cart lines at submission time.
    pub lines: Vec<CartLine>,
    /// The cart total at submission time.
    pub total: Price,
    /// Submission timestamp.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Validate the checkout form against the cart and build the order.
    ///
    /// Precondition: `cart` is non-empty. The surrounding flow redirects to
    /// the cart page instead of calling with an empty cart; see
    /// [`OrderError::EmptyCart`].
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`OrderError`]: empty cart, missing
    /// name, invalid phone, invalid email (only when one was supplied), or
    /// missing delivery address.
    pub fn place(cart: &Cart, form: &CheckoutForm) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let name = form.name.trim();
        if name.is_empty() {
            return Err(OrderError::MissingName);
        }

        let phone = Phone::parse(&form.phone)?;

        let email = match form.email.trim() {
            "" => None,
            raw => Some(Email::parse(raw)?),
        };

        let fulfilment = match form.delivery_method {
            DeliveryMethod::Pickup => Fulfilment::Pickup,
            DeliveryMethod::Delivery => {
                let address = form.address.trim();
                if address.is_empty() {
                    return Err(OrderError::MissingAddress);
                }
                Fulfilment::Delivery {
                    address: address.to_owned(),
                }
            }
        };

        let notes = match form.notes.trim() {
            "" => None,
            raw => Some(raw.to_owned()),
        };

        let placed_at = Utc::now();

        Ok(Self {
            id: next_order_id(placed_at),
            contact: Contact {
                name: name.to_owned(),
                phone,
                email,
            },
            fulfilment,
            payment: form.payment_method,
            notes,
            lines: cart.lines().to_vec(),
            total: cart.total_price(),
            placed_at,
        })
    }
}

/// Order identifier prefix.
const ORDER_ID_PREFIX: &str = "MMBM";

/// Last millisecond value used for an identifier in this process.
static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Generate the next order identifier: the prefix plus the uppercase base-36
/// encoding of a millisecond timestamp.
///
/// The timestamp is bumped past the previous identifier's when two orders
/// land in the same millisecond, so identifiers are unique per process. They
/// are still timestamp-derived, not globally collision-free - acceptable for
/// a low-volume reservation flow with no global deduplication.
fn next_order_id(now: DateTime<Utc>) -> OrderId {
    let millis = monotonic_millis(now.timestamp_millis());
    OrderId::new(format!(
        "{ORDER_ID_PREFIX}-{}",
        to_base36_upper(millis.unsigned_abs())
    ))
}

/// Return `now_millis`, bumped to at least one past the last returned value.
fn monotonic_millis(now_millis: i64) -> i64 {
    let mut prev = LAST_ID_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = now_millis.max(prev + 1);
        match LAST_ID_MILLIS.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(observed) => prev = observed,
        }
    }
}

/// Uppercase base-36 encoding.
fn to_base36_upper(mut n: u64) -> String {
    if n == 0 {
        return "0".to_owned();
    }

    let mut digits = Vec::new();
    while n > 0 {
        let digit = u32::try_from(n % 36).unwrap_or(0);
        digits.push(
            char::from_digit(digit, 36)
                .unwrap_or('0')
                .to_ascii_uppercase(),
        );
        n /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::types::{CurrencyCode, Price};

    fn cart_with_lines() -> Cart {
        let mut cart = Cart::new();
        cart.add(
            &Product::new(
                "p1",
                "Oxford Shirt",
                Price::from_minor_units(5000, CurrencyCode::GHS),
                "/img.jpg",
                "Men",
            ),
            None,
            None,
        );
        cart.add(
            &Product::new(
                "p2",
                "Linen Dress",
                Price::from_minor_units(3000, CurrencyCode::GHS),
                "/img2.jpg",
                "Women",
            )
            .with_sizes(["S", "M"]),
            Some("S".to_owned()),
            None,
        );
        cart
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Ama Mensah".to_owned(),
            phone: "0503561270".to_owned(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_place_valid_pickup_order() {
        let cart = cart_with_lines();
        let order = Order::place(&cart, &valid_form()).unwrap();

        assert_eq!(order.contact.name, "Ama Mensah");
        assert_eq!(order.fulfilment, Fulfilment::Pickup);
        assert_eq!(order.payment, PaymentMethod::Cash);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total.display(), "GH₵ 80.00");
    }

    #[test]
    fn test_empty_name_blocks_submission() {
        let cart = cart_with_lines();
        let form = CheckoutForm {
            name: "   ".to_owned(),
            ..valid_form()
        };

        assert_eq!(Order::place(&cart, &form), Err(OrderError::MissingName));
    }

    #[test]
    fn test_missing_phone_blocks_submission() {
        let cart = cart_with_lines();
        let form = CheckoutForm {
            phone: String::new(),
            ..valid_form()
        };

        assert!(matches!(
            Order::place(&cart, &form),
            Err(OrderError::InvalidPhone(PhoneError::Empty))
        ));
    }

    #[test]
    fn test_delivery_requires_address() {
        let cart = cart_with_lines();
        let form = CheckoutForm {
            delivery_method: DeliveryMethod::Delivery,
            ..valid_form()
        };

        assert_eq!(Order::place(&cart, &form), Err(OrderError::MissingAddress));

        let form = CheckoutForm {
            delivery_method: DeliveryMethod::Delivery,
            address: "12 Oxford St, Osu, Accra".to_owned(),
            ..valid_form()
        };
        let order = Order::place(&cart, &form).unwrap();
        assert_eq!(
            order.fulfilment,
            Fulfilment::Delivery {
                address: "12 Oxford St, Osu, Accra".to_owned()
            }
        );
    }

    #[test]
    fn test_pickup_ignores_address_field() {
        let cart = cart_with_lines();
        let form = CheckoutForm {
            address: "left over from a toggled radio".to_owned(),
            ..valid_form()
        };

        let order = Order::place(&cart, &form).unwrap();
        assert_eq!(order.fulfilment, Fulfilment::Pickup);
    }

    #[test]
    fn test_email_optional_but_validated() {
        let cart = cart_with_lines();

        let form = CheckoutForm {
            email: "  ".to_owned(),
            ..valid_form()
        };
        assert!(Order::place(&cart, &form).unwrap().contact.email.is_none());

        let form = CheckoutForm {
            email: "not-an-email".to_owned(),
            ..valid_form()
        };
        assert!(matches!(
            Order::place(&cart, &form),
            Err(OrderError::InvalidEmail(EmailError::MissingAtSymbol))
        ));

        let form = CheckoutForm {
            email: "ama@example.com".to_owned(),
            ..valid_form()
        };
        let order = Order::place(&cart, &form).unwrap();
        assert_eq!(order.contact.email.unwrap().as_str(), "ama@example.com");
    }

    #[test]
    fn test_notes_trimmed_to_option() {
        let cart = cart_with_lines();

        let form = CheckoutForm {
            notes: "  call before delivery  ".to_owned(),
            ..valid_form()
        };
        let order = Order::place(&cart, &form).unwrap();
        assert_eq!(order.notes.as_deref(), Some("call before delivery"));
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let cart = Cart::new();
        assert_eq!(
            Order::place(&cart, &valid_form()),
            Err(OrderError::EmptyCart)
        );
    }

    #[test]
    fn test_order_id_format() {
        let cart = cart_with_lines();
        let order = Order::place(&cart, &valid_form()).unwrap();

        let id = order.id.as_str();
        assert!(id.starts_with("MMBM-"));
        let suffix = id.trim_start_matches("MMBM-");
        assert!(!suffix.is_empty());
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_order_ids_unique_per_call() {
        let cart = cart_with_lines();
        let a = Order::place(&cart, &valid_form()).unwrap();
        let b = Order::place(&cart, &valid_form()).unwrap();
        let c = Order::place(&cart, &valid_form()).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_order_snapshots_cart() {
        let mut cart = cart_with_lines();
        let order = Order::place(&cart, &valid_form()).unwrap();

        // later cart mutations don't touch the placed order
        cart.clear();
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total.display(), "GH₵ 80.00");
    }

    #[test]
    fn test_to_base36_upper() {
        assert_eq!(to_base36_upper(0), "0");
        assert_eq!(to_base36_upper(35), "Z");
        assert_eq!(to_base36_upper(36), "10");
        assert_eq!(to_base36_upper(1_700_000_000_000), "LOYW3V28");
    }

    #[test]
    fn test_monotonic_millis_never_repeats() {
        let a = monotonic_millis(1_000);
        let b = monotonic_millis(1_000);
        let c = monotonic_millis(999);
        assert!(b > a);
        assert!(c > b);
    }
}
