//! Order hand-off to the external messaging channel.
//!
//! The shop takes reservations over WhatsApp: the composed order message is
//! packed into a `wa.me` link that opens the buyer's messaging app with the
//! text prefilled. The channel is fire-and-forget - nothing is awaited, no
//! delivery confirmation exists, and a failed hand-off is only visible as
//! the external app not opening.

use url::Url;

use crate::order::{Fulfilment, Order};

/// Compose the human-readable order message sent over the hand-off channel.
///
/// The output is deterministic for a given order: a header with the order
/// id, the buyer block, one line per cart item with an optional
/// "size, color" qualifier and the two-decimal line subtotal, and the total.
#[must_use]
pub fn compose_message(order: &Order) -> String {
    let mut msg = String::new();

    msg.push_str(&format!("New reservation {}\n\n", order.id));
    msg.push_str(&format!("Name: {}\n", order.contact.name));
    msg.push_str(&format!("Phone: {}\n", order.contact.phone));
    if let Some(email) = &order.contact.email {
        msg.push_str(&format!("Email: {email}\n"));
    }

    match &order.fulfilment {
        Fulfilment::Pickup => msg.push_str("Delivery method: Pickup\n"),
        Fulfilment::Delivery { address } => {
            msg.push_str("Delivery method: Delivery\n");
            msg.push_str(&format!("Address: {address}\n"));
        }
    }
    msg.push_str(&format!("Payment: {}\n", order.payment.label()));

    if let Some(notes) = &order.notes {
        msg.push_str(&format!("Notes: {notes}\n"));
    }

    msg.push_str("\nItems:\n");
    for line in &order.lines {
        match line.variant_label() {
            Some(variant) => msg.push_str(&format!(
                "- {} x{} ({}) - {}\n",
                line.name,
                line.quantity,
                variant,
                line.subtotal()
            )),
            None => msg.push_str(&format!(
                "- {} x{} - {}\n",
                line.name,
                line.quantity,
                line.subtotal()
            )),
        }
    }

    msg.push_str(&format!("\nTotal: {}", order.total));
    msg
}

/// The WhatsApp hand-off channel.
///
/// Holds the shop's WhatsApp number and turns orders into `wa.me` links.
#[derive(Debug, Clone)]
pub struct WhatsAppChannel {
    number: String,
}

impl WhatsAppChannel {
    /// Create a channel for the given shop number. Non-digits are stripped,
    /// as `wa.me` only accepts bare international numbers.
    #[must_use]
    pub fn new(number: impl AsRef<str>) -> Self {
        Self {
            number: number
                .as_ref()
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
        }
    }

    /// The bare number the channel addresses.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Build the `wa.me` URL carrying the composed order message.
    ///
    /// Opening the URL is left to the caller (the receipt page links it);
    /// no response is awaited or parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the assembled URL fails to parse, which only
    /// happens with a pathological shop number.
    pub fn order_url(&self, order: &Order) -> Result<Url, url::ParseError> {
        let message = compose_message(order);
        Url::parse(&format!(
            "https://wa.me/{}?text={}",
            self.number,
            urlencoding::encode(&message)
        ))
    }
}
