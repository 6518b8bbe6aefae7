//! MMBM Clothing Core - Shared domain library.
//!
//! This crate provides the domain model used by the storefront:
//!
//! - [`catalog`] - The immutable product catalog
//! - [`cart`] - Session cart state: line items merged by product + variant
//! - [`selection`] - The variant-picker state machine for products with
//!   size/color options
//! - [`order`] - Reservation building and validation
//! - [`handoff`] - Order message composition and the WhatsApp hand-off URL
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP clients,
//! no sessions. Everything here is synchronous and deterministic, which keeps
//! the cart and checkout semantics testable without the web layer.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod handoff;
pub mod order;
pub mod selection;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Product};
pub use handoff::WhatsAppChannel;
pub use order::{CheckoutForm, DeliveryMethod, Fulfilment, Order, OrderError, PaymentMethod};
pub use selection::{Resolution, Selection, VariantPicker};
pub use types::*;
