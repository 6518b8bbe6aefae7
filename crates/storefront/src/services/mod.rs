//! External service clients.

pub mod background_removal;

pub use background_removal::{BackgroundRemovalClient, BackgroundRemovalError};
