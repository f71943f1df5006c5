//! Application layer: the listing controller and its event adapters.
//!
//! ```text
//! Control event → handle_event → ListingController operation → surface updates
//! ```
//!
//! # Modules
//!
//! - [`controller`]: Owner of the collection, query state and surface
//! - [`handler`]: Control events mapped onto controller operations

pub mod controller;
pub mod handler;

pub use controller::ListingController;
pub use handler::{handle_event, Event};
