//! Rendering layer.
//!
//! ```text
//! Article collection → render → ListingSurface (container of elements)
//! ListingController  → view_model → ListingViewModel
//! ```
//!
//! # Modules
//!
//! - [`surface`]: The page boundary trait and element types
//! - [`document`]: In-memory page implementing the boundary
//! - [`renderer`]: Collection → elements projection with id bindings
//! - [`viewmodel`]: Display-ready listing snapshot

pub mod document;
pub mod renderer;
pub mod surface;
pub mod viewmodel;

pub use document::{CategoryOption, ElementNode, MemoryDocument};
pub use renderer::{render, ElementBindings};
pub use surface::{Control, Display, ElementHandle, ElementSpec, ListingSurface};
pub use viewmodel::{ListingItem, ListingViewModel, SearchBarInfo};
