//! Manifest document format.
//!
//! ```json
//! { "articles": ["rust-notes.json", "go-basics.json"] }
//! ```
//!
//! The listed order is the canonical load order of the collection.

use serde::{Deserialize, Serialize};

/// Default manifest resource name inside the content directory.
pub const DEFAULT_MANIFEST: &str = "articles-manifest.json";

/// Names of the per-article resources, in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Resource names relative to the content directory.
    pub articles: Vec<String>,
}
