//! Domain layer for the notes listing engine.
//!
//! Pure types and rules, independent of any rendering surface or resource
//! transport.
//!
//! # Organization
//!
//! - [`article`]: Article record model
//! - [`categories`]: Category vocabulary derived from a collection
//! - [`error`]: Error types and result alias
//! - [`query`]: Query state, matching and composition rules, sort order

pub mod article;
pub mod categories;
pub mod error;
pub mod query;

pub use article::Article;
pub use categories::CategoryIndex;
pub use error::{FolioError, Result};
pub use query::{QueryState, SortOrder};
