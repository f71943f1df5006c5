//! Folio: the search, category filter and date sort engine behind a notes
//! listing page.
//!
//! Folio provides:
//! - A loader that fetches a manifest and every article it lists concurrently
//! - A renderer projecting the collection onto a page surface, with id bindings
//! - A category vocabulary derived from the collection
//! - A controller composing search and category filters with date sorting
//! - Structured tracing with optional OpenTelemetry file export
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Page binding (host)                                │  ← DOM, terminal, ...
//! │  - implements ui::ListingSurface                    │
//! │  - forwards control events to app::handle_event     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ListingController: query state + operations     │
//! │  - Event adapters                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Loader        │   │ Domain        │
//! │ (ui/)         │   │ (loader/)     │   │ (domain/)     │
//! │ - Surface     │   │ - Manifest    │   │ - Article     │
//! │ - Renderer    │   │ - Fetchers    │   │ - Query rules │
//! │ - View model  │   │               │   │ - Categories  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Listing controller and event adapters
//! - [`domain`]: Article model, query rules, categories, errors
//! - [`infrastructure`]: Content path resolution
//! - [`loader`]: Manifest and article loading
//! - [`ui`]: Surface boundary, in-memory document, renderer, view model
//! - [`observability`]: Tracing subscriber setup
//!
//! # Initialization Flow
//!
//! 1. Parse [`Config`] from host key/values or a TOML file
//! 2. [`observability::init_tracing`]
//! 3. [`initialize`]: load → render → category index → controller
//! 4. Host forwards control events to [`app::handle_event`]
//!
//! # Example
//!
//! ```
//! use folio::app::{handle_event, Event};
//! use folio::loader::StaticFetcher;
//! use folio::ui::MemoryDocument;
//! use folio::Config;
//!
//! let fetcher = StaticFetcher::new()
//!     .with("articles-manifest.json", r#"{"articles": ["a.json", "b.json"]}"#)
//!     .with("a.json", r#"{"id":"a","title":"Go basics","tag":"go","sortableDate":"2023-01"}"#)
//!     .with("b.json", r#"{"id":"b","title":"Rust notes","tag":"rust","sortableDate":"2024-06"}"#);
//!
//! let config = Config::default();
//! let mut controller =
//!     futures::executor::block_on(folio::initialize(&config, &fetcher, MemoryDocument::new()));
//!
//! handle_event(&mut controller, &Event::CategoryChanged { category: "go".into(), checked: true });
//! assert_eq!(controller.surface().shown_ids(), ["a"]);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod loader;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Event, ListingController};
pub use domain::{Article, CategoryIndex, FolioError, QueryState, Result, SortOrder};
pub use loader::{load_articles, DirectoryFetcher, ResourceFetcher, StaticFetcher};
pub use ui::{ListingSurface, MemoryDocument};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Text shown in place of the listing when loading fails.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Failed to load notes.";

/// Engine configuration.
///
/// # Example
///
/// ```toml
/// content_dir = "site/content"
/// manifest = "articles-manifest.json"
/// fallback_message = "Notes are unavailable right now."
/// trace_level = "debug"
/// trace_dir = "/var/log/folio"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the manifest and article resources are resolved against.
    ///
    /// Default: `content`
    pub content_dir: PathBuf,

    /// Manifest resource name. Default: `articles-manifest.json`
    pub manifest: String,

    /// Message shown when the collection cannot be loaded.
    pub fallback_message: String,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for OTLP trace files; stderr logging when unset.
    pub trace_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            manifest: loader::DEFAULT_MANIFEST.to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            trace_level: None,
            trace_dir: None,
        }
    }
}

impl Config {
    /// Parses configuration from host-provided key/value pairs.
    ///
    /// Recognized keys: `content_dir`, `manifest`, `fallback_message`,
    /// `trace_level`, `trace_dir`. Unknown keys are ignored and blank values fall
    /// back to defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use folio::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("content_dir".to_string(), "site/content".to_string());
    /// map.insert("manifest".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.content_dir.to_str(), Some("site/content"));
    /// assert_eq!(config.manifest, "articles-manifest.json");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let defaults = Self::default();
        Self {
            content_dir: value("content_dir").map_or(defaults.content_dir, PathBuf::from),
            manifest: value("manifest").unwrap_or(defaults.manifest),
            fallback_message: value("fallback_message").unwrap_or(defaults.fallback_message),
            trace_level: value("trace_level"),
            trace_dir: value("trace_dir").map(PathBuf::from),
        }
    }

    /// Parses configuration from TOML text; missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FolioError::Config(format!("invalid config: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Io`] if the file cannot be read and
    /// [`FolioError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "reading configuration file");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// A fetcher serving [`Config::content_dir`].
    #[must_use]
    pub fn fetcher(&self) -> DirectoryFetcher {
        DirectoryFetcher::new(&self.content_dir)
    }
}

/// Loads the collection and builds the page controller.
///
/// On any load failure the error is logged, the fallback message replaces the
/// listing, and the controller starts with an empty collection. Nothing is
/// rendered from a partially loaded collection.
pub async fn initialize<F, S>(config: &Config, fetcher: &F, mut surface: S) -> ListingController<S>
where
    F: ResourceFetcher + ?Sized,
    S: ListingSurface,
{
    let articles = match load_articles(fetcher, &config.manifest).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!(error = %e, manifest = %config.manifest, "failed to load articles");
            surface.show_fallback(&config.fallback_message);
            Vec::new()
        }
    };

    let controller = ListingController::new(articles, surface);

    tracing::info!(
        article_count = controller.articles().len(),
        categories = controller.categories().len(),
        "notes listing initialized"
    );

    controller
}
