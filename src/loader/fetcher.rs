//! Resource transports for the loader.
//!
//! The loader only needs "give me the bytes named X". [`ResourceFetcher`] is that
//! seam; [`DirectoryFetcher`] serves a content directory on disk and
//! [`StaticFetcher`] serves resources held in memory.

use crate::domain::error::{FolioError, Result};
use crate::infrastructure::paths;
use futures_util::future::BoxFuture;
use std::collections::HashMap;
use std::path::PathBuf;

/// Fetches named resources.
///
/// Each call is independent; the loader drives several of them concurrently and
/// never retries.
pub trait ResourceFetcher {
    /// Returns the full contents of the resource called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource is missing or cannot be read.
    fn fetch<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Vec<u8>>>;
}

/// Serves resources from a content directory.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    /// Serves resources below `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceFetcher for DirectoryFetcher {
    fn fetch<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        Box::pin(async move {
            let path = paths::resolve_resource(&self.root, name)?;
            tracing::trace!(path = ?path, "reading resource");
            Ok(std::fs::read(&path)?)
        })
    }
}

/// Serves resources from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    resources: HashMap<String, Vec<u8>>,
}

impl StaticFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a resource.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(name, body);
        self
    }

    /// Adds or replaces a resource in place.
    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), body.into());
    }
}

impl ResourceFetcher for StaticFetcher {
    fn fetch<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        let found = self.resources.get(name).cloned().ok_or_else(|| {
            FolioError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no resource named {name}"),
            ))
        });
        Box::pin(std::future::ready(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn directory_fetcher_reads_relative_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), b"{}").unwrap();

        let fetcher = DirectoryFetcher::new(dir.path());
        assert_eq!(block_on(fetcher.fetch("a.json")).unwrap(), b"{}");
        assert!(matches!(
            block_on(fetcher.fetch("missing.json")),
            Err(FolioError::Io(_))
        ));
        assert!(matches!(
            block_on(fetcher.fetch("../a.json")),
            Err(FolioError::Config(_))
        ));
    }

    #[test]
    fn static_fetcher_reports_missing_resources() {
        let fetcher = StaticFetcher::new().with("m.json", "{}");
        assert!(block_on(fetcher.fetch("m.json")).is_ok());
        assert!(block_on(fetcher.fetch("other.json")).is_err());
    }
}
