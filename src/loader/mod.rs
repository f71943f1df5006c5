//! Article collection loader.
//!
//! Fetches the manifest, then every article it lists concurrently, and produces
//! the canonical collection in manifest order with `original_index` assigned.
//!
//! There is no partial-success mode: a failed manifest fetch, a failed article
//! fetch, an unparseable response or a duplicate id aborts the whole load. There
//! are no retries and no timeouts.
//!
//! # Modules
//!
//! - [`fetcher`]: Resource transport trait and its directory/in-memory implementations
//! - [`manifest`]: Manifest document format

pub mod fetcher;
pub mod manifest;

pub use fetcher::{DirectoryFetcher, ResourceFetcher, StaticFetcher};
pub use manifest::{Manifest, DEFAULT_MANIFEST};

use crate::domain::error::{FolioError, Result};
use crate::domain::Article;
use futures_util::future::try_join_all;
use std::collections::HashSet;

/// Loads the canonical article collection.
///
/// # Errors
///
/// - [`FolioError::ManifestFetch`] / [`FolioError::ManifestParse`] for the manifest
/// - [`FolioError::ArticleFetch`] / [`FolioError::ArticleParse`] for any article
/// - [`FolioError::DuplicateArticleId`] if two records share an id
///
/// # Examples
///
/// ```
/// use folio::loader::{load_articles, StaticFetcher};
///
/// let fetcher = StaticFetcher::new()
///     .with("articles-manifest.json", r#"{"articles": ["b.json", "a.json"]}"#)
///     .with("a.json", r#"{"id":"a","title":"Go basics","tag":"go","sortableDate":"2023-01"}"#)
///     .with("b.json", r#"{"id":"b","title":"Rust notes","tag":"rust","sortableDate":"2024-06"}"#);
///
/// let articles = futures::executor::block_on(load_articles(&fetcher, "articles-manifest.json"))?;
/// assert_eq!(articles[0].id, "b");
/// assert_eq!(articles[1].original_index, 1);
/// # Ok::<(), folio::FolioError>(())
/// ```
pub async fn load_articles<F>(fetcher: &F, manifest_name: &str) -> Result<Vec<Article>>
where
    F: ResourceFetcher + ?Sized,
{
    let manifest = load_manifest(fetcher, manifest_name).await?;

    tracing::debug!(
        manifest = %manifest_name,
        article_count = manifest.articles.len(),
        "manifest loaded"
    );

    let pending = manifest
        .articles
        .iter()
        .map(|name| load_article(fetcher, name));

    let mut articles = try_join_all(pending).await?;

    let mut seen = HashSet::with_capacity(articles.len());
    for (index, article) in articles.iter_mut().enumerate() {
        if !seen.insert(article.id.clone()) {
            return Err(FolioError::DuplicateArticleId(article.id.clone()));
        }
        article.original_index = index;
    }

    tracing::debug!(article_count = articles.len(), "articles loaded");
    Ok(articles)
}

async fn load_manifest<F>(fetcher: &F, name: &str) -> Result<Manifest>
where
    F: ResourceFetcher + ?Sized,
{
    let body = fetcher
        .fetch(name)
        .await
        .map_err(|e| FolioError::ManifestFetch {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    serde_json::from_slice(&body).map_err(|e| FolioError::ManifestParse {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

async fn load_article<F>(fetcher: &F, name: &str) -> Result<Article>
where
    F: ResourceFetcher + ?Sized,
{
    let body = fetcher
        .fetch(name)
        .await
        .map_err(|e| FolioError::ArticleFetch {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    serde_json::from_slice(&body).map_err(|e| FolioError::ArticleParse {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    const MANIFEST: &str = "articles-manifest.json";

    fn record(id: &str, tag: &str, date: &str) -> String {
        format!(r#"{{"id":"{id}","title":"Title {id}","excerpt":"","tag":"{tag}","date":"","sortableDate":"{date}"}}"#)
    }

    fn fetcher() -> StaticFetcher {
        StaticFetcher::new()
            .with(MANIFEST, r#"{"articles": ["c.json", "a.json", "b.json"]}"#)
            .with("a.json", record("a", "go", "2023-01"))
            .with("b.json", record("b", "rust", "2024-06"))
            .with("c.json", record("c", "rust", "2022-11"))
    }

    #[test]
    fn keeps_manifest_order_and_assigns_indices() {
        let articles = block_on(load_articles(&fetcher(), MANIFEST)).unwrap();
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        let indices: Vec<_> = articles.iter().map(|a| a.original_index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn missing_manifest_is_a_manifest_fetch_failure() {
        let err = block_on(load_articles(&StaticFetcher::new(), MANIFEST)).unwrap_err();
        assert!(matches!(err, FolioError::ManifestFetch { .. }));
    }

    #[test]
    fn malformed_manifest_is_a_manifest_parse_failure() {
        let fetcher = StaticFetcher::new().with(MANIFEST, "[1, 2");
        let err = block_on(load_articles(&fetcher, MANIFEST)).unwrap_err();
        assert!(matches!(err, FolioError::ManifestParse { .. }));
    }

    #[test]
    fn one_missing_article_fails_the_whole_load() {
        let fetcher = fetcher().with(MANIFEST, r#"{"articles": ["a.json", "gone.json"]}"#);
        let err = block_on(load_articles(&fetcher, MANIFEST)).unwrap_err();
        match err {
            FolioError::ArticleFetch { name, .. } => assert_eq!(name, "gone.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unparseable_article_is_an_article_parse_failure() {
        let fetcher = fetcher().with("b.json", r#"{"id":"b","title":"no tag"}"#);
        let err = block_on(load_articles(&fetcher, MANIFEST)).unwrap_err();
        assert!(matches!(err, FolioError::ArticleParse { ref name, .. } if name == "b.json"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let fetcher = fetcher().with("b.json", record("a", "rust", "2024-06"));
        let err = block_on(load_articles(&fetcher, MANIFEST)).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateArticleId(ref id) if id == "a"));
    }

    #[test]
    fn empty_manifest_loads_empty_collection() {
        let fetcher = StaticFetcher::new().with(MANIFEST, r#"{"articles": []}"#);
        assert!(block_on(load_articles(&fetcher, MANIFEST)).unwrap().is_empty());
    }
}
