//! Aggregation of every page under a content root.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::discovery::{DiscoveryError, discover_paths};
use super::page::{Page, PageError};

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("couldn't find content under {}: {source}", root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: DiscoveryError,
    },

    #[error("failed to parse page {}: {source}", path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: PageError,
    },
}

/// Discover and parse every page under `root`.
///
/// Stops at the first page that fails to parse; there is no partial result.
pub fn gather_pages(root: &Path) -> Result<Vec<Page>, GatherError> {
    let paths = discover_paths(root)
        .map_err(|source| GatherError::Discovery { root: root.to_path_buf(), source })?;

    debug!(root = %root.display(), count = paths.len(), "gathering pages");

    paths
        .into_iter()
        .map(|path| Page::from_file(&path).map_err(|source| GatherError::Page { path, source }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn gathers_every_page() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("page1.md"), "---\ntitle: page1\ntags: [a, b]\n---\none").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/page2.md"), "---\ntitle: page2\n---\ntwo").unwrap();

        let mut pages = gather_pages(dir.path()).unwrap();
        pages.sort_by(|a, b| a.path().cmp(b.path()));

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].path(), dir.path().join("nested/page2.md"));
        assert_eq!(pages[1].front_matter().title, "page1");
        assert_eq!(pages[1].front_matter().tags.len(), 2);
    }

    #[test]
    fn one_bad_page_aborts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("good.md"), "---\ntitle: ok\n---\n").unwrap();
        fs::write(dir.path().join("bad.md"), "no delimiters\n").unwrap();

        let err = gather_pages(dir.path()).unwrap_err();
        match &err {
            GatherError::Page { path, .. } => assert!(path.ends_with("bad.md")),
            other => panic!("expected Page error, got {other:?}"),
        }
    }

    #[test]
    fn missing_root_is_discovery_error() {
        let err = gather_pages(Path::new("/inexistent/content")).unwrap_err();
        assert!(matches!(
            err,
            GatherError::Discovery { source: DiscoveryError::NotFound { .. }, .. }
        ));
    }
}
