//! Recursive discovery of content files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Extension of the files treated as content pages.
pub const CONTENT_EXTENSION: &str = "md";

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("a root must be specified")]
    EmptyRoot,

    #[error("failed to retrieve info from root path {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to search for content files under root {}: {source}", root.display())]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Collect every content file under `root`.
///
/// Paths keep the form of `root` (relative roots give relative paths) and
/// come back in walk order, which is not sorted.
pub fn discover_paths(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if root.as_os_str().is_empty() {
        return Err(DiscoveryError::EmptyRoot);
    }

    fs::metadata(root)
        .map_err(|source| DiscoveryError::NotFound { path: root.to_path_buf(), source })?;

    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|source| DiscoveryError::Traversal {
            root: root.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if !path.is_file() || !is_content_file(path) {
            continue;
        }

        debug!(path = %path.display(), "discovered content file");
        paths.push(entry.into_path());
    }

    Ok(paths)
}

fn is_content_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == CONTENT_EXTENSION)
}
