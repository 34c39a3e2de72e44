//! Atomic write-back of pages and the in-place update operation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use thiserror::Error;
use tracing::{debug, info};

use super::page::{Page, PageError};
use crate::frontmatter::{MetadataError, MetadataPatch};

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to encode front matter for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },

    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Page(#[from] PageError),

    #[error("invalid front matter update for {}: {source}", path.display())]
    Patch {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Write `page` over `target` through a temporary file and a rename.
///
/// The temporary file lives next to `target` so the rename stays on one
/// filesystem. Until the rename the original file is untouched.
pub fn write_atomic(page: &Page, target: &Path) -> Result<(), WriteError> {
    let document = page
        .to_document()
        .map_err(|source| WriteError::Encode { path: target.to_path_buf(), source })?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let io_err = |op: &'static str, path: &Path| {
        let path = path.to_path_buf();
        move |source| WriteError::Io { op, path, source }
    };

    let mut tmp = Builder::new()
        .prefix(".hugo-utils-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(io_err("create temporary file in", dir))?;

    // Keep the target's permissions instead of the temp file's 0600.
    if let Ok(meta) = fs::metadata(target) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(io_err("copy permissions to", tmp.path()))?;
    }

    tmp.write_all(document.as_bytes()).map_err(io_err("write", tmp.path()))?;
    tmp.as_file().sync_all().map_err(io_err("sync", tmp.path()))?;

    debug!(tmp = %tmp.path().display(), target = %target.display(), "renaming");
    tmp.persist(target).map_err(|e| WriteError::Io {
        op: "rename temporary file over",
        path: target.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

/// Merge `fragment` into the front matter of the page at `path` and rewrite it.
///
/// Without a fragment the page is still rewritten, which writes every
/// front matter field out with its default.
pub fn update_file(path: &Path, fragment: Option<&str>) -> Result<Page, UpdateError> {
    let mut page = Page::from_file(path)?;

    if let Some(fragment) = fragment {
        let patch = MetadataPatch::from_yaml(fragment)
            .map_err(|source| UpdateError::Patch { path: path.to_path_buf(), source })?;
        page.apply(patch);
    }

    write_atomic(&page, path)?;
    info!(path = %path.display(), "updated front matter");
    Ok(page)
}
