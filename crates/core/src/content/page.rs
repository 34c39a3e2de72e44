//! A single content page: path, front matter, and body.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::frontmatter::{DELIMITER, Metadata, MetadataError, MetadataPatch, SplitError, split};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("path must be non-empty")]
    EmptyPath,

    #[error("failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to split front matter and body: {0}")]
    Split(#[from] SplitError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("failed to parse {} page content: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<PageError>,
    },
}

/// A parsed content file.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    path: PathBuf,
    front_matter: Metadata,
    body: String,
}

impl Page {
    pub fn new(path: impl Into<PathBuf>, front_matter: Metadata, body: impl Into<String>) -> Self {
        Self { path: path.into(), front_matter, body: body.into() }
    }

    /// Parse page content from a reader. The page has an empty path.
    pub fn parse<R: Read>(reader: R) -> Result<Self, PageError> {
        let split = split(reader)?;
        let front_matter = Metadata::from_yaml(&split.front_matter)?;
        Ok(Self { path: PathBuf::new(), front_matter, body: split.body })
    }

    /// Open and parse a single page.
    pub fn from_file(path: &Path) -> Result<Self, PageError> {
        if path.as_os_str().is_empty() {
            return Err(PageError::EmptyPath);
        }

        let file = File::open(path)
            .map_err(|source| PageError::Open { path: path.to_path_buf(), source })?;

        let mut page = Self::parse(BufReader::new(file)).map_err(|source| PageError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        page.path = path.to_path_buf();

        debug!(path = %path.display(), title = %page.front_matter.title, "parsed page");
        Ok(page)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final component of the path, or an empty string.
    pub fn file_name(&self) -> String {
        self.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
    }

    pub fn front_matter(&self) -> &Metadata {
        &self.front_matter
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Merge a partial update onto the page's front matter.
    pub fn apply(&mut self, patch: MetadataPatch) {
        self.front_matter.apply(patch);
    }

    /// Render the page back to its on-disk form.
    pub fn to_document(&self) -> Result<String, MetadataError> {
        let yaml = self.front_matter.to_yaml()?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n{}", self.body))
    }
}
