//! Rendering of page collections.
//!
//! Pages are listed either through the default label/value table, through a
//! user-supplied template, or grouped by tag or category. Sorting and draft
//! filtering happen before any of these.

pub mod groups;
pub mod query;
pub mod table;
pub mod template;

use std::path::PathBuf;

use thiserror::Error;

use crate::content::Page;

pub use groups::{TermGroups, group_by_categories, group_by_tags, render_groups};
pub use query::{ListType, PageFilter, SortKey, sort_pages};
pub use table::{DEFAULT_DATE_FORMAT, TableRenderer};
pub use template::TemplateRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid format: {0}")]
    InvalidFormat(#[source] minijinja::Error),

    #[error("unknown {kind} '{value}' (expected {expected})")]
    InvalidArgument { kind: &'static str, value: String, expected: &'static str },

    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),
}

/// A page whose template execution failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Rendered text plus the pages that could not be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub output: String,
    pub failures: Vec<PageFailure>,
}

impl Rendered {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl From<String> for Rendered {
    fn from(output: String) -> Self {
        Self { output, failures: Vec::new() }
    }
}

/// Render `pages` in the given order, as a table when `format` is `None`.
pub fn render(pages: &[Page], format: Option<&str>) -> Result<Rendered, RenderError> {
    match format {
        Some(format) => TemplateRenderer::compile(format)?.render(pages),
        None => Ok(TableRenderer::default().render(pages)?.into()),
    }
}
