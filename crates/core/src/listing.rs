//! The `list` operation: gather, filter, sort, and render a content tree.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::content::{GatherError, gather_pages};
use crate::render::{
    DEFAULT_DATE_FORMAT, ListType, PageFilter, RenderError, Rendered, SortKey, TableRenderer,
    TemplateRenderer, group_by_categories, group_by_tags, render_groups, sort_pages,
};

#[derive(Debug, Error)]
pub enum ListError {
    #[error(transparent)]
    Gather(#[from] GatherError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// How a content tree is listed.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Template applied per page. Only used for [`ListType::Pages`].
    pub format: Option<String>,
    pub sort: Option<SortKey>,
    pub list_type: ListType,
    pub filter: PageFilter,
    /// strftime layout for dates in the default table.
    pub date_format: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            format: None,
            sort: None,
            list_type: ListType::Pages,
            filter: PageFilter::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// List every page under `root`.
///
/// A custom format is compiled before the tree is read, so a bad format fails
/// without output.
pub fn list(root: &Path, opts: &ListOptions) -> Result<Rendered, ListError> {
    let template = match (&opts.format, opts.list_type) {
        (Some(format), ListType::Pages) => Some(TemplateRenderer::compile(format)?),
        _ => None,
    };

    let mut pages = opts.filter.apply(gather_pages(root)?);
    if let Some(key) = opts.sort {
        sort_pages(&mut pages, key);
    }

    debug!(count = pages.len(), list_type = %opts.list_type, "rendering listing");

    let rendered = match opts.list_type {
        ListType::Pages => match template {
            Some(template) => template.render(&pages)?,
            None => TableRenderer::new(opts.date_format.as_str()).render(&pages)?.into(),
        },
        ListType::Tags => render_groups(&group_by_tags(&pages)).into(),
        ListType::Categories => render_groups(&group_by_categories(&pages)).into(),
    };

    Ok(rendered)
}
