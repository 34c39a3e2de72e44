//! User-supplied template rendering of pages.

use std::path::PathBuf;

use minijinja::{Environment, Error, ErrorKind, UndefinedBehavior};
use serde::Serialize;
use serde_yaml::Mapping;
use tracing::warn;

use super::{PageFailure, RenderError, Rendered};
use crate::content::Page;
use crate::frontmatter::Timestamp;

const TEMPLATE_NAME: &str = "list-format";

/// What a template sees for one page.
#[derive(Debug, Serialize)]
struct PageView<'a> {
    path: String,
    file: String,
    title: &'a str,
    description: &'a str,
    slug: &'a str,
    image: &'a str,
    date: Timestamp,
    lastmod: Timestamp,
    draft: bool,
    tags: &'a [String],
    categories: &'a [String],
    keywords: &'a [String],
    extra: &'a Mapping,
    body: &'a str,
}

impl<'a> From<&'a Page> for PageView<'a> {
    fn from(page: &'a Page) -> Self {
        let fm = page.front_matter();
        Self {
            path: page.path().display().to_string(),
            file: page.file_name(),
            title: &fm.title,
            description: &fm.description,
            slug: &fm.slug,
            image: &fm.image,
            date: fm.date,
            lastmod: fm.lastmod,
            draft: fm.draft,
            tags: &fm.tags,
            categories: &fm.categories,
            keywords: &fm.keywords,
            extra: &fm.extra,
            body: page.body(),
        }
    }
}

/// The current page's fields at the top level plus every page under `pages`.
#[derive(Debug, Serialize)]
struct RenderState<'a> {
    #[serde(flatten)]
    page: &'a PageView<'a>,
    pages: &'a [PageView<'a>],
}

/// A format string compiled once and applied to every page.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Compile `format`. Undefined variables are errors at render time.
    pub fn compile(format: &str) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("format_date", format_date);
        env.add_template_owned(TEMPLATE_NAME, format.to_owned())
            .map_err(RenderError::InvalidFormat)?;
        Ok(Self { env })
    }

    /// Render every page, each followed by a newline.
    ///
    /// A page that fails to render is recorded and skipped; later pages
    /// still render.
    pub fn render(&self, pages: &[Page]) -> Result<Rendered, RenderError> {
        let template = self.env.get_template(TEMPLATE_NAME).map_err(RenderError::InvalidFormat)?;
        let views: Vec<PageView<'_>> = pages.iter().map(PageView::from).collect();

        let mut rendered = Rendered::default();
        for view in &views {
            match template.render(RenderState { page: view, pages: &views }) {
                Ok(text) => rendered.output.push_str(&text),
                Err(e) => {
                    warn!(path = %view.path, error = %e, "failed to render page");
                    rendered
                        .failures
                        .push(PageFailure { path: PathBuf::from(&view.path), message: e.to_string() });
                }
            }
            rendered.output.push('\n');
        }

        Ok(rendered)
    }
}

/// `{{ date | format_date("%Y-%m-%d") }}`
fn format_date(value: String, layout: String) -> Result<String, Error> {
    let ts = Timestamp::parse(&value).ok_or_else(|| {
        Error::new(ErrorKind::InvalidOperation, format!("not a timestamp: '{value}'"))
    })?;
    ts.format(&layout).map_err(|_| {
        Error::new(ErrorKind::InvalidOperation, format!("invalid date layout '{layout}'"))
    })
}
