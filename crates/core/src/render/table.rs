//! Default label/value listing of pages.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Padding, Style};

use super::RenderError;
use crate::content::Page;
use crate::frontmatter::Timestamp;

/// Human date layout for the default listing, e.g. `Jan 2, 2006`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

const LABELS: [&str; 8] = ["title", "file", "slug", "date", "last-mod", "keywords", "tags", "draft"];

/// Space after every column but the last.
const PADDING: usize = 4;

/// Renders each page as an aligned two-column table followed by a blank line.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    date_format: String,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl TableRenderer {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self { date_format: date_format.into() }
    }

    /// Fails with [`RenderError::InvalidDateFormat`] when the date layout
    /// is not a valid strftime layout.
    pub fn render(&self, pages: &[Page]) -> Result<String, RenderError> {
        let mut out = String::new();

        for page in pages {
            let fm = page.front_matter();
            let values = [
                fm.title.clone(),
                page.file_name(),
                fm.slug.clone(),
                self.date(&fm.date)?,
                self.date(&fm.lastmod)?,
                format_list(&fm.keywords),
                format_list(&fm.tags),
                fm.draft.to_string(),
            ];

            let rows = LABELS.iter().zip(values).map(|(label, value)| [label.to_string(), value]);
            out.push_str(&columns(rows));
            out.push('\n');
        }

        Ok(out)
    }

    fn date(&self, ts: &Timestamp) -> Result<String, RenderError> {
        ts.format(&self.date_format)
            .map_err(|_| RenderError::InvalidDateFormat(self.date_format.clone()))
    }
}

pub(crate) fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

/// Lay `rows` out in left-aligned columns, [`PADDING`] spaces apart.
///
/// Every line ends in a newline and carries no trailing spaces.
pub(crate) fn columns<R, I>(rows: R) -> String
where
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = String>,
{
    let mut builder = Builder::default();
    let mut width = 0;
    for row in rows {
        let row: Vec<String> = row.into_iter().collect();
        width = width.max(row.len());
        builder.push_record(row);
    }
    if width == 0 {
        return String::new();
    }

    let mut table = builder.build();
    table.with(Style::empty()).with(Padding::zero());
    if width > 1 {
        table.modify(Columns::new(..width - 1), Padding::new(0, PADDING, 0, 0));
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
