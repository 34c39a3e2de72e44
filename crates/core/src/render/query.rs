//! Page ordering, selection, and list-type options.

use std::fmt;
use std::str::FromStr;

use super::RenderError;
use crate::content::Page;

/// Field to order pages by before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Title,
    Date,
    #[default]
    LastMod,
}

impl SortKey {
    pub const VALUES: &'static str = "title|date|lastmod";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::LastMod => "lastmod",
        }
    }
}

impl FromStr for SortKey {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "date" => Ok(Self::Date),
            "lastmod" => Ok(Self::LastMod),
            other => Err(RenderError::InvalidArgument {
                kind: "sort type",
                value: other.to_string(),
                expected: Self::VALUES,
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a listing is organised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    #[default]
    Pages,
    Tags,
    Categories,
}

impl ListType {
    pub const VALUES: &'static str = "pages|tags|categories";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Tags => "tags",
            Self::Categories => "categories",
        }
    }
}

impl FromStr for ListType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pages" => Ok(Self::Pages),
            "tags" => Ok(Self::Tags),
            "categories" => Ok(Self::Categories),
            other => Err(RenderError::InvalidArgument {
                kind: "list type",
                value: other.to_string(),
                expected: Self::VALUES,
            }),
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable sort of `pages` by `key`: titles lexicographically, dates
/// chronologically.
pub fn sort_pages(pages: &mut [Page], key: SortKey) {
    match key {
        SortKey::Title => {
            pages.sort_by(|a, b| a.front_matter().title.cmp(&b.front_matter().title));
        }
        SortKey::Date => pages.sort_by_key(|p| p.front_matter().date),
        SortKey::LastMod => pages.sort_by_key(|p| p.front_matter().lastmod),
    }
}

/// Which pages take part in a listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageFilter {
    pub drafts_only: bool,
}

impl PageFilter {
    pub fn matches(&self, page: &Page) -> bool {
        !self.drafts_only || page.front_matter().draft
    }

    pub fn apply(&self, pages: Vec<Page>) -> Vec<Page> {
        pages.into_iter().filter(|p| self.matches(p)).collect()
    }
}
