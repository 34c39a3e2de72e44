//! Listing pages grouped by taxonomy term.

use std::collections::BTreeMap;

use super::table::columns;
use crate::content::Page;

/// Pages keyed by term, terms in lexicographic order. Within a term pages
/// keep their input order.
pub type TermGroups<'a> = BTreeMap<&'a str, Vec<&'a Page>>;

/// Group pages by every tag they carry. Untagged pages are skipped.
pub fn group_by_tags(pages: &[Page]) -> TermGroups<'_> {
    group_by(pages, |p| p.front_matter().tags.as_slice())
}

/// Group pages by every category they carry.
pub fn group_by_categories(pages: &[Page]) -> TermGroups<'_> {
    group_by(pages, |p| p.front_matter().categories.as_slice())
}

fn group_by<'a>(pages: &'a [Page], terms: impl Fn(&'a Page) -> &'a [String]) -> TermGroups<'a> {
    let mut groups = TermGroups::new();
    for page in pages {
        for term in terms(page) {
            let members = groups.entry(term.as_str()).or_default();
            // A term listed twice on one page still lists the page once.
            if !members.iter().any(|p| std::ptr::eq(*p, page)) {
                members.push(page);
            }
        }
    }
    groups
}

/// Render groups as the term followed by one indented `title (file)` line per page.
pub fn render_groups(groups: &TermGroups<'_>) -> String {
    let mut out = String::new();

    for (term, pages) in groups {
        out.push_str(term);
        out.push('\n');
        out.push_str(&columns(pages.iter().map(|page| {
            [String::new(), page.front_matter().title.clone(), format!("({})", page.file_name())]
        })));
        out.push('\n');
    }

    out
}
