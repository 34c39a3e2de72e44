//! List command implementation.

use std::io::{self, Write};
use std::str::FromStr;

use hugo_utils_core::config::types::ResolvedConfig;
use hugo_utils_core::listing::{ListOptions, list};
use hugo_utils_core::render::{ListType, PageFilter, SortKey};
use tracing::debug;

use crate::ListArgs;

pub fn run(cfg: &ResolvedConfig, args: ListArgs) {
    let Some(root) = args.directory.or_else(|| cfg.content_root.clone()) else {
        eprintln!("Error: a root path must be specified");
        eprintln!("Hint: pass --directory or set content.root in the config file.");
        std::process::exit(1);
    };

    let sort = parse_or_exit(args.sort.as_deref(), cfg.sort);
    let list_type = parse_or_exit(args.list_type.as_deref(), cfg.list_type);

    let opts = ListOptions {
        format: args.format,
        sort: Some(sort),
        list_type,
        filter: PageFilter { drafts_only: args.draft },
        date_format: cfg.date_format.clone(),
    };

    debug!(root = %root.display(), %sort, %list_type, "listing content");

    let rendered = match list(&root, &opts) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Error listing {}: {e}", root.display());
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(rendered.output.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("Error writing output: {e}");
        std::process::exit(1);
    }

    if !rendered.is_complete() {
        for failure in &rendered.failures {
            eprintln!("Error rendering {}: {}", failure.path.display(), failure.message);
        }
        std::process::exit(1);
    }
}

/// Parse a flag value, falling back to the configured default.
fn parse_or_exit<T>(value: Option<&str>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.map(str::parse).transpose() {
        Ok(parsed) => parsed.unwrap_or(default),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_default() {
        assert_eq!(parse_or_exit(Some("title"), SortKey::LastMod), SortKey::Title);
        assert_eq!(parse_or_exit::<ListType>(None, ListType::Tags), ListType::Tags);
    }
}
