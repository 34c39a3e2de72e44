//! Update command implementation.

use std::path::Path;

use hugo_utils_core::content::update_file;
use tracing::debug;

pub fn run(filepath: &Path, yaml: Option<&str>) {
    debug!(path = %filepath.display(), merge = yaml.is_some(), "updating page");

    if let Err(e) = update_file(filepath, yaml.filter(|y| !y.is_empty())) {
        eprintln!("Error updating {}: {e}", filepath.display());
        std::process::exit(1);
    }
}
