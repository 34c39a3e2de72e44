#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Listing and updating the front matter of Hugo content files.
//!
//! A content file is a YAML block between two `---` lines followed by a body:
//!
//! ```text
//! ---
//! title: page1
//! tags: [rust]
//! ---
//! body text
//! ```
//!
//! Entry points are [`listing::list`] for a directory of pages and
//! [`content::update_file`] for rewriting one file.

pub mod config;
pub mod content;
pub mod frontmatter;
pub mod listing;
pub mod render;
