//! Front matter splitting, decoding, merging, and encoding.
//!
//! This module provides functionality to:
//! - Split a page into its YAML front matter block and body
//! - Decode the block into the fixed [`Metadata`] schema
//! - Merge a partial update onto existing metadata
//! - Encode metadata back with every field written out

pub mod merge;
pub mod metadata;
pub mod splitter;
pub mod timestamp;

pub use merge::MetadataPatch;
pub use metadata::{Metadata, MetadataError};
pub use splitter::{DELIMITER, Split, SplitError, split, split_str};
pub use timestamp::Timestamp;
