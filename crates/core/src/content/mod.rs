//! Content file discovery, page parsing, and write-back.

pub mod discovery;
pub mod gather;
pub mod page;
pub mod writer;

pub use discovery::{CONTENT_EXTENSION, DiscoveryError, discover_paths};
pub use gather::{GatherError, gather_pages};
pub use page::{Page, PageError};
pub use writer::{UpdateError, WriteError, update_file, write_atomic};
