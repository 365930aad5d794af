//! Database file header parsing and the store collaborator seam.

pub mod header;
pub mod query;
pub mod store;
pub mod value;

// Re-export public API
pub use header::{read_page_size, FileError};
pub use store::{SqliteStore, Store, StoreError};
pub use value::{Row, Value};
