//! Device-local Key-Value persistence for the cart store.
//!
//! Values are text blobs addressed by string keys. Two backends ship with
//! the crate, and [`Cache`] layers typed JSON access over either of them.
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_kv::{Cache, FileStore};
//!
//! let store = FileStore::open(data_dir).await?;
//! let cache = Cache::new(store);
//!
//! // Store a value
//! cache.set_json("@cart", &items).await?;
//!
//! // Retrieve a value
//! let items: Option<Vec<LineItem>> = cache.get_json("@cart").await?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, FileStore, KeyValueStore, MemoryStore, StorageError};
}
