//! Persistent shopping cart state for client applications.
//!
//! The cart is an ordered list of line items held in memory and mirrored
//! to a device-local Key-Value slot after every change:
//!
//! - **Cart**: line items keyed by product ID, quantities floored at 1
//! - **Store**: the loaded cart plus an ordered background writer
//! - **Provider**: explicit owner of the store with a fail-fast accessor
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_store::prelude::*;
//! use cart_kv::FileStore;
//!
//! let provider = CartProvider::new();
//! provider.init(FileStore::open(data_dir).await?, &StoreConfig::default()).await?;
//!
//! let cart = provider.use_cart();
//! cart.add_item(NewItem::new("a", "Shoe", "https://img/a.png", 10.0));
//! cart.increment(&ProductId::new("a"));
//! for item in cart.items() {
//!     println!("{} x{}", item.title, item.quantity);
//! }
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod ids;
pub mod provider;
pub mod store;
pub mod telemetry;

mod writer;

pub use cart::{Cart, LineItem, NewItem};
pub use config::{CorruptSnapshotPolicy, LoggingConfig, StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::CartError;
pub use ids::ProductId;
pub use provider::CartProvider;
pub use store::CartStore;
pub use telemetry::init_tracing;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem, NewItem};
    pub use crate::config::{CorruptSnapshotPolicy, StoreConfig};
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::provider::CartProvider;
    pub use crate::store::CartStore;
}
