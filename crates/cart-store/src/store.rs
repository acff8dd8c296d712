//! The cart store: in-memory cart mirrored to a Key-Value slot.

use std::sync::{Mutex, MutexGuard, PoisonError};

use cart_kv::{Cache, KeyValueStore};

use crate::cart::{Cart, LineItem, NewItem};
use crate::config::{CorruptSnapshotPolicy, StoreConfig};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::writer::WriteQueue;

/// Shared cart state for the application session.
///
/// A store only exists once its snapshot has been loaded, so mutations can
/// never be overwritten by a late load. Every mutation queues a full
/// snapshot for the background writer; persistence failures are logged and
/// never reach the caller.
///
/// # Example
///
/// ```rust,ignore
/// let store = CartStore::load(FileStore::open(dir).await?, &StoreConfig::default()).await?;
/// store.add_item(NewItem::new("a", "Shoe", "https://img/a.png", 10.0));
/// store.decrement(&ProductId::new("a"));
/// store.flush().await;
/// ```
#[derive(Debug)]
pub struct CartStore {
    state: Mutex<Cart>,
    writes: WriteQueue,
    key: String,
}

impl CartStore {
    /// Restore the cart from `storage` and start the writer.
    ///
    /// An unset slot yields an empty cart. A malformed snapshot is handled
    /// according to [`StoreConfig::on_corrupt`]. Must be called within a
    /// tokio runtime.
    pub async fn load<S: KeyValueStore>(storage: S, config: &StoreConfig) -> Result<Self, CartError> {
        let cache = Cache::new(storage);
        let key = config.storage_key.clone();

        let cart = match cache.get_json::<Cart>(&key).await {
            Ok(Some(cart)) => {
                tracing::info!(key = %key, items = cart.len(), "restored cart");
                cart
            }
            Ok(None) => {
                tracing::debug!(key = %key, "no stored cart, starting empty");
                Cart::new()
            }
            Err(e) if e.is_corrupt() => match config.on_corrupt {
                CorruptSnapshotPolicy::Reset => {
                    tracing::warn!(key = %key, error = %e, "stored cart is malformed, starting empty");
                    Cart::new()
                }
                CorruptSnapshotPolicy::Fail => return Err(CartError::InvalidSnapshot(e.to_string())),
            },
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            state: Mutex::new(cart),
            writes: WriteQueue::spawn(cache, key.clone()),
            key,
        })
    }

    /// Add a product, or bump its quantity and refresh its fields if it is
    /// already in the cart. Returns the resulting quantity.
    pub fn add_item(&self, item: NewItem) -> u32 {
        self.mutate(|cart| cart.add_item(item))
    }

    /// Increase a product's quantity by one. Unknown IDs are ignored.
    pub fn increment(&self, id: &ProductId) {
        self.mutate(|cart| cart.increment(id));
    }

    /// Decrease a product's quantity by one, never below 1. Unknown IDs are ignored.
    pub fn decrement(&self, id: &ProductId) {
        self.mutate(|cart| cart.decrement(id));
    }

    /// Current items in insertion order.
    pub fn items(&self) -> Vec<LineItem> {
        self.lock().items().to_vec()
    }

    /// Get an item by product ID.
    pub fn get(&self, id: &ProductId) -> Option<LineItem> {
        self.lock().get(id).cloned()
    }

    /// Copy of the whole cart.
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Total units across all items.
    pub fn item_count(&self) -> u64 {
        self.lock().item_count()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Storage slot this store mirrors to.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Wait until every snapshot queued so far has been written.
    pub async fn flush(&self) {
        self.writes.flush().await;
    }

    // The snapshot is queued while the lock is held so queue order matches
    // mutation order.
    fn mutate<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut cart = self.lock();
        let result = f(&mut cart);
        self.writes.enqueue(cart.clone());
        result
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
