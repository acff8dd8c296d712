//! Provider scope for the cart store.

use cart_kv::KeyValueStore;
use tokio::sync::OnceCell;

use crate::config::StoreConfig;
use crate::error::CartError;
use crate::store::CartStore;

/// Owns the session's [`CartStore`] and hands it out by reference.
///
/// Consumers receive `&CartProvider` explicitly. Reading the cart before
/// [`CartProvider::init`] has completed is a wiring error: [`try_cart`]
/// reports it and [`use_cart`] panics.
///
/// [`try_cart`]: CartProvider::try_cart
/// [`use_cart`]: CartProvider::use_cart
#[derive(Debug, Default)]
pub struct CartProvider {
    store: OnceCell<CartStore>,
}

impl CartProvider {
    /// Create a provider with no store yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from `storage`.
    ///
    /// Only the first successful call loads; later calls return the
    /// existing store and ignore their arguments. Concurrent callers wait
    /// for the same load.
    pub async fn init<S: KeyValueStore>(
        &self,
        storage: S,
        config: &StoreConfig,
    ) -> Result<&CartStore, CartError> {
        self.store
            .get_or_try_init(|| CartStore::load(storage, config))
            .await
    }

    /// Whether the store has been loaded.
    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }

    /// Get the store, or [`CartError::NotInitialized`] before `init`.
    pub fn try_cart(&self) -> Result<&CartStore, CartError> {
        self.store.get().ok_or(CartError::NotInitialized)
    }

    /// Get the store.
    ///
    /// # Panics
    ///
    /// Panics if called before [`CartProvider::init`] has completed.
    pub fn use_cart(&self) -> &CartStore {
        match self.store.get() {
            Some(store) => store,
            None => panic!("{}", CartError::NotInitialized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_kv::MemoryStore;

    #[test]
    fn test_try_cart_before_init() {
        let provider = CartProvider::new();
        assert!(!provider.is_initialized());
        assert!(matches!(provider.try_cart(), Err(CartError::NotInitialized)));
    }

    #[test]
    #[should_panic(expected = "use_cart must be used within an initialized CartProvider")]
    fn test_use_cart_before_init_panics() {
        let provider = CartProvider::new();
        let _ = provider.use_cart();
    }

    #[tokio::test]
    async fn test_init_once() {
        let provider = CartProvider::new();
        let first = MemoryStore::with_entry(
            "@cart",
            r#"[{"id":"a","title":"Shoe","image_url":"img","price":10.0,"quantity":2}]"#,
        );

        provider.init(first, &StoreConfig::default()).await.unwrap();
        // A second init keeps the first store.
        let store = provider
            .init(MemoryStore::new(), &StoreConfig::default())
            .await
            .unwrap();

        assert_eq!(store.item_count(), 2);
        assert!(provider.is_initialized());
        assert_eq!(provider.use_cart().item_count(), 2);
    }
}
