//! Carts service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    domain::{
        carts::{CartItem, storage::Storage},
        sites::records::SiteId,
    },
    views::sum_cents,
};

/// Storage slot holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "linkflow-cart";

/// A cart keyed by site identity and written through to a [`Storage`] slot on
/// every mutation.
pub struct PersistentCartsService {
    storage: Arc<dyn Storage>,
    items: Mutex<Vec<CartItem>>,
}

impl Debug for PersistentCartsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PersistentCartsService")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl PersistentCartsService {
    /// Rehydrate the cart from its storage slot.
    ///
    /// A missing slot starts an empty cart, as does one that cannot be read or
    /// decoded; the latter is logged.
    pub async fn load(storage: Arc<dyn Storage>) -> Self {
        let items = match storage.get(CART_STORAGE_KEY).await {
            Ok(Some(saved)) => serde_json::from_str(&saved).unwrap_or_else(|error| {
                warn!("discarding unreadable saved cart: {error}");

                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!("failed to read saved cart: {error}");

                Vec::new()
            }
        };

        debug!(items = items.len(), "loaded cart");

        Self {
            storage,
            items: Mutex::new(items),
        }
    }

    async fn persist(&self, items: &[CartItem]) {
        let serialized = match serde_json::to_string(items) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!("failed to serialize cart: {error}");

                return;
            }
        };

        if let Err(error) = self.storage.set(CART_STORAGE_KEY, serialized).await {
            warn!("failed to persist cart: {error}");
        }
    }
}

#[async_trait]
impl CartsService for PersistentCartsService {
    async fn list_items(&self) -> Vec<CartItem> {
        self.items.lock().await.clone()
    }

    async fn add_item(&self, item: CartItem) -> bool {
        let mut items = self.items.lock().await;

        if items.iter().any(|existing| existing.id == item.id) {
            return false;
        }

        debug!(site_id = %item.id, "adding site to cart");

        items.push(item);

        self.persist(&items).await;

        true
    }

    async fn remove_item(&self, site: SiteId) -> bool {
        let mut items = self.items.lock().await;
        let before = items.len();

        items.retain(|item| item.id != site);

        if items.len() == before {
            return false;
        }

        debug!(site_id = %site, "removed site from cart");

        self.persist(&items).await;

        true
    }

    async fn remove_items(&self, sites: &[SiteId]) -> usize {
        let mut items = self.items.lock().await;
        let before = items.len();

        items.retain(|item| !sites.contains(&item.id));

        let removed = before - items.len();

        if removed > 0 {
            debug!(removed, "removed sites from cart");

            self.persist(&items).await;
        }

        removed
    }

    async fn clear(&self) {
        let mut items = self.items.lock().await;

        items.clear();

        self.persist(&items).await;
    }

    async fn contains(&self, site: SiteId) -> bool {
        self.items.lock().await.iter().any(|item| item.id == site)
    }

    async fn total(&self) -> Option<u64> {
        sum_cents(self.items.lock().await.iter().map(|item| item.price))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Items in the order they were added.
    async fn list_items(&self) -> Vec<CartItem>;

    /// Add a copy of `item`; returns `false` when its site is already in the cart.
    async fn add_item(&self, item: CartItem) -> bool;

    /// Remove the item for `site`; returns `false` when it was not in the cart.
    async fn remove_item(&self, site: SiteId) -> bool;

    /// Remove every item whose site is in `sites`, returning how many were
    /// removed. Items added since `sites` was read are kept.
    async fn remove_items(&self, sites: &[SiteId]) -> usize;

    /// Empty the cart.
    async fn clear(&self);

    /// Whether `site` is in the cart.
    async fn contains(&self, site: SiteId) -> bool;

    /// Sum of item prices in cents; `None` when it overflows a `u64`.
    async fn total(&self) -> Option<u64>;
}
