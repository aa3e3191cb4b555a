//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use thiserror::Error;
use tracing::info;

use crate::{
    domain::{
        admin::AdminService,
        carts::{CartsService, FileStorage, PersistentCartsService, Storage},
        checkout::CheckoutService,
        orders::{MemoryOrdersService, OrdersService},
        payments::{PaymentGateway, SimulatedPaymentGateway},
        sites::{MemorySitesService, SitesService},
        transactions::{MemoryTransactionsService, TransactionsService},
        wallet::{DEFAULT_WALLET_BALANCE, WalletService},
    },
    seed::{Seed, SeedError},
    store::MemoryTable,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load seed data")]
    Seed(#[from] SeedError),
}

/// Settings the services are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the persisted cart.
    pub cart_dir: PathBuf,
    /// Populate the stores from the bundled fixtures.
    pub seed: bool,
    pub store_latency: Duration,
    pub checkout_payment_delay: Duration,
    pub deposit_payment_delay: Duration,
    /// Probability in `[0.0, 1.0]` that a payment is declined.
    pub payment_failure_rate: f64,
    /// Wallet balance in cents.
    pub wallet_balance: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cart_dir: PathBuf::from(".linkflow"),
            seed: true,
            store_latency: Duration::ZERO,
            checkout_payment_delay: Duration::from_secs(3),
            deposit_payment_delay: Duration::from_secs(2),
            payment_failure_rate: 0.0,
            wallet_balance: DEFAULT_WALLET_BALANCE,
        }
    }
}

/// Capabilities the orchestrating services are assembled from.
pub struct Services {
    pub sites: Arc<dyn SitesService>,
    pub orders: Arc<dyn OrdersService>,
    pub transactions: Arc<dyn TransactionsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout_payments: Arc<dyn PaymentGateway>,
    pub deposit_payments: Arc<dyn PaymentGateway>,
    pub wallet_balance: u64,
}

#[derive(Clone)]
pub struct AppContext {
    pub sites: Arc<dyn SitesService>,
    pub orders: Arc<dyn OrdersService>,
    pub transactions: Arc<dyn TransactionsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<CheckoutService>,
    pub admin: Arc<AdminService>,
    pub wallet: Arc<WalletService>,
}

impl Debug for Services {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Services")
            .field("wallet_balance", &self.wallet_balance)
            .finish_non_exhaustive()
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl From<Services> for AppContext {
    fn from(services: Services) -> Self {
        let Services {
            sites,
            orders,
            transactions,
            carts,
            checkout_payments,
            deposit_payments,
            wallet_balance,
        } = services;

        Self {
            checkout: Arc::new(CheckoutService::new(
                carts.clone(),
                orders.clone(),
                checkout_payments,
            )),
            admin: Arc::new(AdminService::new(sites.clone())),
            wallet: Arc::new(WalletService::new(
                transactions.clone(),
                deposit_payments,
                wallet_balance,
            )),
            sites,
            orders,
            transactions,
            carts,
        }
    }
}

impl AppContext {
    /// Build application context with a file-backed cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the bundled seed data cannot be parsed.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let storage = Arc::new(FileStorage::new(config.cart_dir.clone()));

        Self::with_storage(config, storage).await
    }

    /// Build application context persisting the cart to `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error when the bundled seed data cannot be parsed.
    pub async fn with_storage(
        config: &AppConfig,
        storage: Arc<dyn Storage>,
    ) -> Result<Self, AppInitError> {
        let seed = if config.seed {
            Seed::bundled()?
        } else {
            Seed::default()
        };

        info!(
            sites = seed.sites.len(),
            orders = seed.orders.len(),
            transactions = seed.transactions.len(),
            "seeding stores"
        );

        let latency = config.store_latency;

        Ok(Self::from(Services {
            sites: Arc::new(MemorySitesService::new(MemoryTable::new(seed.sites, latency))),
            orders: Arc::new(MemoryOrdersService::new(MemoryTable::new(
                seed.orders,
                latency,
            ))),
            transactions: Arc::new(MemoryTransactionsService::new(MemoryTable::new(
                seed.transactions,
                latency,
            ))),
            carts: Arc::new(PersistentCartsService::load(storage).await),
            checkout_payments: Arc::new(SimulatedPaymentGateway::new(
                config.checkout_payment_delay,
                config.payment_failure_rate,
            )),
            deposit_payments: Arc::new(SimulatedPaymentGateway::new(
                config.deposit_payment_delay,
                config.payment_failure_rate,
            )),
            wallet_balance: config.wallet_balance,
        }))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{carts::MemoryStorage, payments::PaymentMethod};

    use super::*;

    fn quick_config(seed: bool) -> AppConfig {
        AppConfig {
            seed,
            checkout_payment_delay: Duration::ZERO,
            deposit_payment_delay: Duration::ZERO,
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn seeded_context_exposes_the_catalog() -> TestResult {
        let context =
            AppContext::with_storage(&quick_config(true), Arc::new(MemoryStorage::new())).await?;

        assert!(!context.sites.list_sites().await?.is_empty());
        assert_eq!(context.wallet.balance(), DEFAULT_WALLET_BALANCE);

        Ok(())
    }

    #[tokio::test]
    async fn unseeded_context_starts_empty() -> TestResult {
        let context =
            AppContext::with_storage(&quick_config(false), Arc::new(MemoryStorage::new())).await?;

        assert!(context.sites.list_sites().await?.is_empty());
        assert!(context.orders.list_orders().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn checkout_flows_from_cart_to_order_history() -> TestResult {
        let context =
            AppContext::with_storage(&quick_config(true), Arc::new(MemoryStorage::new())).await?;

        let before = context.orders.list_orders().await?.len();
        let sites = context.sites.list_sites().await?;

        for site in sites.iter().take(2) {
            context.carts.add_item(site.clone()).await;
        }

        let created = context.checkout.checkout(PaymentMethod::Card).await?;

        assert_eq!(created.len(), 2);
        assert_eq!(context.orders.list_orders().await?.len(), before + 2);
        assert!(context.carts.list_items().await.is_empty());

        Ok(())
    }
}
