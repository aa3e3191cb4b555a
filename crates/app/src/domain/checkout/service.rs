//! Checkout service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    domain::{
        carts::CartsService,
        checkout::errors::CheckoutError,
        orders::{
            OrdersService,
            data::NewOrder,
            records::{OrderRecord, OrderStatus},
        },
        payments::{PaymentGateway, PaymentMethod},
        sites::records::SiteId,
    },
    views::sum_cents,
};

/// Turns the cart into pending orders.
#[derive(Clone)]
pub struct CheckoutService {
    carts: Arc<dyn CartsService>,
    orders: Arc<dyn OrdersService>,
    payments: Arc<dyn PaymentGateway>,
    in_progress: Arc<Mutex<()>>,
}

impl Debug for CheckoutService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CheckoutService").finish_non_exhaustive()
    }
}

impl CheckoutService {
    #[must_use]
    pub fn new(
        carts: Arc<dyn CartsService>,
        orders: Arc<dyn OrdersService>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            carts,
            orders,
            payments,
            in_progress: Arc::new(Mutex::new(())),
        }
    }

    /// Charge for the cart, record one pending order per item and remove the
    /// ordered items from the cart.
    ///
    /// Checkouts run one at a time, so a second checkout sees the cart the
    /// first one left behind. Items added while payment is pending stay in
    /// the cart. Ordered items are only removed once every order has been
    /// recorded.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] when there is nothing to buy; nothing is
    ///   charged or recorded.
    /// - [`CheckoutError::TotalOutOfRange`] when the prices do not sum to a
    ///   chargeable amount; nothing is charged or recorded.
    /// - [`CheckoutError::Payment`] when authorization fails; the cart and
    ///   order history are untouched.
    /// - [`CheckoutError::Orders`] when recording an order fails. Orders
    ///   recorded before the failure are not rolled back.
    #[tracing::instrument(name = "checkout", skip_all, fields(method = method.as_str()), err)]
    pub async fn checkout(&self, method: PaymentMethod) -> Result<Vec<OrderRecord>, CheckoutError> {
        let _guard = self.in_progress.lock().await;
        let items = self.carts.list_items().await;

        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total =
            sum_cents(items.iter().map(|item| item.price)).ok_or(CheckoutError::TotalOutOfRange)?;
        let ordered: Vec<SiteId> = items.iter().map(|item| item.id).collect();

        self.payments.authorize(total, method).await?;

        let created_at = Timestamp::now();
        let mut orders = Vec::with_capacity(items.len());

        for item in items {
            let order = self
                .orders
                .create_order(NewOrder {
                    site_id: item.id,
                    price: item.price,
                    status: OrderStatus::Pending,
                    created_at,
                })
                .await?;

            orders.push(order);
        }

        let removed = self.carts.remove_items(&ordered).await;

        debug!(removed, "removed ordered sites from cart");
        info!(orders = orders.len(), total, "checkout completed");

        Ok(orders)
    }
}
