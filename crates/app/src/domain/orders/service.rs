//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    domain::orders::{
        data::{NewOrder, OrderUpdate},
        errors::OrdersServiceError,
        records::{OrderId, OrderRecord},
    },
    store::MemoryTable,
};

#[derive(Debug, Clone)]
pub struct MemoryOrdersService {
    table: Arc<MemoryTable<OrderRecord>>,
}

impl MemoryOrdersService {
    #[must_use]
    pub fn new(table: MemoryTable<OrderRecord>) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

#[async_trait]
impl OrdersService for MemoryOrdersService {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        Ok(self.table.all().await)
    }

    async fn get_order(&self, order: OrderId) -> Result<OrderRecord, OrdersServiceError> {
        Ok(self.table.get(order).await?)
    }

    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        let created = self
            .table
            .insert_with(|id| OrderRecord {
                id,
                site_id: order.site_id,
                price: order.price,
                status: order.status,
                created_at: order.created_at,
            })
            .await?;

        debug!(order_id = %created.id, site_id = %created.site_id, "created order");

        Ok(created)
    }

    async fn update_order(
        &self,
        order: OrderId,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let updated = self
            .table
            .update_with(order, |record| {
                if let Some(site_id) = update.site_id {
                    record.site_id = site_id;
                }
                if let Some(price) = update.price {
                    record.price = price;
                }
                if let Some(status) = update.status {
                    record.status = status;
                }
            })
            .await?;

        info!(order_id = %order, status = updated.status.as_str(), "updated order");

        Ok(updated)
    }

    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError> {
        self.table.remove(order).await?;

        info!(order_id = %order, "deleted order");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieve every order in creation order.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<OrderRecord, OrdersServiceError>;

    /// Records a new order.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Merges the supplied fields into an order.
    async fn update_order(
        &self,
        order: OrderId,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Deletes an order.
    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError>;
}
