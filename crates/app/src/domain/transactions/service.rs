//! Transactions service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::transactions::{
        data::{NewTransaction, TransactionUpdate},
        errors::TransactionsServiceError,
        records::{TransactionId, TransactionRecord},
    },
    store::MemoryTable,
};

#[derive(Debug, Clone)]
pub struct MemoryTransactionsService {
    table: Arc<MemoryTable<TransactionRecord>>,
}

impl MemoryTransactionsService {
    #[must_use]
    pub fn new(table: MemoryTable<TransactionRecord>) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

#[async_trait]
impl TransactionsService for MemoryTransactionsService {
    async fn list_transactions(&self) -> Result<Vec<TransactionRecord>, TransactionsServiceError> {
        Ok(self.table.all().await)
    }

    async fn get_transaction(
        &self,
        transaction: TransactionId,
    ) -> Result<TransactionRecord, TransactionsServiceError> {
        Ok(self.table.get(transaction).await?)
    }

    async fn create_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<TransactionRecord, TransactionsServiceError> {
        let created = self
            .table
            .insert_with(|id| TransactionRecord {
                id,
                amount: transaction.amount,
                kind: transaction.kind,
                payment_method: transaction.payment_method,
                created_at: transaction.created_at,
            })
            .await?;

        info!(
            transaction_id = %created.id,
            kind = created.kind.as_str(),
            amount = created.amount,
            "recorded transaction"
        );

        Ok(created)
    }

    async fn update_transaction(
        &self,
        transaction: TransactionId,
        update: TransactionUpdate,
    ) -> Result<TransactionRecord, TransactionsServiceError> {
        let TransactionUpdate {
            amount,
            kind,
            payment_method,
        } = update;

        let updated = self
            .table
            .update_with(transaction, |record| {
                if let Some(amount) = amount {
                    record.amount = amount;
                }
                if let Some(kind) = kind {
                    record.kind = kind;
                }
                if let Some(payment_method) = payment_method {
                    record.payment_method = payment_method;
                }
            })
            .await?;

        info!(transaction_id = %transaction, "updated transaction");

        Ok(updated)
    }

    async fn delete_transaction(
        &self,
        transaction: TransactionId,
    ) -> Result<(), TransactionsServiceError> {
        self.table.remove(transaction).await?;

        info!(transaction_id = %transaction, "deleted transaction");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait TransactionsService: Send + Sync {
    /// Retrieve the full ledger in creation order.
    async fn list_transactions(&self) -> Result<Vec<TransactionRecord>, TransactionsServiceError>;

    /// Retrieve a single transaction.
    async fn get_transaction(
        &self,
        transaction: TransactionId,
    ) -> Result<TransactionRecord, TransactionsServiceError>;

    /// Records a new transaction.
    async fn create_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<TransactionRecord, TransactionsServiceError>;

    /// Merges the supplied fields into a transaction.
    async fn update_transaction(
        &self,
        transaction: TransactionId,
        update: TransactionUpdate,
    ) -> Result<TransactionRecord, TransactionsServiceError>;

    /// Deletes a transaction.
    async fn delete_transaction(
        &self,
        transaction: TransactionId,
    ) -> Result<(), TransactionsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{domain::transactions::records::TransactionKind, test::transactions_service};

    use super::*;

    fn deposit(amount: u64) -> NewTransaction {
        NewTransaction {
            amount,
            kind: TransactionKind::Deposit,
            payment_method: "card".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn create_transaction_round_trips_through_get() -> TestResult {
        let service = transactions_service();

        let created = service.create_transaction(deposit(50_00)).await?;
        let fetched = service.get_transaction(created.id).await?;

        assert_eq!(fetched, created);
        assert_eq!(fetched.kind, TransactionKind::Deposit);

        Ok(())
    }

    #[tokio::test]
    async fn update_transaction_unknown_id_returns_not_found() {
        let service = transactions_service();

        let result = service
            .update_transaction(TransactionId::from_u64(404), TransactionUpdate::default())
            .await;

        assert!(
            matches!(result, Err(TransactionsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_transaction_merges_payment_method() -> TestResult {
        let service = transactions_service();

        let created = service.create_transaction(deposit(50_00)).await?;

        let updated = service
            .update_transaction(
                created.id,
                TransactionUpdate {
                    payment_method: Some("paypal".to_string()),
                    ..TransactionUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.payment_method, "paypal");
        assert_eq!(updated.amount, 50_00);

        Ok(())
    }

    #[tokio::test]
    async fn delete_transaction_removes_it_from_the_ledger() -> TestResult {
        let service = transactions_service();

        let created = service.create_transaction(deposit(50_00)).await?;

        service.delete_transaction(created.id).await?;

        assert!(service.list_transactions().await?.is_empty());

        Ok(())
    }
}
