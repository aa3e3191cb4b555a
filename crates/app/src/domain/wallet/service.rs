//! Wallet service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    str::FromStr,
    sync::Arc,
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use tracing::info;

use crate::domain::{
    payments::{PaymentGateway, PaymentMethod},
    transactions::{
        TransactionsService,
        data::NewTransaction,
        records::{TransactionKind, TransactionRecord},
    },
    wallet::errors::WalletError,
};

/// Balance shown when none is configured, in cents.
pub const DEFAULT_WALLET_BALANCE: u64 = 1250_00;

/// Parse a decimal amount such as `"25.50"` into cents.
///
/// # Errors
///
/// Returns [`WalletError::InvalidAmount`] for blank, non-numeric, zero or
/// negative input.
pub fn parse_amount(value: &str) -> Result<u64, WalletError> {
    Decimal::from_str(value.trim())
        .ok()
        .filter(|amount| amount.is_sign_positive() && !amount.is_zero())
        .map(|amount| amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|amount| amount.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|cents| cents.to_u64())
        .filter(|cents| *cents > 0)
        .ok_or(WalletError::InvalidAmount)
}

/// Display balance and deposits into the transaction ledger.
///
/// The balance is a configured figure; deposits are recorded but do not
/// change it.
#[derive(Clone)]
pub struct WalletService {
    transactions: Arc<dyn TransactionsService>,
    payments: Arc<dyn PaymentGateway>,
    balance: u64,
}

impl Debug for WalletService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("WalletService")
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

impl WalletService {
    #[must_use]
    pub fn new(
        transactions: Arc<dyn TransactionsService>,
        payments: Arc<dyn PaymentGateway>,
        balance: u64,
    ) -> Self {
        Self {
            transactions,
            payments,
            balance,
        }
    }

    /// Balance in cents.
    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Every ledger entry in the order it was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error when the ledger cannot be read.
    pub async fn transactions(&self) -> Result<Vec<TransactionRecord>, WalletError> {
        Ok(self.transactions.list_transactions().await?)
    }

    /// Charge `amount` cents and record it as a deposit.
    ///
    /// # Errors
    ///
    /// - [`WalletError::InvalidAmount`] for a zero amount; nothing is charged.
    /// - [`WalletError::Payment`] when the charge is declined; nothing is
    ///   recorded.
    /// - [`WalletError::Transactions`] when the deposit cannot be recorded.
    #[tracing::instrument(name = "wallet.add_funds", skip(self, method), fields(method = method.as_str()), err)]
    pub async fn add_funds(
        &self,
        amount: u64,
        method: PaymentMethod,
    ) -> Result<TransactionRecord, WalletError> {
        if amount == 0 {
            return Err(WalletError::InvalidAmount);
        }

        let authorization = self.payments.authorize(amount, method).await?;

        let deposit = self
            .transactions
            .create_transaction(NewTransaction {
                amount: authorization.amount,
                kind: TransactionKind::Deposit,
                payment_method: method.as_str().to_string(),
                created_at: authorization.authorized_at,
            })
            .await?;

        info!(transaction_id = %deposit.id, "funds added");

        Ok(deposit)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use crate::{
        domain::payments::{MockPaymentGateway, PaymentError, SimulatedPaymentGateway},
        test::transactions_service,
    };

    use super::*;

    fn wallet(
        payments: impl PaymentGateway + 'static,
    ) -> (Arc<dyn TransactionsService>, WalletService) {
        let transactions: Arc<dyn TransactionsService> = Arc::new(transactions_service());
        let wallet = WalletService::new(
            transactions.clone(),
            Arc::new(payments),
            DEFAULT_WALLET_BALANCE,
        );

        (transactions, wallet)
    }

    #[test]
    fn parse_amount_accepts_positive_decimals() -> TestResult {
        assert_eq!(parse_amount("25")?, 25_00);
        assert_eq!(parse_amount(" 10.5 ")?, 10_50);
        assert_eq!(parse_amount("0.015")?, 2);

        Ok(())
    }

    #[test]
    fn parse_amount_rejects_non_positive_input() {
        for value in ["", "0", "0.00", "-5", "abc", "0.001"] {
            assert!(
                matches!(parse_amount(value), Err(WalletError::InvalidAmount)),
                "{value:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn balance_is_the_configured_figure() {
        let (_transactions, wallet) = wallet(SimulatedPaymentGateway::approving());

        assert_eq!(wallet.balance(), 1250_00);
    }

    #[tokio::test]
    async fn add_funds_records_a_deposit() -> TestResult {
        let (transactions, wallet) = wallet(SimulatedPaymentGateway::approving());

        let deposit = wallet.add_funds(50_00, PaymentMethod::Paypal).await?;

        assert_eq!(deposit.amount, 50_00);
        assert_eq!(deposit.kind, TransactionKind::Deposit);
        assert_eq!(deposit.payment_method, "paypal");
        assert_eq!(transactions.list_transactions().await?, vec![deposit]);

        Ok(())
    }

    #[tokio::test]
    async fn deposits_leave_the_balance_unchanged() -> TestResult {
        let (_transactions, wallet) = wallet(SimulatedPaymentGateway::approving());

        wallet.add_funds(50_00, PaymentMethod::Card).await?;

        assert_eq!(wallet.balance(), DEFAULT_WALLET_BALANCE);

        Ok(())
    }

    #[tokio::test]
    async fn zero_amount_is_rejected_without_charging() {
        let mut payments = MockPaymentGateway::new();

        payments.expect_authorize().never();

        let (_transactions, wallet) = wallet(payments);

        let result = wallet.add_funds(0, PaymentMethod::Card).await;

        assert!(
            matches!(result, Err(WalletError::InvalidAmount)),
            "expected InvalidAmount, got {result:?}"
        );
    }

    #[tokio::test]
    async fn declined_payment_records_nothing() -> TestResult {
        let (transactions, wallet) = wallet(SimulatedPaymentGateway::new(Duration::ZERO, 1.0));

        let result = wallet.add_funds(20_00, PaymentMethod::Card).await;

        assert!(
            matches!(result, Err(WalletError::Payment(PaymentError::Declined))),
            "expected Payment error, got {result:?}"
        );
        assert!(transactions.list_transactions().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn transactions_lists_the_ledger() -> TestResult {
        let (_transactions, wallet) = wallet(SimulatedPaymentGateway::approving());

        wallet.add_funds(10_00, PaymentMethod::Card).await?;
        wallet.add_funds(20_00, PaymentMethod::Card).await?;

        let amounts: Vec<u64> = wallet
            .transactions()
            .await?
            .into_iter()
            .map(|transaction| transaction.amount)
            .collect();

        assert_eq!(amounts, vec![10_00, 20_00]);

        Ok(())
    }
}
