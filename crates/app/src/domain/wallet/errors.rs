//! Wallet errors.

use thiserror::Error;

use crate::domain::{payments::PaymentError, transactions::TransactionsServiceError};

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("transactions service error")]
    Transactions(#[from] TransactionsServiceError),
}
