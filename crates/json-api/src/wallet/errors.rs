//! Wallet Errors

use salvo::http::StatusError;
use tracing::error;

use linkflow_app::domain::{payments::PaymentError, wallet::WalletError};

pub(crate) fn into_status_error(error: WalletError) -> StatusError {
    match error {
        WalletError::InvalidAmount => {
            StatusError::unprocessable_entity().brief("Please enter a valid amount")
        }
        WalletError::Payment(PaymentError::Declined) => {
            StatusError::payment_required().brief("Payment failed. Please try again.")
        }
        WalletError::Payment(PaymentError::UnsupportedMethod(method)) => {
            StatusError::bad_request().brief(format!("unsupported payment method: {method}"))
        }
        WalletError::Transactions(source) => {
            error!("transaction ledger failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
