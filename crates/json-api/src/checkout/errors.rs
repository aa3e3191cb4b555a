//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use linkflow_app::domain::{checkout::CheckoutError, payments::PaymentError};

pub(crate) fn into_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::EmptyCart => StatusError::conflict().brief("Cart is empty"),
        CheckoutError::TotalOutOfRange => {
            StatusError::unprocessable_entity().brief("Cart total is too large to charge")
        }
        CheckoutError::Payment(PaymentError::Declined) => {
            StatusError::payment_required().brief("Payment failed. Please try again.")
        }
        CheckoutError::Payment(PaymentError::UnsupportedMethod(method)) => {
            StatusError::bad_request().brief(format!("unsupported payment method: {method}"))
        }
        CheckoutError::Orders(source) => {
            error!("failed to record orders: {source}");

            StatusError::internal_server_error()
        }
    }
}
