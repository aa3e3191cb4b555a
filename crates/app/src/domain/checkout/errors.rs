//! Checkout errors.

use thiserror::Error;

use crate::domain::{orders::OrdersServiceError, payments::PaymentError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("cart total is out of range")]
    TotalOutOfRange,

    #[error("payment failed")]
    Payment(#[from] PaymentError),

    /// Orders created before the failure are kept and the cart is left as-is.
    #[error("failed to record orders")]
    Orders(#[from] OrdersServiceError),
}
