//! Checkout Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use linkflow_app::{
    domain::payments::PaymentMethod,
    views::{format_money, sum_cents},
};

use crate::{
    checkout::errors::into_status_error, extensions::*, orders::OrderResponse,
};

/// Checkout Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// `card` or `paypal`; defaults to `card`
    pub payment_method: Option<String>,
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// One pending order per cart item
    pub orders: Vec<OrderResponse>,
    /// Amount charged in cents
    pub total: u64,
    pub total_display: String,
}

/// Checkout Handler
///
/// Charges for the whole cart, records one pending order per item and
/// removes the ordered items from the cart. The JSON body is optional; without
/// one the card method is used.
#[endpoint(
    tags("checkout"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::CREATED, description = "Orders placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unsupported payment method"),
        (status_code = StatusCode::PAYMENT_REQUIRED, description = "Payment declined"),
        (status_code = StatusCode::CONFLICT, description = "Cart is empty"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart total is too large"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let request = parse_request(req).await?;
    let app = depot.app_or_500()?;

    let method = match request.payment_method {
        Some(method) => method.parse::<PaymentMethod>().or_400("invalid payment method")?,
        None => PaymentMethod::default(),
    };

    let orders = app
        .checkout
        .checkout(method)
        .await
        .map_err(into_status_error)?;

    let Some(total) = sum_cents(orders.iter().map(|order| order.price)) else {
        error!(orders = orders.len(), "order total overflowed");

        return Err(StatusError::internal_server_error());
    };

    res.status_code(StatusCode::CREATED);

    Ok(Json(CheckoutResponse {
        orders: orders.into_iter().map(Into::into).collect(),
        total,
        total_display: format_money(total),
    }))
}

/// An empty body is the same as `{}`.
async fn parse_request(req: &mut Request) -> Result<CheckoutRequest, StatusError> {
    let body = req.payload().await.or_400("failed to read request body")?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CheckoutRequest::default());
    }

    serde_json::from_slice(body).or_400("invalid checkout request")
}
