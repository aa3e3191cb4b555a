//! Add Funds Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use linkflow_app::domain::{payments::PaymentMethod, wallet::parse_amount};

use crate::{
    extensions::*,
    wallet::{errors::into_status_error, models::TransactionResponse},
};

/// Add Funds Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DepositRequest {
    /// Decimal dollars, e.g. `25.50`
    pub amount: String,
    /// `card` or `paypal`; defaults to `card`
    pub payment_method: Option<String>,
}

/// Add Funds Handler
///
/// Charges the amount and records a deposit. The displayed balance is not
/// changed by deposits.
#[endpoint(
    tags("wallet"),
    summary = "Add Funds",
    responses(
        (status_code = StatusCode::CREATED, description = "Deposit recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unsupported payment method"),
        (status_code = StatusCode::PAYMENT_REQUIRED, description = "Payment declined"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid amount"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<DepositRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TransactionResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let request = json.into_inner();

    let amount = parse_amount(&request.amount).map_err(into_status_error)?;

    let method = match request.payment_method {
        Some(method) => method.parse::<PaymentMethod>().or_400("invalid payment method")?,
        None => PaymentMethod::default(),
    };

    let deposit = app
        .wallet
        .add_funds(amount, method)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(deposit.into()))
}
