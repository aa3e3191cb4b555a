//! Clear Cart Handler

use salvo::prelude::*;

use crate::extensions::*;

/// Clear Cart Handler
#[endpoint(tags("cart"), summary = "Clear Cart")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    depot.app_or_500()?.carts.clear().await;

    Ok(StatusCode::OK)
}
