//! Cart Index Handler

use salvo::prelude::*;

use crate::{cart::models::CartResponse, extensions::*};

/// Cart Index Handler
///
/// Returns the cart contents and total.
#[endpoint(tags("cart"), summary = "Show Cart")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;

    Ok(Json(CartResponse::load(&app.carts).await?))
}
