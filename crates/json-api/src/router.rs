//! App Router

use salvo::Router;

use crate::{cart, checkout, healthcheck, orders, sites, wallet};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("sites")
                .get(sites::index::handler)
                .post(sites::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(sites::get::handler)
                        .put(sites::update::handler)
                        .delete(sites::delete::handler),
                ),
        )
        .push(
            Router::with_path("cart")
                .get(cart::index::handler)
                .delete(cart::clear::handler)
                .push(
                    Router::with_path("items")
                        .post(cart::add::handler)
                        .push(Router::with_path("{site_id}").delete(cart::remove::handler)),
                ),
        )
        .push(Router::with_path("checkout").post(checkout::handler::handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{id}").get(orders::get::handler)),
        )
        .push(
            Router::with_path("wallet")
                .get(wallet::index::handler)
                .push(Router::with_path("deposits").post(wallet::deposit::handler)),
        )
}
