//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use linkflow_app::{
    context::{AppContext, Services},
    domain::{
        carts::MockCartsService,
        orders::MockOrdersService,
        payments::MockPaymentGateway,
        sites::{
            MockSitesService,
            records::{LinkType, SiteId, SiteRecord, SiteType},
        },
        transactions::MockTransactionsService,
        wallet::DEFAULT_WALLET_BALANCE,
    },
};

/// Service mocks behind the app context. A mock without expectations fails
/// the test on any call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) sites: MockSitesService,
    pub(crate) orders: MockOrdersService,
    pub(crate) transactions: MockTransactionsService,
    pub(crate) carts: MockCartsService,
    pub(crate) checkout_payments: MockPaymentGateway,
    pub(crate) deposit_payments: MockPaymentGateway,
}

pub(crate) fn app_with(mocks: Mocks) -> AppContext {
    AppContext::from(Services {
        sites: Arc::new(mocks.sites),
        orders: Arc::new(mocks.orders),
        transactions: Arc::new(mocks.transactions),
        carts: Arc::new(mocks.carts),
        checkout_payments: Arc::new(mocks.checkout_payments),
        deposit_payments: Arc::new(mocks.deposit_payments),
        wallet_balance: DEFAULT_WALLET_BALANCE,
    })
}

pub(crate) fn make_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(app_with(mocks))).push(route))
}

pub(crate) fn site(id: u64, price: u64) -> SiteRecord {
    SiteRecord {
        id: SiteId::from_u64(id),
        name: format!("Site {id}"),
        url: format!("site{id}.com"),
        da: 50,
        dr: 50,
        monthly_traffic: 10_000,
        spam_score: 5,
        price,
        category: "Tech".to_string(),
        link_type: LinkType::Dofollow,
        site_type: SiteType::Blog,
        description: format!("Test site {id}"),
    }
}
