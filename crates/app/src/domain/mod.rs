//! LinkFlow Domain Concerns

pub mod admin;
pub mod carts;
pub mod checkout;
pub mod orders;
pub mod payments;
pub mod sites;
pub mod transactions;
pub mod wallet;
