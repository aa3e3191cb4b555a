//! LinkFlow storefront: catalog browsing, cart, checkout, catalog
//! administration and wallet.

pub mod context;
pub mod domain;
pub mod ids;
pub mod seed;
pub mod store;
pub mod views;

#[cfg(test)]
mod test;
