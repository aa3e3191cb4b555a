//! Wallet Handlers

pub(crate) mod deposit;
pub(crate) mod index;
