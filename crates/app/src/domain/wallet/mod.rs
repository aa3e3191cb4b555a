//! Wallet

pub mod errors;
pub mod service;

pub use errors::WalletError;
pub use service::*;
