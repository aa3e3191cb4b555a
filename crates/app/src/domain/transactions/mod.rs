//! Wallet Transactions

pub mod data;
pub mod errors;
pub mod records;
pub mod service;

pub use errors::TransactionsServiceError;
pub use service::*;
