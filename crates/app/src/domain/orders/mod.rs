//! Orders

pub mod data;
pub mod errors;
pub mod records;
pub mod service;
pub mod summary;

pub use errors::OrdersServiceError;
pub use service::*;
pub use summary::{OrderSummary, join_sites};
