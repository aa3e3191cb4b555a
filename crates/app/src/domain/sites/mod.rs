//! Sites

pub mod data;
pub mod errors;
pub mod filters;
pub mod records;
pub mod service;

pub use errors::SitesServiceError;
pub use service::*;
