//! Catalog administration.

pub mod errors;
pub mod form;
pub mod service;

pub use errors::AdminError;
pub use form::{SiteField, SiteForm, ValidationErrors};
pub use service::*;
