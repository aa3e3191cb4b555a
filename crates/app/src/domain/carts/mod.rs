//! Carts

pub mod service;
pub mod storage;

pub use service::*;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

use crate::domain::sites::records::SiteRecord;

/// A copy of a catalog site taken when it was added to the cart.
pub type CartItem = SiteRecord;
