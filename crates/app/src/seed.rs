//! Bundled seed data

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{
    orders::records::OrderRecord, sites::records::SiteRecord,
    transactions::records::TransactionRecord,
};

const SITES: &str = include_str!("../fixtures/sites.json");
const ORDERS: &str = include_str!("../fixtures/orders.json");
const TRANSACTIONS: &str = include_str!("../fixtures/transactions.json");

#[derive(Debug, Error)]
#[error("failed to parse {fixture} fixture")]
pub struct SeedError {
    fixture: &'static str,
    #[source]
    source: serde_json::Error,
}

/// Initial contents of every record store.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub sites: Vec<SiteRecord>,
    pub orders: Vec<OrderRecord>,
    pub transactions: Vec<TransactionRecord>,
}

impl Seed {
    /// The bundled demo catalog, order history and ledger.
    ///
    /// # Errors
    ///
    /// Returns an error when a bundled fixture does not parse.
    pub fn bundled() -> Result<Self, SeedError> {
        Ok(Self {
            sites: parse("sites", SITES)?,
            orders: parse("orders", ORDERS)?,
            transactions: parse("transactions", TRANSACTIONS)?,
        })
    }
}

fn parse<T: DeserializeOwned>(fixture: &'static str, json: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError { fixture, source })
}
