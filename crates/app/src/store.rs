//! In-memory record storage

use std::time::Duration;

use thiserror::Error;
use tokio::{sync::RwLock, time::sleep};

use crate::ids::{IdSequence, TypedId};

/// A record kept in a [`MemoryTable`].
pub trait Record: Clone + Send + Sync + 'static {
    /// The record's identity.
    fn id(&self) -> TypedId<Self>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("record identities exhausted")]
    IdentityExhausted,
}

/// Insertion-ordered collection of records with store-assigned identities.
///
/// Every call optionally waits for `latency` before touching the data, which
/// stands in for the round trip to a real backend. Writes are last-writer-wins.
#[derive(Debug)]
pub struct MemoryTable<R> {
    rows: RwLock<Vec<R>>,
    ids: IdSequence,
    latency: Duration,
}

impl<R: Record> MemoryTable<R> {
    #[must_use]
    pub fn new(rows: Vec<R>, latency: Duration) -> Self {
        let ids = IdSequence::after(rows.iter().map(|row| row.id().into_u64()));

        Self {
            rows: RwLock::new(rows),
            ids,
            latency,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Duration::ZERO)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }

    /// Snapshot of every record in insertion order.
    pub async fn all(&self) -> Vec<R> {
        self.simulate_latency().await;

        self.rows.read().await.clone()
    }

    /// Fetch a single record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record has the identity.
    pub async fn get(&self, id: TypedId<R>) -> Result<R, StoreError> {
        self.simulate_latency().await;

        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Assign the next identity and append the record `build` produces for it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdentityExhausted`] when no identity is left.
    pub async fn insert_with<F>(&self, build: F) -> Result<R, StoreError>
    where
        F: FnOnce(TypedId<R>) -> R + Send,
    {
        self.simulate_latency().await;

        let id = self.ids.next_id().ok_or(StoreError::IdentityExhausted)?;
        let row = build(id);

        self.rows.write().await.push(row.clone());

        Ok(row)
    }

    /// Apply `change` to the record in place and return the updated copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record has the identity.
    pub async fn update_with<F>(&self, id: TypedId<R>, change: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut R) + Send,
    {
        self.simulate_latency().await;

        let mut rows = self.rows.write().await;

        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(StoreError::NotFound)?;

        change(row);

        Ok(row.clone())
    }

    /// Permanently remove a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record has the identity.
    pub async fn remove(&self, id: TypedId<R>) -> Result<(), StoreError> {
        self.simulate_latency().await;

        let mut rows = self.rows.write().await;

        let index = rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or(StoreError::NotFound)?;

        rows.remove(index);

        Ok(())
    }
}
