//! Typed Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::ParseIntError,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Integer identity tagged with the record type it identifies.
pub struct TypedId<T>(u64, PhantomData<T>);

impl<T> TypedId<T> {
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub const fn into_u64(self) -> u64 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<u64> for TypedId<T> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<T> From<TypedId<T>> for u64 {
    fn from(value: TypedId<T>) -> Self {
        value.into_u64()
    }
}

impl<T> FromStr for TypedId<T> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self::from_u64)
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from_u64)
    }
}

/// Monotonic identity source.
///
/// Identities are never handed out twice, even after the record holding the
/// highest identity has been deleted.
#[derive(Debug)]
pub struct IdSequence {
    /// Last identity handed out, or seeded; 0 before the first.
    last: AtomicU64,
}

impl IdSequence {
    /// Sequence that continues after the highest of `existing`, or starts at 1.
    pub fn after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let last = existing.into_iter().max().unwrap_or(0);

        Self {
            last: AtomicU64::new(last),
        }
    }

    /// Take the next identity, or `None` once `u64::MAX` has been handed out.
    pub fn next_id<T>(&self) -> Option<TypedId<T>> {
        self.last
            .fetch_update(AtomicOrdering::SeqCst, AtomicOrdering::SeqCst, |last| {
                last.checked_add(1)
            })
            .ok()
            .and_then(|previous| previous.checked_add(1))
            .map(TypedId::from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn empty_sequence_starts_at_one() {
        let sequence = IdSequence::after([]);

        assert_eq!(sequence.next_id::<Marker>(), Some(TypedId::from_u64(1)));
        assert_eq!(sequence.next_id::<Marker>(), Some(TypedId::from_u64(2)));
    }

    #[test]
    fn sequence_continues_after_highest_existing() {
        let sequence = IdSequence::after([3, 9, 4]);

        assert_eq!(sequence.next_id::<Marker>(), Some(TypedId::from_u64(10)));
    }

    #[test]
    fn last_identity_is_handed_out_before_exhaustion() {
        let sequence = IdSequence::after([u64::MAX - 1]);

        assert_eq!(sequence.next_id::<Marker>(), Some(TypedId::from_u64(u64::MAX)));
        assert_eq!(sequence.next_id::<Marker>(), None);
        assert_eq!(sequence.next_id::<Marker>(), None);
    }

    #[test]
    fn sequence_seeded_at_the_maximum_is_exhausted() {
        let sequence = IdSequence::after([u64::MAX]);

        assert_eq!(sequence.next_id::<Marker>(), None);
    }

    #[test]
    fn typed_id_serializes_as_bare_integer() -> Result<(), serde_json::Error> {
        let id = TypedId::<Marker>::from_u64(42);

        assert_eq!(serde_json::to_string(&id)?, "42");
        assert_eq!(serde_json::from_str::<TypedId<Marker>>("42")?, id);

        Ok(())
    }
}
