//! Transaction Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, store::Record};

/// Transaction ID
pub type TransactionId = TypedId<TransactionRecord>;

/// Transaction Record
///
/// `amount` is a positive number of cents; its direction follows from `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub amount: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub payment_method: String,
    pub created_at: Timestamp,
}

impl Record for TransactionRecord {
    fn id(&self) -> TransactionId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Purchase,
    Refund,
}

impl TransactionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Purchase => "purchase",
            Self::Refund => "refund",
        }
    }
}
