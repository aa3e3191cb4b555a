//! Transactions Data

use jiff::Timestamp;

use crate::domain::transactions::records::TransactionKind;

/// New Transaction Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: u64,
    pub kind: TransactionKind,
    pub payment_method: String,
    pub created_at: Timestamp,
}

/// Transaction Update Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionUpdate {
    pub amount: Option<u64>,
    pub kind: Option<TransactionKind>,
    pub payment_method: Option<String>,
}
