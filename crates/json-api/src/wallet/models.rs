//! Wallet Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use linkflow_app::{domain::transactions::records::TransactionRecord, views::format_money};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TransactionResponse {
    pub id: u64,
    /// Amount in cents
    pub amount: u64,
    pub amount_display: String,
    /// `deposit`, `purchase` or `refund`
    #[serde(rename = "type")]
    pub kind: String,
    pub payment_method: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(transaction: TransactionRecord) -> Self {
        TransactionResponse {
            id: transaction.id.into_u64(),
            amount: transaction.amount,
            amount_display: format_money(transaction.amount),
            kind: transaction.kind.as_str().to_string(),
            payment_method: transaction.payment_method,
            created_at: transaction.created_at.to_string(),
        }
    }
}
