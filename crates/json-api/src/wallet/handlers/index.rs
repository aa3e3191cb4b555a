//! Wallet Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use linkflow_app::views::{ListState, format_money};

use crate::{extensions::*, wallet::models::TransactionResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WalletResponse {
    /// Balance in cents
    pub balance: u64,
    pub balance_display: String,
    /// State of the transaction list: `error`, `empty` or `content`
    pub state: String,
    pub error: Option<String>,
    pub transactions: Vec<TransactionResponse>,
}

/// Wallet Handler
///
/// Shows the balance and the transaction ledger.
#[endpoint(tags("wallet"), summary = "Show Wallet")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<WalletResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let wallet = &app.wallet;

    let view = ListState::loaded(wallet.transactions().await);

    let error = match &view {
        ListState::Error(message) => Some(message.clone()),
        _ => None,
    };

    Ok(Json(WalletResponse {
        balance: wallet.balance(),
        balance_display: format_money(wallet.balance()),
        state: view.as_str().to_string(),
        error,
        transactions: view.items().iter().cloned().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use linkflow_app::domain::transactions::records::{
        TransactionId, TransactionKind, TransactionRecord,
    };

    use crate::test_helpers::{Mocks, make_service};

    use super::*;

    #[tokio::test]
    async fn test_wallet_shows_balance_and_ledger() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .transactions
            .expect_list_transactions()
            .once()
            .return_once(|| {
                Ok(vec![TransactionRecord {
                    id: TransactionId::from_u64(1),
                    amount: 500_00,
                    kind: TransactionKind::Deposit,
                    payment_method: "card".to_string(),
                    created_at: Timestamp::UNIX_EPOCH,
                }])
            });

        let mut res = TestClient::get("http://example.com/wallet")
            .send(&make_service(mocks, Router::with_path("wallet").get(handler)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: WalletResponse = res.take_json().await?;

        assert_eq!(body.balance, 1250_00);
        assert_eq!(body.balance_display, "$1,250.00");
        assert_eq!(body.state, "content");
        assert_eq!(
            body.transactions.first().map(|t| t.kind.as_str()),
            Some("deposit")
        );

        Ok(())
    }
}
