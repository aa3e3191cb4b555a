//! Application Config

use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Args};

use linkflow_app::{context::AppConfig, domain::wallet::parse_amount};

/// Store, cart, payment and wallet settings.
#[derive(Debug, Args)]
pub struct AppSettings {
    /// Directory holding the persisted cart
    #[arg(long, env = "CART_DIR", default_value = ".linkflow")]
    pub cart_dir: PathBuf,

    /// Populate the stores from the bundled fixtures
    #[arg(long, env = "SEED_DATA", default_value_t = true, action = ArgAction::Set)]
    pub seed_data: bool,

    /// Simulated store round trip
    #[arg(long, env = "STORE_LATENCY_MS", default_value_t = 0_u64)]
    pub store_latency_ms: u64,

    /// Simulated checkout payment processing time
    #[arg(long, env = "PAYMENT_DELAY_MS", default_value_t = 3_000_u64)]
    pub payment_delay_ms: u64,

    /// Simulated wallet deposit processing time
    #[arg(long, env = "DEPOSIT_DELAY_MS", default_value_t = 2_000_u64)]
    pub deposit_delay_ms: u64,

    /// Probability in [0.0, 1.0] that a payment is declined
    #[arg(long, env = "PAYMENT_FAILURE_RATE", default_value_t = 0.0_f64)]
    pub payment_failure_rate: f64,

    /// Wallet balance shown to the customer, in dollars
    #[arg(long, env = "WALLET_BALANCE", default_value = "1250.00", value_parser = parse_balance)]
    pub wallet_balance: u64,
}

fn parse_balance(value: &str) -> Result<u64, String> {
    parse_amount(value).map_err(|error| format!("invalid wallet balance {value:?}: {error}"))
}

impl AppSettings {
    #[must_use]
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            cart_dir: self.cart_dir.clone(),
            seed: self.seed_data,
            store_latency: Duration::from_millis(self.store_latency_ms),
            checkout_payment_delay: Duration::from_millis(self.payment_delay_ms),
            deposit_payment_delay: Duration::from_millis(self.deposit_delay_ms),
            payment_failure_rate: self.payment_failure_rate,
            wallet_balance: self.wallet_balance,
        }
    }
}
