//! Payment authorization.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
    time::Duration,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};

/// How the customer pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Paypal => "paypal",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "card" => Ok(Self::Card),
            "paypal" => Ok(Self::Paypal),
            other => Err(PaymentError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Payment failures. The caller's state is untouched, so every one is
/// retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment was declined")]
    Declined,

    #[error("unsupported payment method: {0}")]
    UnsupportedMethod(String),
}

/// Proof that a charge was approved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentAuthorization {
    pub amount: u64,
    pub method: PaymentMethod,
    pub authorized_at: Timestamp,
}

#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorize a charge of `amount` cents.
    async fn authorize(
        &self,
        amount: u64,
        method: PaymentMethod,
    ) -> Result<PaymentAuthorization, PaymentError>;
}

/// Gateway that waits out a processing delay and then declines with a fixed
/// probability.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentGateway {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedPaymentGateway {
    /// `failure_rate` is clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };

        Self {
            delay,
            failure_rate,
        }
    }

    /// Gateway that approves every charge immediately.
    #[must_use]
    pub fn approving() -> Self {
        Self::new(Duration::ZERO, 0.0)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn authorize(
        &self,
        amount: u64,
        method: PaymentMethod,
    ) -> Result<PaymentAuthorization, PaymentError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if rand::thread_rng().gen_bool(self.failure_rate) {
            warn!(amount, method = method.as_str(), "payment declined");

            return Err(PaymentError::Declined);
        }

        info!(amount, method = method.as_str(), "payment authorized");

        Ok(PaymentAuthorization {
            amount,
            method,
            authorized_at: Timestamp::now(),
        })
    }
}
