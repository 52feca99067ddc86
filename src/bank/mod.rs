use crate::error::BankError;
use crate::service::validator::ValidatedPayment;
use serde::{Deserialize, Serialize};

pub mod mock;
pub mod simulator;

/// Body POSTed to the acquiring bank.
#[derive(Clone, Serialize)]
pub struct BankAuthorizationRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl BankAuthorizationRequest {
    pub fn from_validated(payment: &ValidatedPayment) -> Self {
        Self {
            card_number: payment.card_number.clone(),
            expiry_date: payment.expiry.to_string(),
            currency: payment.currency.clone(),
            amount: payment.amount,
            cvv: payment.cvv.clone(),
        }
    }
}

impl std::fmt::Debug for BankAuthorizationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankAuthorizationRequest")
            .field(
                "card_number_last_four",
                &crate::domain::payment::last_four(&self.card_number),
            )
            .field("expiry_date", &self.expiry_date)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAuthorizationResult {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: Option<String>,
}

#[async_trait::async_trait]
pub trait AcquiringBank: Send + Sync {
    fn name(&self) -> &'static str;

    /// One attempt, no retry. Any failure is surfaced as [`BankError`].
    async fn authorize(
        &self,
        request: &BankAuthorizationRequest,
    ) -> Result<BankAuthorizationResult, BankError>;
}
