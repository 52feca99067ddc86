use crate::bank::{AcquiringBank, BankAuthorizationRequest};
use crate::clock::Clock;
use crate::domain::payment::{PaymentRecord, PaymentRequest, PaymentStatus};
use crate::error::PaymentError;
use crate::repo::payments_repo::PaymentsRepo;
use crate::service::validator::validate_request;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
    pub bank: Arc<dyn AcquiringBank>,
    pub clock: Arc<dyn Clock>,
}

impl PaymentService {
    pub fn new(
        payments_repo: PaymentsRepo,
        bank: Arc<dyn AcquiringBank>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            payments_repo,
            bank,
            clock,
        }
    }

    /// Validates, authorizes with the bank and stores the outcome. A declined
    /// authorization is returned as `Ok` with `PaymentStatus::Declined`.
    pub async fn process(&self, req: PaymentRequest) -> Result<PaymentRecord, PaymentError> {
        tracing::debug!(request = ?req, "processing payment request");

        let validated = validate_request(&req, self.clock.as_ref()).map_err(|reason| {
            tracing::warn!(code = reason.code(), %reason, request = ?req, "payment request rejected");
            PaymentError::Rejected(reason)
        })?;

        let bank_request = BankAuthorizationRequest::from_validated(&validated);
        let start = Instant::now();
        let outcome = self.bank.authorize(&bank_request).await.map_err(|e| {
            tracing::error!(
                bank = self.bank.name(),
                card_number_last_four = %validated.card_number_last_four(),
                currency = %validated.currency,
                amount = validated.amount,
                error = %e,
                "error calling acquiring bank"
            );
            PaymentError::BankUnavailable(e)
        })?;
        let latency_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            bank = self.bank.name(),
            authorized = outcome.authorized,
            authorization_code = outcome.authorization_code.as_deref().unwrap_or("none"),
            latency_ms,
            "bank response"
        );

        let record = PaymentRecord {
            id: Uuid::new_v4(),
            status: PaymentStatus::from_authorized(outcome.authorized),
            card_number_last_four: validated.card_number_last_four(),
            expiry_month: validated.expiry.month,
            expiry_year: validated.expiry.year,
            currency: validated.currency,
            amount: validated.amount,
        };
        self.payments_repo.insert(record.clone()).await;

        tracing::info!(
            payment_id = %record.id,
            status = ?record.status,
            latency_ms,
            "payment processed"
        );
        Ok(record)
    }

    pub async fn get(&self, payment_id: Uuid) -> Result<PaymentRecord, PaymentError> {
        tracing::debug!(%payment_id, "looking up payment");
        self.payments_repo
            .get(payment_id)
            .await
            .ok_or(PaymentError::NotFound(payment_id))
    }
}
