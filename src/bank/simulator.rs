use crate::bank::{AcquiringBank, BankAuthorizationRequest, BankAuthorizationResult};
use crate::error::BankError;
use std::time::Duration;

/// HTTP client for the acquiring-bank simulator.
pub struct SimulatorBank {
    pub base_url: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

impl SimulatorBank {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
            client: reqwest::Client::new(),
        }
    }

    fn payments_url(&self) -> String {
        format!("{}/payments", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl AcquiringBank for SimulatorBank {
    fn name(&self) -> &'static str {
        "bank_simulator"
    }

    async fn authorize(
        &self,
        request: &BankAuthorizationRequest,
    ) -> Result<BankAuthorizationResult, BankError> {
        let resp = self
            .client
            .post(self.payments_url())
            .json(request)
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => {
                r.json::<BankAuthorizationResult>().await.map_err(|e| {
                    if e.is_timeout() {
                        BankError::Timeout(self.timeout_ms)
                    } else {
                        BankError::MalformedResponse(e.to_string())
                    }
                })
            }
            Ok(r) => {
                let status = r.status().as_u16();
                let body = r.text().await.unwrap_or_default();
                Err(BankError::Status {
                    status,
                    body: body.chars().take(200).collect(),
                })
            }
            Err(e) if e.is_timeout() => Err(BankError::Timeout(self.timeout_ms)),
            Err(e) => Err(BankError::Transport(e.to_string())),
        }
    }
}
