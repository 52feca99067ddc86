use crate::bank::{AcquiringBank, BankAuthorizationRequest, BankAuthorizationResult};
use crate::error::BankError;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    AlwaysAuthorize,
    AlwaysDecline,
    Unavailable,
}

impl MockBehavior {
    /// `None` for names that match no behavior.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "ALWAYS_AUTHORIZE" => Some(MockBehavior::AlwaysAuthorize),
            "ALWAYS_DECLINE" => Some(MockBehavior::AlwaysDecline),
            "UNAVAILABLE" => Some(MockBehavior::Unavailable),
            _ => None,
        }
    }
}

/// In-process bank with a fixed outcome. Counts every authorize call.
pub struct MockBank {
    pub behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockBank {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AcquiringBank for MockBank {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn authorize(
        &self,
        _request: &BankAuthorizationRequest,
    ) -> Result<BankAuthorizationResult, BankError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::AlwaysAuthorize => Ok(BankAuthorizationResult {
                authorized: true,
                authorization_code: Some(format!("mock_auth_{}", uuid::Uuid::new_v4().simple())),
            }),
            MockBehavior::AlwaysDecline => Ok(BankAuthorizationResult {
                authorized: false,
                authorization_code: None,
            }),
            MockBehavior::Unavailable => Err(BankError::Unavailable),
        }
    }
}
