use crate::domain::payment::{ErrorEnvelope, ErrorPayload};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use uuid::Uuid;

/// First rule a payment request violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Card number is required")]
    MissingCardNumber,
    #[error("Card number must be between 14 and 19 characters long, got {0}")]
    CardNumberLength(usize),
    #[error("Card number must only contain numeric characters")]
    CardNumberNotNumeric,
    #[error("Invalid expiry date format {0:?}, expected MM/YYYY")]
    MalformedExpiryDate(String),
    #[error("Expiry month must be between 1 and 12, got {0}")]
    ExpiryMonthOutOfRange(u32),
    #[error("Card has expired ({month:02}/{year:04})")]
    CardExpired { month: u32, year: i32 },
    #[error("Currency is required")]
    MissingCurrency,
    #[error("Currency must be 3 characters, got {0}")]
    CurrencyLength(usize),
    #[error("Currency {0} is not supported, must be one of: USD, EUR, GBP")]
    UnsupportedCurrency(String),
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(i64),
    #[error("CVV must be 3-4 characters long, got {0}")]
    CvvLength(usize),
    #[error("CVV must only contain numeric characters")]
    CvvNotNumeric,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCardNumber => "CARD_NUMBER_REQUIRED",
            Self::CardNumberLength(_) => "CARD_NUMBER_INVALID_LENGTH",
            Self::CardNumberNotNumeric => "CARD_NUMBER_NOT_NUMERIC",
            Self::MalformedExpiryDate(_) => "EXPIRY_DATE_MALFORMED",
            Self::ExpiryMonthOutOfRange(_) => "EXPIRY_MONTH_OUT_OF_RANGE",
            Self::CardExpired { .. } => "CARD_EXPIRED",
            Self::MissingCurrency => "CURRENCY_REQUIRED",
            Self::CurrencyLength(_) => "CURRENCY_INVALID_LENGTH",
            Self::UnsupportedCurrency(_) => "CURRENCY_NOT_ALLOWED",
            Self::NonPositiveAmount(_) => "INVALID_AMOUNT",
            Self::CvvLength(_) => "CVV_INVALID_LENGTH",
            Self::CvvNotNumeric => "CVV_NOT_NUMERIC",
        }
    }
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("bank call timed out after {0}ms")]
    Timeout(u64),
    #[error("bank transport error: {0}")]
    Transport(String),
    #[error("bank responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("bank response could not be read: {0}")]
    MalformedResponse(String),
    #[error("bank unavailable")]
    Unavailable,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment rejected: {0}")]
    Rejected(#[from] ValidationError),
    #[error("acquiring bank unavailable: {0}")]
    BankUnavailable(#[from] BankError),
    #[error("payment {0} not found")]
    NotFound(Uuid),
}

impl PaymentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected(_) | Self::BankUnavailable(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Rejected(reason) => reason.code(),
            Self::BankUnavailable(_) => "BANK_UNAVAILABLE",
            Self::NotFound(_) => "PAYMENT_NOT_FOUND",
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Rejected(reason) => reason.to_string(),
            Self::BankUnavailable(_) => "Failed to process payment with bank".to_string(),
            Self::NotFound(_) => "Payment not found".to_string(),
        };
        let details = match &self {
            Self::NotFound(id) => Some(id.to_string()),
            _ => None,
        };
        (self.status_code(), Json(err(self.code(), &message, details))).into_response()
    }
}

pub fn err(code: &str, message: &str, details: Option<String>) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details,
        },
    }
}
