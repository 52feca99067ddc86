use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// CVV as sent by callers: either a JSON number or a numeric string.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Cvv {
    Number(i64),
    Text(String),
}

impl Cvv {
    pub fn render(&self) -> String {
        match self {
            Cvv::Number(n) => n.to_string(),
            Cvv::Text(s) => s.clone(),
        }
    }
}

impl fmt::Debug for Cvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cvv(***)")
    }
}

/// Inbound payment request. Every field is optional at the wire level so that
/// missing values surface as validation failures rather than body errors.
#[derive(Clone, Default, Deserialize)]
pub struct PaymentRequest {
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<i64>,
    pub cvv: Option<Cvv>,
}

impl fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentRequest")
            .field(
                "card_number_last_four",
                &self.card_number.as_deref().map(last_four),
            )
            .field("expiry_date", &self.expiry_date)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &self.cvv)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    pub month: u32,
    pub year: i32,
}

impl ExpiryDate {
    /// Parses `MM/YYYY`: a one or two digit month and a four digit year. The
    /// month is range-checked by the validator, not here.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedExpiryDate(raw.to_string());
        let (month, year) = raw.trim().split_once('/').ok_or_else(malformed)?;
        if !matches!(month.len(), 1 | 2) || !all_digits(month) {
            return Err(malformed());
        }
        if year.len() != 4 || !all_digits(year) {
            return Err(malformed());
        }
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        Ok(Self { month, year })
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Trailing four characters of a card number, kept as a string so leading
/// zeros survive.
pub fn last_four(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    if chars.len() < 4 {
        return String::new();
    }
    chars[chars.len() - 4..].iter().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
}

impl PaymentStatus {
    pub fn from_authorized(authorized: bool) -> Self {
        if authorized {
            PaymentStatus::Authorized
        } else {
            PaymentStatus::Declined
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
