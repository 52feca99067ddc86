use crate::clock::Clock;
use crate::domain::payment::{last_four, ExpiryDate, PaymentRequest};
use crate::error::ValidationError;
use chrono::Datelike;

pub const ALLOWED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

const CARD_NUMBER_LEN: std::ops::RangeInclusive<usize> = 14..=19;
const CVV_LEN: std::ops::RangeInclusive<usize> = 3..=4;

/// A request that passed every rule. Currency is upper-cased.
#[derive(Clone)]
pub struct ValidatedPayment {
    pub card_number: String,
    pub expiry: ExpiryDate,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl ValidatedPayment {
    pub fn card_number_last_four(&self) -> String {
        last_four(&self.card_number)
    }
}

impl std::fmt::Debug for ValidatedPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedPayment")
            .field("card_number_last_four", &self.card_number_last_four())
            .field("expiry", &self.expiry)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .finish_non_exhaustive()
    }
}

/// Checks the rules in a fixed order and stops at the first violation.
pub fn validate_request(
    req: &PaymentRequest,
    clock: &dyn Clock,
) -> Result<ValidatedPayment, ValidationError> {
    let card_number = match req.card_number.as_deref() {
        Some(n) if !n.is_empty() => n,
        _ => return Err(ValidationError::MissingCardNumber),
    };
    let card_len = card_number.chars().count();
    if !CARD_NUMBER_LEN.contains(&card_len) {
        return Err(ValidationError::CardNumberLength(card_len));
    }
    if !is_numeric(card_number) {
        return Err(ValidationError::CardNumberNotNumeric);
    }

    // A missing expiry date leaves month 0, which fails the range check.
    let expiry = match req.expiry_date.as_deref() {
        Some(raw) if !raw.trim().is_empty() => ExpiryDate::parse(raw)?,
        _ => ExpiryDate { month: 0, year: 0 },
    };
    if !(1..=12).contains(&expiry.month) {
        return Err(ValidationError::ExpiryMonthOutOfRange(expiry.month));
    }
    let today = clock.today();
    if expiry.year < today.year() || (expiry.year == today.year() && expiry.month < today.month())
    {
        return Err(ValidationError::CardExpired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    let currency = match req.currency.as_deref() {
        Some(c) if !c.is_empty() => c,
        _ => return Err(ValidationError::MissingCurrency),
    };
    let currency_len = currency.chars().count();
    if currency_len != 3 {
        return Err(ValidationError::CurrencyLength(currency_len));
    }
    let currency = currency.to_uppercase();
    if !ALLOWED_CURRENCIES.contains(&currency.as_str()) {
        return Err(ValidationError::UnsupportedCurrency(currency));
    }

    let amount = req.amount.unwrap_or(0);
    if amount <= 0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }

    let cvv = req.cvv.as_ref().map(|c| c.render()).unwrap_or_default();
    let cvv_len = cvv.chars().count();
    if !CVV_LEN.contains(&cvv_len) {
        return Err(ValidationError::CvvLength(cvv_len));
    }
    if !is_numeric(&cvv) {
        return Err(ValidationError::CvvNotNumeric);
    }

    Ok(ValidatedPayment {
        card_number: card_number.to_string(),
        expiry,
        currency,
        amount,
        cvv,
    })
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
