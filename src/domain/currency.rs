use crate::error::{MercanetError, Result};

/// ISO letter code to ISO 4217 numeric code.
pub const CURRENCIES: &[(&str, &str)] = &[
    ("EUR", "978"),
    ("USD", "840"),
    ("CHF", "756"),
    ("GBP", "826"),
    ("CAD", "124"),
    ("JPY", "392"),
    ("MXP", "484"),
    ("TRY", "949"),
    ("AUD", "036"),
    ("NZD", "554"),
    ("NOK", "578"),
    ("BRC", "986"),
    ("ARP", "032"),
    ("KHR", "116"),
    ("TWD", "901"),
    ("SEK", "752"),
    ("DKK", "208"),
    ("KRW", "410"),
    ("SGD", "702"),
    ("XPF", "953"),
    ("XOF", "952"),
];

/// Converts a letter code (`EUR`) to its numeric code (`978`). Case-insensitive.
pub fn currency_to_code(currency: &str) -> Result<&'static str> {
    CURRENCIES
        .iter()
        .find(|(letters, _)| letters.eq_ignore_ascii_case(currency))
        .map(|(_, code)| *code)
        .ok_or_else(|| {
            MercanetError::validation("currencyCode", format!("unknown currency {currency}"))
        })
}

/// Converts a numeric code (`978`) back to its letter code (`EUR`).
pub fn code_to_currency(code: &str) -> Result<&'static str> {
    CURRENCIES
        .iter()
        .find(|(_, numeric)| *numeric == code)
        .map(|(letters, _)| *letters)
        .ok_or_else(|| {
            MercanetError::validation("currencyCode", format!("unknown currency code {code}"))
        })
}
