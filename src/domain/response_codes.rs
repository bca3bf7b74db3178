/// Gateway response codes and what they mean.
pub const RESPONSE_CODES: &[(&str, &str)] = &[
    ("00", "Transaction accepted"),
    ("02", "Authorization request by phone required, card ceiling exceeded"),
    ("03", "Invalid merchant contract"),
    ("05", "Authorization refused"),
    ("11", "Card number on stop list (deferred check)"),
    ("12", "Invalid transaction, check the request parameters"),
    ("14", "Invalid payment means details or AVS check failed"),
    ("17", "Buyer cancellation"),
    ("30", "Format error"),
    ("34", "Suspected fraud (wrong seal)"),
    ("54", "Payment means expired"),
    ("75", "Too many attempts entering payment means details"),
    ("90", "Service temporarily unavailable"),
    ("94", "Duplicated transaction, reference already used"),
    ("97", "Timeout, transaction refused"),
    ("99", "Temporary payment server problem"),
];

pub const SUCCESS_CODES: &[&str] = &["00", "60"];

pub const BUYER_CANCELLATION: &str = "17";

pub fn describe_response_code(code: &str) -> &'static str {
    RESPONSE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or("Unknown reason", |(_, description)| *description)
}
