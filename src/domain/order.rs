use rust_decimal::Decimal;
use serde::Deserialize;

/// What the shop knows about an order when the customer picks this payment method.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub order_id: String,
    /// Order total in major units.
    pub total: Decimal,
    /// ISO letter code, eg `EUR`.
    pub currency: String,
    pub email: String,
    /// Two-letter customer language, eg `fr`.
    pub language: String,
}
