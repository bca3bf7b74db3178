use crate::domain::ports::{PaymentLedgerBox, PaymentRecord, PaymentStatus};
use crate::domain::response::{PaymentResponse, ResponseStatus};
use crate::domain::response_codes::{BUYER_CANCELLATION, describe_response_code};
use crate::domain::seal::SecretKey;
use crate::error::Result;
use tracing::{info, warn};

/// What the shop should do after a gateway callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Authentic and accepted: the order is paid.
    Confirmed {
        order_id: String,
        transaction_reference: String,
    },
    /// Authentic but not accepted.
    Declined {
        order_id: String,
        response_code: String,
        reason: &'static str,
    },
    /// The seal did not match. Nothing was recorded.
    Forged,
}

/// Authenticates gateway callbacks and records their outcome.
pub struct CallbackProcessor {
    secret: SecretKey,
    ledger: PaymentLedgerBox,
}

impl CallbackProcessor {
    pub fn new(secret: SecretKey, ledger: PaymentLedgerBox) -> Self {
        Self { secret, ledger }
    }

    pub fn ledger(&self) -> &PaymentLedgerBox {
        &self.ledger
    }

    /// Processes the raw form fields of a callback.
    ///
    /// Parse errors are returned as-is; a callback that cannot be parsed is
    /// never a confirmed payment.
    pub async fn process<I, K, V>(&self, fields: I) -> Result<CallbackOutcome>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let response = PaymentResponse::from_fields(self.secret.clone(), fields).inspect_err(
            |e| warn!(error = %e, "unreadable gateway callback"),
        )?;
        info!(data = response.data_string(), "gateway callback received");

        match response.status() {
            ResponseStatus::AuthenticationFailed => {
                warn!(
                    security = true,
                    data = response.data_string(),
                    seal = response.seal(),
                    "gateway callback seal mismatch, possibly forged"
                );
                Ok(CallbackOutcome::Forged)
            }
            ResponseStatus::Successful => {
                let (order_id, transaction_reference) = order_keys(&response)?;
                self.ledger
                    .record(PaymentRecord {
                        order_id: order_id.clone(),
                        transaction_reference: transaction_reference.clone(),
                        status: PaymentStatus::Paid,
                        response_code: response.response_code().unwrap_or_default().to_string(),
                    })
                    .await?;
                info!(
                    order_id = %order_id,
                    transaction_reference = %transaction_reference,
                    "order confirmed"
                );
                Ok(CallbackOutcome::Confirmed {
                    order_id,
                    transaction_reference,
                })
            }
            ResponseStatus::Declined { response_code } => {
                let (order_id, transaction_reference) = order_keys(&response)?;
                let status = if response_code == BUYER_CANCELLATION {
                    PaymentStatus::Cancelled
                } else {
                    PaymentStatus::Refused
                };
                let reason = describe_response_code(&response_code);
                self.ledger
                    .record(PaymentRecord {
                        order_id: order_id.clone(),
                        transaction_reference,
                        status,
                        response_code: response_code.clone(),
                    })
                    .await?;
                warn!(
                    order_id = %order_id,
                    response_code = %response_code,
                    reason,
                    "payment declined"
                );
                Ok(CallbackOutcome::Declined {
                    order_id,
                    response_code,
                    reason,
                })
            }
        }
    }
}

fn order_keys(response: &PaymentResponse) -> Result<(String, String)> {
    Ok((
        response.param("orderId")?.to_string(),
        response.param("transactionReference")?.to_string(),
    ))
}
