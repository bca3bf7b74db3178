use crate::config::GatewayConfig;
use crate::domain::amount::Amount;
use crate::domain::order::Order;
use crate::domain::ports::ReferenceSourceBox;
use crate::domain::request::{PaymentRequest, SignedEnvelope};
use crate::error::Result;
use rust_decimal::Decimal;
use std::net::IpAddr;
use tracing::{debug, info};

const FALLBACK_LANGUAGE: &str = "en";

/// Everything the transport needs to send the customer to the payment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentForm {
    pub url: String,
    pub transaction_reference: String,
    pub envelope: SignedEnvelope,
}

/// Turns orders into signed payment forms.
pub struct CheckoutService {
    config: GatewayConfig,
    references: ReferenceSourceBox,
}

impl CheckoutService {
    /// Creates a new `CheckoutService`.
    ///
    /// # Arguments
    ///
    /// * `config` - The merchant configuration, validated by the caller.
    /// * `references` - Where transaction references come from.
    pub fn new(config: GatewayConfig, references: ReferenceSourceBox) -> Self {
        Self { config, references }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Whether the payment method can be offered for this total and client.
    pub fn is_available(&self, order_total: Decimal, client_ip: Option<IpAddr>) -> bool {
        self.config.accepts_payment(order_total, client_ip)
    }

    /// Builds and seals the payment request for `order`.
    ///
    /// Fails on the first invalid value; no envelope is produced in that case.
    pub async fn prepare(&self, order: &Order) -> Result<PaymentForm> {
        let reference = self.references.next_reference().await?;
        let amount = Amount::from_major_units(order.total)?;

        let mut request = PaymentRequest::new(self.config.secret_key.clone());
        request.set_url(self.config.gateway_url())?;
        request.set_transaction_reference(&reference)?;
        request.set_merchant_id(&self.config.merchant_id)?;
        request.set_key_version(&self.config.key_version)?;
        request.set_amount(amount.cents())?;
        request.set_currency(&order.currency)?;
        request.set_normal_return_url(&self.config.normal_return_url)?;
        request.set_automatic_response_url(&self.config.automatic_response_url)?;
        if request.set_language(&order.language).is_err() {
            debug!(
                language = %order.language,
                fallback = FALLBACK_LANGUAGE,
                "unsupported customer language"
            );
            request.set_language(FALLBACK_LANGUAGE)?;
        }
        request.set_customer_contact_email(&order.email)?;
        request.set_raw_field("orderId", order.order_id.as_str())?;

        let envelope = request.envelope()?;
        info!(
            order_id = %order.order_id,
            transaction_reference = %reference,
            amount = amount.cents(),
            "payment request sealed"
        );

        Ok(PaymentForm {
            url: request.url().to_string(),
            transaction_reference: reference,
            envelope,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayMode;
    use crate::domain::request::{INTERFACE_VERSION, PRODUCTION_URL, TEST_URL};
    use crate::domain::seal::SecretKey;
    use crate::error::MercanetError;
    use crate::infrastructure::in_memory::SequentialReferenceSource;
    use rust_decimal_macros::dec;

    fn config() -> GatewayConfig {
        GatewayConfig {
            merchant_id: "211000021310001".to_string(),
            key_version: "1".to_string(),
            secret_key: SecretKey::new("secret"),
            mode: GatewayMode::Test,
            minimum_amount: Decimal::ZERO,
            maximum_amount: Decimal::ZERO,
            allowed_ips: vec![],
            normal_return_url: "https://shop.example.com/mercanet/manual-response".to_string(),
            automatic_response_url: "https://shop.example.com/mercanet/callback".to_string(),
        }
    }

    fn order() -> Order {
        Order {
            order_id: "17".to_string(),
            total: dec!(12.34),
            currency: "EUR".to_string(),
            email: "jane@example.com".to_string(),
            language: "fr".to_string(),
        }
    }

    fn service(config: GatewayConfig) -> CheckoutService {
        CheckoutService::new(config, Box::new(SequentialReferenceSource::new("tx")))
    }

    #[tokio::test]
    async fn test_prepare() {
        let service = service(config());
        let form = service.prepare(&order()).await.unwrap();

        assert_eq!(form.url, TEST_URL);
        assert_eq!(form.transaction_reference, "tx1");
        assert_eq!(form.envelope.interface_version, INTERFACE_VERSION);
        assert_eq!(
            form.envelope.data,
            "transactionReference=tx1|merchantId=211000021310001|keyVersion=1|amount=1234|currencyCode=978|normalReturnUrl=https://shop.example.com/mercanet/manual-response|automaticResponseUrl=https://shop.example.com/mercanet/callback|customerLanguage=fr|customerContact.email=jane@example.com|orderId=17"
        );
        assert_eq!(form.envelope.seal.len(), 64);

        let second = service.prepare(&order()).await.unwrap();
        assert_eq!(second.transaction_reference, "tx2");
    }

    #[tokio::test]
    async fn test_prepare_production_url() {
        let mut config = config();
        config.mode = GatewayMode::Production;
        let form = service(config).prepare(&order()).await.unwrap();
        assert_eq!(form.url, PRODUCTION_URL);
    }

    #[tokio::test]
    async fn test_unsupported_language_falls_back() {
        let mut order = order();
        order.language = "pt".to_string();
        let form = service(config()).prepare(&order).await.unwrap();
        assert!(form.envelope.data.contains("customerLanguage=en"));
    }

    #[tokio::test]
    async fn test_invalid_order_fails_fast() {
        let service = service(config());

        let mut bad_currency = order();
        bad_currency.currency = "XXX".to_string();
        assert!(matches!(
            service.prepare(&bad_currency).await,
            Err(MercanetError::ValidationError { .. })
        ));

        let mut zero = order();
        zero.total = Decimal::ZERO;
        assert!(service.prepare(&zero).await.is_err());

        let mut bad_email = order();
        bad_email.email = "not-an-email".to_string();
        assert!(service.prepare(&bad_email).await.is_err());
    }

    #[test]
    fn test_is_available() {
        let mut config = config();
        config.allowed_ips = vec!["127.0.0.1".parse().unwrap()];
        let service = service(config);
        assert!(service.is_available(dec!(10), Some("127.0.0.1".parse().unwrap())));
        assert!(!service.is_available(dec!(10), Some("192.168.1.1".parse().unwrap())));
    }
}
