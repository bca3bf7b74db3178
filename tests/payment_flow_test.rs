mod common;

use common::{config, gateway_seal};
use mercanet::application::callback::{CallbackOutcome, CallbackProcessor};
use mercanet::application::checkout::CheckoutService;
use mercanet::domain::order::Order;
use mercanet::domain::parameters::ParameterSet;
use mercanet::domain::ports::PaymentStatus;
use mercanet::domain::seal::verify_seal;
use mercanet::infrastructure::in_memory::{InMemoryPaymentLedger, SequentialReferenceSource};
use rust_decimal_macros::dec;

fn order(order_id: &str) -> Order {
    Order {
        order_id: order_id.to_string(),
        total: dec!(49.99),
        currency: "EUR".to_string(),
        email: "jane@example.com".to_string(),
        language: "fr".to_string(),
    }
}

/// What the gateway posts back once the customer left the payment page.
fn gateway_callback(request_data: &str, response_code: &str) -> (String, String) {
    let request = ParameterSet::parse(request_data);
    let data = format!(
        "amount={}|currencyCode={}|merchantId={}|orderId={}|responseCode={}|transactionReference={}",
        request.get("amount").unwrap(),
        request.get("currencyCode").unwrap(),
        request.get("merchantId").unwrap(),
        request.get("orderId").unwrap(),
        response_code,
        request.get("transactionReference").unwrap(),
    );
    let seal = gateway_seal(&data);
    (data, seal)
}

#[tokio::test]
async fn test_checkout_then_confirmed_callback() {
    let config = config();
    let secret = config.secret_key.clone();
    let checkout = CheckoutService::new(config, Box::new(SequentialReferenceSource::new("shop")));
    let processor = CallbackProcessor::new(secret.clone(), Box::new(InMemoryPaymentLedger::new()));

    let form = checkout.prepare(&order("1001")).await.unwrap();
    assert_eq!(form.transaction_reference, "shop1");
    assert!(form.envelope.data.contains("amount=4999|currencyCode=978"));
    assert!(verify_seal(
        &ParameterSet::parse(&form.envelope.data),
        &secret,
        &form.envelope.seal
    ));

    let (data, seal) = gateway_callback(&form.envelope.data, "00");
    let outcome = processor
        .process([("DATA", data.as_str()), ("SEAL", seal.as_str())])
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CallbackOutcome::Confirmed {
            order_id: "1001".to_string(),
            transaction_reference: "shop1".to_string(),
        }
    );
    let record = processor.ledger().get("1001").await.unwrap().unwrap();
    assert_eq!(record.status, PaymentStatus::Paid);
    assert_eq!(record.response_code, "00");
}

#[tokio::test]
async fn test_cancelled_and_refused_callbacks() {
    let config = config();
    let secret = config.secret_key.clone();
    let checkout = CheckoutService::new(config, Box::new(SequentialReferenceSource::new("shop")));
    let processor = CallbackProcessor::new(secret, Box::new(InMemoryPaymentLedger::new()));

    let cancelled = checkout.prepare(&order("1")).await.unwrap();
    let refused = checkout.prepare(&order("2")).await.unwrap();

    let (data, seal) = gateway_callback(&cancelled.envelope.data, "17");
    let outcome = processor
        .process([("DATA", data), ("SEAL", seal)])
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        CallbackOutcome::Declined { ref response_code, .. } if response_code == "17"
    ));

    let (data, seal) = gateway_callback(&refused.envelope.data, "05");
    processor
        .process([("DATA", data), ("SEAL", seal)])
        .await
        .unwrap();

    let ledger = processor.ledger();
    assert_eq!(
        ledger.get("1").await.unwrap().unwrap().status,
        PaymentStatus::Cancelled
    );
    assert_eq!(
        ledger.get("2").await.unwrap().unwrap().status,
        PaymentStatus::Refused
    );
}

#[tokio::test]
async fn test_forged_callback_is_not_recorded() {
    let config = config();
    let secret = config.secret_key.clone();
    let checkout = CheckoutService::new(config, Box::new(SequentialReferenceSource::new("shop")));
    let processor = CallbackProcessor::new(secret, Box::new(InMemoryPaymentLedger::new()));

    let form = checkout.prepare(&order("7")).await.unwrap();
    let (data, seal) = gateway_callback(&form.envelope.data, "05");
    let forged = data.replace("responseCode=05", "responseCode=00");

    let outcome = processor
        .process([("DATA", forged.as_str()), ("SEAL", seal.as_str())])
        .await
        .unwrap();

    assert_eq!(outcome, CallbackOutcome::Forged);
    assert!(processor.ledger().get("7").await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_order_produces_no_form() {
    let checkout = CheckoutService::new(config(), Box::new(SequentialReferenceSource::new("shop")));

    let mut bad = order("9");
    bad.currency = "XXX".to_string();
    assert!(checkout.prepare(&bad).await.is_err());

    let mut free = order("10");
    free.total = dec!(0.001);
    assert!(checkout.prepare(&free).await.is_err());
}
