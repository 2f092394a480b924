use pay_core::{resolve, ErrorKind, PaymentMode, PaymentStatus, SequentialTransactionIds, SUPPORTED_MODES};
use pay_mock::{mock_checkout, mock_checkout_from_config, IdStrategy, MockConfig};
use std::sync::Arc;

fn checkout() -> pay_core::Checkout {
    mock_checkout(Arc::new(SequentialTransactionIds::new()))
}

#[test]
fn supported_modes_succeed_with_prefixed_ids() {
    let checkout = checkout();

    for (mode, prefix) in SUPPORTED_MODES.into_iter().zip(["PP_", "GP_", "CC_"]) {
        let result = checkout.checkout(mode, 100.50);

        assert_eq!(result.status, PaymentStatus::Success);
        assert_eq!(result.amount, 100.50);
        let id = result.transaction_id.expect("success carries a transaction id");
        assert!(id.starts_with(prefix), "{} should start with {}", id, prefix);
    }
}

#[test]
fn non_positive_amounts_fail_for_every_mode() {
    let checkout = checkout();
    let modes = [
        PaymentMode::PayPal,
        PaymentMode::GooglePay,
        PaymentMode::CreditCard,
        PaymentMode::Unknown,
    ];

    for mode in modes {
        for amount in [0.0, -0.01, -50.0] {
            let result = checkout.checkout(mode, amount);

            assert_eq!(result.status, PaymentStatus::Error);
            assert!(result.transaction_id.is_none());
            assert!(result.message.contains("Invalid amount"));
            assert_eq!(result.error, Some(ErrorKind::InvalidAmount));
        }
    }
}

#[test]
fn paypal_happy_path() {
    let result = checkout().checkout(PaymentMode::PayPal, 150.75);

    assert!(result.is_success());
    assert_eq!(result.amount, 150.75);
    assert_eq!(result.payment_mode, "PayPal");
}

#[test]
fn paypal_negative_amount() {
    let result = checkout().checkout(PaymentMode::PayPal, -50.00);

    assert!(result.is_error());
    assert!(result.message.contains("Invalid amount"));
    assert_eq!(
        result.message,
        "Invalid amount: $-50.00. Amount must be greater than 0."
    );
}

#[test]
fn unknown_mode_is_rejected() {
    let result = checkout().checkout(PaymentMode::Unknown, 150.75);

    assert!(result.is_error());
    assert!(result.transaction_id.is_none());
    assert_eq!(result.payment_mode, "UNKNOWN");
    assert_eq!(result.error, Some(ErrorKind::UnsupportedMode));
}

#[test]
fn resolved_text_flows_through_checkout() {
    let checkout = checkout();

    let cases = [
        ("paypal", "PayPal"),
        ("googleplay", "GooglePay"),
        ("CC", "Credit Card"),
    ];
    for (input, provider) in cases {
        let result = checkout.checkout(resolve(input), 75.50);
        assert!(result.is_success());
        assert_eq!(result.payment_mode, provider);
    }

    let result = checkout.checkout(resolve("bitcoin"), 75.50);
    assert!(result.is_error());
}

#[test]
fn config_builds_sequential_dispatcher() {
    let config = MockConfig::new(IdStrategy::Sequential).with_sequence_start(10);
    let checkout = mock_checkout_from_config(&config);

    assert_eq!(checkout.modes(), SUPPORTED_MODES.to_vec());

    let first = checkout.checkout(PaymentMode::GooglePay, 5.0);
    let second = checkout.checkout(PaymentMode::CreditCard, 5.0);
    assert_eq!(first.transaction_id.as_deref(), Some("GP_000010"));
    assert_eq!(second.transaction_id.as_deref(), Some("CC_000011"));
}
