//! # pay-cli
//!
//! Console front-end for mode-checkout: the demonstration run, a single
//! payment, and the interactive prompt loop. All output formatting lives
//! here; the core only returns records.

pub mod interactive;
pub mod render;
pub mod scenario;

use pay_core::{resolve, PaymentMode};

/// Parse a user-typed amount. NaN and infinities cannot be written back as
/// JSON numbers, so they are refused here instead of reaching the dispatcher.
pub fn parse_amount(text: &str) -> Result<f64, String> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text.trim()))?;
    if !amount.is_finite() {
        return Err(format!("amount must be a finite number, got '{}'", text.trim()));
    }
    Ok(amount)
}

/// Resolve a mode typed by a user. Digit-only input is a numeric code.
pub fn parse_mode_arg(text: &str) -> PaymentMode {
    let text = text.trim();
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        return text
            .parse::<i64>()
            .map(resolve)
            .unwrap_or(PaymentMode::Unknown);
    }
    resolve(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_arg() {
        assert_eq!(parse_mode_arg("1"), PaymentMode::PayPal);
        assert_eq!(parse_mode_arg(" 3 "), PaymentMode::CreditCard);
        assert_eq!(parse_mode_arg("  GooglePay\n"), PaymentMode::GooglePay);
        assert_eq!(parse_mode_arg("99"), PaymentMode::Unknown);
        assert_eq!(parse_mode_arg("99999999999999999999999"), PaymentMode::Unknown);
        assert_eq!(parse_mode_arg("-1"), PaymentMode::Unknown);
        assert_eq!(parse_mode_arg(""), PaymentMode::Unknown);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 150.75 ").unwrap(), 150.75);
        assert_eq!(parse_amount("-50").unwrap(), -50.0);
        assert!(parse_amount("abc").is_err());
        for text in ["nan", "NaN", "inf", "-infinity"] {
            assert!(parse_amount(text).unwrap_err().contains("finite"));
        }
    }
}
