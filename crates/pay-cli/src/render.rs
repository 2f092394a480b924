//! Console rendering of payment results.

use pay_core::{supported_modes, CheckoutSummary, PaymentResult};
use std::io::{self, Write};

/// `$150.75`, `$-50.00`
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn write_result<W: Write>(out: &mut W, result: &PaymentResult) -> io::Result<()> {
    if result.is_success() {
        writeln!(out, "✅ Payment Successful!")?;
        writeln!(out, "  Provider: {}", result.payment_mode)?;
        writeln!(out, "  Amount: {}", format_amount(result.amount))?;
        writeln!(
            out,
            "  Transaction ID: {}",
            result.transaction_id.as_deref().unwrap_or("-")
        )?;
    } else {
        writeln!(out, "❌ Payment Failed!")?;
        writeln!(out, "  Mode: {}", result.payment_mode)?;
        writeln!(out, "  Error: {}", result.message)?;
    }
    Ok(())
}

pub fn write_modes<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Supported Payment Modes:")?;
    for mode in supported_modes() {
        writeln!(out, "  {}. {}", mode.code(), mode.name())?;
    }
    Ok(())
}

/// The end-of-run summary block
pub fn write_summary<W: Write>(out: &mut W, results: &[PaymentResult]) -> io::Result<()> {
    let summary = CheckoutSummary::from_results(results);
    let rule = "=".repeat(60);

    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "PAYMENT PROCESSING SUMMARY")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Total Payments Processed: {}", summary.total)?;
    writeln!(out, "Successful Payments: {}", summary.succeeded)?;
    writeln!(out, "Failed Payments: {}", summary.failed)?;
    if summary.succeeded > 0 {
        writeln!(
            out,
            "Total Amount Processed: {}",
            format_amount(summary.total_amount)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Successful Transactions:")?;
    for result in results.iter().filter(|r| r.is_success()) {
        writeln!(
            out,
            "  - {}: {} (ID: {})",
            result.payment_mode,
            format_amount(result.amount),
            result.transaction_id.as_deref().unwrap_or("-")
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Failed Transactions:")?;
    for result in results.iter().filter(|r| r.is_error()) {
        writeln!(
            out,
            "  - {}: {} - {}",
            result.payment_mode,
            format_amount(result.amount),
            result.message
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::CheckoutError;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150.75), "$150.75");
        assert_eq!(format_amount(-50.0), "$-50.00");
    }

    #[test]
    fn test_summary_block() {
        let results = vec![
            PaymentResult::success("PayPal", 150.75, "PP_000001", "ok"),
            PaymentResult::failure("UNKNOWN", 10.0, &CheckoutError::InvalidAmount { amount: 10.0 }),
        ];
        let text = render(|out| write_summary(out, &results));

        assert!(text.contains("Total Payments Processed: 2"));
        assert!(text.contains("Successful Payments: 1"));
        assert!(text.contains("Total Amount Processed: $150.75"));
        assert!(text.contains("  - PayPal: $150.75 (ID: PP_000001)"));
        assert!(text.contains("  - UNKNOWN: $10.00 - Invalid amount"));
    }

    #[test]
    fn test_modes_listing() {
        let text = render(|out| write_modes(out));
        assert!(text.contains("  1. PAYPAL"));
        assert!(text.contains("  3. CREDITCARD"));
        assert!(!text.contains("UNKNOWN"));
    }
}
