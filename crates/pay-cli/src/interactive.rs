//! Interactive prompt loop.
//!
//! Reads a mode then an amount per payment until `0`, `exit`, or end of input.

use crate::{parse_amount, parse_mode_arg};
use crate::render::{write_modes, write_result};
use pay_core::Checkout;
use std::io::{BufRead, Write};

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> anyhow::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn run<R: BufRead, W: Write>(checkout: &Checkout, mut input: R, mut out: W) -> anyhow::Result<()> {
    let rule = "=".repeat(60);
    writeln!(out, "{}", rule)?;
    writeln!(out, "INTERACTIVE PAYMENT SYSTEM")?;
    writeln!(out, "{}", rule)?;

    loop {
        writeln!(out)?;
        write_modes(&mut out)?;
        writeln!(out, "  0. Exit")?;

        let choice = match prompt(&mut input, &mut out, "\nSelect payment mode (number or name): ")? {
            Some(choice) => choice,
            None => break,
        };

        if choice == "0" || choice.eq_ignore_ascii_case("exit") {
            writeln!(out, "Thank you for using our payment system!")?;
            return Ok(());
        }

        let mode = parse_mode_arg(&choice);

        let amount_text = match prompt(&mut input, &mut out, "Enter payment amount: $")? {
            Some(text) => text,
            None => break,
        };
        let amount = match parse_amount(&amount_text) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(out, "Invalid amount format. Please enter a valid number.")?;
                continue;
            }
        };

        let result = checkout.checkout(mode, amount);
        writeln!(out)?;
        write_result(&mut out, &result)?;
    }

    writeln!(out)?;
    writeln!(out, "Goodbye!")?;
    Ok(())
}
