//! # checkout-demo
//!
//! Console front-end for the mock checkout.
//!
//! ```bash
//! checkout-demo demo
//! checkout-demo pay cc 42.00
//! checkout-demo --ids sequential interactive
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use pay_cli::render::{format_amount, write_modes, write_result, write_summary};
use pay_cli::scenario::Scenario;
use pay_cli::{interactive, parse_amount, parse_mode_arg};
use pay_core::{Checkout, CheckoutSummary};
use pay_mock::{mock_checkout_from_config, IdStrategy, MockConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Transaction id generator (defaults to PAY_MOCK_TXN_IDS, then uuid)
    #[arg(long, global = true, value_enum)]
    ids: Option<IdsArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum IdsArg {
    Uuid,
    Sequential,
}

#[derive(Subcommand)]
enum Command {
    /// Run the demonstration batch (or a TOML scenario) and print a summary
    Demo {
        /// Scenario file with [[payments]] entries
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Print results and summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Make a single payment
    Pay {
        /// Mode name, alias, or numeric code
        mode: String,

        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        amount: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prompt for payments until exit
    Interactive,
    /// List supported payment modes
    Modes,
}

fn build_checkout(ids: Option<IdsArg>) -> anyhow::Result<Checkout> {
    let config = match ids {
        Some(IdsArg::Uuid) => MockConfig::new(IdStrategy::Uuid),
        Some(IdsArg::Sequential) => MockConfig::new(IdStrategy::Sequential),
        None => MockConfig::from_env()?,
    };
    Ok(mock_checkout_from_config(&config))
}

fn run_demo(checkout: &Checkout, scenario: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let scenario = match scenario {
        Some(path) => Scenario::load(&path)?,
        None => Scenario::demo()?,
    };

    let results = scenario.run(checkout);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let summary = CheckoutSummary::from_results(&results);
        serde_json::to_writer_pretty(
            &mut out,
            &serde_json::json!({ "results": results, "summary": summary }),
        )?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "=== Payment System Demo ===")?;
    for (payment, result) in scenario.payments.iter().zip(&results) {
        writeln!(out)?;
        writeln!(
            out,
            "--- {} -> {} ({}) ---",
            payment.describe(),
            payment.resolved_mode(),
            format_amount(payment.amount)
        )?;
        write_result(&mut out, result)?;
    }
    write_summary(&mut out, &results)?;
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let checkout = build_checkout(cli.ids)?;

    match cli.command {
        Command::Demo { scenario, json } => run_demo(&checkout, scenario, json)?,
        Command::Pay { mode, amount, json } => {
            let result = checkout.checkout(parse_mode_arg(&mode), amount);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &result)?;
                writeln!(out)?;
            } else {
                write_result(&mut out, &result)?;
            }
            if result.is_error() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Interactive => {
            let stdin = io::stdin();
            interactive::run(&checkout, stdin.lock(), io::stdout())?;
        }
        Command::Modes => write_modes(&mut io::stdout())?,
    }

    Ok(ExitCode::SUCCESS)
}
