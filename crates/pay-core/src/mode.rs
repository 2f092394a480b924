//! # Payment Modes
//!
//! The closed set of canonical payment modes and the resolver that maps
//! heterogeneous input (modes, alias text, numeric codes) onto them.
//!
//! Resolution never fails: anything unrecognized becomes [`PaymentMode::Unknown`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical payment mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMode {
    PayPal,
    GooglePay,
    CreditCard,
    /// Fallback for anything unrecognized. Never a supported mode.
    #[default]
    Unknown,
}

/// Modes that have a payment handler behind them
pub const SUPPORTED_MODES: [PaymentMode; 3] = [
    PaymentMode::PayPal,
    PaymentMode::GooglePay,
    PaymentMode::CreditCard,
];

/// Recognized spellings, matched case-insensitively.
const ALIASES: &[(&str, PaymentMode)] = &[
    ("paypal", PaymentMode::PayPal),
    ("googlepay", PaymentMode::GooglePay),
    ("googleplay", PaymentMode::GooglePay), // common misspelling
    ("creditcard", PaymentMode::CreditCard),
    ("credit_card", PaymentMode::CreditCard),
    ("cc", PaymentMode::CreditCard),
];

impl PaymentMode {
    /// Stable numeric code
    pub fn code(&self) -> i64 {
        match self {
            PaymentMode::PayPal => 1,
            PaymentMode::GooglePay => 2,
            PaymentMode::CreditCard => 3,
            PaymentMode::Unknown => 99,
        }
    }

    /// Canonical upper-case name (e.g. `PAYPAL`)
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMode::PayPal => "PAYPAL",
            PaymentMode::GooglePay => "GOOGLEPAY",
            PaymentMode::CreditCard => "CREDITCARD",
            PaymentMode::Unknown => "UNKNOWN",
        }
    }

    /// Look up a mode by its numeric code.
    ///
    /// `99` maps to `Unknown` since that is its code.
    pub fn from_code(code: i64) -> Option<Self> {
        [
            PaymentMode::PayPal,
            PaymentMode::GooglePay,
            PaymentMode::CreditCard,
            PaymentMode::Unknown,
        ]
        .into_iter()
        .find(|mode| mode.code() == code)
    }

    /// Look up a mode by one of its text aliases (case-insensitive)
    pub fn from_alias(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, mode)| *mode)
    }

    /// Whether a handler exists for this mode
    pub fn is_supported(&self) -> bool {
        SUPPORTED_MODES.contains(self)
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported modes as a slice, in code order
pub fn supported_modes() -> &'static [PaymentMode] {
    &SUPPORTED_MODES
}

/// Comma-separated names of the supported modes
pub fn supported_mode_names() -> String {
    SUPPORTED_MODES
        .iter()
        .map(PaymentMode::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw mode input as seen at the boundary
#[derive(Debug, Clone, PartialEq)]
pub enum ModeInput {
    /// Already canonical
    Mode(PaymentMode),
    /// Free-form text, matched against the alias table
    Text(String),
    /// Numeric code
    Code(i64),
    /// Anything else (floats, booleans, null, ...)
    Other,
}

impl From<PaymentMode> for ModeInput {
    fn from(mode: PaymentMode) -> Self {
        ModeInput::Mode(mode)
    }
}

impl From<&str> for ModeInput {
    fn from(text: &str) -> Self {
        ModeInput::Text(text.to_string())
    }
}

impl From<String> for ModeInput {
    fn from(text: String) -> Self {
        ModeInput::Text(text)
    }
}

impl From<i64> for ModeInput {
    fn from(code: i64) -> Self {
        ModeInput::Code(code)
    }
}

impl From<i32> for ModeInput {
    fn from(code: i32) -> Self {
        ModeInput::Code(code.into())
    }
}

impl From<u32> for ModeInput {
    fn from(code: u32) -> Self {
        ModeInput::Code(code.into())
    }
}

impl From<u64> for ModeInput {
    fn from(code: u64) -> Self {
        i64::try_from(code)
            .map(ModeInput::Code)
            .unwrap_or(ModeInput::Other)
    }
}

impl From<serde_json::Value> for ModeInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => ModeInput::Text(text),
            serde_json::Value::Number(n) => n.as_i64().map(ModeInput::Code).unwrap_or(ModeInput::Other),
            _ => ModeInput::Other,
        }
    }
}

impl From<toml::Value> for ModeInput {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(text) => ModeInput::Text(text),
            toml::Value::Integer(code) => ModeInput::Code(code),
            _ => ModeInput::Other,
        }
    }
}

/// Resolve any boundary input to a canonical mode.
///
/// Total: unrecognized text, undefined codes and other input types all
/// resolve to [`PaymentMode::Unknown`].
pub fn resolve(input: impl Into<ModeInput>) -> PaymentMode {
    match input.into() {
        ModeInput::Mode(mode) => mode,
        ModeInput::Text(text) => PaymentMode::from_alias(&text).unwrap_or_default(),
        ModeInput::Code(code) => PaymentMode::from_code(code).unwrap_or_default(),
        ModeInput::Other => PaymentMode::Unknown,
    }
}
