//! Trading pair symbol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A trading pair in `BASE-QUOTE` form, e.g. `MATIC-USDC`.
///
/// The set of pairs the venue actually trades is server-side state; clients
/// validate shape only and discover the live list via the symbols endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and validate a symbol string.
    ///
    /// Accepts `BASE-QUOTE` where both legs are non-empty and consist of
    /// ASCII alphanumerics. Lowercase input is upcased, matching the API's
    /// handling of the `symbol` query parameter.
    pub fn new(s: impl AsRef<str>) -> Result<Self, CoreError> {
        let raw = s.as_ref().trim().to_ascii_uppercase();

        let Some((base, quote)) = raw.split_once('-') else {
            return Err(CoreError::InvalidSymbol(format!(
                "expected BASE-QUOTE, got '{raw}'"
            )));
        };

        let leg_ok = |leg: &str| !leg.is_empty() && leg.chars().all(|c| c.is_ascii_alphanumeric());
        if !leg_ok(base) || !leg_ok(quote) {
            return Err(CoreError::InvalidSymbol(format!(
                "invalid pair legs in '{raw}'"
            )));
        }

        Ok(Self(raw))
    }

    /// Base asset (left leg).
    pub fn base(&self) -> &str {
        self.0.split_once('-').map(|(b, _)| b).unwrap_or(&self.0)
    }

    /// Quote asset (right leg).
    pub fn quote(&self) -> &str {
        self.0.split_once('-').map(|(_, q)| q).unwrap_or("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}
