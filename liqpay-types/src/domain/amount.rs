//! Monetary amounts as the gateway transmits them.
//!
//! The gateway uses two encodings for money. Most fields are JSON numbers
//! ([`NumericAmount`]); a few are decimal strings ([`DecimalAmount`]) that must
//! reach the wire exactly as written.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Amount transmitted as a JSON number, in major units (e.g. `100.5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = f64, example = 100.5)]
pub struct NumericAmount(f64);

impl NumericAmount {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl From<f64> for NumericAmount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NumericAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount transmitted as a literal decimal string (e.g. `"7.34"`).
///
/// The text is never parsed or normalized: `"5"` and `"5.00"` stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "7.34")]
pub struct DecimalAmount(String);

impl DecimalAmount {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the text as a float, for display or comparison only.
    pub fn to_f64(&self) -> Result<f64, std::num::ParseFloatError> {
        self.0.trim().parse()
    }
}

impl From<&str> for DecimalAmount {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DecimalAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
