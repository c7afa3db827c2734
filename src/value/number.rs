//! Numeric value normalization
//!
//! Numeric detection values are normalized to integers with truncation
//! toward zero, following the coercion rules used for event matching.

use crate::error::{Result, SigmaError};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// Exact f64 bounds for the i64 range. i64::MAX itself is not exactly
// representable, so compare against i64::MAX + 1.
const I64_MAX_PLUS_ONE: f64 = 9_223_372_036_854_775_808.0;
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;

/// Numeric Sigma value, normalized to an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SigmaNumber(i64);

impl SigmaNumber {
    /// The normalized integer
    pub fn value(self) -> i64 {
        self.0
    }

    /// Normalize a raw JSON number or numeric string
    ///
    /// Integers are taken as-is, floats are truncated toward zero,
    /// anything else fails with a value error.
    pub fn try_from_json(v: &Value) -> Result<SigmaNumber> {
        match v {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(SigmaNumber(i));
                }
                if let Some(u) = n.as_u64() {
                    return if u <= i64::MAX as u64 {
                        Ok(SigmaNumber(u as i64))
                    } else {
                        Err(SigmaError::Value(format!("Number out of range: {u}")))
                    };
                }
                match n.as_f64() {
                    Some(f) => SigmaNumber::try_from(f),
                    None => Err(SigmaError::Value(format!("Invalid number: {n}"))),
                }
            }
            Value::String(s) => s.parse(),
            other => Err(SigmaError::Value(format!("Invalid number: {other}"))),
        }
    }
}

impl From<i64> for SigmaNumber {
    fn from(i: i64) -> Self {
        SigmaNumber(i)
    }
}

/// Truncation toward zero; NaN, infinities and values outside the i64
/// range fail with a value error
impl TryFrom<f64> for SigmaNumber {
    type Error = SigmaError;

    fn try_from(f: f64) -> Result<SigmaNumber> {
        if !f.is_finite() {
            return Err(SigmaError::Value(format!("Invalid number: {f}")));
        }
        let truncated = f.trunc();
        if truncated >= I64_MAX_PLUS_ONE || truncated < I64_MIN_F64 {
            return Err(SigmaError::Value(format!("Number out of range: {f}")));
        }
        Ok(SigmaNumber(truncated as i64))
    }
}

impl FromStr for SigmaNumber {
    type Err = SigmaError;

    fn from_str(s: &str) -> Result<SigmaNumber> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(SigmaNumber(i));
        }
        let f = s
            .parse::<f64>()
            .map_err(|_| SigmaError::Value(format!("Invalid number: {s:?}")))?;
        SigmaNumber::try_from(f)
    }
}

impl PartialEq<i64> for SigmaNumber {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SigmaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
