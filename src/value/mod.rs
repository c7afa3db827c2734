//! Sigma match-value types
//!
//! Detection values come in four kinds: wildcarded strings, numbers,
//! regular expressions and null. [`SigmaValue`] is the closed union over
//! those kinds and [`SigmaValue::from_json`] is the sole entry point for
//! turning opaque raw input into one of them.

pub mod convert;
pub mod number;
pub mod regex;
pub mod string;
pub mod token;

pub use self::convert::ConversionConfig;
pub use self::number::SigmaNumber;
pub use self::regex::SigmaRegex;
pub use self::string::{Atoms, SigmaString, StringOrSpecial};
pub use self::token::{Atom, SpecialChar, Token};

use crate::error::{Result, SigmaError};
use serde_json::Value;

/// Empty/none/null value; any two instances compare equal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SigmaNull;

/// A typed Sigma detection value
#[derive(Debug, Clone, PartialEq)]
pub enum SigmaValue {
    /// Empty/none/null value
    Null(SigmaNull),
    /// Numeric value
    Number(SigmaNumber),
    /// Wildcarded string value
    String(SigmaString),
    /// Regular expression value
    Regex(SigmaRegex),
}

impl SigmaValue {
    /// Map a raw JSON value to its Sigma value variant
    ///
    /// Checked in fixed order: integer, float, string, null. Integers and
    /// floats are normalized by [`SigmaNumber`], strings are tokenized by
    /// [`SigmaString`]. Booleans are rejected explicitly (Rust has no
    /// bool-as-integer subtyping to reproduce), as are arrays and objects.
    pub fn from_json(v: &Value) -> Result<SigmaValue> {
        match v {
            Value::Number(_) => Ok(SigmaValue::Number(SigmaNumber::try_from_json(v)?)),
            Value::String(s) => Ok(SigmaValue::String(SigmaString::new(s))),
            Value::Null => Ok(SigmaValue::Null(SigmaNull)),
            other => {
                tracing::debug!(
                    input = %other,
                    "raw value outside the integer/float/string/null contract"
                );
                Err(SigmaError::TypeMismatch {
                    expected: "integer, float, string or null",
                    found: json_type_name(other).to_string(),
                })
            }
        }
    }

    /// The variant name, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            SigmaValue::Null(_) => "null",
            SigmaValue::Number(_) => "number",
            SigmaValue::String(_) => "string",
            SigmaValue::Regex(_) => "regex",
        }
    }

    /// Compare two values, failing on mixed variants
    ///
    /// Same-variant operands compare structurally. Comparing across
    /// variants is a caller error and fails with a type mismatch rather
    /// than silently returning false.
    pub fn try_eq(&self, other: &SigmaValue) -> Result<bool> {
        match (self, other) {
            (SigmaValue::Null(a), SigmaValue::Null(b)) => Ok(a == b),
            (SigmaValue::Number(a), SigmaValue::Number(b)) => Ok(a == b),
            (SigmaValue::String(a), SigmaValue::String(b)) => Ok(a == b),
            (SigmaValue::Regex(a), SigmaValue::Regex(b)) => Ok(a == b),
            (a, b) => Err(SigmaError::TypeMismatch {
                expected: a.type_name(),
                found: b.type_name().to_string(),
            }),
        }
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
