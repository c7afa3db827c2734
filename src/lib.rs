//! Sigma detection value types
//!
//! This library models the match values used in Sigma detection rules:
//! wildcarded strings, numbers, regular expressions and null. The core is
//! the wildcarded-string type [`SigmaString`], an escape-aware tokenization
//! of raw rule text into literal runs and wildcard markers, together with
//! the configurable serializer that re-renders a value into the escaping
//! and wildcard syntax of an arbitrary query target.
//!
//! # Example
//!
//! ```
//! use sigma_values::{ConversionConfig, SigmaString};
//!
//! # fn example() -> sigma_values::Result<()> {
//! // Parse a detection value with wildcards and an escaped designator
//! let value = SigmaString::new(r"C:\\Windows\\*\\cmd.exe");
//! assert!(value.contains_special());
//!
//! // Render it for a backend that uses `%` as its multi-wildcard
//! let config = ConversionConfig::new()
//!     .wildcard_multi("%")
//!     .add_escaped("%");
//! let rendered = value.convert(&config)?;
//! assert_eq!(rendered, r"C:\Windows\%\cmd.exe");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use error::{Result, SigmaError};
pub use value::{
    Atom, ConversionConfig, SigmaNull, SigmaNumber, SigmaRegex, SigmaString, SigmaValue,
    SpecialChar, Token,
};

/// Error types
pub mod error;

/// Sigma match-value types
pub mod value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
