//! Regular expression values
//!
//! Patterns are validated at construction by compiling them; an instance
//! never holds a pattern that failed to compile. The delimiter escaper
//! re-renders the pattern for targets whose query syntax reserves
//! additional characters.

use crate::error::Result;
use regex::Regex;
use std::fmt;

/// Regular expression Sigma value
#[derive(Debug, Clone)]
pub struct SigmaRegex {
    pattern: String,
    compiled: Regex,
}

impl SigmaRegex {
    /// Compile and wrap a pattern; invalid patterns fail immediately
    /// with a regex error
    pub fn new(pattern: impl Into<String>) -> Result<SigmaRegex> {
        let pattern = pattern.into();
        let compiled = Regex::new(&pattern)?;
        Ok(SigmaRegex { pattern, compiled })
    }

    /// The validated pattern text
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The compiled expression
    pub fn regex(&self) -> &Regex {
        &self.compiled
    }

    /// Escape every occurrence of the given delimiter strings, and of
    /// `escape_char` itself, by inserting `escape_char` in front of it
    ///
    /// The pattern is scanned for the leftmost non-overlapping matches of
    /// any delimiter or the escape character, split into chunks at the
    /// match starts, and rejoined with the escape character between
    /// consecutive chunks. Everything between matches is preserved byte
    /// for byte.
    pub fn escape(&self, delimiters: &[&str], escape_char: char) -> Result<String> {
        let mut alternates: Vec<String> =
            delimiters.iter().map(|d| regex::escape(d)).collect();
        alternates.push(regex::escape(&escape_char.to_string()));
        let finder = Regex::new(&alternates.join("|"))?;

        let starts: Vec<usize> = finder
            .find_iter(&self.pattern)
            .map(|m| m.start())
            .collect();
        let mut out = String::with_capacity(self.pattern.len() + starts.len());
        let mut prev = 0;
        for start in starts {
            out.push_str(&self.pattern[prev..start]);
            out.push(escape_char);
            prev = start;
        }
        out.push_str(&self.pattern[prev..]);
        Ok(out)
    }
}

/// Equality is over the pattern text
impl PartialEq for SigmaRegex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for SigmaRegex {}

impl fmt::Display for SigmaRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
